use clap::{Parser, Subcommand, ValueEnum};
use f2h_lib::{ContainerSize, InputKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "f2h")]
#[command(
    version,
    about = "Figma to HTML - Render Figma design nodes as static HTML+CSS",
    long_about = "Figma to HTML (f2h)\n\nModes:\n- convert: render a Figma node (URL or local JSON export) as one self-contained HTML document with absolutely positioned elements.\n- image-ids: list the node ids that would be exported as images.\n\nFigma URLs need FIGMA_TOKEN (or FIGMA_OAUTH_TOKEN). Use --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) to set conversion and Figma defaults; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a Figma node into a static HTML document
    Convert {
        #[arg(long, help = "Input resource (Figma URL or local .json export)")]
        input: String,

        #[arg(long, value_enum, help = "Override type detection for input")]
        input_type: Option<InputType>,

        #[arg(
            long,
            value_name = "ID",
            help = "Node to convert (overrides the node-id in the URL; e.g. 12:34)"
        )]
        node_id: Option<String>,

        #[arg(
            long,
            value_name = "WxH",
            help = "Container dimensions (WIDTHxHEIGHT); defaults to the root node's size"
        )]
        container: Option<ContainerSize>,

        #[arg(
            long,
            value_name = "BOOL",
            help = "Express sizes as percentages of the root (true) or pixels (false)"
        )]
        responsive: Option<bool>,

        #[arg(
            long,
            value_name = "BOOL",
            help = "Emit text shadows and blurs (true/false)"
        )]
        text_effects: Option<bool>,

        #[arg(long, value_name = "N", help = "Decimal places for geometry")]
        precision: Option<usize>,

        #[arg(long, value_name = "FACTOR", help = "Scale factor for pixel output")]
        scale: Option<f64>,

        #[arg(
            long,
            value_name = "FACTOR",
            help = "Export scale for Figma image fills (0 < scale <= 4)"
        )]
        image_scale: Option<f32>,

        #[arg(
            long,
            short,
            help = "Write the HTML document to this file (JSON status is printed to stdout)"
        )]
        output: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,
    },

    /// List node ids the image heuristic flags for export
    ImageIds {
        #[arg(long, help = "Input resource (Figma URL or local .json export)")]
        input: String,

        #[arg(long, value_enum, help = "Override type detection for input")]
        input_type: Option<InputType>,

        #[arg(long, value_name = "ID", help = "Restrict the scan to this node")]
        node_id: Option<String>,

        #[arg(long, value_enum, default_value = "json", help = "Output format")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum InputType {
    Figma,
    Json,
}

impl From<InputType> for InputKind {
    fn from(value: InputType) -> Self {
        match value {
            InputType::Figma => InputKind::Figma,
            InputType::Json => InputKind::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Pretty,
    /// Raw HTML document on stdout (errors still use JSON)
    Html,
}

pub fn parse() -> Cli {
    Cli::parse()
}
