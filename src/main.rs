mod cli;
mod commands;
mod formatting;
mod pipeline;
mod progress;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_convert, run_image_ids};
use settings::ConvertFlags;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .try_init();
}

async fn run() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    let args = cli::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Convert {
            input,
            input_type,
            node_id,
            container,
            responsive,
            text_effects,
            precision,
            scale,
            image_scale,
            output,
            format,
        } => {
            let flags = ConvertFlags {
                container,
                responsive,
                text_effects,
                precision,
                scale,
                image_scale,
            };
            run_convert(
                &raw_args,
                args.config,
                args.verbose,
                input,
                input_type,
                node_id,
                flags,
                output,
                format,
            )
            .await
        }
        Commands::ImageIds {
            input,
            input_type,
            node_id,
            format,
        } => run_image_ids(args.config, args.verbose, input, input_type, node_id, format).await,
    }
}
