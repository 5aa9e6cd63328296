use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use f2h_lib::output::F2H_OUTPUT_VERSION;
use f2h_lib::{ErrorOutput, F2hError, F2hOutput};

use crate::cli::OutputFormat;

/// Write output in the requested format.
///
/// `html` is the rendered document; only the `html` format prints it raw.
pub fn write_output(
    body: &F2hOutput,
    format: OutputFormat,
    html: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, None)?,
        OutputFormat::Pretty => write_pretty_output(body, None)?,
        OutputFormat::Html => match html {
            Some(document) => println!("{document}"),
            None => write_json_output(body, None)?,
        },
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: F2hError, format: OutputFormat) -> ExitCode {
    let error_payload = err.to_payload();
    let payload = F2hOutput::Error(ErrorOutput {
        version: F2H_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json | OutputFormat::Html => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            println!("{content}");
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, None) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &F2hOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &F2hOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &F2hOutput, colorize: bool) -> String {
    match body {
        F2hOutput::Convert(out) => {
            let mut buf = String::new();
            let header = color("[CONVERT]", "32", colorize);
            writeln!(
                buf,
                "{} {} element(s) rendered into {}x{} container",
                header, out.element_count, out.container.width, out.container.height
            )
            .ok();
            writeln!(
                buf,
                "Input: {} (kind: {:?})",
                out.input.value, out.input.kind
            )
            .ok();
            if let Some(node_id) = &out.input.node_id {
                writeln!(buf, "Node: {node_id}").ok();
            }
            let mode = if out.responsive { "responsive (%)" } else { "fixed (px)" };
            writeln!(buf, "Sizing: {mode}").ok();

            let images = if out.placeholder_count > 0 {
                color(
                    &format!(
                        "{} ({} placeholder)",
                        out.image_count, out.placeholder_count
                    ),
                    "33",
                    colorize,
                )
            } else {
                out.image_count.to_string()
            };
            writeln!(buf, "Images: {images}").ok();

            if !out.used_fonts.is_empty() {
                writeln!(buf, "Fonts:").ok();
                for font in &out.used_fonts {
                    writeln!(buf, "- {font}").ok();
                }
            }
            if let Some(path) = &out.output_path {
                writeln!(buf, "Output: {}", path.display()).ok();
            }
            buf
        }
        F2hOutput::ImageIds(out) => {
            let mut buf = String::new();
            let header = color("[IMAGES]", "36", colorize);
            writeln!(buf, "{} {} image node(s)", header, out.node_ids.len()).ok();
            writeln!(
                buf,
                "Input: {} (kind: {:?})",
                out.input.value, out.input.kind
            )
            .ok();
            for id in &out.node_ids {
                writeln!(buf, "- {id}").ok();
            }
            buf
        }
        F2hOutput::Error(out) => {
            let mut buf = String::new();
            let header = color("[ERROR]", "31", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or_else(|| out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
