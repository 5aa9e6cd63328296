use std::path::PathBuf;
use std::process::ExitCode;

use f2h_lib::output::F2H_OUTPUT_VERSION;
use f2h_lib::{
    classify, convert, parse_resource, ConvertOutput, F2hError, F2hOutput, ResourceDescriptor,
};

use crate::cli::{InputType, OutputFormat};
use crate::formatting::{render_error, write_output};
use crate::pipeline::load_design;
use crate::progress::stderr_progress;
use crate::settings::{
    format_effective_config, load_config, resolve_convert_settings, ConvertFlagSources,
    ConvertFlags,
};

/// Run the convert command.
#[allow(clippy::too_many_arguments)]
pub async fn run_convert(
    raw_args: &[String],
    config_path: Option<PathBuf>,
    verbose: bool,
    input: String,
    input_type: Option<InputType>,
    node_id: Option<String>,
    flags: ConvertFlags,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format),
    };
    let sources = ConvertFlagSources::from_args(raw_args);
    let settings = match resolve_convert_settings(flags, &config, &sources) {
        Ok(settings) => settings,
        Err(err) => return render_error(err, format),
    };
    if verbose {
        eprintln!(
            "{}",
            format_effective_config(&settings, config_path.as_deref())
        );
        eprintln!("Parsing input resource...");
    }

    let resource = match parse_resource(&input, input_type.map(Into::into)) {
        Ok(res) => res,
        Err(err) => return render_error(F2hError::Config(err.to_string()), format),
    };
    let effective_node_id = node_id.clone().or_else(|| {
        resource
            .figma_info
            .as_ref()
            .and_then(|info| info.node_id.clone())
    });

    let loaded = match load_design(
        &resource,
        node_id.as_deref(),
        &settings.figma,
        true,
        stderr_progress(verbose),
    )
    .await
    {
        Ok(loaded) => loaded,
        Err(err) => return render_error(err, format),
    };

    if verbose {
        eprintln!(
            "Classifying node {} ({}) with {} resolved image(s)...",
            loaded.root.id,
            loaded.root.node_type,
            loaded.image_urls.len()
        );
    }
    let tree = classify(&loaded.root, &loaded.image_urls);
    let conversion = match convert(&tree, &settings.conversion) {
        Ok(conversion) => conversion,
        Err(err) => return render_error(err, format),
    };

    if let Some(path) = &output {
        if let Err(err) = std::fs::write(path, conversion.html.as_bytes()) {
            return render_error(F2hError::Io(err), format);
        }
        if verbose {
            eprintln!("Wrote {} bytes to {}", conversion.html.len(), path.display());
        }
    }

    let inline_html = output.is_none().then(|| conversion.html.clone());
    let body = F2hOutput::Convert(ConvertOutput {
        version: F2H_OUTPUT_VERSION.to_string(),
        input: ResourceDescriptor {
            kind: resource.kind,
            value: resource.value,
            node_id: effective_node_id,
        },
        container: conversion.container,
        responsive: settings.conversion.enable_responsive,
        element_count: conversion.element_count,
        image_count: conversion.image_count,
        placeholder_count: conversion.placeholder_count,
        used_fonts: conversion.used_fonts,
        output_path: output,
        html: inline_html.clone(),
    });

    if let Err(err) = write_output(&body, format, inline_html.as_deref()) {
        return render_error(F2hError::Config(err.to_string()), format);
    }
    ExitCode::SUCCESS
}
