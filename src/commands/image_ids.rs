use std::path::PathBuf;
use std::process::ExitCode;

use f2h_lib::output::F2H_OUTPUT_VERSION;
use f2h_lib::{
    collect_image_node_ids, parse_resource, F2hError, F2hOutput, ImageIdsOutput,
    ResourceDescriptor,
};

use crate::cli::{InputType, OutputFormat};
use crate::formatting::{render_error, write_output};
use crate::pipeline::load_design;
use crate::progress::stderr_progress;
use crate::settings::load_config;

/// Run the image-ids command.
pub async fn run_image_ids(
    config_path: Option<PathBuf>,
    verbose: bool,
    input: String,
    input_type: Option<InputType>,
    node_id: Option<String>,
    format: OutputFormat,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format),
    };

    let resource = match parse_resource(&input, input_type.map(Into::into)) {
        Ok(res) => res,
        Err(err) => return render_error(F2hError::Config(err.to_string()), format),
    };

    let loaded = match load_design(
        &resource,
        node_id.as_deref(),
        &config.figma,
        false,
        stderr_progress(verbose),
    )
    .await
    {
        Ok(loaded) => loaded,
        Err(err) => return render_error(err, format),
    };

    let node_ids = collect_image_node_ids(&loaded.root);
    if verbose {
        eprintln!(
            "Found {} image node(s) under {}",
            node_ids.len(),
            loaded.root.id
        );
    }

    let body = F2hOutput::ImageIds(ImageIdsOutput {
        version: F2H_OUTPUT_VERSION.to_string(),
        input: ResourceDescriptor {
            kind: resource.kind,
            value: resource.value,
            node_id: Some(loaded.root.id),
        },
        node_ids,
    });

    if let Err(err) = write_output(&body, format, None) {
        return render_error(F2hError::Config(err.to_string()), format);
    }
    ExitCode::SUCCESS
}
