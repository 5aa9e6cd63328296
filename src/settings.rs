use std::path::Path;

use f2h_lib::types::ContainerSize;
use f2h_lib::{Config, ConversionOptions, F2hError, FigmaSettings};

/// Tracks which CLI flags were explicitly provided vs. defaulted.
#[derive(Debug, Default)]
pub struct ConvertFlagSources {
    pub container: bool,
    pub responsive: bool,
    pub text_effects: bool,
    pub precision: bool,
    pub scale: bool,
    pub image_scale: bool,
}

impl ConvertFlagSources {
    pub fn from_args(args: &[String]) -> Self {
        Self {
            container: flag_present(args, "--container"),
            responsive: flag_present(args, "--responsive"),
            text_effects: flag_present(args, "--text-effects"),
            precision: flag_present(args, "--precision"),
            scale: flag_present(args, "--scale"),
            image_scale: flag_present(args, "--image-scale"),
        }
    }
}

/// Checks if a flag was present in the command-line arguments.
pub fn flag_present(args: &[String], flag: &str) -> bool {
    args.iter()
        .any(|arg| arg == flag || arg.starts_with(&format!("{flag}=")))
}

/// Raw convert flags as parsed by clap.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertFlags {
    pub container: Option<ContainerSize>,
    pub responsive: Option<bool>,
    pub text_effects: Option<bool>,
    pub precision: Option<usize>,
    pub scale: Option<f64>,
    pub image_scale: Option<f32>,
}

/// Resolved settings after merging CLI args and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConvertSettings {
    pub conversion: ConversionOptions,
    pub figma: FigmaSettings,
}

/// Merge CLI arguments with config file, preferring CLI when flags are present.
pub fn resolve_convert_settings(
    cli: ConvertFlags,
    config: &Config,
    flags: &ConvertFlagSources,
) -> Result<ResolvedConvertSettings, F2hError> {
    let mut conversion = config.conversion.clone();
    let mut figma = config.figma.clone();

    if flags.container {
        if let Some(container) = cli.container {
            conversion.container_width = Some(container.width);
            conversion.container_height = Some(container.height);
        }
    }
    if flags.responsive {
        if let Some(responsive) = cli.responsive {
            conversion.enable_responsive = responsive;
        }
    }
    if flags.text_effects {
        if let Some(effects) = cli.text_effects {
            conversion.preserve_text_effects = effects;
        }
    }
    if flags.precision {
        if let Some(precision) = cli.precision {
            conversion.precision = precision;
        }
    }
    if flags.scale {
        if let Some(scale) = cli.scale {
            conversion.scale_factor = scale;
        }
    }
    if flags.image_scale {
        if let Some(scale) = cli.image_scale {
            figma.image_scale = scale;
        }
    }

    let resolved = Config {
        conversion: conversion.clone(),
        figma: figma.clone(),
    };
    resolved
        .validate()
        .map_err(|e| F2hError::Config(format!("Invalid flags: {e}")))?;

    Ok(ResolvedConvertSettings { conversion, figma })
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/f2h/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, F2hError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        F2hError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        F2hError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Format effective settings as a single-line string (verbose mode).
pub fn format_effective_config(
    settings: &ResolvedConvertSettings,
    config_source: Option<&Path>,
) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let c = &settings.conversion;
    let container = match (c.container_width, c.container_height) {
        (Some(w), Some(h)) => format!("{w}x{h}"),
        _ => "root".to_string(),
    };
    format!(
        "Effective config [{source}]: container={container}, scale={}, responsive={}, text_effects={}, precision={}, max_depth={}, figma: timeout={}s, image_scale={}, image_format={}, batch={}",
        c.scale_factor,
        c.enable_responsive,
        c.preserve_text_effects,
        c.precision,
        c.max_depth,
        settings.figma.timeout.as_secs(),
        settings.figma.image_scale,
        settings.figma.image_format.as_str(),
        settings.figma.image_batch_size
    )
}
