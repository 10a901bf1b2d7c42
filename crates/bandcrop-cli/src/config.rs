//! Settings assembled from a config file and command-line flags

use crate::cli::DetectArgs;
use anyhow::{Context, Result};
use bandcrop::detect::{AcceptancePolicy, DetectOptions};
use bandcrop::filter::{DEFAULT_SMOOTHING_RADIUS, Smoothing};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contents of a `--config` file; every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub detect: DetectOptions,
    pub policy: AcceptancePolicy,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}

/// Apply command-line overrides on top of `base`.
pub fn merge(base: FileConfig, args: &DetectArgs) -> FileConfig {
    let mut detect = base.detect;
    let mut policy = base.policy;

    if let Some(size) = args.min_block_size {
        detect.min_block_size = size;
    }
    if let Some(t) = args.pixel_threshold {
        detect.pixel_threshold = t;
    }

    detect.smoothing = match (args.smoothing, args.radius) {
        (Some(kind), Some(r)) => kind.with_radius(r),
        (Some(kind), None) => {
            let r = match detect.smoothing {
                Smoothing::None => DEFAULT_SMOOTHING_RADIUS,
                s => s.radius(),
            };
            kind.with_radius(r)
        }
        (None, Some(r)) => match detect.smoothing {
            Smoothing::None => Smoothing::None,
            Smoothing::Box { .. } => Smoothing::Box { radius: r },
            Smoothing::Median { .. } => Smoothing::Median { radius: r },
        },
        (None, None) => detect.smoothing,
    };

    if args.debug_output.is_some() {
        detect.debug = true;
    }

    if let Some(h) = args.min_height {
        policy.min_height = h;
    }
    if let Some(f) = args.max_start_fraction {
        policy.max_start_fraction = f;
    }

    FileConfig { detect, policy }
}

/// Load the config file named in `args`, if any, and apply the flags.
pub fn resolve(args: &DetectArgs) -> Result<FileConfig> {
    let base = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let config = merge(base, args);
    config
        .detect
        .validate()
        .context("invalid detection settings")?;
    log::debug!("resolved settings: {:?}", config);
    Ok(config)
}
