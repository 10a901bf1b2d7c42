//! Command-line arguments

use bandcrop::filter::Smoothing;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect the top-most dark block in a frame
    Detect(DetectArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct DetectArgs {
    /// Frame to analyse (PNG or JPEG)
    #[arg(short, long)]
    pub input: PathBuf,

    /// JSON file with detection and policy settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum width and height of a block in pixels
    #[arg(long)]
    pub min_block_size: Option<u32>,

    /// Distance below white (0-255) a pixel must reach to count as dark
    #[arg(long)]
    pub pixel_threshold: Option<u8>,

    /// Smoothing applied before thresholding
    #[arg(long, value_enum)]
    pub smoothing: Option<SmoothingKind>,

    /// Smoothing window radius
    #[arg(long)]
    pub radius: Option<u32>,

    /// Write a copy of the frame with the detected row highlighted
    #[arg(long)]
    pub debug_output: Option<PathBuf>,

    /// Apply the acceptance policy and exit with status 2 on rejection
    #[arg(long, default_value_t = false)]
    pub policy: bool,

    /// Policy: smallest acceptable block height
    #[arg(long)]
    pub min_height: Option<u32>,

    /// Policy: largest acceptable start row as a fraction of frame height
    #[arg(long)]
    pub max_start_fraction: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SmoothingKind {
    Median,
    Box,
    None,
}

impl SmoothingKind {
    pub fn with_radius(self, radius: u32) -> Smoothing {
        match self {
            SmoothingKind::Median => Smoothing::Median { radius },
            SmoothingKind::Box => Smoothing::Box { radius },
            SmoothingKind::None => Smoothing::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_detect() {
        let cli = Cli::try_parse_from([
            "bandcrop-cli",
            "detect",
            "--input",
            "frame.png",
            "--min-block-size",
            "200",
            "--smoothing",
            "box",
            "--policy",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "warn");
        let Commands::Detect(args) = cli.command;
        assert_eq!(args.input, PathBuf::from("frame.png"));
        assert_eq!(args.min_block_size, Some(200));
        assert_eq!(args.smoothing, Some(SmoothingKind::Box));
        assert!(args.policy);
        assert!(args.debug_output.is_none());
    }

    #[test]
    fn test_threshold_range() {
        let res = Cli::try_parse_from([
            "bandcrop-cli",
            "detect",
            "-i",
            "f.png",
            "--pixel-threshold",
            "300",
        ]);
        assert!(res.is_err());
    }
}
