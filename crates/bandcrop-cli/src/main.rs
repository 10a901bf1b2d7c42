mod cli;
mod config;
mod report;

use anyhow::{Context, Result};
use bandcrop::ImageFormat;
use bandcrop::detect::detect_block;
use clap::Parser;
use flexi_logger::Logger;
use std::path::Path;
use std::process::ExitCode;

use crate::cli::{Cli, Commands, DetectArgs};

/// Exit status when `--policy` is set and no acceptable block was found.
const EXIT_REJECTED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logger = match Logger::try_with_str(&cli.log_level).and_then(|l| l.log_to_stderr().start()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("error: logger initialization failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.command {
        Commands::Detect(args) => run_detect(args),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_detect(args: &DetectArgs) -> Result<ExitCode> {
    let settings = config::resolve(args)?;

    let frame = bandcrop::io::read_image(&args.input)
        .with_context(|| format!("failed to decode {}", args.input.display()))?;
    log::info!(
        "{}: {}x{} frame",
        args.input.display(),
        frame.width(),
        frame.height()
    );

    let report = detect_block(&frame, &settings.detect).context("detection failed")?;

    if let Some(path) = &args.debug_output {
        match &report.debug_image {
            Some(image) => write_debug(image, path)?,
            None => log::warn!("no block found; {} not written", path.display()),
        }
    }

    let policy = args.policy.then_some(&settings.policy);
    let verdict = report::verdict(&report, policy, frame.height());
    println!(
        "{}",
        serde_json::to_string_pretty(&report::to_json(&report, &verdict))?
    );

    if report::is_rejected(&report, &verdict) {
        return Ok(ExitCode::from(EXIT_REJECTED));
    }
    Ok(ExitCode::SUCCESS)
}

fn write_debug(image: &bandcrop::Raster, path: &Path) -> Result<()> {
    let format = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(ImageFormat::from_extension)
    {
        Some(ImageFormat::Unknown) | None => ImageFormat::Png,
        Some(f) => f,
    };
    bandcrop::io::write_image(image, path, format)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("debug image written to {}", path.display());
    Ok(())
}
