use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use manggis_core::io::image_io::{load_image, save_annotated, save_mask};
use manggis_core::lobes::{Defect, StatusKind};
use manggis_core::pipeline::{process_with_config, Analysis, AnalysisConfig};
use serde::Serialize;

use crate::summary::print_analysis_summary;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input image (JPEG, PNG, ...)
    pub file: PathBuf,

    /// Analysis config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Saturation floor (0-255); lower it if the calyx is not detected
    #[arg(short, long)]
    pub saturation: Option<u8>,

    /// Brightness floor (0-255); raise it to separate the calyx from the rind
    #[arg(short, long)]
    pub brightness: Option<u8>,

    /// Write the cleaned mask to this file
    #[arg(long)]
    pub mask_out: Option<PathBuf>,

    /// Write the annotated image to this file
    #[arg(long)]
    pub annotated_out: Option<PathBuf>,

    /// Print the result as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    file: &'a Path,
    saturation_floor: u8,
    brightness_floor: u8,
    count: usize,
    status: StatusKind,
    message: String,
    area: f64,
    defects: &'a [Defect],
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = resolve_config(args)?;

    let raw = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let analysis = process_with_config(&raw, &config)?;

    if let Some(ref path) = args.mask_out {
        save_mask(&analysis.mask, path)
            .with_context(|| format!("Failed to write mask to {}", path.display()))?;
    }
    if let Some(ref path) = args.annotated_out {
        save_annotated(&analysis.annotated, path).with_context(|| {
            format!("Failed to write annotated image to {}", path.display())
        })?;
    }

    if args.json {
        let report = report(args, &config, &analysis);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_analysis_summary(&args.file, &config, &analysis, args);
    }

    Ok(())
}

/// Config file (or defaults), then command-line floors on top.
fn resolve_config(args: &AnalyzeArgs) -> Result<AnalysisConfig> {
    let mut config: AnalysisConfig = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid analysis config")?
    } else {
        AnalysisConfig::default()
    };

    if let Some(s) = args.saturation {
        config.threshold.saturation_floor = s;
    }
    if let Some(b) = args.brightness {
        config.threshold.brightness_floor = b;
    }
    Ok(config)
}

fn report<'a>(
    args: &'a AnalyzeArgs,
    config: &AnalysisConfig,
    analysis: &'a Analysis,
) -> Report<'a> {
    Report {
        file: &args.file,
        saturation_floor: config.threshold.saturation_floor,
        brightness_floor: config.threshold.brightness_floor,
        count: analysis.estimate.count,
        status: analysis.estimate.status,
        message: analysis.estimate.to_string(),
        area: analysis.area,
        defects: &analysis.defects,
    }
}
