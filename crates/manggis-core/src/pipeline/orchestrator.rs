use image::DynamicImage;
use tracing::{debug, info, warn};

use crate::contour::extract_largest;
use crate::error::Result;
use crate::io::image_io::decode_image;
use crate::lobes::{count_lobes, LobeEstimate, StatusKind};
use crate::preprocess::{preprocess, Preprocessed};
use crate::render::{draw_contour, draw_defects};
use crate::segment::{segment, ThresholdParams};

use super::config::AnalysisConfig;
use super::types::{Analysis, PipelineStage};

/// Run the full analysis with default settings and the given floors.
pub fn process(raw: &DynamicImage, params: ThresholdParams) -> Result<Analysis> {
    process_with_config(raw, &AnalysisConfig::with_threshold(params))
}

/// Decode an encoded image (PNG, JPEG, ...) and analyse it.
///
/// Unparseable input fails before any processing happens.
pub fn process_bytes(bytes: &[u8], config: &AnalysisConfig) -> Result<Analysis> {
    let raw = decode_image(bytes)?;
    process_with_config(&raw, config)
}

/// Run the full analysis.
///
/// Pipeline: resize + HSV -> threshold -> open/close -> largest external
/// contour -> convexity defects -> status. Only bad input or an invalid
/// config is an `Err`; every other outcome is reported in
/// [`Analysis::estimate`].
pub fn process_with_config(raw: &DynamicImage, config: &AnalysisConfig) -> Result<Analysis> {
    config.validate()?;

    debug!(
        stage = %PipelineStage::Preprocessing,
        width = raw.width(),
        height = raw.height(),
        size = config.canonical_size
    );
    let Preprocessed { rgb, hsv } = preprocess(raw, config.canonical_size)?;

    debug!(
        stage = %PipelineStage::Segmenting,
        saturation_floor = config.threshold.saturation_floor,
        brightness_floor = config.threshold.brightness_floor
    );
    let mask = segment(&hsv, &config.segment, config.threshold)?;
    debug!(foreground = mask.foreground_count(), "Mask cleaned");

    debug!(stage = %PipelineStage::ExtractingContour);
    let mut annotated = rgb;
    let Some(largest) = extract_largest(&mask, &config.contour) else {
        warn!("No foreground region found");
        return Ok(Analysis {
            mask: mask.to_gray(),
            annotated,
            estimate: LobeEstimate::no_detection(),
            contour: None,
            area: 0.0,
            defects: Vec::new(),
        });
    };
    debug!(
        area = largest.area,
        points = largest.contour.len(),
        "Largest contour selected"
    );

    debug!(stage = %PipelineStage::CountingLobes);
    let counted = count_lobes(&largest.contour, largest.area, &config.lobes);

    debug!(stage = %PipelineStage::Rendering);
    if counted.estimate.status != StatusKind::TooSmall {
        draw_contour(&mut annotated, &largest.contour);
        draw_defects(&mut annotated, &largest.contour, &counted.defects);
    }

    info!(
        count = counted.estimate.count,
        status = %counted.estimate.status,
        "{}",
        counted.estimate
    );

    Ok(Analysis {
        mask: mask.to_gray(),
        annotated,
        estimate: counted.estimate,
        contour: Some(largest.contour),
        area: largest.area,
        defects: counted.defects,
    })
}
