use std::path::Path;

use console::Style;
use manggis_core::lobes::StatusKind;
use manggis_core::pipeline::{Analysis, AnalysisConfig};

use crate::commands::analyze::AnalyzeArgs;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    good: Style,
    warn: Style,
    bad: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            good: Style::new().green().bold(),
            warn: Style::new().yellow().bold(),
            bad: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }

    fn status(&self, status: StatusKind) -> &Style {
        match status {
            StatusKind::Confident => &self.good,
            StatusKind::ImplausiblyLow => &self.warn,
            StatusKind::TooSmall | StatusKind::NoDetection => &self.bad,
            StatusKind::GeometryError => &self.bad,
        }
    }
}

pub fn print_analysis_summary(
    file: &Path,
    config: &AnalysisConfig,
    analysis: &Analysis,
    args: &AnalyzeArgs,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Manggis Calyx Analysis"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(22)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(file.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Saturation"),
        s.value.apply_to(config.threshold.saturation_floor)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Brightness"),
        s.value.apply_to(config.threshold.brightness_floor)
    );
    if analysis.contour.is_some() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Area"),
            s.value.apply_to(format!("{:.0} px", analysis.area))
        );
    }
    let deepest = analysis
        .defects
        .iter()
        .map(|d| d.depth_px())
        .reduce(f64::max);
    if let Some(deepest) = deepest {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Deepest notch"),
            s.value.apply_to(format!("{deepest:.1} px"))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Status"),
        s.status(analysis.estimate.status)
            .apply_to(analysis.estimate.status)
    );
    println!();

    for (label, path) in [
        ("Mask", &args.mask_out),
        ("Annotated", &args.annotated_out),
    ] {
        if let Some(path) = path {
            println!(
                "  {:<14}{}",
                s.label.apply_to(label),
                s.path.apply_to(path.display())
            );
        }
    }

    println!(
        "  {}",
        s.status(analysis.estimate.status)
            .apply_to(analysis.estimate)
    );
    println!();
}
