use farmbrain::{Advisory, CropRecord, SoilReport, StagePlan};
use std::fmt::Write;

const RULE: &str = "============================================================";

fn push_stages(out: &mut String, title: &str, plan: &StagePlan) {
    let _ = writeln!(out, "\n{}:", title);
    for (stage, instruction) in plan {
        let _ = writeln!(out, "  [{}] {}", stage.to_uppercase(), instruction);
    }
}

pub fn advisory_text(advisory: &Advisory) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "CROP ADVISORY: {}", advisory.crop.name().to_uppercase());
    let _ = writeln!(out, "{}", RULE);

    let _ = writeln!(out, "\nRECOMMENDATIONS:");
    for rec in &advisory.recommendations {
        let _ = writeln!(out, "  - {}", rec);
    }

    push_stages(&mut out, "FERTILIZER PLAN", &advisory.fertilizer_plan);
    push_stages(&mut out, "IRRIGATION SCHEDULE", &advisory.irrigation_schedule);

    if advisory.has_alerts() {
        let _ = writeln!(out, "\nRISK ALERTS:");
        for alert in &advisory.risk_alerts {
            let _ = writeln!(out, "  WARNING: {}", alert);
        }
    }

    let _ = writeln!(out, "\nDISCLAIMER: {}", advisory.disclaimer);
    out
}

pub fn crops_text(crops: &[&CropRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "AVAILABLE CROPS ({} total):", crops.len());
    let _ = writeln!(
        out,
        "{:<30} {:<10} {:<10} {:>6}",
        "Name", "Season", "Water", "Days"
    );
    let _ = writeln!(out, "{}", "-".repeat(60));
    for c in crops {
        let _ = writeln!(
            out,
            "{:<30} {:<10} {:<10} {:>6}",
            c.name(),
            c.season().as_str(),
            c.water_requirement().as_str(),
            c.growth_days()
        );
    }
    out
}

pub fn soil_report_text(report: &SoilReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SOIL ANALYSIS:");
    for rec in &report.recommendations {
        let _ = writeln!(out, "  - {}", rec);
    }

    let _ = writeln!(out, "\nSUITABLE CROPS ({}):", report.suitable_crop_names.len());
    if report.suitable_crop_names.is_empty() {
        let _ = writeln!(out, "  none for this soil type and pH");
    }
    for name in &report.suitable_crop_names {
        let _ = writeln!(out, "  - {}", name);
    }
    out
}

pub fn rules_text(rules: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (id, name) in rules {
        let _ = writeln!(out, "{:<18} {}", id, name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmbrain::{AdvisoryComposer, Catalog, SoilEvaluator, SoilSample, WeatherObservation};

    fn wheat_advisory(weather: Option<&WeatherObservation>) -> Advisory {
        let catalog = Catalog::builtin();
        let soil = SoilSample::new(6.8, 120.0, 8.0, 95.0, 0.42, "alluvial").unwrap();
        AdvisoryComposer::new().advise(catalog.by_name("wheat").unwrap(), &soil, weather)
    }

    #[test]
    fn advisory_text_has_all_sections() {
        let weather = WeatherObservation::new("Nagpur", 43.0, 55.0, 0.0).unwrap();
        let text = advisory_text(&wheat_advisory(Some(&weather)));
        assert!(text.contains("CROP ADVISORY: WHEAT"));
        assert!(text.contains("RECOMMENDATIONS:"));
        assert!(text.contains("[CROWN ROOT INITIATION]"));
        assert!(text.contains("IRRIGATION SCHEDULE:"));
        assert!(text.contains("WARNING: Extreme heat"));
        assert!(text.contains("DISCLAIMER:"));
    }

    #[test]
    fn advisory_text_omits_empty_alerts() {
        let text = advisory_text(&wheat_advisory(None));
        assert!(!text.contains("RISK ALERTS"));
    }

    #[test]
    fn crops_table_lists_every_row() {
        let catalog = Catalog::builtin();
        let zaid = catalog.by_season("zaid");
        let text = crops_text(&zaid);
        assert!(text.contains(&format!("({} total)", zaid.len())));
        assert!(text.contains("Watermelon"));
        assert!(!text.contains("Wheat"));
    }

    #[test]
    fn soil_report_text_notes_empty_matches() {
        let catalog = Catalog::builtin();
        let soil = SoilSample::new(6.8, 200.0, 15.0, 150.0, 0.8, "laterite").unwrap();
        let text = soil_report_text(&SoilEvaluator.report(&soil, &catalog));
        assert!(text.contains("SUITABLE CROPS (0)"));
        assert!(text.contains("none for this soil type"));
    }
}
