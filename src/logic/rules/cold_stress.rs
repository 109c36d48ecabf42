use super::RiskRule;
use crate::models::{CropRecord, Season, SoilSample, WeatherObservation};

pub const COLD_STRESS_TEMP_C: f64 = 5.0;

/// Cold stress alert for monsoon-season crops
///
/// Kharif crops are sown into warm soils; a cold snap below 5°C damages
/// seedlings. Rabi and zaid crops are not flagged.
pub struct ColdStressRule;

impl RiskRule for ColdStressRule {
    fn id(&self) -> &'static str {
        "cold_stress"
    }

    fn name(&self) -> &'static str {
        "Cold Stress (Kharif)"
    }

    fn evaluate(
        &self,
        crop: &CropRecord,
        _soil: &SoilSample,
        weather: Option<&WeatherObservation>,
    ) -> Option<String> {
        let weather = weather?;

        if crop.season() != Season::Kharif || weather.temperature_c() >= COLD_STRESS_TEMP_C {
            return None;
        }

        Some(format!(
            "Unexpectedly cold conditions ({}°C) for a kharif crop. \
             Protect seedlings with polythene covers.",
            weather.temperature_c()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{alluvial_soil, rice, wheat};

    #[test]
    fn fires_for_kharif_below_five() {
        let weather = WeatherObservation::new("Shimla", 3.0, 60.0, 0.0).unwrap();
        let alert = ColdStressRule
            .evaluate(&rice(), &alluvial_soil(), Some(&weather))
            .unwrap();
        assert!(alert.contains("cold"));
        assert!(alert.contains("kharif"));
    }

    #[test]
    fn ignores_rabi_crops() {
        let weather = WeatherObservation::new("Shimla", 3.0, 60.0, 0.0).unwrap();
        assert!(ColdStressRule
            .evaluate(&wheat(), &alluvial_soil(), Some(&weather))
            .is_none());
    }

    #[test]
    fn silent_at_five_degrees() {
        let weather = WeatherObservation::new("Shimla", 5.0, 60.0, 0.0).unwrap();
        assert!(ColdStressRule
            .evaluate(&rice(), &alluvial_soil(), Some(&weather))
            .is_none());
    }
}
