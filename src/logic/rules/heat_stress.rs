use super::RiskRule;
use crate::models::{CropRecord, SoilSample, WeatherObservation};

pub const HEAT_STRESS_TEMP_C: f64 = 40.0;

/// Heat stress alert
///
/// Above 40°C most field crops lose water faster than roots can replace it,
/// with flower drop and poor grain set as the visible damage.
///
/// Trigger: temperature >40°C
pub struct HeatStressRule;

impl RiskRule for HeatStressRule {
    fn id(&self) -> &'static str {
        "heat_stress"
    }

    fn name(&self) -> &'static str {
        "Heat Stress"
    }

    fn evaluate(
        &self,
        _crop: &CropRecord,
        _soil: &SoilSample,
        weather: Option<&WeatherObservation>,
    ) -> Option<String> {
        let weather = weather?;
        let temp = weather.temperature_c();

        if temp <= HEAT_STRESS_TEMP_C {
            return None;
        }

        Some(format!(
            "Extreme heat ({}°C) at {}. Apply mulching and increase irrigation frequency.",
            temp,
            weather.location()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{alluvial_soil, wheat};

    #[test]
    fn fires_above_forty() {
        let weather = WeatherObservation::new("Nagpur", 43.0, 55.0, 0.0).unwrap();
        let alert = HeatStressRule
            .evaluate(&wheat(), &alluvial_soil(), Some(&weather))
            .unwrap();
        assert!(alert.contains("heat"));
        assert!(alert.contains("43°C"));
        assert!(alert.contains("Nagpur"));
        assert!(alert.contains("mulching"));
    }

    #[test]
    fn temperature_just_above_forty_is_printed_unrounded() {
        let weather = WeatherObservation::new("Nagpur", 40.04, 55.0, 0.0).unwrap();
        let alert = HeatStressRule
            .evaluate(&wheat(), &alluvial_soil(), Some(&weather))
            .unwrap();
        assert!(alert.starts_with("Extreme heat (40.04°C) at Nagpur."));
    }

    #[test]
    fn silent_at_threshold_and_without_weather() {
        let weather = WeatherObservation::new("Nagpur", 40.0, 55.0, 0.0).unwrap();
        assert!(HeatStressRule
            .evaluate(&wheat(), &alluvial_soil(), Some(&weather))
            .is_none());
        assert!(HeatStressRule
            .evaluate(&wheat(), &alluvial_soil(), None)
            .is_none());
    }
}
