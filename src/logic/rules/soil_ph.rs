use super::RiskRule;
use crate::models::{CropRecord, SoilSample, WeatherObservation};

pub const ACIDIC_RISK_PH: f64 = 5.5;
pub const ALKALINE_RISK_PH: f64 = 8.5;

/// Aluminium toxicity risk on strongly acidic soil (pH <5.5).
///
/// Soil rules fire whether or not weather is supplied.
pub struct AcidicSoilRule;

impl RiskRule for AcidicSoilRule {
    fn id(&self) -> &'static str {
        "acidic_soil"
    }

    fn name(&self) -> &'static str {
        "Strongly Acidic Soil"
    }

    fn evaluate(
        &self,
        _crop: &CropRecord,
        soil: &SoilSample,
        _weather: Option<&WeatherObservation>,
    ) -> Option<String> {
        if soil.ph() >= ACIDIC_RISK_PH {
            return None;
        }

        Some(format!(
            "Strongly acidic soil (pH {}) may cause aluminium toxicity. \
             Apply lime before sowing.",
            soil.ph()
        ))
    }
}

/// Micronutrient lock-up on strongly alkaline soil (pH >8.5).
pub struct AlkalineSoilRule;

impl RiskRule for AlkalineSoilRule {
    fn id(&self) -> &'static str {
        "alkaline_soil"
    }

    fn name(&self) -> &'static str {
        "Strongly Alkaline Soil"
    }

    fn evaluate(
        &self,
        _crop: &CropRecord,
        soil: &SoilSample,
        _weather: Option<&WeatherObservation>,
    ) -> Option<String> {
        if soil.ph() <= ALKALINE_RISK_PH {
            return None;
        }

        Some(format!(
            "Strongly alkaline soil (pH {}) may cause micronutrient deficiencies. \
             Apply zinc sulphate 25 kg/ha.",
            soil.ph()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::wheat;

    fn soil_at(ph: f64) -> SoilSample {
        SoilSample::new(ph, 200.0, 15.0, 150.0, 0.8, "loam").unwrap()
    }

    #[test]
    fn acidic_fires_below_five_and_a_half() {
        let alert = AcidicSoilRule
            .evaluate(&wheat(), &soil_at(5.0), None)
            .unwrap();
        assert!(alert.contains("lime before sowing"));
        assert!(AcidicSoilRule
            .evaluate(&wheat(), &soil_at(5.5), None)
            .is_none());
    }

    #[test]
    fn alkaline_fires_above_eight_and_a_half() {
        let alert = AlkalineSoilRule
            .evaluate(&wheat(), &soil_at(9.0), None)
            .unwrap();
        assert!(alert.contains("zinc sulphate"));
        assert!(AlkalineSoilRule
            .evaluate(&wheat(), &soil_at(8.5), None)
            .is_none());
    }

    #[test]
    fn ph_near_cutoff_is_printed_unrounded() {
        let acidic = AcidicSoilRule
            .evaluate(&wheat(), &soil_at(5.46), None)
            .unwrap();
        assert!(acidic.contains("(pH 5.46)"));
        let alkaline = AlkalineSoilRule
            .evaluate(&wheat(), &soil_at(8.54), None)
            .unwrap();
        assert!(alkaline.contains("(pH 8.54)"));
    }
}
