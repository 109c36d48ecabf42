use super::RiskRule;
use crate::models::{CropRecord, SoilSample, WeatherObservation};

pub const FUNGAL_RISK_HUMIDITY_PCT: f64 = 85.0;

/// Fungal disease pressure alert
///
/// Blast, blight and mildew spread quickly when relative humidity stays
/// above 85%.
pub struct FungalDiseaseRule;

impl RiskRule for FungalDiseaseRule {
    fn id(&self) -> &'static str {
        "fungal_disease"
    }

    fn name(&self) -> &'static str {
        "Fungal Disease Risk"
    }

    fn evaluate(
        &self,
        _crop: &CropRecord,
        _soil: &SoilSample,
        weather: Option<&WeatherObservation>,
    ) -> Option<String> {
        let humidity = weather?.humidity_pct();

        if humidity <= FUNGAL_RISK_HUMIDITY_PCT {
            return None;
        }

        Some(format!(
            "High humidity ({}%) favours fungal disease. \
             Monitor crops closely and apply preventive fungicide.",
            humidity
        ))
    }
}
