use super::RiskRule;
use crate::models::{CropRecord, SoilSample, WeatherObservation};

pub const EXCESS_RAINFALL_MM: f64 = 200.0;

/// Waterlogging alert when recent rainfall exceeds 200 mm.
pub struct ExcessRainfallRule;

impl RiskRule for ExcessRainfallRule {
    fn id(&self) -> &'static str {
        "excess_rainfall"
    }

    fn name(&self) -> &'static str {
        "Excess Rainfall"
    }

    fn evaluate(
        &self,
        _crop: &CropRecord,
        _soil: &SoilSample,
        weather: Option<&WeatherObservation>,
    ) -> Option<String> {
        let rainfall = weather?.rainfall_mm();

        if rainfall <= EXCESS_RAINFALL_MM {
            return None;
        }

        Some(format!(
            "Excess rainfall ({} mm) detected. \
             Clear drainage channels to prevent waterlogging.",
            rainfall
        ))
    }
}
