pub mod cold_stress;
pub mod engine;
pub mod excess_rainfall;
pub mod fungal_disease;
pub mod heat_stress;
pub mod soil_ph;

pub use engine::RiskEngine;

use crate::models::{CropRecord, SoilSample, WeatherObservation};

/// Trait for risk alert rules
pub trait RiskRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return an alert message if it triggers
    fn evaluate(
        &self,
        crop: &CropRecord,
        soil: &SoilSample,
        weather: Option<&WeatherObservation>,
    ) -> Option<String>;
}
