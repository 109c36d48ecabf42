use super::plans::{fertilizer_plan, has_named_fertilizer_plan, irrigation_schedule};
use super::rules::RiskEngine;
use super::soil::SoilEvaluator;
use crate::models::{
    Advisory, CropRecord, SoilSample, WeatherObservation, AGRICULTURAL_DISCLAIMER,
};

/// Builds the advisory for one crop, soil sample and optional weather.
///
/// Holds no mutable state, so one composer can serve any number of callers.
#[derive(Debug, Default)]
pub struct AdvisoryComposer {
    evaluator: SoilEvaluator,
    risks: RiskEngine,
}

impl AdvisoryComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn risk_engine(&self) -> &RiskEngine {
        &self.risks
    }

    pub fn advise(
        &self,
        crop: &CropRecord,
        soil: &SoilSample,
        weather: Option<&WeatherObservation>,
    ) -> Advisory {
        let mut recommendations = describe_crop(crop, soil);
        recommendations.extend(self.evaluator.evaluate(soil));

        let risk_alerts = self.risks.evaluate(crop, soil, weather);

        if has_named_fertilizer_plan(crop) {
            tracing::debug!(crop = crop.name(), "using crop-specific fertilizer plan");
        } else {
            tracing::debug!(crop = crop.name(), "using generic fertilizer plan");
        }

        let advisory = Advisory {
            crop: crop.clone(),
            soil: soil.clone(),
            recommendations,
            fertilizer_plan: fertilizer_plan(crop),
            irrigation_schedule: irrigation_schedule(crop.water_requirement()),
            risk_alerts,
            disclaimer: AGRICULTURAL_DISCLAIMER.to_string(),
        };

        tracing::info!(
            crop = crop.name(),
            soil_type = soil.soil_type(),
            with_weather = weather.is_some(),
            alerts = advisory.risk_alerts.len(),
            "advisory composed"
        );

        advisory
    }
}

fn describe_crop(crop: &CropRecord, soil: &SoilSample) -> Vec<String> {
    vec![
        format!(
            "{} is a {} crop requiring {} water and {} days to mature.",
            crop.name(),
            crop.season(),
            crop.water_requirement(),
            crop.growth_days()
        ),
        format!(
            "Compatible soil types: {}. Current soil type is {}.",
            crop.soil_types().join(", "),
            soil.soil_type()
        ),
    ]
}
