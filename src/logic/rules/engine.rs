use super::{
    cold_stress::ColdStressRule,
    excess_rainfall::ExcessRainfallRule,
    fungal_disease::FungalDiseaseRule,
    heat_stress::HeatStressRule,
    soil_ph::{AcidicSoilRule, AlkalineSoilRule},
    RiskRule,
};
use crate::models::{CropRecord, SoilSample, WeatherObservation};

/// Runs every risk rule in a fixed order: weather rules, then soil rules.
pub struct RiskEngine {
    rules: Vec<Box<dyn RiskRule>>,
}

impl RiskEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn RiskRule>> = vec![
            Box::new(HeatStressRule),
            Box::new(ColdStressRule),
            Box::new(ExcessRainfallRule),
            Box::new(FungalDiseaseRule),
            Box::new(AcidicSoilRule),
            Box::new(AlkalineSoilRule),
        ];

        Self { rules }
    }

    pub fn evaluate(
        &self,
        crop: &CropRecord,
        soil: &SoilSample,
        weather: Option<&WeatherObservation>,
    ) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let alert = rule.evaluate(crop, soil, weather);
                if alert.is_some() {
                    tracing::debug!(rule = rule.id(), crop = crop.name(), "risk rule fired");
                }
                alert
            })
            .collect()
    }

    pub fn evaluate_rule(
        &self,
        rule_id: &str,
        crop: &CropRecord,
        soil: &SoilSample,
        weather: Option<&WeatherObservation>,
    ) -> Option<String> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(crop, soil, weather))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RiskEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskEngine")
            .field("rules", &self.list_rules())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{alluvial_soil, rice, wheat};

    #[test]
    fn lists_rules_in_evaluation_order() {
        let ids: Vec<&str> = RiskEngine::new()
            .list_rules()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "heat_stress",
                "cold_stress",
                "excess_rainfall",
                "fungal_disease",
                "acidic_soil",
                "alkaline_soil"
            ]
        );
    }

    #[test]
    fn calm_weather_and_neutral_soil_raise_nothing() {
        let weather = WeatherObservation::new("Ludhiana", 22.0, 50.0, 10.0).unwrap();
        assert!(RiskEngine::new()
            .evaluate(&wheat(), &alluvial_soil(), Some(&weather))
            .is_empty());
    }

    #[test]
    fn independent_triggers_fire_together() {
        let weather = WeatherObservation::new("Guwahati", 2.0, 95.0, 300.0).unwrap();
        let soil = SoilSample::new(4.9, 200.0, 15.0, 150.0, 0.8, "alluvial").unwrap();
        let alerts = RiskEngine::new().evaluate(&rice(), &soil, Some(&weather));
        assert_eq!(alerts.len(), 4);
        assert!(alerts[0].contains("cold"));
        assert!(alerts[1].contains("rainfall"));
        assert!(alerts[2].contains("humidity"));
        assert!(alerts[3].contains("acidic"));
    }

    #[test]
    fn soil_rules_fire_without_weather() {
        let soil = SoilSample::new(9.1, 200.0, 15.0, 150.0, 0.8, "black").unwrap();
        let alerts = RiskEngine::new().evaluate(&wheat(), &soil, None);
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("alkaline"));
    }

    #[test]
    fn evaluate_single_rule() {
        let engine = RiskEngine::new();
        let weather = WeatherObservation::new("Jaipur", 45.0, 20.0, 0.0).unwrap();
        assert!(engine
            .evaluate_rule("heat_stress", &wheat(), &alluvial_soil(), Some(&weather))
            .is_some());
        assert!(engine
            .evaluate_rule("no_such_rule", &wheat(), &alluvial_soil(), Some(&weather))
            .is_none());
    }
}
