use crate::catalog::Catalog;
use crate::models::{CropRecord, SoilSample, WaterRequirement, AGRICULTURAL_DISCLAIMER};
use serde::{Deserialize, Serialize};

// Soil test thresholds (ICAR guidelines). Values strictly below LOW or
// strictly above HIGH fall outside the optimal band.
pub const PH_LOW: f64 = 6.0;
pub const PH_HIGH: f64 = 7.5;
pub const NITROGEN_LOW_PPM: f64 = 140.0;
pub const NITROGEN_HIGH_PPM: f64 = 280.0;
pub const PHOSPHORUS_LOW_PPM: f64 = 10.0;
pub const PHOSPHORUS_HIGH_PPM: f64 = 25.0;
pub const POTASSIUM_LOW_PPM: f64 = 108.0;
pub const POTASSIUM_HIGH_PPM: f64 = 280.0;
pub const ORGANIC_CARBON_LOW_PCT: f64 = 0.5;

// Crop suitability pH bands.
pub const STRONGLY_ACIDIC_PH: f64 = 5.5;
pub const STRONGLY_ALKALINE_PH: f64 = 8.0;

/// Crops grown on acidic soils regardless of water requirement.
pub const ACID_TOLERANT_CROPS: &[&str] = &["rice", "jute", "turmeric", "ginger"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilParameter {
    Ph,
    Nitrogen,
    Phosphorus,
    Potassium,
    OrganicCarbon,
}

impl SoilParameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilParameter::Ph => "pH",
            SoilParameter::Nitrogen => "Nitrogen",
            SoilParameter::Phosphorus => "Phosphorus",
            SoilParameter::Potassium => "Potassium",
            SoilParameter::OrganicCarbon => "Organic Carbon",
        }
    }

    /// Evaluation order.
    pub fn all() -> &'static [SoilParameter] {
        &[
            SoilParameter::Ph,
            SoilParameter::Nitrogen,
            SoilParameter::Phosphorus,
            SoilParameter::Potassium,
            SoilParameter::OrganicCarbon,
        ]
    }

    pub fn value_in(&self, soil: &SoilSample) -> f64 {
        match self {
            SoilParameter::Ph => soil.ph(),
            SoilParameter::Nitrogen => soil.nitrogen_ppm(),
            SoilParameter::Phosphorus => soil.phosphorus_ppm(),
            SoilParameter::Potassium => soil.potassium_ppm(),
            SoilParameter::OrganicCarbon => soil.organic_carbon_pct(),
        }
    }

    /// (low cutoff, high cutoff). Organic carbon has no upper limit.
    pub fn thresholds(&self) -> (f64, Option<f64>) {
        match self {
            SoilParameter::Ph => (PH_LOW, Some(PH_HIGH)),
            SoilParameter::Nitrogen => (NITROGEN_LOW_PPM, Some(NITROGEN_HIGH_PPM)),
            SoilParameter::Phosphorus => (PHOSPHORUS_LOW_PPM, Some(PHOSPHORUS_HIGH_PPM)),
            SoilParameter::Potassium => (POTASSIUM_LOW_PPM, Some(POTASSIUM_HIGH_PPM)),
            SoilParameter::OrganicCarbon => (ORGANIC_CARBON_LOW_PCT, None),
        }
    }

    pub fn classify(&self, value: f64) -> Level {
        let (low, high) = self.thresholds();
        if value < low {
            Level::Low
        } else if high.is_some_and(|h| value > h) {
            Level::High
        } else {
            Level::Optimal
        }
    }
}

impl std::fmt::Display for SoilParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Optimal,
    High,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Optimal => "optimal",
            Level::High => "high",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterJudgment {
    pub parameter: SoilParameter,
    pub value: f64,
    pub level: Level,
    pub message: String,
}

/// Soil analysis result: the evaluation sentences plus the crops that suit
/// the sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilReport {
    pub recommendations: Vec<String>,
    pub suitable_crop_names: Vec<String>,
    pub disclaimer: String,
}

/// Classifies soil samples against fixed agronomic thresholds.
///
/// Low readings carry a corrective action. High nitrogen, phosphorus and
/// potassium readings are flagged without a prescribed action.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoilEvaluator;

impl SoilEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, soil: &SoilSample) -> Vec<ParameterJudgment> {
        SoilParameter::all()
            .iter()
            .map(|&parameter| {
                let value = parameter.value_in(soil);
                let level = parameter.classify(value);
                tracing::trace!(%parameter, value, %level, "soil parameter judged");
                ParameterJudgment {
                    parameter,
                    value,
                    level,
                    message: judgment_message(parameter, value, level),
                }
            })
            .collect()
    }

    /// One sentence per parameter in fixed order, then the disclaimer.
    pub fn evaluate(&self, soil: &SoilSample) -> Vec<String> {
        let mut recs: Vec<String> = self.assess(soil).into_iter().map(|j| j.message).collect();
        recs.push(AGRICULTURAL_DISCLAIMER.to_string());
        recs
    }

    /// Crops whose soil types include the sample's soil type and whose pH
    /// tolerance band admits the sample's pH, in catalog order.
    pub fn suitable_crops<'a>(
        &self,
        soil: &SoilSample,
        catalog: &'a Catalog,
    ) -> Vec<&'a CropRecord> {
        catalog
            .by_soil_type(soil.soil_type())
            .into_iter()
            .filter(|crop| tolerates_ph(crop, soil.ph()))
            .collect()
    }

    pub fn report(&self, soil: &SoilSample, catalog: &Catalog) -> SoilReport {
        SoilReport {
            recommendations: self.evaluate(soil),
            suitable_crop_names: self
                .suitable_crops(soil, catalog)
                .into_iter()
                .map(|c| c.name().to_string())
                .collect(),
            disclaimer: AGRICULTURAL_DISCLAIMER.to_string(),
        }
    }
}

pub fn is_acid_tolerant(crop: &CropRecord) -> bool {
    let name = crop.name().to_lowercase();
    ACID_TOLERANT_CROPS.iter().any(|tolerant| name.contains(tolerant))
}

fn tolerates_ph(crop: &CropRecord, ph: f64) -> bool {
    if ph < STRONGLY_ACIDIC_PH {
        crop.water_requirement() == WaterRequirement::High || is_acid_tolerant(crop)
    } else if ph <= STRONGLY_ALKALINE_PH {
        true
    } else {
        crop.water_requirement() == WaterRequirement::Low
    }
}

fn judgment_message(parameter: SoilParameter, value: f64, level: Level) -> String {
    match (parameter, level) {
        (SoilParameter::Ph, Level::Low) => format!(
            "Soil pH {} is LOW (acidic, below 6.0). Apply agricultural lime at \
             2-4 tonnes/hectare to raise pH to the 6.0-7.5 range.",
            value
        ),
        (SoilParameter::Ph, Level::High) => format!(
            "Soil pH {} is HIGH (alkaline, above 7.5). Apply gypsum or sulphur to lower \
             pH towards the 6.0-7.5 range and watch for zinc deficiency.",
            value
        ),
        (SoilParameter::Ph, Level::Optimal) => {
            format!("Soil pH {} is within the optimal range (6.0-7.5).", value)
        }
        (SoilParameter::Nitrogen, Level::Low) => format!(
            "Nitrogen {} ppm is LOW (below 140 ppm). Apply urea (46% N) at 120-150 kg/ha \
             or incorporate green manure crops like dhaincha.",
            value
        ),
        (SoilParameter::Nitrogen, Level::High) => {
            format!("Nitrogen {} ppm is HIGH (above 280 ppm).", value)
        }
        (SoilParameter::Nitrogen, Level::Optimal) => {
            format!("Nitrogen {} ppm is optimal (140-280 ppm).", value)
        }
        (SoilParameter::Phosphorus, Level::Low) => format!(
            "Phosphorus {} ppm is LOW (below 10 ppm). Apply DAP (18-46-0) at \
             100-125 kg/ha or single super phosphate (SSP).",
            value
        ),
        (SoilParameter::Phosphorus, Level::High) => {
            format!("Phosphorus {} ppm is HIGH (above 25 ppm).", value)
        }
        (SoilParameter::Phosphorus, Level::Optimal) => {
            format!("Phosphorus {} ppm is optimal (10-25 ppm).", value)
        }
        (SoilParameter::Potassium, Level::Low) => format!(
            "Potassium {} ppm is LOW (below 108 ppm). Apply muriate of potash (MOP) at \
             60-80 kg/ha or use potassium sulphate for chloride-sensitive crops.",
            value
        ),
        (SoilParameter::Potassium, Level::High) => {
            format!("Potassium {} ppm is HIGH (above 280 ppm).", value)
        }
        (SoilParameter::Potassium, Level::Optimal) => {
            format!("Potassium {} ppm is optimal (108-280 ppm).", value)
        }
        (SoilParameter::OrganicCarbon, Level::Low) => format!(
            "Organic carbon {}% is LOW, below 0.50%. Incorporate farmyard manure \
             (10-15 tonnes/ha) or vermicompost to improve soil health.",
            value
        ),
        // No upper cutoff, so High never occurs for organic carbon.
        (SoilParameter::OrganicCarbon, _) => {
            format!("Organic carbon {}% is satisfactory (optimal).", value)
        }
    }
}
