use super::{check_at_least, check_range};
use crate::error::{FarmBrainError, Result};
use serde::{Deserialize, Serialize};

/// Chemical profile of a soil sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SoilSampleFields")]
pub struct SoilSample {
    ph: f64,
    nitrogen_ppm: f64,
    phosphorus_ppm: f64,
    potassium_ppm: f64,
    organic_carbon_pct: f64,
    soil_type: String,
}

#[derive(Deserialize)]
struct SoilSampleFields {
    ph: f64,
    #[serde(alias = "nitrogenPpm")]
    nitrogen_ppm: f64,
    #[serde(alias = "phosphorusPpm")]
    phosphorus_ppm: f64,
    #[serde(alias = "potassiumPpm")]
    potassium_ppm: f64,
    #[serde(alias = "organicCarbonPct")]
    organic_carbon_pct: f64,
    #[serde(alias = "soilType")]
    soil_type: String,
}

impl TryFrom<SoilSampleFields> for SoilSample {
    type Error = FarmBrainError;

    fn try_from(raw: SoilSampleFields) -> Result<Self> {
        SoilSample::new(
            raw.ph,
            raw.nitrogen_ppm,
            raw.phosphorus_ppm,
            raw.potassium_ppm,
            raw.organic_carbon_pct,
            raw.soil_type,
        )
    }
}

impl SoilSample {
    pub fn new(
        ph: f64,
        nitrogen_ppm: f64,
        phosphorus_ppm: f64,
        potassium_ppm: f64,
        organic_carbon_pct: f64,
        soil_type: impl Into<String>,
    ) -> Result<Self> {
        let soil_type = soil_type.into();
        if soil_type.trim().is_empty() {
            return Err(FarmBrainError::validation("soil_type", "must not be empty"));
        }

        Ok(Self {
            ph: check_range("ph", ph, 0.0, 14.0)?,
            nitrogen_ppm: check_at_least("nitrogen_ppm", nitrogen_ppm, 0.0)?,
            phosphorus_ppm: check_at_least("phosphorus_ppm", phosphorus_ppm, 0.0)?,
            potassium_ppm: check_at_least("potassium_ppm", potassium_ppm, 0.0)?,
            organic_carbon_pct: check_range("organic_carbon_pct", organic_carbon_pct, 0.0, 100.0)?,
            soil_type,
        })
    }

    pub fn ph(&self) -> f64 {
        self.ph
    }

    pub fn nitrogen_ppm(&self) -> f64 {
        self.nitrogen_ppm
    }

    pub fn phosphorus_ppm(&self) -> f64 {
        self.phosphorus_ppm
    }

    pub fn potassium_ppm(&self) -> f64 {
        self.potassium_ppm
    }

    pub fn organic_carbon_pct(&self) -> f64 {
        self.organic_carbon_pct
    }

    pub fn soil_type(&self) -> &str {
        &self.soil_type
    }
}
