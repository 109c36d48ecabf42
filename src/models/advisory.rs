use super::{CropRecord, SoilSample};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const AGRICULTURAL_DISCLAIMER: &str =
    "Verify recommendations with local agricultural experts before application.";

/// Growth-stage label to instruction, in stage order.
pub type StagePlan = IndexMap<String, String>;

fn default_disclaimer() -> String {
    AGRICULTURAL_DISCLAIMER.to_string()
}

/// Full advisory for one crop, soil and optional weather combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub crop: CropRecord,
    pub soil: SoilSample,
    pub recommendations: Vec<String>,
    pub fertilizer_plan: StagePlan,
    pub irrigation_schedule: StagePlan,
    #[serde(default)]
    pub risk_alerts: Vec<String>,
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

impl Advisory {
    pub fn has_alerts(&self) -> bool {
        !self.risk_alerts.is_empty()
    }
}
