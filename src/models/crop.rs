use crate::error::{FarmBrainError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kharif" => Some(Season::Kharif),
            "rabi" => Some(Season::Rabi),
            "zaid" => Some(Season::Zaid),
            _ => None,
        }
    }

    pub fn all() -> &'static [Season] {
        &[Season::Kharif, Season::Rabi, Season::Zaid]
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for Season {
    type Error = FarmBrainError;

    fn try_from(value: String) -> Result<Self> {
        Season::from_str(&value).ok_or_else(|| {
            FarmBrainError::validation(
                "season",
                format!("'{}' is not one of kharif, rabi, zaid", value),
            )
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

impl WaterRequirement {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterRequirement::Low => "low",
            WaterRequirement::Medium => "medium",
            WaterRequirement::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(WaterRequirement::Low),
            "medium" => Some(WaterRequirement::Medium),
            "high" => Some(WaterRequirement::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for WaterRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for WaterRequirement {
    type Error = FarmBrainError;

    fn try_from(value: String) -> Result<Self> {
        WaterRequirement::from_str(&value).ok_or_else(|| {
            FarmBrainError::validation(
                "water_requirement",
                format!("'{}' is not one of low, medium, high", value),
            )
        })
    }
}

/// A crop and its cultivation metadata.
///
/// Fields are private so a record can only exist in a validated state;
/// deserialization runs through the same checks as [`CropRecord::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CropRecordFields")]
pub struct CropRecord {
    name: String,
    season: Season,
    water_requirement: WaterRequirement,
    soil_types: Vec<String>,
    growth_days: u32,
}

#[derive(Deserialize)]
struct CropRecordFields {
    name: String,
    season: Season,
    #[serde(alias = "waterRequirement")]
    water_requirement: WaterRequirement,
    #[serde(alias = "soilTypes")]
    soil_types: Vec<String>,
    #[serde(alias = "growthDays")]
    growth_days: u32,
}

impl TryFrom<CropRecordFields> for CropRecord {
    type Error = FarmBrainError;

    fn try_from(raw: CropRecordFields) -> Result<Self> {
        CropRecord::new(
            raw.name,
            raw.season,
            raw.water_requirement,
            raw.soil_types,
            raw.growth_days,
        )
    }
}

impl CropRecord {
    pub fn new<I, S>(
        name: impl Into<String>,
        season: Season,
        water_requirement: WaterRequirement,
        soil_types: I,
        growth_days: u32,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FarmBrainError::validation("name", "must not be empty"));
        }

        let soil_types: Vec<String> = soil_types.into_iter().map(Into::into).collect();
        if soil_types.is_empty() {
            return Err(FarmBrainError::validation(
                "soil_types",
                format!("{} needs at least one compatible soil type", name),
            ));
        }
        if soil_types.iter().any(|s| s.trim().is_empty()) {
            return Err(FarmBrainError::validation(
                "soil_types",
                "soil type tags must not be blank",
            ));
        }
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = soil_types.iter().find(|s| !seen.insert(s.to_lowercase())) {
            return Err(FarmBrainError::validation(
                "soil_types",
                format!("duplicate soil type tag '{}'", dup),
            ));
        }

        if growth_days == 0 {
            return Err(FarmBrainError::validation(
                "growth_days",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            name,
            season,
            water_requirement,
            soil_types,
            growth_days,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn water_requirement(&self) -> WaterRequirement {
        self.water_requirement
    }

    pub fn soil_types(&self) -> &[String] {
        &self.soil_types
    }

    pub fn growth_days(&self) -> u32 {
        self.growth_days
    }

    /// Case-insensitive exact match on the display name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive membership test against the soil-type tags.
    pub fn grows_in(&self, soil_type: &str) -> bool {
        let wanted = soil_type.to_lowercase();
        self.soil_types.iter().any(|s| s.to_lowercase() == wanted)
    }
}
