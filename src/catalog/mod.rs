mod seed;

use crate::models::CropRecord;
use seed::SEED_CROPS;
use std::sync::LazyLock;

static BUILTIN_CROPS: LazyLock<Vec<CropRecord>> = LazyLock::new(|| {
    SEED_CROPS
        .iter()
        .filter_map(|seed| {
            let soils = seed.soils.iter().copied();
            match CropRecord::new(seed.name, seed.season, seed.water, soils, seed.days) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::error!("Skipping built-in crop {}: {}", seed.name, e);
                    None
                }
            }
        })
        .collect()
});

/// Read-only crop table.
///
/// Embedding applications add their own records by composition:
/// `Catalog::builtin().extended(custom)` or `Catalog::new(records)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    crops: Vec<CropRecord>,
}

impl Catalog {
    pub fn new(crops: Vec<CropRecord>) -> Self {
        Self { crops }
    }

    /// The built-in Indian crop table.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_CROPS.clone())
    }

    /// Returns a catalog with `extra` appended after the existing records.
    pub fn extended(mut self, extra: impl IntoIterator<Item = CropRecord>) -> Self {
        self.crops.extend(extra);
        self
    }

    pub fn all(&self) -> &[CropRecord] {
        &self.crops
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    /// Case-insensitive exact match on the full display name. No fuzzy matching:
    /// "Sorghum" will not find "Sorghum (Jowar)".
    pub fn by_name(&self, name: &str) -> Option<&CropRecord> {
        self.crops.iter().find(|c| c.is_named(name))
    }

    /// Unknown season strings yield an empty result rather than an error.
    pub fn by_season(&self, season: &str) -> Vec<&CropRecord> {
        let wanted = season.to_lowercase();
        self.crops
            .iter()
            .filter(|c| c.season().as_str() == wanted)
            .collect()
    }

    pub fn by_soil_type(&self, soil_type: &str) -> Vec<&CropRecord> {
        self.crops.iter().filter(|c| c.grows_in(soil_type)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
