use crate::models::{CropRecord, StagePlan, WaterRequirement};

type Stages = &'static [(&'static str, &'static str)];

const RICE_FERTILIZER: Stages = &[
    (
        "basal",
        "Apply DAP 50 kg/ha + MOP 25 kg/ha at transplanting.",
    ),
    ("tillering", "Top-dress urea 30 kg/ha at 21 DAT."),
    (
        "panicle initiation",
        "Apply urea 30 kg/ha + potassium sulphate 20 kg/ha.",
    ),
];

const WHEAT_FERTILIZER: Stages = &[
    ("basal", "Apply DAP 50 kg/ha + MOP 20 kg/ha at sowing."),
    (
        "crown root initiation",
        "Top-dress urea 60 kg/ha at CRI stage (20-25 DAS).",
    ),
    ("jointing", "Apply urea 30 kg/ha at jointing stage."),
];

const COTTON_FERTILIZER: Stages = &[
    ("basal", "Apply SSP 150 kg/ha + MOP 25 kg/ha at sowing."),
    (
        "squaring",
        "Apply urea 40 kg/ha + boron 1 kg/ha at squaring.",
    ),
    ("boll development", "Top-dress NPK 12:32:16 at 50 kg/ha."),
];

const GENERIC_FERTILIZER: Stages = &[
    (
        "basal",
        "Apply recommended NPK complex fertilizer at sowing/planting.",
    ),
    (
        "vegetative",
        "Top-dress nitrogen source at active vegetative growth.",
    ),
    (
        "reproductive",
        "Apply potassium-rich fertilizer at flowering/fruiting.",
    ),
];

/// Crops with a dedicated fertilizer plan, matched on the full name ignoring case.
const NAMED_FERTILIZER_PLANS: &[(&str, Stages)] = &[
    ("rice", RICE_FERTILIZER),
    ("wheat", WHEAT_FERTILIZER),
    ("cotton", COTTON_FERTILIZER),
];

const HIGH_WATER_IRRIGATION: Stages = &[
    (
        "establishment",
        "Irrigate immediately after sowing/transplanting.",
    ),
    (
        "vegetative",
        "Maintain field capacity; irrigate every 5-7 days.",
    ),
    (
        "reproductive",
        "Critical stage, do not stress; irrigate every 4-5 days.",
    ),
    (
        "maturation",
        "Reduce irrigation; withhold 10-15 days before harvest.",
    ),
];

const MEDIUM_WATER_IRRIGATION: Stages = &[
    ("establishment", "Apply light irrigation at sowing."),
    (
        "vegetative",
        "Irrigate every 10-12 days or at 50% soil moisture depletion.",
    ),
    (
        "reproductive",
        "Irrigate every 7-10 days at flowering/grain fill.",
    ),
    ("maturation", "Reduce irrigation 2-3 weeks before harvest."),
];

const LOW_WATER_IRRIGATION: Stages = &[
    ("establishment", "One irrigation at sowing if soil is dry."),
    (
        "vegetative",
        "Irrigate every 15-20 days or rely on rainfall.",
    ),
    (
        "reproductive",
        "One critical irrigation at flowering if rainfall is inadequate.",
    ),
    ("maturation", "Withhold irrigation 3 weeks before harvest."),
];

fn to_plan(stages: Stages) -> StagePlan {
    stages
        .iter()
        .map(|(stage, instruction)| (stage.to_string(), instruction.to_string()))
        .collect()
}

/// Whether `crop` has a dedicated plan rather than the generic one.
pub fn has_named_fertilizer_plan(crop: &CropRecord) -> bool {
    named_fertilizer_stages(crop).is_some()
}

fn named_fertilizer_stages(crop: &CropRecord) -> Option<Stages> {
    NAMED_FERTILIZER_PLANS
        .iter()
        .find(|(name, _)| crop.is_named(name))
        .map(|(_, stages)| *stages)
}

pub fn fertilizer_plan(crop: &CropRecord) -> StagePlan {
    to_plan(named_fertilizer_stages(crop).unwrap_or(GENERIC_FERTILIZER))
}

pub fn irrigation_schedule(water: WaterRequirement) -> StagePlan {
    to_plan(match water {
        WaterRequirement::High => HIGH_WATER_IRRIGATION,
        WaterRequirement::Medium => MEDIUM_WATER_IRRIGATION,
        WaterRequirement::Low => LOW_WATER_IRRIGATION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Season;

    fn crop(name: &str, water: WaterRequirement) -> CropRecord {
        CropRecord::new(name, Season::Kharif, water, ["loam"], 100).unwrap()
    }

    fn keys(plan: &StagePlan) -> Vec<&str> {
        plan.keys().map(String::as_str).collect()
    }

    #[test]
    fn named_plans_by_crop() {
        assert_eq!(
            keys(&fertilizer_plan(&crop("Rice", WaterRequirement::High))),
            vec!["basal", "tillering", "panicle initiation"]
        );
        assert_eq!(
            keys(&fertilizer_plan(&crop("wheat", WaterRequirement::Medium))),
            vec!["basal", "crown root initiation", "jointing"]
        );
        assert_eq!(
            keys(&fertilizer_plan(&crop("COTTON", WaterRequirement::Medium))),
            vec!["basal", "squaring", "boll development"]
        );
    }

    #[test]
    fn other_crops_get_generic_plan() {
        let maize = crop("Maize", WaterRequirement::Medium);
        assert!(!has_named_fertilizer_plan(&maize));
        assert_eq!(
            keys(&fertilizer_plan(&maize)),
            vec!["basal", "vegetative", "reproductive"]
        );
        // exact match only
        let wild_rice = crop("Wild Rice", WaterRequirement::High);
        assert!(!has_named_fertilizer_plan(&wild_rice));
    }

    #[test]
    fn irrigation_has_four_ordered_stages_per_class() {
        for water in [
            WaterRequirement::Low,
            WaterRequirement::Medium,
            WaterRequirement::High,
        ] {
            assert_eq!(
                keys(&irrigation_schedule(water)),
                vec!["establishment", "vegetative", "reproductive", "maturation"]
            );
        }
    }

    #[test]
    fn irrigation_wording_varies_by_class() {
        let high = irrigation_schedule(WaterRequirement::High);
        let medium = irrigation_schedule(WaterRequirement::Medium);
        let low = irrigation_schedule(WaterRequirement::Low);
        assert_ne!(high["vegetative"], medium["vegetative"]);
        assert_ne!(medium["vegetative"], low["vegetative"]);
        assert!(high["vegetative"].contains("5-7 days"));
        assert!(low["maturation"].contains("3 weeks"));
    }
}
