//! Built-in crop table for Indian agriculture, ordered kharif, rabi, zaid.

use crate::models::{
    Season::{self, Kharif, Rabi, Zaid},
    WaterRequirement::{self, High, Low, Medium},
};

pub(super) struct SeedCrop {
    pub name: &'static str,
    pub season: Season,
    pub water: WaterRequirement,
    pub soils: &'static [&'static str],
    pub days: u32,
}

const fn crop(
    name: &'static str,
    season: Season,
    water: WaterRequirement,
    soils: &'static [&'static str],
    days: u32,
) -> SeedCrop {
    SeedCrop {
        name,
        season,
        water,
        soils,
        days,
    }
}

pub(super) const SEED_CROPS: &[SeedCrop] = &[
    // Kharif
    crop("Rice", Kharif, High, &["alluvial", "clay", "loam"], 120),
    crop(
        "Maize",
        Kharif,
        Medium,
        &["loam", "sandy loam", "alluvial"],
        90,
    ),
    crop(
        "Sorghum (Jowar)",
        Kharif,
        Low,
        &["black", "loam", "red"],
        100,
    ),
    crop(
        "Pearl Millet (Bajra)",
        Kharif,
        Low,
        &["sandy", "sandy loam", "loam"],
        75,
    ),
    crop(
        "Cotton",
        Kharif,
        Medium,
        &["black", "alluvial", "loam"],
        180,
    ),
    crop(
        "Sugarcane",
        Kharif,
        High,
        &["alluvial", "loam", "clay loam"],
        365,
    ),
    crop(
        "Soybean",
        Kharif,
        Medium,
        &["black", "loam", "clay loam"],
        100,
    ),
    crop(
        "Groundnut",
        Kharif,
        Medium,
        &["sandy loam", "loam", "red"],
        120,
    ),
    crop(
        "Sesame (Til)",
        Kharif,
        Low,
        &["loam", "sandy loam", "alluvial"],
        80,
    ),
    crop(
        "Pigeonpea (Arhar/Tur)",
        Kharif,
        Low,
        &["black", "red", "loam"],
        160,
    ),
    crop(
        "Blackgram (Urad)",
        Kharif,
        Low,
        &["loam", "sandy loam", "alluvial"],
        70,
    ),
    crop(
        "Greengram (Moong)",
        Kharif,
        Low,
        &["loam", "sandy loam", "alluvial"],
        65,
    ),
    crop("Jute", Kharif, High, &["alluvial", "loam", "clay"], 120),
    crop(
        "Turmeric",
        Kharif,
        Medium,
        &["loam", "clay loam", "red"],
        270,
    ),
    crop(
        "Ginger",
        Kharif,
        Medium,
        &["loam", "sandy loam", "red"],
        210,
    ),
    crop(
        "Banana",
        Kharif,
        High,
        &["alluvial", "loam", "clay loam"],
        365,
    ),
    crop(
        "Okra (Bhindi)",
        Kharif,
        Medium,
        &["loam", "sandy loam", "alluvial"],
        60,
    ),
    crop("Bitter Gourd", Kharif, Medium, &["loam", "sandy loam"], 70),
    crop(
        "Cowpea (Lobia)",
        Kharif,
        Low,
        &["sandy loam", "loam", "red"],
        75,
    ),
    crop("Castor", Kharif, Low, &["black", "red", "alluvial"], 200),
    // Rabi
    crop(
        "Wheat",
        Rabi,
        Medium,
        &["alluvial", "loam", "clay loam"],
        120,
    ),
    crop(
        "Barley",
        Rabi,
        Low,
        &["loam", "sandy loam", "alluvial"],
        100,
    ),
    crop(
        "Chickpea (Chana)",
        Rabi,
        Low,
        &["black", "loam", "red"],
        100,
    ),
    crop(
        "Lentil (Masoor)",
        Rabi,
        Low,
        &["loam", "clay loam", "alluvial"],
        100,
    ),
    crop(
        "Mustard (Sarson)",
        Rabi,
        Low,
        &["loam", "alluvial", "sandy loam"],
        110,
    ),
    crop(
        "Rapeseed",
        Rabi,
        Low,
        &["loam", "alluvial", "clay loam"],
        115,
    ),
    crop("Linseed", Rabi, Low, &["black", "loam", "alluvial"], 120),
    crop(
        "Sunflower",
        Rabi,
        Medium,
        &["loam", "clay loam", "alluvial"],
        100,
    ),
    crop(
        "Pea (Matar)",
        Rabi,
        Low,
        &["loam", "sandy loam", "alluvial"],
        90,
    ),
    crop(
        "Potato",
        Rabi,
        Medium,
        &["loam", "sandy loam", "alluvial"],
        90,
    ),
    crop("Onion", Rabi, Medium, &["loam", "alluvial", "black"], 130),
    crop(
        "Garlic",
        Rabi,
        Medium,
        &["loam", "clay loam", "alluvial"],
        150,
    ),
    crop("Coriander", Rabi, Low, &["loam", "sandy loam"], 60),
    crop(
        "Fenugreek (Methi)",
        Rabi,
        Low,
        &["loam", "clay loam", "alluvial"],
        60,
    ),
    crop(
        "Carrot",
        Rabi,
        Medium,
        &["loam", "sandy loam", "alluvial"],
        70,
    ),
    crop(
        "Cabbage",
        Rabi,
        Medium,
        &["loam", "clay loam", "alluvial"],
        80,
    ),
    crop(
        "Cauliflower",
        Rabi,
        Medium,
        &["loam", "clay loam", "alluvial"],
        75,
    ),
    crop("Spinach (Palak)", Rabi, Medium, &["loam", "sandy loam"], 40),
    // Zaid
    crop("Watermelon", Zaid, Medium, &["sandy loam", "loam"], 90),
    crop("Muskmelon", Zaid, Medium, &["sandy loam", "loam"], 75),
    crop("Cucumber", Zaid, Medium, &["loam", "sandy loam"], 55),
    crop("Pumpkin", Zaid, Medium, &["loam", "clay loam"], 80),
    crop("Summer Squash", Zaid, Medium, &["loam", "sandy loam"], 50),
    crop("Moong (Zaid)", Zaid, Low, &["loam", "sandy loam"], 65),
    crop("Cowpea (Zaid)", Zaid, Low, &["sandy loam", "loam"], 70),
    crop("Bottle Gourd", Zaid, Medium, &["loam", "clay loam"], 65),
    crop("Ridge Gourd", Zaid, Medium, &["loam", "sandy loam"], 60),
    crop("Snake Gourd", Zaid, Medium, &["loam", "sandy loam"], 65),
    crop(
        "Bitter Melon (Zaid)",
        Zaid,
        Medium,
        &["loam", "sandy loam"],
        70,
    ),
    crop(
        "Cluster Beans (Guar)",
        Zaid,
        Low,
        &["sandy loam", "loam"],
        90,
    ),
    crop(
        "Amaranth (Rajgira)",
        Zaid,
        Low,
        &["loam", "sandy loam", "red"],
        100,
    ),
];
