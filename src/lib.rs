//! Deterministic crop advisory engine.
//!
//! A [`catalog::Catalog`] resolves crop records, [`logic::SoilEvaluator`]
//! judges a [`models::SoilSample`] against fixed thresholds, and
//! [`logic::AdvisoryComposer`] merges both with optional weather into an
//! [`models::Advisory`]. Every operation is a pure function of its inputs.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;

pub use catalog::Catalog;
pub use error::{FarmBrainError, Result};
pub use logic::{AdvisoryComposer, RiskEngine, SoilEvaluator, SoilReport};
pub use models::{
    Advisory, CropRecord, Season, SoilSample, StagePlan, WaterRequirement, WeatherObservation,
    AGRICULTURAL_DISCLAIMER,
};
