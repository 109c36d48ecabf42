pub mod advisor;
pub mod plans;
pub mod rules;
pub mod soil;

pub use advisor::AdvisoryComposer;
pub use rules::RiskEngine;
pub use soil::{SoilEvaluator, SoilReport};
