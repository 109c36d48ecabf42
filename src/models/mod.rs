pub mod advisory;
pub mod crop;
pub mod soil;
pub mod weather;

pub use advisory::*;
pub use crop::*;
pub use soil::*;
pub use weather::*;

use crate::error::{FarmBrainError, Result};

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FarmBrainError::validation(field, "must be a finite number"))
    }
}

pub(crate) fn check_at_least(field: &'static str, value: f64, min: f64) -> Result<f64> {
    let value = check_finite(field, value)?;
    if value < min {
        return Err(FarmBrainError::validation(
            field,
            format!("{} is below the minimum of {}", value, min),
        ));
    }
    Ok(value)
}

pub(crate) fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    let value = check_at_least(field, value, min)?;
    if value > max {
        return Err(FarmBrainError::validation(
            field,
            format!("{} is above the maximum of {}", value, max),
        ));
    }
    Ok(value)
}
