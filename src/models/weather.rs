use super::{check_at_least, check_finite, check_range};
use crate::error::{FarmBrainError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORECAST_DAYS: u8 = 7;
pub const MAX_FORECAST_DAYS: u8 = 30;

/// Current weather conditions at a farm location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeatherObservationFields")]
pub struct WeatherObservation {
    location: String,
    temperature_c: f64,
    humidity_pct: f64,
    rainfall_mm: f64,
    forecast_days: u8,
}

fn default_forecast_days() -> u8 {
    DEFAULT_FORECAST_DAYS
}

#[derive(Deserialize)]
struct WeatherObservationFields {
    location: String,
    #[serde(alias = "temperatureC")]
    temperature_c: f64,
    #[serde(alias = "humidityPct")]
    humidity_pct: f64,
    #[serde(alias = "rainfallMm")]
    rainfall_mm: f64,
    #[serde(alias = "forecastDays", default = "default_forecast_days")]
    forecast_days: u8,
}

impl TryFrom<WeatherObservationFields> for WeatherObservation {
    type Error = FarmBrainError;

    fn try_from(raw: WeatherObservationFields) -> Result<Self> {
        WeatherObservation::new(
            raw.location,
            raw.temperature_c,
            raw.humidity_pct,
            raw.rainfall_mm,
        )?
        .with_forecast_days(raw.forecast_days)
    }
}

impl WeatherObservation {
    pub fn new(
        location: impl Into<String>,
        temperature_c: f64,
        humidity_pct: f64,
        rainfall_mm: f64,
    ) -> Result<Self> {
        Ok(Self {
            location: location.into(),
            temperature_c: check_finite("temperature_c", temperature_c)?,
            humidity_pct: check_range("humidity_pct", humidity_pct, 0.0, 100.0)?,
            rainfall_mm: check_at_least("rainfall_mm", rainfall_mm, 0.0)?,
            forecast_days: DEFAULT_FORECAST_DAYS,
        })
    }

    pub fn with_forecast_days(mut self, days: u8) -> Result<Self> {
        if !(1..=MAX_FORECAST_DAYS).contains(&days) {
            return Err(FarmBrainError::validation(
                "forecast_days",
                format!("{} is outside 1-{}", days, MAX_FORECAST_DAYS),
            ));
        }
        self.forecast_days = days;
        Ok(self)
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn humidity_pct(&self) -> f64 {
        self.humidity_pct
    }

    pub fn rainfall_mm(&self) -> f64 {
        self.rainfall_mm
    }

    pub fn forecast_days(&self) -> u8 {
        self.forecast_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_days_defaults_to_seven() {
        let w = WeatherObservation::new("Pune", 30.0, 60.0, 5.0).unwrap();
        assert_eq!(w.location(), "Pune");
        assert_eq!(w.forecast_days(), 7);
    }

    #[test]
    fn forecast_days_bounds() {
        let w = WeatherObservation::new("Pune", 30.0, 60.0, 5.0).unwrap();
        assert!(w.clone().with_forecast_days(0).is_err());
        assert!(w.clone().with_forecast_days(31).is_err());
        assert_eq!(w.clone().with_forecast_days(1).unwrap().forecast_days(), 1);
        assert_eq!(w.with_forecast_days(30).unwrap().forecast_days(), 30);
    }

    #[test]
    fn humidity_and_rainfall_validated() {
        assert!(WeatherObservation::new("Pune", 30.0, 100.5, 0.0).is_err());
        assert!(WeatherObservation::new("Pune", 30.0, -1.0, 0.0).is_err());
        assert!(WeatherObservation::new("Pune", 30.0, 50.0, -0.1).is_err());
        assert!(WeatherObservation::new("Pune", f64::NAN, 50.0, 0.0).is_err());
    }

    #[test]
    fn negative_temperatures_allowed() {
        let w = WeatherObservation::new("Leh", -12.5, 30.0, 0.0).unwrap();
        assert_eq!(w.temperature_c(), -12.5);
    }

    #[test]
    fn deserialization_applies_default_and_validates() {
        let w: WeatherObservation = serde_json::from_str(
            r#"{"location":"Nagpur","temperature_c":43.0,"humidity_pct":55.0,"rainfall_mm":0.0}"#,
        )
        .unwrap();
        assert_eq!(w.forecast_days(), DEFAULT_FORECAST_DAYS);

        let bad = serde_json::from_str::<WeatherObservation>(
            r#"{"location":"Nagpur","temperature_c":43.0,"humidity_pct":55.0,
                "rainfall_mm":0.0,"forecast_days":45}"#,
        );
        assert!(bad.is_err());
    }
}
