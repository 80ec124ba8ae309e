//! Vehicle parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default cruising speed.
pub const DEFAULT_SPEED: f64 = 2.0;

/// Default dwell time per visited point.
pub const DEFAULT_DWELL_TIME: f64 = 10.0;

/// Cruising speed and per-stop dwell time of the UAV.
///
/// Default: speed = 2.0, dwell time = 10.0 (a slow vehicle with a
/// ten-second service stop).
///
/// # Examples
///
/// ```
/// use uav_route::optimizer::UavConfig;
///
/// let config = UavConfig::default().with_speed(25.0).with_dwell_time(2.5);
/// assert_eq!(config.speed(), 25.0);
/// assert_eq!(config.dwell_time(), 2.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UavConfig {
    speed: f64,
    dwell_time: f64,
}

impl UavConfig {
    /// Creates a validated configuration.
    pub fn new(speed: f64, dwell_time: f64) -> Result<Self, ConfigError> {
        let config = Self { speed, dwell_time };
        config.validate()?;
        Ok(config)
    }

    /// Sets the cruising speed.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the dwell time.
    pub fn with_dwell_time(mut self, dwell_time: f64) -> Self {
        self.dwell_time = dwell_time;
        self
    }

    /// Cruising speed (distance units per time unit).
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Time spent at every visited point, terminal included.
    pub fn dwell_time(&self) -> f64 {
        self.dwell_time
    }

    /// Checks that speed is positive and dwell time non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.speed));
        }
        if !self.dwell_time.is_finite() || self.dwell_time < 0.0 {
            return Err(ConfigError::NegativeDwellTime(self.dwell_time));
        }
        Ok(())
    }
}

impl Default for UavConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            dwell_time: DEFAULT_DWELL_TIME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let c = UavConfig::default();
        assert_eq!(c.speed(), 2.0);
        assert_eq!(c.dwell_time(), 10.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_config_new_valid() {
        let c = UavConfig::new(5.0, 0.0).expect("valid");
        assert_eq!(c.speed(), 5.0);
        assert_eq!(c.dwell_time(), 0.0);
    }

    #[test]
    fn test_config_rejects_speed() {
        assert_eq!(UavConfig::new(0.0, 1.0), Err(ConfigError::NonPositiveSpeed(0.0)));
        assert_eq!(UavConfig::new(-2.0, 1.0), Err(ConfigError::NonPositiveSpeed(-2.0)));
        assert!(matches!(
            UavConfig::new(f64::INFINITY, 1.0),
            Err(ConfigError::NonPositiveSpeed(_))
        ));
        assert!(matches!(
            UavConfig::new(f64::NAN, 1.0),
            Err(ConfigError::NonPositiveSpeed(_))
        ));
    }

    #[test]
    fn test_config_rejects_dwell_time() {
        assert_eq!(UavConfig::new(1.0, -0.1), Err(ConfigError::NegativeDwellTime(-0.1)));
        assert!(matches!(
            UavConfig::new(1.0, f64::NAN),
            Err(ConfigError::NegativeDwellTime(_))
        ));
    }

    #[test]
    fn test_config_from_partial_json() {
        let c: UavConfig = serde_json::from_str(r#"{"speed": 4.0}"#).expect("parse");
        assert_eq!(c.speed(), 4.0);
        assert_eq!(c.dwell_time(), DEFAULT_DWELL_TIME);
    }
}
