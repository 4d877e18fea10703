//! Elicitation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::elicitation::P_INFINITY_THRESHOLD;
use crate::domain::thresholds::Interval;

/// Starting bounds and display convention for the preference parameter P
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ElicitationConfig {
    /// Lower bound of P before any answer
    #[serde(default = "default_initial_p_min")]
    pub initial_p_min: f64,

    /// Upper bound of P before any answer (unset means unbounded)
    #[serde(default)]
    pub initial_p_max: Option<f64>,

    /// P values above this are displayed as "infinity"
    #[serde(default = "default_p_infinity_threshold")]
    pub p_infinity_threshold: f64,
}

impl ElicitationConfig {
    /// Initial P interval, with an unset upper bound mapped to +inf
    pub fn initial_p_interval(&self) -> Interval {
        Interval::new(self.initial_p_min, self.initial_p_max.unwrap_or(f64::INFINITY))
    }

    /// Validate elicitation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.initial_p_min.is_nan() || self.initial_p_min <= 0.0 {
            return Err(ValidationError::InvalidInitialPMin);
        }
        if let Some(max) = self.initial_p_max {
            if max.is_nan() || max < self.initial_p_min {
                return Err(ValidationError::InvertedInitialP);
            }
        }
        if self.p_infinity_threshold.is_nan() || self.p_infinity_threshold <= 0.0 {
            return Err(ValidationError::InvalidInfinityThreshold);
        }
        Ok(())
    }
}

impl Default for ElicitationConfig {
    fn default() -> Self {
        Self {
            initial_p_min: default_initial_p_min(),
            initial_p_max: None,
            p_infinity_threshold: default_p_infinity_threshold(),
        }
    }
}

fn default_initial_p_min() -> f64 {
    1.0
}

fn default_p_infinity_threshold() -> f64 {
    P_INFINITY_THRESHOLD
}
