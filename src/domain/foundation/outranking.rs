//! Outranking degree pair for a compared couple of alternatives.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// The PROMETHEE Gamma outranking degrees of a pair, each in [0, 1].
///
/// `gamma_ij` is the degree to which alternative `i` outranks `j`,
/// `gamma_ji` the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutrankingPair {
    gamma_ij: f64,
    gamma_ji: f64,
}

impl OutrankingPair {
    /// Creates a pair, returning error if a degree is NaN or outside [0, 1].
    pub fn try_new(gamma_ij: f64, gamma_ji: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            gamma_ij: validate_degree("gamma_ij", gamma_ij)?,
            gamma_ji: validate_degree("gamma_ji", gamma_ji)?,
        })
    }

    pub fn gamma_ij(&self) -> f64 {
        self.gamma_ij
    }

    pub fn gamma_ji(&self) -> f64 {
        self.gamma_ji
    }

    /// `max(gamma_ij, gamma_ji)`, the x term of the indifference threshold.
    pub fn indifference_x(&self) -> f64 {
        self.gamma_ij.max(self.gamma_ji)
    }

    /// `min(gamma_ij, gamma_ji)`, the x term of the incomparability threshold.
    pub fn incomparability_x(&self) -> f64 {
        self.gamma_ij.min(self.gamma_ji)
    }

    /// `|gamma_ij - gamma_ji|`, the y term shared by both thresholds.
    pub fn spread(&self) -> f64 {
        (self.gamma_ij - self.gamma_ji).abs()
    }
}

fn validate_degree(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_nan() {
        return Err(ValidationError::not_a_number(field));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::out_of_range(field, 0.0, 1.0, value));
    }
    Ok(value)
}

/// Validates a preference parameter value: strictly positive, `+inf` allowed.
///
/// Every threshold formula divides by P, so zero and negative values are a
/// domain violation.
pub fn validate_preference(field: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_nan() {
        return Err(ValidationError::not_a_number(field));
    }
    if value <= 0.0 {
        return Err(ValidationError::not_positive(field, value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_derives_threshold_terms() {
        let pair = OutrankingPair::try_new(0.3, 0.7).unwrap();
        assert_eq!(pair.indifference_x(), 0.7);
        assert_eq!(pair.incomparability_x(), 0.3);
        assert!((pair.spread() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn pair_spread_is_symmetric() {
        let a = OutrankingPair::try_new(0.2, 0.9).unwrap();
        let b = OutrankingPair::try_new(0.9, 0.2).unwrap();
        assert_eq!(a.spread(), b.spread());
        assert_eq!(a.indifference_x(), b.indifference_x());
    }

    #[test]
    fn pair_accepts_closed_bounds() {
        assert!(OutrankingPair::try_new(0.0, 1.0).is_ok());
    }

    #[test]
    fn pair_rejects_out_of_range_degree() {
        match OutrankingPair::try_new(0.5, 1.2) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "gamma_ji");
                assert_eq!(actual, 1.2);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(OutrankingPair::try_new(-0.1, 0.5).is_err());
    }

    #[test]
    fn pair_rejects_nan() {
        assert!(matches!(
            OutrankingPair::try_new(f64::NAN, 0.5),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn preference_accepts_positive_and_infinite() {
        assert_eq!(validate_preference("p", 0.5).unwrap(), 0.5);
        assert_eq!(validate_preference("p", f64::INFINITY).unwrap(), f64::INFINITY);
    }

    #[test]
    fn preference_rejects_zero_negative_and_nan() {
        assert!(matches!(
            validate_preference("p", 0.0),
            Err(ValidationError::NotPositive { .. })
        ));
        assert!(validate_preference("p", -1.0).is_err());
        assert!(validate_preference("p", f64::NAN).is_err());
    }
}
