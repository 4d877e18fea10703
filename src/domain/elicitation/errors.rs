//! Elicitation-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, ValidationError};
use crate::domain::thresholds::Interval;

/// Errors raised while narrowing the feasible P interval.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElicitationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("P constraint {constraint} is inverted")]
    InvertedConstraint { constraint: Interval },

    #[error("These answers are inconsistent: P constraint {constraint} does not meet feasible range {current}")]
    InfeasibleNarrowing { current: Interval, constraint: Interval },
}

impl ElicitationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ElicitationError::Validation(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            ElicitationError::Validation(ValidationError::NotPositive { .. }) => ErrorCode::NotPositive,
            ElicitationError::Validation(_) => ErrorCode::ValidationFailed,
            ElicitationError::QuestionNotFound(_) => ErrorCode::QuestionNotFound,
            ElicitationError::InvertedConstraint { .. } => ErrorCode::InvalidFormat,
            ElicitationError::InfeasibleNarrowing { .. } => ErrorCode::InconsistentAnswers,
        }
    }

    /// Returns true if the error stems from contradictory answers.
    pub fn is_inconsistency(&self) -> bool {
        matches!(self, ElicitationError::InfeasibleNarrowing { .. })
    }
}

impl From<ElicitationError> for DomainError {
    fn from(err: ElicitationError) -> Self {
        let base = DomainError::new(err.code(), err.to_string());
        match err {
            ElicitationError::Validation(inner) => base.with_detail("field", inner.field()),
            ElicitationError::QuestionNotFound(id) => base.with_detail("question_id", id.to_string()),
            ElicitationError::InvertedConstraint { constraint } => {
                base.with_detail("constraint", constraint.to_string())
            }
            ElicitationError::InfeasibleNarrowing { current, constraint } => base
                .with_detail("current", current.to_string())
                .with_detail("constraint", constraint.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasible_narrowing_mentions_inconsistency() {
        let err = ElicitationError::InfeasibleNarrowing {
            current: Interval::new(1.0, 2.0),
            constraint: Interval::new(3.0, 4.0),
        };
        assert!(err.to_string().starts_with("These answers are inconsistent"));
        assert!(err.is_inconsistency());
        assert_eq!(err.code(), ErrorCode::InconsistentAnswers);
    }

    #[test]
    fn validation_codes_follow_inner_error() {
        let err: ElicitationError = ValidationError::not_positive("p", 0.0).into();
        assert_eq!(err.code(), ErrorCode::NotPositive);
        assert!(!err.is_inconsistency());
    }

    #[test]
    fn converts_into_domain_error_with_details() {
        let id = QuestionId::new();
        let err: DomainError = ElicitationError::QuestionNotFound(id).into();
        assert_eq!(err.code, ErrorCode::QuestionNotFound);
        assert_eq!(err.details.get("question_id"), Some(&id.to_string()));
    }

    #[test]
    fn infeasible_narrowing_details_carry_both_intervals() {
        let err: DomainError = ElicitationError::InfeasibleNarrowing {
            current: Interval::new(1.0, 2.0),
            constraint: Interval::new(3.0, 4.0),
        }
        .into();
        assert_eq!(err.details.get("current"), Some(&"[1, 2]".to_string()));
        assert_eq!(err.details.get("constraint"), Some(&"[3, 4]".to_string()));
    }
}
