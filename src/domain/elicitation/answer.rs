//! Answer value object for a pairwise question.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// The decision-maker's qualitative verdict on a compared pair.
///
/// Integer codes follow the questionnaire: 0 indifference, 1 preference,
/// -1 incomparability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i8)]
pub enum Answer {
    Incomparability = -1,
    Indifference = 0,
    Preference = 1,
}

impl Answer {
    /// Creates an Answer from its questionnaire code.
    pub fn try_from_code(code: i8) -> Result<Self, ValidationError> {
        match code {
            -1 => Ok(Answer::Incomparability),
            0 => Ok(Answer::Indifference),
            1 => Ok(Answer::Preference),
            other => Err(ValidationError::invalid_format(
                "answer",
                format!("unknown answer code {}", other),
            )),
        }
    }

    /// Returns the questionnaire code.
    pub fn code(&self) -> i8 {
        *self as i8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Answer::Incomparability => "Incomparable",
            Answer::Indifference => "Indifferent",
            Answer::Preference => "Preferred",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
