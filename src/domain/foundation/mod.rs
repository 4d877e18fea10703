//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the elicitation domain.

mod errors;
mod ids;
mod outranking;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::QuestionId;
pub use outranking::{validate_preference, OutrankingPair};
