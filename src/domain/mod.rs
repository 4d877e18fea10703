//! Domain layer containing the threshold computations and elicitation types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `thresholds` - Pure calculators for the I and J ranges
//! - `elicitation` - Feasible-P tracking across answered questions

pub mod elicitation;
pub mod foundation;
pub mod thresholds;
