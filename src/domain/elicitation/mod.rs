//! Elicitation Module - Narrowing the feasible P range from pairwise answers.
//!
//! # Components
//!
//! - `Answer` - Qualitative verdict on a compared pair
//! - `PairwiseQuestion` - A compared pair with its I and J ranges
//! - `FeasiblePTracker` - Running intersection of P constraints
//! - `ThresholdSummary` - Text rendering of the current I, J, P ranges
//!
//! Which pairs to ask about, and which P constraint an answer implies, are
//! decided by the caller. The tracker only keeps every range consistent with
//! the constraints it was given.

mod answer;
mod errors;
mod question;
mod summary;
mod tracker;

pub use answer::Answer;
pub use errors::ElicitationError;
pub use question::PairwiseQuestion;
pub use summary::{ThresholdSummary, P_INFINITY_THRESHOLD};
pub use tracker::{FeasiblePTracker, ThresholdValues};
