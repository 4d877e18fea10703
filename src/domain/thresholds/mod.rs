//! Thresholds Module - Feasible ranges of the PROMETHEE Gamma thresholds.
//!
//! # Components
//!
//! - `Interval` - Plain mutable [min, max] value type
//! - `compute_indifference_bounds` / `compute_incomparability_bounds` - Closed-form bounds
//! - `IndifferenceRange` - Range of I for one compared pair
//! - `IncomparabilityRange` - Range of J for one compared pair
//!
//! Everything here is a pure calculator: no I/O, no errors. Keeping P
//! strictly positive and detecting contradictory P bounds is the job of the
//! elicitation tracker.

mod bounds;
mod incomparability;
mod indifference;
mod interval;

pub use bounds::{
    compute_incomparability_bounds, compute_indifference_bounds, incomparability_at,
    indifference_at, INDIFFERENCE_CEILING,
};
pub use incomparability::IncomparabilityRange;
pub use indifference::IndifferenceRange;
pub use interval::Interval;
