//! Closed-form threshold bounds of PROMETHEE Gamma.
//!
//! For a compared pair with outranking degrees `gamma_ij`, `gamma_ji`:
//!
//! - indifference: `I(P) = min(x + y / P, 1)` with `x = max(gamma)`
//! - incomparability: `J(P) = x - y / P` with `x = min(gamma)`
//!
//! where `y = |gamma_ij - gamma_ji|`. Both are monotone in P, so the bounds
//! over `[Pmin, Pmax]` are reached at the ends. Callers keep P strictly
//! positive; nothing here guards the division.

use super::Interval;

/// Upper limit of the indifference threshold.
pub const INDIFFERENCE_CEILING: f64 = 1.0;

/// Pointwise indifference threshold for a candidate P.
pub fn indifference_at(x: f64, y: f64, p: f64) -> f64 {
    (x + y / p).min(INDIFFERENCE_CEILING)
}

/// Pointwise incomparability threshold for a candidate P.
pub fn incomparability_at(x: f64, y: f64, p: f64) -> f64 {
    x - y / p
}

/// Bounds of I over `[p_min, p_max]`: the lower bound is reached at `p_max`.
pub fn compute_indifference_bounds(x: f64, y: f64, p_max: f64, p_min: f64) -> Interval {
    Interval::new(indifference_at(x, y, p_max), indifference_at(x, y, p_min))
}

/// Bounds of J over `[p_min, p_max]`: the lower bound is reached at `p_min`.
pub fn compute_incomparability_bounds(x: f64, y: f64, p_max: f64, p_min: f64) -> Interval {
    Interval::new(incomparability_at(x, y, p_min), incomparability_at(x, y, p_max))
}
