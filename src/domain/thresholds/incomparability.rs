//! Feasible range of the incomparability threshold J for one compared pair.

use super::bounds::{compute_incomparability_bounds, incomparability_at};
use super::Interval;
use crate::domain::foundation::OutrankingPair;

/// Range of J derived from `x = min(gamma_ij, gamma_ji)`, `y = |gamma_ij - gamma_ji|`
/// and the current P bounds.
///
/// Unlike [`IndifferenceRange`](super::IndifferenceRange), Pmin feeds the lower
/// bound and Pmax the upper one. J is not clamped and may be negative.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomparabilityRange {
    x: f64,
    y: f64,
    p_max: f64,
    p_min: f64,
    bounds: Interval,
}

impl IncomparabilityRange {
    /// Creates the range. `p_max` and `p_min` must be strictly positive.
    pub fn new(x: f64, y: f64, p_max: f64, p_min: f64) -> Self {
        Self {
            x,
            y,
            p_max,
            p_min,
            bounds: compute_incomparability_bounds(x, y, p_max, p_min),
        }
    }

    /// Creates the range for a validated outranking pair.
    pub fn for_pair(pair: &OutrankingPair, p: &Interval) -> Self {
        Self::new(pair.incomparability_x(), pair.spread(), p.max(), p.min())
    }

    /// Incomparability threshold for an arbitrary candidate P.
    pub fn value_for_p(&self, p: f64) -> f64 {
        incomparability_at(self.x, self.y, p)
    }

    pub fn set_x(&mut self, value: f64) {
        self.x = value;
        self.recompute();
    }

    pub fn set_y(&mut self, value: f64) {
        self.y = value;
        self.recompute();
    }

    /// Replaces Pmax; only the upper bound depends on it.
    pub fn set_p_max(&mut self, value: f64) {
        self.p_max = value;
        self.recompute();
    }

    /// Replaces Pmin; only the lower bound depends on it.
    pub fn set_p_min(&mut self, value: f64) {
        self.p_min = value;
        self.recompute();
    }

    fn recompute(&mut self) {
        let fresh = compute_incomparability_bounds(self.x, self.y, self.p_max, self.p_min);
        self.bounds.set_min(fresh.min());
        self.bounds.set_max(fresh.max());
    }

    pub fn min(&self) -> f64 {
        self.bounds.min()
    }

    pub fn max(&self) -> f64 {
        self.bounds.max()
    }

    pub fn bounds(&self) -> Interval {
        self.bounds
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn p_max(&self) -> f64 {
        self.p_max
    }

    pub fn p_min(&self) -> f64 {
        self.p_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn scenario() -> IncomparabilityRange {
        IncomparabilityRange::new(0.3, 0.2, 4.0, 2.0)
    }

    #[test]
    fn construction_computes_unclamped_bounds() {
        let range = scenario();
        assert!((range.min() - 0.2).abs() < EPS);
        assert!((range.max() - 0.25).abs() < EPS);
    }

    #[test]
    fn set_p_max_moves_only_the_upper_bound() {
        let mut range = scenario();
        let min_before = range.min();
        range.set_p_max(8.0);
        assert!((range.max() - 0.275).abs() < EPS);
        assert_eq!(range.min(), min_before);
    }

    #[test]
    fn set_p_min_moves_only_the_lower_bound() {
        let mut range = scenario();
        let max_before = range.max();
        range.set_p_min(1.0);
        assert!((range.min() - 0.1).abs() < EPS);
        assert_eq!(range.max(), max_before);
    }

    #[test]
    fn value_for_p_matches_bounds_at_ends() {
        let range = scenario();
        assert_eq!(range.value_for_p(2.0), range.min());
        assert_eq!(range.value_for_p(4.0), range.max());
    }

    #[test]
    fn value_for_p_may_go_negative() {
        let range = IncomparabilityRange::new(0.1, 0.8, 4.0, 2.0);
        assert!((range.value_for_p(0.5) + 1.5).abs() < EPS);
        assert!(range.min() < 0.0);
    }

    #[test]
    fn set_x_and_set_y_refresh_both_bounds() {
        let mut range = scenario();
        range.set_x(0.5);
        assert!((range.min() - 0.4).abs() < EPS);
        assert!((range.max() - 0.45).abs() < EPS);

        range.set_y(0.0);
        assert_eq!(range.bounds(), Interval::point(0.5));
    }

    #[test]
    fn set_y_is_idempotent() {
        let mut range = scenario();
        range.set_y(0.6);
        let first = range.bounds();
        range.set_y(0.6);
        assert_eq!(range.bounds(), first);
    }

    #[test]
    fn for_pair_uses_min_degree_and_spread() {
        let pair = OutrankingPair::try_new(0.75, 0.25).unwrap();
        let range = IncomparabilityRange::for_pair(&pair, &Interval::new(2.0, 4.0));
        assert_eq!(range.x(), 0.25);
        assert_eq!(range.y(), 0.5);
        assert_eq!(range.p_min(), 2.0);
        assert_eq!(range.p_max(), 4.0);
        assert_eq!(range.bounds(), Interval::new(0.0, 0.125));
    }
}
