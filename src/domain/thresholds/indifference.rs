//! Feasible range of the indifference threshold I for one compared pair.

use super::bounds::{compute_indifference_bounds, indifference_at};
use super::Interval;
use crate::domain::foundation::OutrankingPair;

/// Range of I derived from `x = max(gamma_ij, gamma_ji)`, `y = |gamma_ij - gamma_ji|`
/// and the current P bounds.
///
/// Every mutator refreshes the stored bounds before returning.
#[derive(Debug, Clone, PartialEq)]
pub struct IndifferenceRange {
    x: f64,
    y: f64,
    p_max: f64,
    p_min: f64,
    bounds: Interval,
}

impl IndifferenceRange {
    /// Creates the range. `p_max` and `p_min` must be strictly positive.
    pub fn new(x: f64, y: f64, p_max: f64, p_min: f64) -> Self {
        Self {
            x,
            y,
            p_max,
            p_min,
            bounds: compute_indifference_bounds(x, y, p_max, p_min),
        }
    }

    /// Creates the range for a validated outranking pair.
    pub fn for_pair(pair: &OutrankingPair, p: &Interval) -> Self {
        Self::new(pair.indifference_x(), pair.spread(), p.max(), p.min())
    }

    /// Indifference threshold for an arbitrary candidate P.
    pub fn value_for_p(&self, p: f64) -> f64 {
        indifference_at(self.x, self.y, p)
    }

    pub fn set_x(&mut self, value: f64) {
        self.x = value;
        self.recompute();
    }

    pub fn set_y(&mut self, value: f64) {
        self.y = value;
        self.recompute();
    }

    /// Replaces Pmax; only the lower bound depends on it.
    pub fn set_p_max(&mut self, value: f64) {
        self.p_max = value;
        self.recompute();
    }

    /// Replaces Pmin; only the upper bound depends on it.
    pub fn set_p_min(&mut self, value: f64) {
        self.p_min = value;
        self.recompute();
    }

    fn recompute(&mut self) {
        let fresh = compute_indifference_bounds(self.x, self.y, self.p_max, self.p_min);
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

    #[test]
    fn construction_clamps_both_bounds() {
        let range = IndifferenceRange::new(0.9, 0.5, 1.0, 0.5);
        assert_eq!(range.min(), 1.0);
        assert_eq!(range.max(), 1.0);
    }

    #[test]
    fn value_for_p_between_bounds() {
        let range = IndifferenceRange::new(0.4, 0.1, 2.0, 1.0);
        let value = range.value_for_p(1.5);
        assert!((value - 0.466_666_666_666_666_7).abs() < 1e-9);
        assert!(value > range.min() && value < range.max());
    }

    #[test]
    fn value_for_p_outside_range_is_still_evaluated() {
        let range = IndifferenceRange::new(0.4, 0.1, 2.0, 1.0);
        assert!((range.value_for_p(10.0) - 0.41).abs() < EPS);
        assert_eq!(range.value_for_p(0.01), 1.0);
    }

    #[test]
    fn value_for_p_matches_bounds_at_ends() {
        let range = IndifferenceRange::new(0.35, 0.2, 3.0, 1.25);
        assert_eq!(range.value_for_p(3.0), range.min());
        assert_eq!(range.value_for_p(1.25), range.max());
    }

    #[test]
    fn set_p_max_moves_only_the_lower_bound() {
        let mut range = IndifferenceRange::new(0.4, 0.1, 2.0, 1.0);
        let max_before = range.max();
        range.set_p_max(4.0);
        assert!((range.min() - 0.425).abs() < EPS);
        assert_eq!(range.max(), max_before);
    }

    #[test]
    fn set_p_min_moves_only_the_upper_bound() {
        let mut range = IndifferenceRange::new(0.4, 0.1, 2.0, 1.0);
        let min_before = range.min();
        range.set_p_min(0.5);
        assert!((range.max() - 0.6).abs() < EPS);
        assert_eq!(range.min(), min_before);
    }

    #[test]
    fn set_x_refreshes_both_bounds() {
        let mut range = IndifferenceRange::new(0.4, 0.1, 2.0, 1.0);
        range.set_x(0.2);
        assert!((range.min() - 0.25).abs() < EPS);
        assert!((range.max() - 0.3).abs() < EPS);
        assert_eq!(range.x(), 0.2);
    }

    #[test]
    fn set_y_refreshes_both_bounds() {
        let mut range = IndifferenceRange::new(0.4, 0.1, 2.0, 1.0);
        range.set_y(0.0);
        assert_eq!(range.bounds(), Interval::point(0.4));
    }

    #[test]
    fn set_x_is_idempotent() {
        let mut range = IndifferenceRange::new(0.4, 0.1, 2.0, 1.0);
        range.set_x(0.55);
        let first = range.bounds();
        range.set_x(0.55);
        assert_eq!(range.bounds(), first);
    }

    #[test]
    fn for_pair_uses_max_degree_and_spread() {
        let pair = OutrankingPair::try_new(0.2, 0.5).unwrap();
        let range = IndifferenceRange::for_pair(&pair, &Interval::new(1.0, 3.0));
        assert_eq!(range.x(), 0.5);
        assert!((range.y() - 0.3).abs() < EPS);
        assert_eq!(range.p_min(), 1.0);
        assert_eq!(range.p_max(), 3.0);
        assert!((range.max() - 0.8).abs() < EPS);
    }

    #[test]
    fn unbounded_p_max_gives_x_as_lower_bound() {
        let range = IndifferenceRange::new(0.6, 0.2, f64::INFINITY, 1.0);
        assert_eq!(range.min(), 0.6);
    }
}
