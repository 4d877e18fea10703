//! Interval value type - a mutable closed range [min, max].

use std::fmt;

/// A closed numeric interval.
///
/// Bounds are stored verbatim: an inverted interval (`min > max`) is
/// representable and reported by [`Interval::is_inverted`]. Validation belongs
/// to whoever derives the bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    /// The unit interval [0, 1].
    pub const UNIT: Self = Self { min: 0.0, max: 1.0 };

    /// Creates an interval without validating the bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// An interval holding a single value.
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Replaces the lower bound. No check against the upper bound.
    pub fn set_min(&mut self, value: f64) {
        self.min = value;
    }

    /// Replaces the upper bound. No check against the lower bound.
    pub fn set_max(&mut self, value: f64) {
        self.max = value;
    }

    /// Returns `max - min`; negative for an inverted interval.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if the value lies within the closed bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns true if `min > max`.
    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    /// Returns true if both bounds are equal.
    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Intersects two intervals, returning `None` when the result is empty.
    pub fn intersect(&self, other: &Interval) -> Option<Interval> {
        let min = self.min.max(other.min);
        let max = self.max.min(other.max);
        if min > max {
            None
        } else {
            Some(Interval::new(min, max))
        }
    }

    /// Smallest interval covering both.
    pub fn hull(&self, other: &Interval) -> Interval {
        Interval::new(self.min.min(other.min), self.max.max(other.max))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
