//! Textual summary of the elicited thresholds.

use std::fmt;

use crate::domain::thresholds::Interval;

/// P upper bounds above this value are shown as "infinity".
pub const P_INFINITY_THRESHOLD: f64 = 100.0;

/// Current feasible ranges of I, J and P, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSummary {
    pub indifference: Interval,
    pub incomparability: Interval,
    pub preference: Interval,
    pub infinity_threshold: f64,
}

impl ThresholdSummary {
    pub fn new(indifference: Interval, incomparability: Interval, preference: Interval) -> Self {
        Self {
            indifference,
            incomparability,
            preference,
            infinity_threshold: P_INFINITY_THRESHOLD,
        }
    }

    /// Summary shown before any question is answered.
    pub fn initial() -> Self {
        Self::new(Interval::UNIT, Interval::UNIT, Interval::new(1.0, f64::INFINITY))
    }

    pub fn with_infinity_threshold(mut self, threshold: f64) -> Self {
        self.infinity_threshold = threshold;
        self
    }

    /// `I = <min>` or `I = <min> - <max>`.
    pub fn indifference_line(&self) -> String {
        threshold_line("I", &self.indifference)
    }

    /// `J = <min>` or `J = <min> - <max>`.
    pub fn incomparability_line(&self) -> String {
        threshold_line("J", &self.incomparability)
    }

    /// Like the other lines, with values above the threshold shown as infinity.
    pub fn preference_line(&self) -> String {
        let p = &self.preference;
        if p.is_degenerate() {
            return format!("P = {}", self.preference_value(p.min()));
        }
        format!(
            "P = {} - {}",
            format_value(p.min()),
            self.preference_value(p.max())
        )
    }

    fn preference_value(&self, value: f64) -> String {
        if value > self.infinity_threshold {
            "infinity".to_string()
        } else {
            format_value(value)
        }
    }
}

impl Default for ThresholdSummary {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for ThresholdSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.indifference_line())?;
        writeln!(f, "{}", self.incomparability_line())?;
        write!(f, "{}", self.preference_line())
    }
}

fn threshold_line(name: &str, range: &Interval) -> String {
    if range.is_degenerate() {
        format!("{} = {}", name, format_value(range.min()))
    } else {
        format!("{} = {} - {}", name, format_value(range.min()), format_value(range.max()))
    }
}

// Shortest round-trip form, keeping ".0" on whole numbers.
fn format_value(value: f64) -> String {
    format!("{:?}", value)
}
