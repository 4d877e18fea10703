//! A pairwise question together with the threshold ranges it induces.

use crate::domain::foundation::{OutrankingPair, QuestionId};
use crate::domain::thresholds::{IncomparabilityRange, IndifferenceRange, Interval};

use super::Answer;

/// One compared pair of alternatives.
///
/// The question owns its I and J ranges; only the tracker pushes new P
/// bounds into them.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseQuestion {
    id: QuestionId,
    left: String,
    right: String,
    answer: Option<Answer>,
    indifference: IndifferenceRange,
    incomparability: IncomparabilityRange,
}

impl PairwiseQuestion {
    /// Creates an unanswered question seeded with the current P bounds.
    pub fn new(
        left: impl Into<String>,
        right: impl Into<String>,
        gammas: OutrankingPair,
        p: &Interval,
    ) -> Self {
        Self {
            id: QuestionId::new(),
            left: left.into(),
            right: right.into(),
            answer: None,
            indifference: IndifferenceRange::for_pair(&gammas, p),
            incomparability: IncomparabilityRange::for_pair(&gammas, p),
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn answer(&self) -> Option<Answer> {
        self.answer
    }

    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    pub fn indifference(&self) -> &IndifferenceRange {
        &self.indifference
    }

    pub fn incomparability(&self) -> &IncomparabilityRange {
        &self.incomparability
    }

    pub(crate) fn record(&mut self, answer: Answer) {
        self.answer = Some(answer);
    }

    /// Pushes new P bounds into both ranges.
    pub(crate) fn apply_p_bounds(&mut self, p: &Interval) {
        self.indifference.set_p_max(p.max());
        self.indifference.set_p_min(p.min());
        self.incomparability.set_p_max(p.max());
        self.incomparability.set_p_min(p.min());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> PairwiseQuestion {
        let gammas = OutrankingPair::try_new(0.6, 0.2).unwrap();
        PairwiseQuestion::new("a1", "a2", gammas, &Interval::new(1.0, 4.0))
    }

    #[test]
    fn new_question_is_unanswered() {
        let q = question();
        assert!(!q.is_answered());
        assert_eq!(q.left(), "a1");
        assert_eq!(q.right(), "a2");
    }

    #[test]
    fn new_question_seeds_ranges_from_p() {
        let q = question();
        assert_eq!(q.indifference().p_min(), 1.0);
        assert_eq!(q.incomparability().p_max(), 4.0);
        assert_eq!(q.indifference().x(), 0.6);
        assert_eq!(q.incomparability().x(), 0.2);
    }

    #[test]
    fn apply_p_bounds_refreshes_both_ranges() {
        let mut q = question();
        let p = Interval::new(2.0, 2.0);
        q.apply_p_bounds(&p);

        assert_eq!(q.indifference().bounds(), Interval::point(q.indifference().value_for_p(2.0)));
        assert_eq!(
            q.incomparability().bounds(),
            Interval::point(q.incomparability().value_for_p(2.0))
        );
    }

    #[test]
    fn record_stores_answer() {
        let mut q = question();
        q.record(Answer::Preference);
        assert_eq!(q.answer(), Some(Answer::Preference));
    }
}
