//! Feasible-P tracker - running intersection of the P constraints.
//!
//! Each answered question implies an interval of admissible P values. The
//! tracker intersects it with everything learned so far and pushes the new
//! `(Pmin, Pmax)` into the I and J ranges of every live question. An empty
//! intersection means two answers contradict each other; the tracker refuses
//! it and keeps its previous state.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ElicitationConfig;
use crate::domain::foundation::{validate_preference, OutrankingPair, QuestionId};
use crate::domain::thresholds::Interval;

use super::{Answer, ElicitationError, PairwiseQuestion, ThresholdSummary};

/// I and J of one question evaluated at a candidate P.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdValues {
    pub question_id: QuestionId,
    pub indifference: f64,
    pub incomparability: f64,
}

/// Owner of the aggregate P interval and of the questions asked so far.
#[derive(Debug, Clone)]
pub struct FeasiblePTracker {
    initial: Interval,
    p_range: Interval,
    questions: Vec<PairwiseQuestion>,
    infinity_threshold: f64,
}

impl FeasiblePTracker {
    /// Creates a tracker starting from `initial` P bounds.
    ///
    /// # Errors
    /// - `p_min` not strictly positive or NaN
    /// - `p_min > p_max`
    pub fn new(initial: Interval) -> Result<Self, ElicitationError> {
        validate_p_interval(&initial)?;
        Ok(Self {
            initial,
            p_range: initial,
            questions: Vec::new(),
            infinity_threshold: super::P_INFINITY_THRESHOLD,
        })
    }

    /// Creates a tracker from the elicitation configuration section.
    pub fn from_config(config: &ElicitationConfig) -> Result<Self, ElicitationError> {
        let mut tracker = Self::new(config.initial_p_interval())?;
        tracker.infinity_threshold = config.p_infinity_threshold;
        Ok(tracker)
    }

    /// Current feasible P interval.
    pub fn p_range(&self) -> Interval {
        self.p_range
    }

    pub fn questions(&self) -> &[PairwiseQuestion] {
        &self.questions
    }

    pub fn question(&self, id: QuestionId) -> Option<&PairwiseQuestion> {
        self.questions.iter().find(|q| q.id() == id)
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    /// Registers a new question whose ranges start from the current P bounds.
    pub fn ask(
        &mut self,
        left: impl Into<String>,
        right: impl Into<String>,
        gammas: OutrankingPair,
    ) -> QuestionId {
        let question = PairwiseQuestion::new(left, right, gammas, &self.p_range);
        let id = question.id();
        debug!(
            question_id = %id,
            left = question.left(),
            right = question.right(),
            gamma_ij = gammas.gamma_ij(),
            gamma_ji = gammas.gamma_ji(),
            "Question asked"
        );
        self.questions.push(question);
        id
    }

    /// Intersects the running P interval with `constraint`.
    ///
    /// On success every live question's ranges reflect the new bounds. On
    /// failure nothing changes.
    pub fn narrow(&mut self, constraint: Interval) -> Result<Interval, ElicitationError> {
        validate_p_interval(&constraint)?;

        let narrowed = match self.p_range.intersect(&constraint) {
            Some(narrowed) => narrowed,
            None => {
                warn!(
                    current = %self.p_range,
                    constraint = %constraint,
                    "Rejected contradictory P constraint"
                );
                return Err(ElicitationError::InfeasibleNarrowing {
                    current: self.p_range,
                    constraint,
                });
            }
        };

        self.p_range = narrowed;
        for question in &mut self.questions {
            question.apply_p_bounds(&narrowed);
        }

        debug!(
            p_min = narrowed.min(),
            p_max = narrowed.max(),
            width = narrowed.width(),
            questions = self.questions.len(),
            "Narrowed feasible P range"
        );
        Ok(narrowed)
    }

    /// Records an answer and the P constraint it implies.
    ///
    /// The answer is only stored when the narrowing succeeds.
    pub fn record_answer(
        &mut self,
        id: QuestionId,
        answer: Answer,
        constraint: Interval,
    ) -> Result<Interval, ElicitationError> {
        let index = self
            .questions
            .iter()
            .position(|q| q.id() == id)
            .ok_or(ElicitationError::QuestionNotFound(id))?;

        let narrowed = self.narrow(constraint)?;
        self.questions[index].record(answer);
        Ok(narrowed)
    }

    /// Removes a question, typically one whose answer was rejected, so later
    /// narrowing and evaluation no longer see it.
    pub fn discard(&mut self, id: QuestionId) -> Result<PairwiseQuestion, ElicitationError> {
        let index = self
            .questions
            .iter()
            .position(|q| q.id() == id)
            .ok_or(ElicitationError::QuestionNotFound(id))?;

        let question = self.questions.remove(index);
        debug!(question_id = %id, "Question discarded");
        Ok(question)
    }

    /// Returns true if a candidate P lies within the feasible interval.
    pub fn accepts(&self, p: f64) -> bool {
        self.p_range.contains(p)
    }

    /// Evaluates I and J of every question at a candidate P.
    pub fn thresholds_at(&self, p: f64) -> Result<Vec<ThresholdValues>, ElicitationError> {
        let p = validate_preference("p", p)?;
        Ok(self
            .questions
            .iter()
            .map(|q| ThresholdValues {
                question_id: q.id(),
                indifference: q.indifference().value_for_p(p),
                incomparability: q.incomparability().value_for_p(p),
            })
            .collect())
    }

    /// Forgets all questions and restores the initial P bounds.
    pub fn reset(&mut self) {
        debug!(discarded = self.questions.len(), "Elicitation reset");
        self.questions.clear();
        self.p_range = self.initial;
    }

    /// Aggregated ranges: hull of the I and J ranges of answered questions.
    pub fn summary(&self) -> ThresholdSummary {
        let mut answered = self.questions.iter().filter(|q| q.is_answered());

        let (indifference, incomparability) = match answered.next() {
            None => (Interval::UNIT, Interval::UNIT),
            Some(first) => answered.fold(
                (first.indifference().bounds(), first.incomparability().bounds()),
                |(i, j), q| {
                    (
                        i.hull(&q.indifference().bounds()),
                        j.hull(&q.incomparability().bounds()),
                    )
                },
            ),
        };

        ThresholdSummary::new(indifference, incomparability, self.p_range)
            .with_infinity_threshold(self.infinity_threshold)
    }
}

fn validate_p_interval(p: &Interval) -> Result<(), ElicitationError> {
    validate_preference("p_min", p.min())?;
    validate_preference("p_max", p.max())?;
    if p.is_inverted() {
        return Err(ElicitationError::InvertedConstraint { constraint: *p });
    }
    Ok(())
}
