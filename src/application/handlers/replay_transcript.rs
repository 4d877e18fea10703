//! ReplayTranscriptHandler - Replays a recorded elicitation session.
//!
//! Each entry is asked, then its answer recorded with the P constraint it
//! implies. An entry that contradicts the earlier answers is reported and its
//! question dropped, so the session continues with the previous feasible range.

use tracing::{debug, info};

use crate::config::ElicitationConfig;
use crate::domain::elicitation::{Answer, ElicitationError, FeasiblePTracker, ThresholdSummary};
use crate::domain::foundation::{DomainError, OutrankingPair, QuestionId};

use crate::application::Transcript;

/// Command to replay a transcript.
#[derive(Debug, Clone)]
pub struct ReplayTranscriptCommand {
    pub transcript: Transcript,
}

/// An answer that was discarded because it contradicts earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedAnswer {
    /// Position of the entry in the transcript.
    pub index: usize,
    pub left: String,
    pub right: String,
    pub reason: String,
}

/// Result of a replay.
#[derive(Debug, Clone)]
pub struct ReplayTranscriptResult {
    pub tracker: FeasiblePTracker,
    pub accepted: Vec<QuestionId>,
    pub rejected: Vec<RejectedAnswer>,
}

impl ReplayTranscriptResult {
    pub fn summary(&self) -> ThresholdSummary {
        self.tracker.summary()
    }
}

/// Handler for replaying transcripts.
pub struct ReplayTranscriptHandler {
    config: ElicitationConfig,
}

impl ReplayTranscriptHandler {
    pub fn new(config: ElicitationConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, cmd: ReplayTranscriptCommand) -> Result<ReplayTranscriptResult, DomainError> {
        let transcript = cmd.transcript;

        // 1. Start from the transcript's bounds, else the configured ones
        let mut config = self.config.clone();
        if let Some(initial) = transcript.initial_p {
            config.initial_p_min = initial.min;
            config.initial_p_max = initial.max;
        }
        let mut tracker = FeasiblePTracker::from_config(&config)?;

        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        // 2. Ask and answer each entry in order
        for (index, entry) in transcript.entries.into_iter().enumerate() {
            let gammas = OutrankingPair::try_new(entry.gamma_ij, entry.gamma_ji)
                .map_err(|e| DomainError::from(e).with_detail("entry", index.to_string()))?;
            let answer = Answer::try_from_code(entry.answer)
                .map_err(|e| DomainError::from(e).with_detail("entry", index.to_string()))?;

            let id = tracker.ask(entry.left.clone(), entry.right.clone(), gammas);

            match tracker.record_answer(id, answer, entry.p_constraint.to_interval()) {
                Ok(p) => {
                    debug!(index, p_min = p.min(), p_max = p.max(), "Answer accepted");
                    accepted.push(id);
                }
                Err(err @ ElicitationError::InfeasibleNarrowing { .. }) => {
                    tracker
                        .discard(id)
                        .map_err(|e| DomainError::from(e).with_detail("entry", index.to_string()))?;
                    rejected.push(RejectedAnswer {
                        index,
                        left: entry.left,
                        right: entry.right,
                        reason: err.to_string(),
                    });
                }
                Err(err) => {
                    return Err(DomainError::from(err).with_detail("entry", index.to_string()));
                }
            }
        }

        info!(
            accepted = accepted.len(),
            rejected = rejected.len(),
            p_range = %tracker.p_range(),
            "Transcript replayed"
        );

        Ok(ReplayTranscriptResult {
            tracker,
            accepted,
            rejected,
        })
    }
}
