//! Recorded elicitation session, as read from JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::thresholds::Interval;

/// P bounds as written in a transcript; a missing `max` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PBounds {
    pub min: f64,
    #[serde(default)]
    pub max: Option<f64>,
}

impl PBounds {
    pub fn to_interval(&self) -> Interval {
        Interval::new(self.min, self.max.unwrap_or(f64::INFINITY))
    }
}

/// One answered question of a recorded session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub left: String,
    pub right: String,
    pub gamma_ij: f64,
    pub gamma_ji: f64,
    /// Questionnaire code: 0 indifference, 1 preference, -1 incomparability.
    pub answer: i8,
    /// P interval implied by the answer.
    pub p_constraint: PBounds,
}

/// A recorded session: optional starting P bounds and the answers in order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub initial_p: Option<PBounds>,
    #[serde(default)]
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| {
            DomainError::new(ErrorCode::InvalidFormat, format!("Malformed transcript: {}", e))
                .with_detail("line", e.line().to_string())
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let json = fs::read_to_string(path).map_err(|e| {
            DomainError::new(
                ErrorCode::TranscriptUnreadable,
                format!("Cannot read transcript: {}", e),
            )
            .with_detail("path", path.display().to_string())
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_transcript() {
        let transcript = Transcript::from_json(r#"{ "entries": [] }"#).unwrap();
        assert!(transcript.entries.is_empty());
        assert_eq!(transcript.initial_p, None);
    }

    #[test]
    fn parses_entry_with_unbounded_constraint() {
        let json = r#"{
            "initial_p": { "min": 1.0, "max": 50.0 },
            "entries": [{
                "left": "a1", "right": "a2",
                "gamma_ij": 0.6, "gamma_ji": 0.2,
                "answer": 1,
                "p_constraint": { "min": 2.0, "max": null }
            }]
        }"#;
        let transcript = Transcript::from_json(json).unwrap();
        let entry = &transcript.entries[0];
        assert_eq!(entry.answer, 1);
        assert_eq!(entry.p_constraint.to_interval(), Interval::new(2.0, f64::INFINITY));
        assert_eq!(
            transcript.initial_p.unwrap().to_interval(),
            Interval::new(1.0, 50.0)
        );
    }

    #[test]
    fn missing_max_defaults_to_unbounded() {
        let bounds: PBounds = serde_json::from_str(r#"{ "min": 3.0 }"#).unwrap();
        assert_eq!(bounds.max, None);
    }

    #[test]
    fn malformed_json_is_invalid_format() {
        let err = Transcript::from_json("{ entries: ").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.details.contains_key("line"));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = Transcript::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::TranscriptUnreadable);
        assert_eq!(
            err.details.get("path"),
            Some(&"/definitely/not/here.json".to_string())
        );
    }
}
