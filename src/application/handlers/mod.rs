//! Command handlers.

mod replay_transcript;

pub use replay_transcript::{
    RejectedAnswer, ReplayTranscriptCommand, ReplayTranscriptHandler, ReplayTranscriptResult,
};
