//! Application layer - Commands and Handlers.
//!
//! This layer drives the domain from recorded input. It owns no state of its
//! own between calls.

pub mod handlers;
mod transcript;

pub use handlers::{
    RejectedAnswer, ReplayTranscriptCommand, ReplayTranscriptHandler, ReplayTranscriptResult,
};
pub use transcript::{PBounds, Transcript, TranscriptEntry};
