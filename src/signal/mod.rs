// Signal acquisition module
// Contracts for the external detection and transcription collaborators

pub mod detector;
pub mod transcriber;

use thiserror::Error;

use crate::audio::AudioError;

/// Errors surfaced by signal sources
///
/// A source that cannot read the clip must report it; an empty result is
/// never used to paper over a failure.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("Event detection failed: {0}")]
    Detection(String),

    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),
}

pub use detector::{rank_top_events, AcousticEventSource, DEFAULT_TOP_K};
pub use transcriber::TranscriptionSource;
