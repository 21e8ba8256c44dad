// Transcription source contract
// Speech-to-text implementations feed the keyword classifier

use crate::audio::AudioClip;
use crate::signal::SignalError;

/// Source of a speech transcript for a clip
///
/// Implementations wrap the external speech-to-text model. An empty string
/// is a valid result for a silent clip and classifies as `None` speech
/// priority downstream; model failure must surface as an error instead.
pub trait TranscriptionSource {
    /// Transcribe the spoken content of a clip
    fn transcribe(&self, clip: &AudioClip) -> Result<String, SignalError>;
}
