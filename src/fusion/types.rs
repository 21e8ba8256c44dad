// Fusion data model
// Sound events, priority levels, and their validation rules

use serde::Serialize;
use thiserror::Error;

/// Errors raised when constructing a sound event from detector output
#[derive(Debug, Error)]
pub enum SoundEventError {
    #[error("event label is empty")]
    EmptyLabel,

    #[error("confidence {0} is not a finite number")]
    NonFiniteConfidence(f32),

    #[error("confidence {0} is outside [0, 1]")]
    ConfidenceOutOfRange(f32),
}

/// A labeled ambient sound category detected in a clip
///
/// Produced by an acoustic event source; immutable once constructed.
/// Construction validates the label and confidence so downstream scoring
/// never has to re-check them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundEvent {
    /// Detector category label (e.g., "Siren", "Vehicle horn")
    label: String,

    /// Detection confidence [0.0, 1.0]
    confidence: f32,
}

impl SoundEvent {
    /// Create a validated sound event
    ///
    /// Rejects empty/whitespace labels, NaN/infinite confidence, and
    /// confidence outside [0, 1].
    pub fn new(label: impl Into<String>, confidence: f32) -> Result<Self, SoundEventError> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(SoundEventError::EmptyLabel);
        }
        if !confidence.is_finite() {
            return Err(SoundEventError::NonFiniteConfidence(confidence));
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(SoundEventError::ConfidenceOutOfRange(confidence));
        }

        Ok(SoundEvent { label, confidence })
    }

    /// Category label as reported by the detector
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Detection confidence [0.0, 1.0]
    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

/// Urgency level derived from transcribed speech
///
/// `None` means the transcript was empty or unusable; it is a valid input
/// to fusion, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpeechPriority {
    None,
    Low,
    Medium,
    High,
}

impl SpeechPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeechPriority::None => "None",
            SpeechPriority::Low => "Low",
            SpeechPriority::Medium => "Medium",
            SpeechPriority::High => "High",
        }
    }
}

impl std::fmt::Display for SpeechPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final urgency classification for a clip
///
/// Absence of any signal resolves to `Low`; there is no "None" at this
/// level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
