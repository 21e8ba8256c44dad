// Clip analysis record
// Aggregates every signal and decision for one clip into an auditable report

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::fusion::{FusionDecision, Priority, SoundEvent, SpeechPriority};

/// Complete analysis result for a single clip
#[derive(Debug, Clone, Serialize)]
pub struct ClipReport {
    /// Unique identifier for this analysis
    pub id: Uuid,

    /// Caller-supplied clip identifier (typically the file path)
    pub clip: String,

    /// When the analysis ran
    pub analyzed_at: DateTime<Utc>,

    /// SHA-256 of the raw clip bytes, hex encoded
    pub audio_sha256: String,

    /// Detected ambient sound events, as ranked by the detector
    pub events: Vec<SoundEvent>,

    /// Transcript of the spoken content (possibly empty)
    pub transcript: String,

    /// Priority derived from the transcript alone
    pub speech_priority: SpeechPriority,

    /// Final fused priority
    pub priority: Priority,

    /// Justification trail, one entry per scoring contribution
    pub reasons: Vec<String>,

    /// Accumulated fusion score
    pub score: f32,
}

impl ClipReport {
    /// Assemble a report from the pipeline's intermediate results
    pub fn new(
        clip: impl Into<String>,
        audio_sha256: impl Into<String>,
        events: Vec<SoundEvent>,
        transcript: impl Into<String>,
        speech_priority: SpeechPriority,
        decision: FusionDecision,
    ) -> Self {
        ClipReport {
            id: Uuid::new_v4(),
            clip: clip.into(),
            analyzed_at: Utc::now(),
            audio_sha256: audio_sha256.into(),
            events,
            transcript: transcript.into(),
            speech_priority,
            priority: decision.priority,
            reasons: decision.reasons,
            score: decision.score,
        }
    }

    /// Detected events as "Label:0.90 | Label:0.45"
    pub fn formatted_events(&self) -> String {
        self.events
            .iter()
            .map(|e| format!("{}:{:.2}", e.label(), e.confidence()))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Reason trail as "REASON | REASON"
    pub fn formatted_reasons(&self) -> String {
        self.reasons.join(" | ")
    }
}
