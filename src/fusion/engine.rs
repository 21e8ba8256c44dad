// Multimodal priority fusion engine
// Combines acoustic event contributions with speech priority into one decision

use serde::Serialize;

use crate::fusion::rules::score_event;
use crate::fusion::types::{Priority, SoundEvent, SpeechPriority};

/// Configuration for fusion thresholds and weights
#[derive(Debug, Clone)]
pub struct FusionConfig {
    /// Confidence gate for full-weight siren/alarm contributions
    pub high_confidence: f32,

    /// Confidence gate below which an event contributes nothing
    pub medium_confidence: f32,

    /// Minimum score for a High final priority (closed bound)
    pub high_cutoff: f32,

    /// Minimum score for a Medium final priority (closed bound)
    pub medium_cutoff: f32,

    /// Score contribution of High speech priority
    pub speech_high_weight: f32,

    /// Score contribution of Medium speech priority
    pub speech_medium_weight: f32,
}

impl Default for FusionConfig {
    fn default() -> Self {
        FusionConfig {
            high_confidence: 0.20,
            medium_confidence: 0.10,
            high_cutoff: 3.5,
            medium_cutoff: 1.5,
            speech_high_weight: 3.0,
            speech_medium_weight: 1.3,
        }
    }
}

/// Outcome of fusing one clip's signals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FusionDecision {
    /// Final urgency classification
    pub priority: Priority,

    /// One justification per contribution, in evaluation order:
    /// all event reasons first (input order), then the speech reason
    pub reasons: Vec<String>,

    /// Accumulated fusion score the priority was derived from
    pub score: f32,
}

/// Rule-based fusion of acoustic events and speech priority
///
/// Stateless: every call is self-contained and identical inputs always
/// yield identical decisions. Safe to share across threads for independent
/// clips.
pub struct FusionEngine {
    config: FusionConfig,
}

impl FusionEngine {
    /// Create an engine with default thresholds and weights
    pub fn new() -> Self {
        FusionEngine {
            config: FusionConfig::default(),
        }
    }

    /// Create an engine with a custom configuration
    pub fn with_config(config: FusionConfig) -> Self {
        FusionEngine { config }
    }

    /// Fuse detected events and speech priority into a final decision
    ///
    /// The score starts at zero and only accumulates: each event is scored
    /// against the rule table in the order given, then the speech priority
    /// contributes last. Empty input is valid and yields a Low decision
    /// with an empty reason trail.
    pub fn fuse(&self, events: &[SoundEvent], speech: SpeechPriority) -> FusionDecision {
        let mut score = 0.0f32;
        let mut reasons = Vec::new();

        for event in events {
            if let Some(contribution) =
                score_event(event, self.config.high_confidence, self.config.medium_confidence)
            {
                score += contribution.weight;
                reasons.push(contribution.reason);
            }
        }

        match speech {
            SpeechPriority::High => {
                score += self.config.speech_high_weight;
                reasons.push("Speech priority HIGH".to_string());
            }
            SpeechPriority::Medium => {
                score += self.config.speech_medium_weight;
                reasons.push("Speech priority MEDIUM".to_string());
            }
            SpeechPriority::Low | SpeechPriority::None => {}
        }

        let priority = if score >= self.config.high_cutoff {
            Priority::High
        } else if score >= self.config.medium_cutoff {
            Priority::Medium
        } else {
            Priority::Low
        };

        FusionDecision {
            priority,
            reasons,
            score,
        }
    }
}

impl Default for FusionEngine {
    fn default() -> Self {
        Self::new()
    }
}
