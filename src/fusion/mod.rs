// Priority fusion module
// Keyword classification, event scoring rules, and the fusion engine

pub mod engine;
pub mod keywords;
pub mod rules;
pub mod types;

pub use engine::{FusionConfig, FusionDecision, FusionEngine};
pub use keywords::{KeywordClassifier, KeywordLexicon};
pub use rules::{score_event, Contribution, EventRule, RuleWeight, EVENT_RULES};
pub use types::{Priority, SoundEvent, SoundEventError, SpeechPriority};
