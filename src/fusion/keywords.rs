// Keyword-based speech priority classifier
// Maps transcript text to a discrete urgency level via lexicon membership

use crate::fusion::types::SpeechPriority;

/// High-priority keywords: any hit classifies the transcript as High
const HIGH_PRIORITY_KEYWORDS: &[&str] = &[
    "evacuate",
    "fire",
    "earthquake",
    "emergency",
    "immediately",
    "explosion",
    "danger",
    "help",
    "ambulance",
    "evacuation",
    "bomb",
    "critical",
];

/// Medium-priority keywords: checked only when no High keyword matched
const MEDIUM_PRIORITY_KEYWORDS: &[&str] = &[
    "warning", "caution", "attention", "incident", "alert", "notice", "hazard", "drill", "police",
];

/// Keyword sets used for transcript classification
///
/// Matching is case-insensitive substring search, not tokenized: "fired"
/// matches the keyword "fire". Keywords must be lowercase.
#[derive(Debug, Clone)]
pub struct KeywordLexicon {
    pub high: Vec<String>,
    pub medium: Vec<String>,
}

impl Default for KeywordLexicon {
    fn default() -> Self {
        KeywordLexicon {
            high: HIGH_PRIORITY_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            medium: MEDIUM_PRIORITY_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Classifies transcript text into a speech priority level
pub struct KeywordClassifier {
    lexicon: KeywordLexicon,
}

impl KeywordClassifier {
    /// Create a classifier with the default lexicons
    pub fn new() -> Self {
        KeywordClassifier {
            lexicon: KeywordLexicon::default(),
        }
    }

    /// Create a classifier with a custom lexicon
    pub fn with_lexicon(lexicon: KeywordLexicon) -> Self {
        KeywordClassifier { lexicon }
    }

    /// Classify a transcript
    ///
    /// Empty (after trimming) text yields `None`. High keywords are checked
    /// before Medium ones and the first hit wins, so a transcript containing
    /// keywords from both sets classifies as High. Only categorical presence
    /// matters; which keyword matched is not scored.
    pub fn classify(&self, text: &str) -> SpeechPriority {
        let normalized = text.trim().to_lowercase();
        if normalized.is_empty() {
            return SpeechPriority::None;
        }

        let priority = if self.lexicon.high.iter().any(|kw| normalized.contains(kw.as_str())) {
            SpeechPriority::High
        } else if self
            .lexicon
            .medium
            .iter()
            .any(|kw| normalized.contains(kw.as_str()))
        {
            SpeechPriority::Medium
        } else {
            SpeechPriority::Low
        };

        log::debug!("transcript classified as {} priority", priority);
        priority
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}
