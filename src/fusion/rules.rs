// Acoustic event scoring rules
// Ordered, data-driven table mapping sound categories to score contributions

use crate::fusion::types::SoundEvent;

/// How a rule converts detection confidence into a score contribution
#[derive(Debug, Clone, Copy)]
pub enum RuleWeight {
    /// Two confidence gates: full weight above the high gate, reduced
    /// weight above the medium gate, nothing below
    Graded { strong: f32, weak: f32 },

    /// Single confidence gate: fixed weight above the medium gate
    Flat(f32),
}

/// A single scoring rule: category patterns plus a contribution policy
#[derive(Debug, Clone, Copy)]
pub struct EventRule {
    /// Short tag embedded in the reason string (e.g., "SIREN/ALARM")
    pub tag: &'static str,

    /// Lowercase substrings matched against the event label
    pub patterns: &'static [&'static str],

    /// Contribution policy for a matched label
    pub weight: RuleWeight,
}

/// Scoring rules in evaluation order
///
/// The first rule whose pattern matches the label claims the event, even
/// when the confidence falls below every gate: a claimed label is never
/// offered to later rules.
pub const EVENT_RULES: &[EventRule] = &[
    EventRule {
        tag: "SIREN/ALARM",
        patterns: &["siren", "alarm", "police car", "ambulance"],
        weight: RuleWeight::Graded {
            strong: 3.0,
            weak: 1.2,
        },
    },
    EventRule {
        tag: "ANNOUNCEMENT",
        patterns: &["announcement", "loudspeaker"],
        weight: RuleWeight::Flat(1.0),
    },
    EventRule {
        tag: "SPEECH ALERT",
        patterns: &["megaphone", "yell"],
        weight: RuleWeight::Flat(0.5),
    },
];

/// A scored contribution from a single event
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    /// Amount added to the fusion score
    pub weight: f32,

    /// Human-readable justification, embedding the label and confidence
    pub reason: String,
}

/// Score one event against the rule table
///
/// Label matching is case-insensitive substring search. Confidence gates
/// are strict: a confidence exactly equal to a gate does not qualify.
/// Returns `None` when no rule matches or the claiming rule's gates are
/// not cleared.
pub fn score_event(event: &SoundEvent, high_gate: f32, medium_gate: f32) -> Option<Contribution> {
    let label = event.label().to_lowercase();
    let confidence = event.confidence();

    let rule = EVENT_RULES
        .iter()
        .find(|rule| rule.patterns.iter().any(|p| label.contains(p)))?;

    match rule.weight {
        RuleWeight::Graded { strong, weak } => {
            if confidence > high_gate {
                Some(Contribution {
                    weight: strong,
                    reason: format!("{} ({} {:.2})", rule.tag, event.label(), confidence),
                })
            } else if confidence > medium_gate {
                Some(Contribution {
                    weight: weak,
                    reason: format!("(weak) {} ({} {:.2})", rule.tag, event.label(), confidence),
                })
            } else {
                None
            }
        }
        RuleWeight::Flat(weight) => {
            if confidence > medium_gate {
                Some(Contribution {
                    weight,
                    reason: format!("{} ({} {:.2})", rule.tag, event.label(), confidence),
                })
            } else {
                None
            }
        }
    }
}
