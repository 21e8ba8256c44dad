// Acoustic event source contract
// Detector implementations rank ambient sound categories by confidence

use crate::audio::AudioClip;
use crate::fusion::SoundEvent;
use crate::signal::SignalError;

/// Default cap on the number of events a detector reports per clip
pub const DEFAULT_TOP_K: usize = 10;

/// Source of ranked ambient sound detections for a clip
///
/// Implementations wrap the external acoustic model. The contract: at most
/// `top_k()` events, sorted by confidence descending, every confidence in
/// [0, 1] (enforced by `SoundEvent` construction). Use `rank_top_events`
/// to satisfy the ordering and cap in one step.
pub trait AcousticEventSource {
    /// Detect ambient sound categories in a clip
    fn detect(&self, clip: &AudioClip) -> Result<Vec<SoundEvent>, SignalError>;

    /// Maximum number of events reported per clip
    fn top_k(&self) -> usize {
        DEFAULT_TOP_K
    }
}

/// Sort events by confidence descending and keep the top `top_k`
///
/// Ties keep their original relative order.
pub fn rank_top_events(mut events: Vec<SoundEvent>, top_k: usize) -> Vec<SoundEvent> {
    events.sort_by(|a, b| {
        b.confidence()
            .partial_cmp(&a.confidence())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    events.truncate(top_k);
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(label: &str, confidence: f32) -> SoundEvent {
        SoundEvent::new(label, confidence).unwrap()
    }

    #[test]
    fn test_rank_sorts_descending() {
        let ranked = rank_top_events(
            vec![event("Rain", 0.2), event("Siren", 0.9), event("Wind", 0.5)],
            10,
        );

        let labels: Vec<&str> = ranked.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Siren", "Wind", "Rain"]);
    }

    #[test]
    fn test_rank_truncates_to_top_k() {
        let events: Vec<SoundEvent> = (0..20)
            .map(|i| event(&format!("Category {}", i), i as f32 / 20.0))
            .collect();

        let ranked = rank_top_events(events, DEFAULT_TOP_K);
        assert_eq!(ranked.len(), DEFAULT_TOP_K);
        assert_eq!(ranked[0].confidence(), 0.95);
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let ranked = rank_top_events(
            vec![event("First", 0.5), event("Second", 0.5), event("Third", 0.9)],
            10,
        );

        let labels: Vec<&str> = ranked.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Third", "First", "Second"]);
    }
}
