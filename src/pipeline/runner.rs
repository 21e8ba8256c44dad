// Clip analysis pipeline
// Drives one clip through detection, transcription, fusion, and export

use thiserror::Error;

use crate::audio::AudioClip;
use crate::fusion::{FusionEngine, KeywordClassifier};
use crate::pipeline::trace::{TraceEntry, TraceWriter};
use crate::report::{ClipReport, ResultSink, SinkError};
use crate::signal::{AcousticEventSource, SignalError, TranscriptionSource};

/// Errors that can occur while analyzing a clip
///
/// The fusion core itself is total; failures come from the collaborators
/// or the sink.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Signal acquisition failed: {0}")]
    Signal(#[from] SignalError),

    #[error("Failed to record result: {0}")]
    Sink(#[from] SinkError),
}

/// End-to-end analysis of a single clip
///
/// Owns the two signal collaborators plus the fusion core. Each `analyze`
/// call is independent and carries no state over from previous clips.
pub struct PriorityPipeline<D, T> {
    detector: D,
    transcriber: T,
    classifier: KeywordClassifier,
    engine: FusionEngine,
    trace: Option<TraceWriter>,
}

impl<D, T> PriorityPipeline<D, T>
where
    D: AcousticEventSource,
    T: TranscriptionSource,
{
    /// Create a pipeline with default classifier and engine configuration
    pub fn new(detector: D, transcriber: T) -> Self {
        PriorityPipeline {
            detector,
            transcriber,
            classifier: KeywordClassifier::new(),
            engine: FusionEngine::new(),
            trace: None,
        }
    }

    /// Replace the keyword classifier (custom lexicons)
    pub fn with_classifier(mut self, classifier: KeywordClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the fusion engine (custom thresholds)
    pub fn with_engine(mut self, engine: FusionEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Attach a stage trace writer
    pub fn with_trace(mut self, trace: TraceWriter) -> Self {
        self.trace = Some(trace);
        self
    }

    /// Analyze one clip and assemble its report
    pub fn analyze(&self, clip_id: &str, clip: &AudioClip) -> Result<ClipReport, PipelineError> {
        log::info!("Analyzing clip: {}", clip_id);

        let events = self.detector.detect(clip)?;
        if events.len() > self.detector.top_k() {
            log::warn!(
                "Detector returned {} events, above its top-{} contract",
                events.len(),
                self.detector.top_k()
            );
        }
        log::info!("Detected {} sound events", events.len());
        self.trace_stage(TraceEntry::with_data(
            clip_id,
            "event_detection",
            "sound events detected",
            serde_json::json!({ "count": events.len() }),
        ));

        let transcript = self.transcriber.transcribe(clip)?;
        let speech_priority = self.classifier.classify(&transcript);
        log::info!("Speech priority: {}", speech_priority);
        self.trace_stage(TraceEntry::with_data(
            clip_id,
            "transcription",
            "transcript classified",
            serde_json::json!({
                "transcript_chars": transcript.len(),
                "speech_priority": speech_priority.as_str(),
            }),
        ));

        let decision = self.engine.fuse(&events, speech_priority);
        log::info!(
            "Final priority: {} (score {:.2})",
            decision.priority,
            decision.score
        );
        self.trace_stage(TraceEntry::with_data(
            clip_id,
            "fusion",
            "priority decided",
            serde_json::json!({
                "priority": decision.priority.as_str(),
                "score": decision.score,
                "reasons": decision.reasons.len(),
            }),
        ));

        Ok(ClipReport::new(
            clip_id,
            clip.sha256.clone(),
            events,
            transcript,
            speech_priority,
            decision,
        ))
    }

    /// Analyze one clip and record the report in the sink
    pub fn analyze_to_sink(
        &self,
        clip_id: &str,
        clip: &AudioClip,
        sink: &mut dyn ResultSink,
    ) -> Result<ClipReport, PipelineError> {
        let report = self.analyze(clip_id, clip)?;
        sink.record(&report)?;
        self.trace_stage(TraceEntry::new(clip_id, "export", "report recorded"));
        Ok(report)
    }

    /// Best-effort trace append; a trace failure never fails the analysis
    fn trace_stage(&self, entry: TraceEntry) {
        if let Some(writer) = &self.trace {
            if let Err(e) = writer.append(&entry) {
                log::warn!("Failed to write trace entry: {}", e);
            }
        }
    }
}
