// Clarion - multimodal audio priority ranking
// Module declarations

pub mod audio;
pub mod fusion;
pub mod pipeline;
pub mod report;
pub mod signal;

pub use audio::{ingest_wav, ingest_wav_file, AudioClip, AudioError};
pub use fusion::{
    FusionConfig, FusionDecision, FusionEngine, KeywordClassifier, KeywordLexicon, Priority,
    SoundEvent, SoundEventError, SpeechPriority,
};
pub use pipeline::{PipelineError, PriorityPipeline};
pub use report::{ClipReport, CsvResultSink, ResultSink, SinkError};
pub use signal::{AcousticEventSource, SignalError, TranscriptionSource, DEFAULT_TOP_K};
