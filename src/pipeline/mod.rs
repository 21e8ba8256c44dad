// Pipeline execution and monitoring module
// Orchestrates the full clip-to-priority analysis

pub mod runner;
pub mod trace;

pub use runner::{PipelineError, PriorityPipeline};
pub use trace::{read_trace_file, TraceEntry, TraceError, TraceWriter};
