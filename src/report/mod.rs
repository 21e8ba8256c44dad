// Reporting module
// Clip analysis records and the append-only result sink

pub mod record;
pub mod sink;

pub use record::ClipReport;
pub use sink::{CsvResultSink, ResultSink, SinkError};
