// Result sink
// Append-only CSV table of clip analyses: header on first write, one row per clip

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::report::record::ClipReport;

/// Errors that can occur while recording results
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Destination for completed clip reports
///
/// Implementations must be append-safe across repeated invocations and
/// must never reorder or rewrite previously recorded rows.
pub trait ResultSink {
    /// Record one report
    fn record(&mut self, report: &ClipReport) -> Result<(), SinkError>;
}

const CSV_HEADERS: [&str; 6] = [
    "Audio File",
    "Final Priority",
    "Score",
    "Transcript",
    "Detected Events",
    "Reasoning",
];

/// Append-only CSV result sink
///
/// The header row is written only when the target file is absent or empty;
/// every subsequent write appends exactly one row.
pub struct CsvResultSink {
    file_path: PathBuf,
}

impl CsvResultSink {
    /// Create a sink writing to the given file
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        CsvResultSink {
            file_path: file_path.into(),
        }
    }

    /// Get the output file path
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn needs_header(&self) -> bool {
        match std::fs::metadata(&self.file_path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        }
    }
}

impl ResultSink for CsvResultSink {
    fn record(&mut self, report: &ClipReport) -> Result<(), SinkError> {
        let needs_header = self.needs_header();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;

        if needs_header {
            file.write_all(csv_line(&CSV_HEADERS).as_bytes())?;
        }

        let score = format!("{:.2}", report.score);
        let events = report.formatted_events();
        let reasons = report.formatted_reasons();
        let row: [&str; 6] = [
            &report.clip,
            report.priority.as_str(),
            &score,
            &report.transcript,
            &events,
            &reasons,
        ];
        file.write_all(csv_line(&row).as_bytes())?;
        file.flush()?;

        Ok(())
    }
}

/// Render one CSV line with every field quoted and inner quotes doubled
fn csv_line<S: AsRef<str>>(fields: &[S]) -> String {
    let quoted: Vec<String> = fields
        .iter()
        .map(|f| format!("\"{}\"", f.as_ref().replace('"', "\"\"")))
        .collect();
    format!("{}\r\n", quoted.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fusion::{FusionEngine, KeywordClassifier, SoundEvent};
    use tempfile::TempDir;

    fn report_for(clip: &str, transcript: &str, events: Vec<SoundEvent>) -> ClipReport {
        let classifier = KeywordClassifier::new();
        let speech_priority = classifier.classify(transcript);
        let decision = FusionEngine::new().fuse(&events, speech_priority);
        ClipReport::new(clip, "deadbeef", events, transcript, speech_priority, decision)
    }

    #[test]
    fn test_header_written_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        let mut sink = CsvResultSink::new(&path);

        let report = report_for("a.wav", "", vec![]);
        sink.record(&report).unwrap();
        sink.record(&report).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("\"Audio File\",\"Final Priority\""));
        assert!(lines[1].starts_with("\"a.wav\""));
    }

    #[test]
    fn test_rows_append_without_rewriting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");

        {
            let mut sink = CsvResultSink::new(&path);
            sink.record(&report_for("first.wav", "", vec![])).unwrap();
        }
        let after_first = std::fs::read_to_string(&path).unwrap();

        // A fresh sink instance over the same file appends, it does not
        // truncate or re-emit the header
        {
            let mut sink = CsvResultSink::new(&path);
            sink.record(&report_for("second.wav", "", vec![])).unwrap();
        }
        let after_second = std::fs::read_to_string(&path).unwrap();

        assert!(after_second.starts_with(&after_first));
        assert_eq!(after_second.matches("Audio File").count(), 1);
        assert!(after_second.contains("second.wav"));
    }

    #[test]
    fn test_row_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        let mut sink = CsvResultSink::new(&path);

        let events = vec![SoundEvent::new("Siren", 0.9).unwrap()];
        let report = report_for("street.wav", "evacuate now", events);
        sink.record(&report).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let row = contents.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"street.wav\",\"High\",\"6.00\",\"evacuate now\",\"Siren:0.90\",\
             \"SIREN/ALARM (Siren 0.90) | Speech priority HIGH\""
        );
    }

    #[test]
    fn test_quotes_in_transcript_escaped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        let mut sink = CsvResultSink::new(&path);

        let report = report_for("q.wav", "he said \"run\", then left", vec![]);
        sink.record(&report).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"he said \"\"run\"\", then left\""));
    }

    #[test]
    fn test_header_rewritten_for_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "").unwrap();

        let mut sink = CsvResultSink::new(&path);
        sink.record(&report_for("a.wav", "", vec![])).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("\"Audio File\""));
    }
}
