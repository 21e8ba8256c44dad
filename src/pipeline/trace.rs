// Pipeline stage tracing
// Append-only JSONL audit log of each clip's passage through the stages

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during trace operations
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// A single trace entry in the analysis log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEntry {
    /// ISO 8601 timestamp of when this entry was created
    pub timestamp: String,

    /// Clip identifier the entry belongs to
    pub clip: String,

    /// Pipeline stage name (e.g., "event_detection", "fusion")
    pub stage: String,

    /// Human-readable message describing the stage outcome
    pub message: String,

    /// Optional structured data (e.g., event count, fusion score)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl TraceEntry {
    /// Create a new trace entry with current timestamp
    pub fn new(clip: impl Into<String>, stage: impl Into<String>, message: impl Into<String>) -> Self {
        TraceEntry {
            timestamp: Utc::now().to_rfc3339(),
            clip: clip.into(),
            stage: stage.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Create a trace entry with structured data
    pub fn with_data(
        clip: impl Into<String>,
        stage: impl Into<String>,
        message: impl Into<String>,
        data: serde_json::Value,
    ) -> Self {
        TraceEntry {
            data: Some(data),
            ..TraceEntry::new(clip, stage, message)
        }
    }
}

/// Append-only JSONL trace writer
pub struct TraceWriter {
    file_path: PathBuf,
}

impl TraceWriter {
    /// Create a trace writer for a specific file
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        TraceWriter {
            file_path: file_path.into(),
        }
    }

    /// Append a trace entry, creating the file if needed
    pub fn append(&self, entry: &TraceEntry) -> Result<(), TraceError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)?;

        let json = serde_json::to_string(entry)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.flush()?;

        Ok(())
    }

    /// Get the trace file path
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

/// Read trace entries back from a JSONL file
pub fn read_trace_file(path: &Path) -> Result<Vec<TraceEntry>, TraceError> {
    let contents = std::fs::read_to_string(path)?;
    let mut entries = Vec::new();

    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        entries.push(serde_json::from_str(line)?);
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_trace_entry_creation() {
        let entry = TraceEntry::new("clip.wav", "fusion", "decision made");

        assert_eq!(entry.clip, "clip.wav");
        assert_eq!(entry.stage, "fusion");
        assert_eq!(entry.message, "decision made");
        assert!(entry.data.is_none());
    }

    #[test]
    fn test_trace_entry_with_data() {
        let entry = TraceEntry::with_data(
            "clip.wav",
            "event_detection",
            "events detected",
            serde_json::json!({ "count": 7 }),
        );

        assert_eq!(entry.data.unwrap()["count"], 7);
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trace.jsonl");
        let writer = TraceWriter::new(&path);

        writer
            .append(&TraceEntry::new("a.wav", "event_detection", "start"))
            .unwrap();
        writer
            .append(&TraceEntry::new("a.wav", "fusion", "done"))
            .unwrap();

        let entries = read_trace_file(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].stage, "event_detection");
        assert_eq!(entries[1].stage, "fusion");
    }

    #[test]
    fn test_entries_accumulate_across_writers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trace.jsonl");

        TraceWriter::new(&path)
            .append(&TraceEntry::new("a.wav", "fusion", "first"))
            .unwrap();
        TraceWriter::new(&path)
            .append(&TraceEntry::new("b.wav", "fusion", "second"))
            .unwrap();

        let entries = read_trace_file(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].clip, "a.wav");
        assert_eq!(entries[1].clip, "b.wav");
    }
}
