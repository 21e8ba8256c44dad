// Audio ingestion module
// Decodes WAV clips to mono f32 samples and fingerprints the input bytes

use hound::{SampleFormat, WavReader};
use sha2::{Digest, Sha256};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("Failed to read WAV data: {0}")]
    WavReadError(#[from] hound::Error),

    #[error("Failed to read audio file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("Audio clip contains no samples")]
    EmptyClip,
}

/// A decoded audio clip, ready for the detection and transcription sources
#[derive(Debug, Clone)]
pub struct AudioClip {
    /// Mono samples normalized to f32 in range [-1.0, 1.0]
    pub samples: Vec<f32>,

    /// Sample rate in Hz (e.g., 16000, 44100)
    pub sample_rate: u32,

    /// Duration in milliseconds
    pub duration_ms: i64,

    /// SHA-256 of the raw container bytes, hex encoded
    /// Carried through to the report for audit
    pub sha256: String,
}

impl AudioClip {
    /// Get duration in seconds as f64
    pub fn duration_secs(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

/// SHA-256 fingerprint of raw bytes, hex encoded
pub fn fingerprint(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Ingest a WAV clip from raw bytes
///
/// Multi-channel audio is downmixed to mono by averaging each frame.
/// An unreadable or unsupported clip is an explicit error, never a
/// silently empty one.
pub fn ingest_wav(data: &[u8]) -> Result<AudioClip, AudioError> {
    let cursor = Cursor::new(data);
    let mut reader = WavReader::new(cursor)?;

    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = spec.channels as usize;

    // Normalize samples to f32 [-1.0, 1.0]
    let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 8) => {
            // 8-bit PCM: unsigned, range [0, 255] -> [-1.0, 1.0]
            reader
                .samples::<i32>()
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .map(|s| (s as f32 - 128.0) / 128.0)
                .collect()
        }
        (SampleFormat::Int, 16) => {
            reader
                .samples::<i16>()
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .map(|s| s as f32 / 32768.0)
                .collect()
        }
        (SampleFormat::Int, 24) => {
            reader
                .samples::<i32>()
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .map(|s| s as f32 / 8388608.0)
                .collect()
        }
        (SampleFormat::Int, 32) => {
            reader
                .samples::<i32>()
                .collect::<Result<Vec<_>, _>>()?
                .into_iter()
                .map(|s| s as f32 / 2147483648.0)
                .collect()
        }
        (SampleFormat::Float, 32) => reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?,
        (format, depth) => {
            return Err(AudioError::UnsupportedFormat(format!(
                "{:?} {}-bit audio",
                format, depth
            )));
        }
    };

    if interleaved.is_empty() || channels == 0 {
        return Err(AudioError::EmptyClip);
    }

    // Downmix interleaved channels to mono by averaging each frame
    let samples: Vec<f32> = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    };

    let duration_ms = (samples.len() as f64 / sample_rate as f64 * 1000.0) as i64;

    Ok(AudioClip {
        samples,
        sample_rate,
        duration_ms,
        sha256: fingerprint(data),
    })
}

/// Ingest a WAV clip from a file path
pub fn ingest_wav_file(path: impl AsRef<Path>) -> Result<AudioClip, AudioError> {
    let data = std::fs::read(path)?;
    ingest_wav(&data)
}
