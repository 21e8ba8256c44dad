// Audio processing module
// Handles WAV clip ingestion and input fingerprinting

pub mod ingest;

pub use ingest::{fingerprint, ingest_wav, ingest_wav_file, AudioClip, AudioError};
