//! # pikatts
//!
//! A Rust library providing text-to-speech synthesis using the SVOX Pico engine.
//!
//! ## Features
//!
//! - **Compact voices**: six languages backed by small lingware files
//! - **Deterministic teardown**: every native resource is released exactly once
//! - **WAV output**: 16-bit mono 16 kHz audio, ready to write to disk
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! pikatts = { version = "0.1", features = ["pico", "embedded-voices"] }
//! ```
//!
//! ```ignore
//! use pikatts::engines::pico::{voices, PicoEngine};
//!
//! let mut engine = PicoEngine::new(&voices::BRITISH)?;
//! let result = engine.synthesize("Hello, world!")?;
//! result.write_wav("output.wav")?;
//! engine.close()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engines;

use std::io;
use std::path::Path;

/// Byte length of the RIFF/WAVE header preceding the PCM payload.
pub const WAV_HEADER_LEN: usize = 44;

/// The result of a synthesis (text-to-speech) operation.
///
/// Contains a complete WAV byte stream: a 44-byte RIFF header followed by
/// 16-bit little-endian PCM samples.
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    /// The WAV byte stream, header included.
    pub wav: Vec<u8>,
    /// Sample rate of the audio (16000 for Pico).
    pub sample_rate: u32,
}

impl SynthesisResult {
    /// Write the WAV byte stream to a file.
    pub fn write_wav<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        std::fs::write(path, &self.wav)
    }

    /// Duration of the audio in seconds, computed from the PCM payload.
    pub fn duration_secs(&self) -> f64 {
        let samples = self.wav.len().saturating_sub(WAV_HEADER_LEN) / 2;
        samples as f64 / self.sample_rate as f64
    }
}
