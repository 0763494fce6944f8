use std::ffi::NulError;

/// Errors produced by the Pico engine wrapper.
#[derive(thiserror::Error, Debug)]
pub enum PicoError {
    /// The engine was already closed; no native call was attempted.
    #[error("engine is closed")]
    Closed,
    /// Staging the voice lingware to the scratch directory failed.
    #[error("failed to stage voice data: {0}")]
    Staging(#[from] std::io::Error),
    /// The native engine rejected the staged lingware files.
    #[error("pico initialization failed (status {status}): {message}")]
    Init { status: i32, message: String },
    /// The native engine failed to synthesize the given text.
    #[error("synthesis failed (status {status}): {message}")]
    Synthesis { status: i32, message: String },
    /// The input text contains an interior NUL byte and cannot cross the
    /// C string boundary.
    #[error("text contains an interior NUL byte: {0}")]
    InvalidText(#[from] NulError),
}

impl PicoError {
    /// True for errors reported by the native layer (as opposed to errors
    /// raised by the wrapper before any native call).
    pub fn is_native(&self) -> bool {
        matches!(self, PicoError::Init { .. } | PicoError::Synthesis { .. })
    }
}
