//! SVOX Pico text-to-speech engine implementation.
//!
//! This module wraps the native `pikatts` C library (a thin shim over the
//! SVOX Pico engine) behind a safe lifecycle: voice lingware is staged to a
//! scratch directory for the path-only native init, the opaque synthesis
//! context is owned by exactly one [`PicoEngine`], and every native
//! allocation is released on every exit path.
//!
//! # System Requirements
//!
//! The native library is linked when the `pico` Cargo feature is enabled.
//! The build script looks for `libpikatts` in `vendor/pikatts/lib`, in
//! `$PIKATTS_LIB_DIR`, and in the usual system locations.
//!
//! # Lingware Layout
//!
//! With the `embedded-voices` feature, the voice files are compiled into the
//! library from the crate's `lingware/` directory:
//!
//! ```text
//! lingware/
//! ├── en-US_ta.bin        # text-analysis lingware
//! ├── en-US_lh0_sg.bin    # signal-generation lingware
//! ├── en-GB_ta.bin
//! ├── en-GB_kh0_sg.bin
//! └── ...
//! ```
//!
//! The files ship with the SVOX Pico distribution (for example the Debian
//! `libttspico-data` package or the AOSP `external/svox` tree).
//!
//! # Voices
//!
//! | Voice | Language | Lingware pair |
//! |---|---|---|
//! | `AMERICAN` | American English | `en-US_ta.bin`, `en-US_lh0_sg.bin` |
//! | `BRITISH` | British English | `en-GB_ta.bin`, `en-GB_kh0_sg.bin` |
//! | `FRENCH` | French | `fr-FR_ta.bin`, `fr-FR_nk0_sg.bin` |
//! | `GERMAN` | German | `de-DE_ta.bin`, `de-DE_gl0_sg.bin` |
//! | `ITALIAN` | Italian | `it-IT_ta.bin`, `it-IT_cm0_sg.bin` |
//! | `SPANISH` | Spanish | `es-ES_ta.bin`, `es-ES_zl0_sg.bin` |
//!
//! # Examples
//!
//! ```ignore
//! use pikatts::engines::pico::{voices, PicoEngine};
//!
//! let mut engine = PicoEngine::new(&voices::AMERICAN)?;
//! let result = engine.synthesize("Hello from Pico!")?;
//! println!("{} bytes, {:.2}s", result.wav.len(), result.duration_secs());
//! engine.close()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Thread Safety
//!
//! A `PicoEngine` can move between threads but all of its operations take
//! `&mut self`: a single engine serves one caller at a time. Independent
//! engines own independent native contexts and may run concurrently.

pub mod engine;
pub mod error;
pub(crate) mod ffi;
pub(crate) mod staging;
pub mod voices;

#[cfg(all(test, not(feature = "pico")))]
pub(crate) mod mock;

pub use engine::{PicoEngine, SAMPLE_RATE};
pub use error::PicoError;
pub use voices::Voice;
