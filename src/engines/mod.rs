//! Speech synthesis engines.
//!
//! This module contains implementations of text-to-speech engines.
//!
//! # Available Engines
//!
//! - `pico` - SVOX Pico (native library, compact embedded voices)

pub mod pico;
