//! Voice lingware for the Pico engine.
//!
//! A [`Voice`] pairs the two lingware blobs the native engine needs: the
//! text-analysis (`ta`) and signal-generation (`sg`) resources. Voices are
//! immutable and shared by reference; constructing an engine reads the bytes
//! once during staging and keeps nothing afterwards.

use std::borrow::Cow;
use std::fmt;
use std::io;
use std::path::Path;

/// Lingware backing a single text-to-speech voice.
#[derive(Clone)]
pub struct Voice {
    ta_data: Cow<'static, [u8]>,
    sg_data: Cow<'static, [u8]>,
}

impl Voice {
    /// Create a voice from in-memory lingware blobs.
    ///
    /// # Panics
    ///
    /// Panics if either blob is empty. A voice without lingware is a
    /// packaging defect, not a recoverable runtime condition.
    pub fn new(
        ta_data: impl Into<Cow<'static, [u8]>>,
        sg_data: impl Into<Cow<'static, [u8]>>,
    ) -> Self {
        let ta_data = ta_data.into();
        let sg_data = sg_data.into();
        assert!(!ta_data.is_empty(), "voice ta lingware is empty");
        assert!(!sg_data.is_empty(), "voice sg lingware is empty");
        Self { ta_data, sg_data }
    }

    /// Load a voice from lingware files on disk.
    ///
    /// Empty files are rejected with [`io::ErrorKind::InvalidData`].
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        ta_path: P,
        sg_path: Q,
    ) -> io::Result<Self> {
        let ta_data = read_lingware(ta_path.as_ref())?;
        let sg_data = read_lingware(sg_path.as_ref())?;
        Ok(Self {
            ta_data: Cow::Owned(ta_data),
            sg_data: Cow::Owned(sg_data),
        })
    }

    pub(crate) fn ta_data(&self) -> &[u8] {
        &self.ta_data
    }

    pub(crate) fn sg_data(&self) -> &[u8] {
        &self.sg_data
    }
}

impl fmt::Debug for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Voice")
            .field("ta_data", &format_args!("{} bytes", self.ta_data.len()))
            .field("sg_data", &format_args!("{} bytes", self.sg_data.len()))
            .finish()
    }
}

fn read_lingware(path: &Path) -> io::Result<Vec<u8>> {
    let data = std::fs::read(path)?;
    if data.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("lingware file {} is empty", path.display()),
        ));
    }
    Ok(data)
}

/// Voices embedded from the crate's `lingware/` directory.
///
/// Missing files fail the build; an empty file panics on first use.
#[cfg(feature = "embedded-voices")]
mod catalog {
    use super::Voice;
    use std::sync::LazyLock;

    macro_rules! embedded_voice {
        ($(#[$doc:meta])* $name:ident, $ta:literal, $sg:literal) => {
            $(#[$doc])*
            pub static $name: LazyLock<Voice> = LazyLock::new(|| {
                Voice::new(
                    &include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/lingware/", $ta))[..],
                    &include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/lingware/", $sg))[..],
                )
            });
        };
    }

    embedded_voice!(
        /// American English.
        AMERICAN, "en-US_ta.bin", "en-US_lh0_sg.bin"
    );
    embedded_voice!(
        /// British English.
        BRITISH, "en-GB_ta.bin", "en-GB_kh0_sg.bin"
    );
    embedded_voice!(
        /// French.
        FRENCH, "fr-FR_ta.bin", "fr-FR_nk0_sg.bin"
    );
    embedded_voice!(
        /// German.
        GERMAN, "de-DE_ta.bin", "de-DE_gl0_sg.bin"
    );
    embedded_voice!(
        /// Italian.
        ITALIAN, "it-IT_ta.bin", "it-IT_cm0_sg.bin"
    );
    embedded_voice!(
        /// Spanish.
        SPANISH, "es-ES_ta.bin", "es-ES_zl0_sg.bin"
    );
}

#[cfg(feature = "embedded-voices")]
pub use catalog::{AMERICAN, BRITISH, FRENCH, GERMAN, ITALIAN, SPANISH};
