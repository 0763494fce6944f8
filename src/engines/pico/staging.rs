//! Ephemeral staging of in-memory lingware as files.
//!
//! The native init only accepts file paths, so the voice blobs are written
//! to a uniquely named scratch directory for the duration of the call. The
//! directory is removed when the guard drops, on every exit path.

use std::ffi::{CStr, CString};
use std::fs;
use std::io;
use std::path::Path;

use tempfile::TempDir;

use super::voices::Voice;

const TA_FILE: &str = "ta.bin";
const SG_FILE: &str = "sg.bin";

/// A voice staged to disk. Holds the scratch directory alive; dropping the
/// guard deletes the directory and both files.
pub(crate) struct StagedVoice {
    // Held for its Drop impl: removing the field would delete the files
    // before the native init reads them.
    #[cfg_attr(not(test), allow(dead_code))]
    dir: TempDir,
    ta_path: CString,
    sg_path: CString,
}

impl StagedVoice {
    /// Write both lingware blobs into a fresh scratch directory.
    pub(crate) fn stage(voice: &Voice) -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix("pikatts.").tempdir()?;

        let ta = dir.path().join(TA_FILE);
        write_private(&ta, voice.ta_data())?;
        let sg = dir.path().join(SG_FILE);
        write_private(&sg, voice.sg_data())?;

        log::debug!("staged voice data in {}", dir.path().display());

        Ok(Self {
            ta_path: path_to_cstring(&ta)?,
            sg_path: path_to_cstring(&sg)?,
            dir,
        })
    }

    pub(crate) fn ta_path(&self) -> &CStr {
        &self.ta_path
    }

    pub(crate) fn sg_path(&self) -> &CStr {
        &self.sg_path
    }

    #[cfg(test)]
    pub(crate) fn dir_path(&self) -> &Path {
        self.dir.path()
    }
}

/// Write a file readable and writable by the owner only.
fn write_private(path: &Path, data: &[u8]) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::io::Write;
        use std::os::unix::fs::OpenOptionsExt;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(0o600)
            .open(path)?;
        file.write_all(data)
    }
    #[cfg(not(unix))]
    {
        fs::write(path, data)
    }
}

fn path_to_cstring(path: &Path) -> io::Result<CString> {
    CString::new(path.as_os_str().as_encoded_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}
