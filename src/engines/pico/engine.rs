use std::ffi::CString;
use std::fmt;
use std::ptr::{self, NonNull};

use crate::SynthesisResult;

use super::error::PicoError;
use super::ffi;
use super::staging::StagedVoice;
use super::voices::Voice;

/// Output sample rate of the Pico engine.
pub const SAMPLE_RATE: u32 = 16_000;

/// SVOX Pico text-to-speech engine.
///
/// An engine owns exactly one native synthesis context. It is created in the
/// open state and serves any number of sequential [`synthesize`] calls until
/// [`close`] releases the context; the transition is one-way, and operations
/// on a closed engine fail with [`PicoError::Closed`] without touching the
/// native layer.
///
/// [`synthesize`]: PicoEngine::synthesize
/// [`close`]: PicoEngine::close
///
/// ```ignore
/// use pikatts::engines::pico::{voices, PicoEngine};
///
/// let mut engine = PicoEngine::new(&voices::GERMAN)?;
/// let result = engine.synthesize("Guten Tag")?;
/// engine.close()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct PicoEngine {
    /// `Some` while open; `take`n exactly once on close.
    ctx: Option<NonNull<ffi::PikaContext>>,
}

// The native context is not bound to the thread that created it, but it is
// not safe for concurrent calls either; `&mut self` on every operation keeps
// access exclusive.
unsafe impl Send for PicoEngine {}

impl PicoEngine {
    /// Create a new synthesizer for the given voice.
    ///
    /// The lingware blobs are staged to a scratch directory for the native
    /// init, which parses them synchronously; the directory is removed as
    /// soon as init returns, whether it succeeded or not.
    pub fn new(voice: &Voice) -> Result<Self, PicoError> {
        let staged = StagedVoice::stage(voice)?;

        let opts = ffi::PikaOptions {
            ta_fn: staged.ta_path().as_ptr(),
            sg_fn: staged.sg_path().as_ptr(),
        };
        let mut ctx: *mut ffi::PikaContext = ptr::null_mut();
        let res = unsafe { ffi::check(ffi::pika_init(opts, &mut ctx)) };

        // The native engine has copied what it needs from the staged files.
        drop(staged);

        res.map_err(|f| PicoError::Init {
            status: f.status,
            message: f.message,
        })?;

        let ctx = NonNull::new(ctx).ok_or_else(|| PicoError::Init {
            status: -1,
            message: "pika_init reported success but returned no context".to_string(),
        })?;

        log::info!("initialized pico engine");
        Ok(Self { ctx: Some(ctx) })
    }

    /// Convert text to 16-bit/mono/16 kHz WAV audio.
    ///
    /// A failed call leaves the engine open; subsequent calls are fine.
    pub fn synthesize(&mut self, text: &str) -> Result<SynthesisResult, PicoError> {
        let ctx = self.ctx.ok_or(PicoError::Closed)?;
        let text = CString::new(text)?;

        let mut out = ffi::OwnedBytes::empty();
        let res =
            unsafe { ffi::check(ffi::pika_synthesize(ctx.as_ptr(), text.as_ptr(), out.as_out_ptr())) };
        res.map_err(|f| PicoError::Synthesis {
            status: f.status,
            message: f.message,
        })?;

        // Copy out of the native buffer; `out` frees it when it drops.
        Ok(SynthesisResult {
            wav: out.as_slice().to_vec(),
            sample_rate: SAMPLE_RATE,
        })
    }

    /// Release all native resources associated with the synthesizer.
    ///
    /// Closing an already-closed engine fails with [`PicoError::Closed`];
    /// the context is released at most once.
    pub fn close(&mut self) -> Result<(), PicoError> {
        let ctx = self.ctx.take().ok_or(PicoError::Closed)?;
        unsafe { ffi::pika_fini(ctx.as_ptr()) };
        log::debug!("closed pico engine");
        Ok(())
    }
}

impl fmt::Debug for PicoEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PicoEngine")
            .field("state", &if self.ctx.is_some() { "open" } else { "closed" })
            .finish()
    }
}

impl Drop for PicoEngine {
    fn drop(&mut self) {
        // Safety net for engines dropped while open; a second release can
        // never happen because close() already cleared the context.
        let _ = self.close();
    }
}
