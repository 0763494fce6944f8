//! Raw binding to the native `pikatts` C shim.
//!
//! Layouts mirror `pikatts.h`. Everything that crosses this boundary follows
//! one rule: allocations handed to us by the native side (error message
//! strings, synthesis buffers) are copied into Rust-owned memory and freed
//! with `libc::free` in the scope that received them.

use std::ffi::{c_char, c_int, c_void, CStr};
use std::ptr;
use std::slice;

/// File paths for the two lingware resources consumed by `pika_init`.
#[repr(C)]
pub(crate) struct PikaOptions {
    pub ta_fn: *const c_char,
    pub sg_fn: *const c_char,
}

/// Native error descriptor. `message` is a borrowed string owned by the
/// native side; the printable form comes from `pika_error_message`, which
/// returns a malloc'd buffer the caller must free.
#[repr(C)]
pub(crate) struct PikaError {
    pub system: *mut c_void,
    pub message: *const c_char,
    pub status: c_int,
}

/// Growable byte buffer allocated by the native side with malloc.
#[repr(C)]
pub(crate) struct PikaBytes {
    pub buf: *mut c_char,
    pub len: c_int,
    pub cap: c_int,
}

/// Opaque synthesis context. Owned by exactly one engine, released at most
/// once via `pika_fini`.
pub(crate) enum PikaContext {}

extern "C" {
    pub(crate) fn pika_init(opts: PikaOptions, out_ctx: *mut *mut PikaContext) -> PikaError;

    pub(crate) fn pika_synthesize(
        ctx: *mut PikaContext,
        text: *const c_char,
        out_wav: *mut PikaBytes,
    ) -> PikaError;

    pub(crate) fn pika_fini(ctx: *mut PikaContext);

    pub(crate) fn pika_error_message(err: PikaError) -> *mut c_char;
}

/// A translated native failure: status code plus rendered message text.
#[derive(Debug)]
pub(crate) struct NativeFailure {
    pub status: i32,
    pub message: String,
}

/// Translate a `PikaError` into a result.
///
/// On failure the native message is rendered, copied into a Rust `String`,
/// and its allocation freed before returning.
///
/// # Safety
///
/// `err` must be a value returned by one of the `pika_*` entry points.
pub(crate) unsafe fn check(err: PikaError) -> Result<(), NativeFailure> {
    if err.status == 0 {
        return Ok(());
    }

    let status = err.status;
    let msg_ptr = pika_error_message(err);
    let message = if msg_ptr.is_null() {
        String::new()
    } else {
        let message = CStr::from_ptr(msg_ptr).to_string_lossy().into_owned();
        libc::free(msg_ptr.cast());
        message
    };

    Err(NativeFailure { status, message })
}

/// Scoped owner of a native `PikaBytes` allocation.
///
/// `pika_synthesize` may grow the buffer even on a failed call, so the
/// allocation is freed on drop regardless of the reported status.
pub(crate) struct OwnedBytes {
    raw: PikaBytes,
}

impl OwnedBytes {
    pub(crate) fn empty() -> Self {
        Self {
            raw: PikaBytes {
                buf: ptr::null_mut(),
                len: 0,
                cap: 0,
            },
        }
    }

    /// Out-pointer for the native call that fills this buffer.
    pub(crate) fn as_out_ptr(&mut self) -> *mut PikaBytes {
        &mut self.raw
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        if self.raw.buf.is_null() || self.raw.len <= 0 {
            return &[];
        }
        unsafe { slice::from_raw_parts(self.raw.buf.cast::<u8>(), self.raw.len as usize) }
    }
}

impl Drop for OwnedBytes {
    fn drop(&mut self) {
        if !self.raw.buf.is_null() {
            unsafe { libc::free(self.raw.buf.cast()) };
            self.raw.buf = ptr::null_mut();
        }
    }
}
