//! In-process stand-in for the native pikatts library.
//!
//! Defines the `pika_*` symbols in Rust so the test suite can exercise the
//! full lifecycle protocol (staging, init, buffer ownership, release-once)
//! without linking the real engine. Buffers and messages are allocated with
//! `libc::malloc`, matching what the wrapper frees.
//!
//! A registry of live context pointers backs the release-once checks:
//! `pika_fini` on an unknown or already-released context aborts the test
//! process, the same way a double free would crash the real library.

use std::collections::HashSet;
use std::ffi::{c_char, c_int, CStr};
use std::io::Cursor;
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{LazyLock, Mutex, MutexGuard};

use super::ffi::{PikaBytes, PikaContext, PikaError, PikaOptions};

struct MockContext {
    /// Derived from the lingware contents; folded into the synthesized
    /// samples so audio from different voices is distinguishable.
    voice_tag: u8,
}

static LIVE: LazyLock<Mutex<HashSet<usize>>> = LazyLock::new(|| Mutex::new(HashSet::new()));
static NATIVE_CALLS: AtomicUsize = AtomicUsize::new(0);
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Number of currently initialized (and not yet released) contexts.
pub(crate) fn live_contexts() -> usize {
    LIVE.lock().unwrap().len()
}

/// Total `pika_init`/`pika_synthesize`/`pika_fini` invocations.
pub(crate) fn native_calls() -> usize {
    NATIVE_CALLS.load(Ordering::SeqCst)
}

/// Serializes tests that assert on the global counters above.
pub(crate) fn lock() -> MutexGuard<'static, ()> {
    TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn ok() -> PikaError {
    PikaError {
        system: ptr::null_mut(),
        message: ptr::null(),
        status: 0,
    }
}

fn fail(message: &'static CStr, status: c_int) -> PikaError {
    PikaError {
        system: ptr::null_mut(),
        message: message.as_ptr(),
        status,
    }
}

unsafe fn malloc_bytes(data: &[u8]) -> *mut c_char {
    let buf = libc::malloc(data.len()).cast::<c_char>();
    assert!(!buf.is_null(), "mock malloc failed");
    ptr::copy_nonoverlapping(data.as_ptr().cast::<c_char>(), buf, data.len());
    buf
}

unsafe fn read_resource(path: *const c_char) -> Result<Vec<u8>, PikaError> {
    let path = CStr::from_ptr(path)
        .to_str()
        .map_err(|_| fail(c"pika_loadResource: bad path", 20))?;
    let data = std::fs::read(path).map_err(|_| fail(c"pika_loadResource: open", 21))?;
    if data.is_empty() {
        return Err(fail(c"pika_loadResource: empty resource", 22));
    }
    if data.starts_with(b"INVALID") {
        return Err(fail(c"pika_loadResource: invalid lingware resource", 23));
    }
    Ok(data)
}

#[no_mangle]
unsafe extern "C" fn pika_init(opts: PikaOptions, out_ctx: *mut *mut PikaContext) -> PikaError {
    NATIVE_CALLS.fetch_add(1, Ordering::SeqCst);

    let ta = match read_resource(opts.ta_fn) {
        Ok(data) => data,
        Err(err) => return err,
    };
    let sg = match read_resource(opts.sg_fn) {
        Ok(data) => data,
        Err(err) => return err,
    };

    let voice_tag = ta
        .iter()
        .chain(sg.iter())
        .fold(0u8, |acc, &b| acc.wrapping_add(b));
    let ctx = Box::into_raw(Box::new(MockContext { voice_tag })).cast::<PikaContext>();

    LIVE.lock().unwrap().insert(ctx as usize);
    *out_ctx = ctx;
    ok()
}

#[no_mangle]
unsafe extern "C" fn pika_synthesize(
    ctx: *mut PikaContext,
    text: *const c_char,
    out_wav: *mut PikaBytes,
) -> PikaError {
    NATIVE_CALLS.fetch_add(1, Ordering::SeqCst);

    assert!(
        LIVE.lock().unwrap().contains(&(ctx as usize)),
        "pika_synthesize called on an unknown context"
    );
    let voice_tag = (*ctx.cast::<MockContext>()).voice_tag;

    let text = CStr::from_ptr(text).to_bytes();
    if text.is_empty() {
        return fail(c"pika_synthesize: pico_putTextUtf8: text", 200);
    }

    // 10 ms of audio per input byte, shaped by the voice tag.
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
    for &b in text {
        for i in 0..160i16 {
            let sample = i16::from(b ^ voice_tag) * 16 + i;
            writer.write_sample(sample).unwrap();
        }
    }
    writer.finalize().unwrap();

    let wav = cursor.into_inner();
    *out_wav = PikaBytes {
        buf: malloc_bytes(&wav),
        len: wav.len() as c_int,
        cap: wav.len() as c_int,
    };
    ok()
}

#[no_mangle]
unsafe extern "C" fn pika_fini(ctx: *mut PikaContext) {
    NATIVE_CALLS.fetch_add(1, Ordering::SeqCst);

    let released = LIVE.lock().unwrap().remove(&(ctx as usize));
    assert!(released, "pika_fini called on an unknown or already-released context");
    drop(Box::from_raw(ctx.cast::<MockContext>()));
}

#[no_mangle]
unsafe extern "C" fn pika_error_message(err: PikaError) -> *mut c_char {
    if err.message.is_null() {
        return malloc_bytes(&[0]);
    }
    malloc_bytes(CStr::from_ptr(err.message).to_bytes_with_nul())
}
