//! Raw I/O layer: unbuffered byte streams over the process file descriptors.
//!
//! The primitives in this crate never talk to fd 0 and fd 1 directly.
//! Instead they accept a [`ByteSource`] or [`ByteSink`] handle, and the
//! caller picks the backing stream: [`Stdin`] / [`Stdout`] for real console
//! I/O, or [`MemReader`] / `Vec<u8>` when a test wants byte-exact control
//! without touching the process descriptors.
//!
//! There is no buffering anywhere in this layer. Every `write_bytes` call
//! maps to one or more `write` syscalls issued immediately and in order, so
//! interleaved `print_*` calls from sequential code produce deterministic,
//! byte-exact output.

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
use crate::syscall as sys;

use crate::process::EX_IOERR;

/// Portable fallback when the raw syscall veneer is unavailable.
#[cfg(not(all(target_os = "linux", target_arch = "x86_64")))]
#[allow(unsafe_code)]
mod sys {
    pub use libc::EINTR;

    fn errno() -> i32 {
        std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
    }

    pub fn sys_read(fd: i32, buf: &mut [u8]) -> Result<usize, i32> {
        // SAFETY: buf is a valid writable region of exactly buf.len() bytes.
        let n = unsafe { libc::read(fd, buf.as_mut_ptr().cast(), buf.len()) };
        if n < 0 { Err(errno()) } else { Ok(n as usize) }
    }

    pub fn sys_write(fd: i32, buf: &[u8]) -> Result<usize, i32> {
        // SAFETY: buf is a valid readable region of exactly buf.len() bytes.
        let n = unsafe { libc::write(fd, buf.as_ptr().cast(), buf.len()) };
        if n < 0 { Err(errno()) } else { Ok(n as usize) }
    }
}

/// Standard file descriptors used by this layer.
pub const STDIN_FILENO: i32 = 0;
pub const STDOUT_FILENO: i32 = 1;
pub const STDERR_FILENO: i32 = 2;

/// A destination for output bytes.
///
/// `write_bytes` writes the whole buffer: implementations retry partial
/// writes internally. There is no error return — a sink backed by a real
/// descriptor treats an unrecoverable write error as fatal to the process
/// (see [`Stdout`]), and in-memory sinks cannot fail.
pub trait ByteSink {
    /// Writes exactly `buf.len()` bytes, in order, with no buffering
    /// retained across calls.
    fn write_bytes(&mut self, buf: &[u8]);
}

/// A source of input bytes.
pub trait ByteSource {
    /// Reads exactly one byte, blocking until it is available.
    ///
    /// Returns `None` once the stream is exhausted. End of input is a
    /// distinct result, never conflated with a legitimate `0x00` byte.
    fn read_byte(&mut self) -> Option<u8>;
}

// -------------------------------------------------------------------------
// Process-standard streams
// -------------------------------------------------------------------------

/// Unbuffered standard output (fd 1).
///
/// Each `write_bytes` call issues `write` syscalls until the buffer is
/// drained, retrying partial writes and `EINTR`. Any other write error is
/// unrecoverable at this layer: a short diagnostic goes to fd 2 and the
/// process terminates with status [`EX_IOERR`].
#[derive(Debug, Default)]
pub struct Stdout;

impl Stdout {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ByteSink for Stdout {
    fn write_bytes(&mut self, buf: &[u8]) {
        write_all(STDOUT_FILENO, buf);
    }
}

/// Unbuffered standard input (fd 0).
///
/// Reads one byte per `read` syscall; the call blocks until a byte arrives
/// or the stream ends. `EINTR` is retried. A hard read error is fatal, the
/// same as a write error — it is never reported as end of input.
#[derive(Debug, Default)]
pub struct Stdin;

impl Stdin {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ByteSource for Stdin {
    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        loop {
            match sys::sys_read(STDIN_FILENO, &mut byte) {
                Ok(0) => return None,
                Ok(_) => return Some(byte[0]),
                Err(err) if err == sys::EINTR => continue,
                Err(err) => fatal_io_error("stdin read", err),
            }
        }
    }
}

/// Writes all of `buf` to `fd`, retrying partial writes and `EINTR`.
fn write_all(fd: i32, mut buf: &[u8]) {
    while !buf.is_empty() {
        match sys::sys_write(fd, buf) {
            Ok(n) => buf = &buf[n..],
            Err(err) if err == sys::EINTR => continue,
            Err(err) => fatal_io_error("stdout write", err),
        }
    }
}

/// Terminates the process after an unrecoverable descriptor error.
///
/// The diagnostic is assembled in a fixed buffer and pushed to fd 2 on a
/// best-effort basis (a failure there is ignored — the process is exiting
/// anyway), then the process exits with [`EX_IOERR`].
fn fatal_io_error(what: &str, errno: i32) -> ! {
    let mut digits = [0u8; crate::convert::MAX_UINT_DIGITS];
    let rendered = crate::convert::format_uint(errno.unsigned_abs() as u64, &mut digits);

    let _ = sys::sys_write(STDERR_FILENO, b"strio: fatal ");
    let _ = sys::sys_write(STDERR_FILENO, what.as_bytes());
    let _ = sys::sys_write(STDERR_FILENO, b" error, errno ");
    let _ = sys::sys_write(STDERR_FILENO, rendered);
    let _ = sys::sys_write(STDERR_FILENO, b"\n");

    crate::process::exit(EX_IOERR)
}

// -------------------------------------------------------------------------
// In-memory streams
// -------------------------------------------------------------------------

/// In-memory [`ByteSource`] over a byte slice.
///
/// Yields the bytes of the slice in order, then reports end of input.
#[derive(Debug, Clone)]
pub struct MemReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> MemReader<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for MemReader<'_> {
    fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }
}

/// Capture sink: output is appended verbatim.
impl ByteSink for Vec<u8> {
    fn write_bytes(&mut self, buf: &[u8]) {
        self.extend_from_slice(buf);
    }
}
