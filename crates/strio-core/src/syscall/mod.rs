//! Raw Linux x86_64 syscall veneer.
//!
//! The I/O layer of this crate performs no buffering of its own, so every
//! read and write lands here as a single kernel round-trip. Only the three
//! syscalls the primitive set needs are exposed: `read`, `write`, and
//! `exit_group`.
//!
//! # Safety
//!
//! The raw `syscallN` functions are `unsafe` because the kernel trusts the
//! caller to supply valid arguments. The typed wrappers below take slices,
//! which pins down pointer validity, so they are safe to call.

#[allow(unsafe_code)]
mod raw;

// -------------------------------------------------------------------------
// Syscall number constants (x86_64 Linux)
// -------------------------------------------------------------------------

pub const SYS_READ: usize = 0;
pub const SYS_WRITE: usize = 1;
pub const SYS_EXIT_GROUP: usize = 231;

// -------------------------------------------------------------------------
// Error handling
// -------------------------------------------------------------------------

/// Maximum errno value returned by Linux syscalls.
const MAX_ERRNO: usize = 4095;

/// `EINTR`: the call was interrupted by a signal before any data transfer.
pub const EINTR: i32 = 4;

/// Convert a raw syscall return value to `Result<usize, i32>`.
///
/// On x86_64 Linux, error returns are in the range `[-(MAX_ERRNO), -1]`,
/// which in unsigned representation is `[usize::MAX - MAX_ERRNO + 1, usize::MAX]`.
#[inline]
pub fn syscall_result(ret: usize) -> Result<usize, i32> {
    if ret > usize::MAX - MAX_ERRNO {
        Err(-(ret as isize) as i32)
    } else {
        Ok(ret)
    }
}

// -------------------------------------------------------------------------
// Typed syscall wrappers
// -------------------------------------------------------------------------

/// `read(fd, buf, buf.len())` — read from a file descriptor.
///
/// Returns the number of bytes read; `Ok(0)` is end of input.
#[inline]
#[allow(unsafe_code)]
pub fn sys_read(fd: i32, buf: &mut [u8]) -> Result<usize, i32> {
    // SAFETY: buf is a valid writable region of exactly buf.len() bytes.
    let ret = unsafe { raw::syscall3(SYS_READ, fd as usize, buf.as_mut_ptr() as usize, buf.len()) };
    syscall_result(ret)
}

/// `write(fd, buf, buf.len())` — write to a file descriptor.
///
/// Returns the number of bytes written, which may be less than `buf.len()`.
#[inline]
#[allow(unsafe_code)]
pub fn sys_write(fd: i32, buf: &[u8]) -> Result<usize, i32> {
    // SAFETY: buf is a valid readable region of exactly buf.len() bytes.
    let ret = unsafe { raw::syscall3(SYS_WRITE, fd as usize, buf.as_ptr() as usize, buf.len()) };
    syscall_result(ret)
}

/// `exit_group(status)` — terminate all threads in the process.
#[inline]
#[allow(unsafe_code)]
pub fn sys_exit_group(status: i32) -> ! {
    // SAFETY: exit_group never returns.
    unsafe { raw::syscall1(SYS_EXIT_GROUP, status as usize) };
    // Unreachable, but satisfy the type system.
    loop {
        core::hint::spin_loop();
    }
}

// -------------------------------------------------------------------------
// Unit tests
// -------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_zero_bytes_to_stdout() {
        let msg = b"";
        let result = sys_write(1, msg);
        assert_eq!(result, Ok(0), "write of 0 bytes to stdout should succeed");
    }

    #[test]
    fn write_bad_fd_returns_ebadf() {
        let result = sys_write(-1, b"x");
        assert_eq!(result, Err(9), "write(-1) should return EBADF (9)");
    }

    #[test]
    fn read_bad_fd_returns_ebadf() {
        let mut buf = [0u8; 1];
        let result = sys_read(-1, &mut buf);
        assert_eq!(result, Err(9), "read(-1) should return EBADF (9)");
    }

    #[test]
    fn syscall_result_success() {
        assert_eq!(syscall_result(0), Ok(0));
        assert_eq!(syscall_result(42), Ok(42));
        assert_eq!(syscall_result(usize::MAX - 4096), Ok(usize::MAX - 4096));
    }

    #[test]
    fn syscall_result_error() {
        // -1 as usize = usize::MAX → errno 1 (EPERM)
        assert_eq!(syscall_result(usize::MAX), Err(1));
        // -9 as usize → errno 9 (EBADF)
        assert_eq!(syscall_result((-9isize) as usize), Err(9));
        // -4095 as usize → errno 4095 (max)
        assert_eq!(syscall_result((-4095isize) as usize), Err(4095));
    }
}
