//! Process termination.
//!
//! A program built on these primitives reports a result either through bytes
//! written to standard output or through its process exit status. The exit
//! status channel is one byte wide (0–255), which the `u8` parameter makes
//! unrepresentable to get wrong.

/// Exit status used by the I/O layer for an unrecoverable descriptor error
/// (BSD `sysexits.h` `EX_IOERR`).
pub const EX_IOERR: u8 = 74;

/// Terminates the process with the given status byte.
///
/// Goes straight to `exit_group` on Linux/x86-64 (`_exit` elsewhere): no
/// atexit handlers run and no stdio flushing happens, because this layer
/// buffers nothing that could need flushing.
pub fn exit(status: u8) -> ! {
    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    {
        crate::syscall::sys_exit_group(i32::from(status))
    }

    #[cfg(not(all(target_os = "linux", target_arch = "x86_64")))]
    #[allow(unsafe_code)]
    {
        // SAFETY: _exit has no preconditions and never returns.
        unsafe { libc::_exit(i32::from(status)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ex_ioerr_matches_sysexits() {
        assert_eq!(EX_IOERR, 74);
    }
}
