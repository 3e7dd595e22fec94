//! NUL-terminated string primitives: length, equality, bounded copy.
//!
//! Strings here are `&[u8]` slices carrying a NUL-terminated byte string: the
//! logical end is the first `0x00` byte, not the slice boundary. Callers are
//! expected to terminate their buffers; when a slice carries no NUL, the
//! slice end bounds the scan instead, which is the safe rendering of the
//! "terminator within the allocated extent" precondition (the slice *is* the
//! allocated extent).

use thiserror::Error;

/// Failure outcome of [`string_copy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CopyError {
    /// The source string plus its terminator does not fit the destination.
    #[error("source needs {needed} bytes but destination capacity is {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
}

/// Returns the length of a NUL-terminated byte string (not counting the NUL).
///
/// Scans `s` from its start until the first `0x00` byte. O(n) in the logical
/// length. If no NUL is present, returns the full slice length.
pub fn string_length(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Compares two NUL-terminated byte strings for equality.
///
/// True iff every byte up to and including the terminator position matches,
/// so equality is not a prefix relation: `"hi"` and `"hi!"` differ at the
/// byte where one has its terminator. Short-circuits on the first mismatch.
pub fn string_equals(a: &[u8], b: &[u8]) -> bool {
    let mut i = 0;
    loop {
        let x = if i < a.len() { a[i] } else { 0 };
        let y = if i < b.len() { b[i] } else { 0 };
        if x != y {
            return false;
        }
        if x == 0 {
            return true;
        }
        i += 1;
    }
}

/// Copies the NUL-terminated string in `src` into `dest`, terminator included.
///
/// `dest.len()` is the destination capacity. The source length is measured
/// first and the copy only happens when `string_length(src) + 1` fits, so on
/// failure `dest` is left untouched — never partially written.
///
/// On success returns the payload length (not counting the NUL); `dest` is
/// terminated identically to `src`.
pub fn string_copy(src: &[u8], dest: &mut [u8]) -> Result<usize, CopyError> {
    let src_len = string_length(src);
    if src_len + 1 > dest.len() {
        return Err(CopyError::BufferTooSmall {
            needed: src_len + 1,
            capacity: dest.len(),
        });
    }
    dest[..src_len].copy_from_slice(&src[..src_len]);
    dest[src_len] = 0;
    Ok(src_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_length_basic() {
        assert_eq!(string_length(b"hello\0"), 5);
        assert_eq!(string_length(b"\0"), 0);
        assert_eq!(string_length(b"abc"), 3); // no NUL found
    }

    #[test]
    fn test_string_length_embedded_nul_stops_scan() {
        assert_eq!(string_length(b"ab\0cd\0"), 2);
    }

    #[test]
    fn test_string_equals_reflexive() {
        assert!(string_equals(b"hello\0", b"hello\0"));
        assert!(string_equals(b"\0", b"\0"));
    }

    #[test]
    fn test_string_equals_different() {
        assert!(!string_equals(b"hello\0", b"world\0"));
    }

    #[test]
    fn test_string_equals_not_prefix_relation() {
        assert!(!string_equals(b"hi\0", b"hi!\0"));
        assert!(!string_equals(b"hi!\0", b"hi\0"));
    }

    #[test]
    fn test_string_equals_ignores_bytes_after_terminator() {
        assert!(string_equals(b"ab\0xx", b"ab\0yy"));
    }

    #[test]
    fn test_string_equals_unterminated_slice_acts_terminated() {
        assert!(string_equals(b"abc", b"abc\0"));
    }

    #[test]
    fn test_string_copy_success() {
        let mut dest = [0xFFu8; 10];
        let n = string_copy(b"hello\0", &mut dest).expect("fits");
        assert_eq!(n, 5);
        assert_eq!(&dest[..6], b"hello\0");
    }

    #[test]
    fn test_string_copy_exact_fit() {
        let mut dest = [0xFFu8; 6];
        assert_eq!(string_copy(b"hello\0", &mut dest), Ok(5));
        assert_eq!(&dest, b"hello\0");
    }

    #[test]
    fn test_string_copy_overflow_leaves_dest_unmodified() {
        let mut dest = [0xFFu8; 5];
        let err = string_copy(b"toolong\0", &mut dest).unwrap_err();
        assert_eq!(
            err,
            CopyError::BufferTooSmall {
                needed: 8,
                capacity: 5
            }
        );
        assert_eq!(&dest, &[0xFFu8; 5], "failed copy must not touch dest");
    }

    #[test]
    fn test_string_copy_one_byte_off_fails() {
        // 6 bytes needed (5 payload + NUL), capacity 5.
        let mut dest = [0u8; 5];
        assert!(string_copy(b"hello\0", &mut dest).is_err());
    }

    #[test]
    fn test_string_copy_empty_string() {
        let mut dest = [0xFFu8; 1];
        assert_eq!(string_copy(b"\0", &mut dest), Ok(0));
        assert_eq!(dest[0], 0);
    }

    #[test]
    fn test_string_copy_into_zero_capacity_fails() {
        let mut dest: [u8; 0] = [];
        assert!(string_copy(b"\0", &mut dest).is_err());
    }

    #[test]
    fn test_read_only_ops_are_idempotent() {
        let s = b"same\0";
        assert_eq!(string_length(s), string_length(s));
        assert_eq!(string_equals(s, b"same\0"), string_equals(s, b"same\0"));
    }
}
