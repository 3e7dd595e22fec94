//! Line and token I/O: whole-string and single-byte output, word-oriented
//! input.
//!
//! Output goes through a [`ByteSink`] one logical item at a time; input comes
//! from a [`ByteSource`] one byte at a time. `read_word` is where most of the
//! edge cases of this crate live: leading whitespace, end of input before a
//! token, and destination exhaustion mid-token.

use thiserror::Error;

use crate::io::{ByteSink, ByteSource};
use crate::string::string_length;

/// Failure outcome of [`read_word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReadWordError {
    /// The token plus its terminator does not fit the destination.
    /// The destination contents are unspecified after this error.
    #[error("token does not fit destination capacity {capacity}")]
    BufferTooSmall { capacity: usize },
    /// End of input was reached before any token byte.
    #[error("end of input before any token byte")]
    UnexpectedEof,
}

/// Word delimiters: space, tab, line feed.
#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

/// Writes the logical content of the NUL-terminated string `s`.
///
/// Emits `string_length(s)` bytes; the terminator is not part of the output.
pub fn print_string(sink: &mut impl ByteSink, s: &[u8]) {
    sink.write_bytes(&s[..string_length(s)]);
}

/// Writes the single byte `c`.
pub fn print_char(sink: &mut impl ByteSink, c: u8) {
    sink.write_bytes(&[c]);
}

/// Writes a single line-feed byte.
pub fn print_newline(sink: &mut impl ByteSink) {
    sink.write_bytes(b"\n");
}

/// Reads one byte from `src` verbatim.
///
/// `None` means end of input. The routine set this follows returned the zero
/// byte for both EOF and a literal NUL read; here the two are distinct: a
/// `0x00` byte in the stream comes back as `Some(0)`.
pub fn read_char(src: &mut impl ByteSource) -> Option<u8> {
    src.read_byte()
}

/// Reads one whitespace-delimited token from `src` into `dest`.
///
/// Skips leading whitespace (space, tab, line feed), then copies token bytes
/// until whitespace, end of input, or destination exhaustion. On success
/// `dest` is NUL-terminated and the token length (not counting the NUL) is
/// returned. The delimiter byte that ended the token has been consumed and
/// is not pushed back.
///
/// Fails with [`ReadWordError::UnexpectedEof`] when the input ends before
/// any token byte, and with [`ReadWordError::BufferTooSmall`] when the token
/// would require `dest.len()` or more bytes including the terminator (a
/// token of length `n` needs a destination of at least `n + 2` bytes); in
/// the latter case `dest` holds an unspecified prefix of the token.
pub fn read_word(src: &mut impl ByteSource, dest: &mut [u8]) -> Result<usize, ReadWordError> {
    // SKIP_WS: consume delimiters until a token byte or EOF.
    let first = loop {
        match src.read_byte() {
            None => return Err(ReadWordError::UnexpectedEof),
            Some(b) if is_whitespace(b) => continue,
            Some(b) => break b,
        }
    };

    // READ_TOKEN: append bytes until a delimiter, EOF, or capacity runs out.
    let mut len = 0;
    let mut byte = first;
    loop {
        // A token that grows to capacity - 1 payload bytes already requires
        // the full capacity including its terminator, which is the overflow
        // condition.
        if len + 2 >= dest.len() {
            return Err(ReadWordError::BufferTooSmall {
                capacity: dest.len(),
            });
        }
        dest[len] = byte;
        len += 1;
        match src.read_byte() {
            None => break,
            Some(b) if is_whitespace(b) => break, // delimiter consumed, not pushed back
            Some(b) => byte = b,
        }
    }

    dest[len] = 0;
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::MemReader;

    #[test]
    fn test_print_string_omits_terminator() {
        let mut out = Vec::new();
        print_string(&mut out, b"hello\0junk");
        assert_eq!(out, b"hello");
    }

    #[test]
    fn test_print_string_empty() {
        let mut out = Vec::new();
        print_string(&mut out, b"\0");
        assert_eq!(out, b"");
    }

    #[test]
    fn test_print_char_single_byte() {
        let mut out = Vec::new();
        print_char(&mut out, b'A');
        assert_eq!(out, [0x41]);
    }

    #[test]
    fn test_print_newline_is_lf() {
        let mut out = Vec::new();
        print_newline(&mut out);
        assert_eq!(out, [0x0A]);
    }

    #[test]
    fn test_read_char_basic() {
        let mut src = MemReader::new(b"A");
        assert_eq!(read_char(&mut src), Some(b'A'));
        assert_eq!(read_char(&mut src), None);
    }

    #[test]
    fn test_read_char_empty_input_is_eof() {
        let mut src = MemReader::new(b"");
        assert_eq!(read_char(&mut src), None);
    }

    #[test]
    fn test_read_word_basic() {
        let mut src = MemReader::new(b"hello world");
        let mut dest = [0xFFu8; 16];
        let len = read_word(&mut src, &mut dest).expect("token fits");
        assert_eq!(len, 5);
        assert_eq!(&dest[..6], b"hello\0");
        // The delimiting space was consumed, not pushed back.
        assert_eq!(src.remaining(), b"world");
    }

    #[test]
    fn test_read_word_skips_leading_whitespace() {
        let mut src = MemReader::new(b" \t\n spaced");
        let mut dest = [0u8; 16];
        let len = read_word(&mut src, &mut dest).expect("token fits");
        assert_eq!(len, 6);
        assert_eq!(&dest[..7], b"spaced\0");
    }

    #[test]
    fn test_read_word_token_ending_at_eof() {
        let mut src = MemReader::new(b"word");
        let mut dest = [0u8; 8];
        assert_eq!(read_word(&mut src, &mut dest), Ok(4));
        assert_eq!(&dest[..5], b"word\0");
    }

    #[test]
    fn test_read_word_empty_input_fails() {
        let mut src = MemReader::new(b"");
        let mut dest = [0u8; 8];
        assert_eq!(read_word(&mut src, &mut dest), Err(ReadWordError::UnexpectedEof));
    }

    #[test]
    fn test_read_word_whitespace_only_input_fails() {
        let mut src = MemReader::new(b"  \t\n ");
        let mut dest = [0u8; 8];
        assert_eq!(read_word(&mut src, &mut dest), Err(ReadWordError::UnexpectedEof));
    }

    #[test]
    fn test_read_word_overflow() {
        let mut src = MemReader::new(b"toolong");
        let mut dest = [0u8; 4];
        assert_eq!(
            read_word(&mut src, &mut dest),
            Err(ReadWordError::BufferTooSmall { capacity: 4 })
        );
    }

    #[test]
    fn test_read_word_needs_strictly_more_than_token_plus_nul() {
        // A 4-byte token requires 5 bytes including the NUL; a capacity of
        // exactly 5 is still the overflow condition.
        let mut src = MemReader::new(b"word more");
        let mut dest = [0u8; 5];
        assert_eq!(
            read_word(&mut src, &mut dest),
            Err(ReadWordError::BufferTooSmall { capacity: 5 })
        );

        let mut src = MemReader::new(b"word more");
        let mut dest = [0u8; 6];
        assert_eq!(read_word(&mut src, &mut dest), Ok(4));
        assert_eq!(&dest[..5], b"word\0");
    }

    #[test]
    fn test_read_word_successive_tokens() {
        let mut src = MemReader::new(b"one two three");
        let mut dest = [0u8; 8];
        assert_eq!(read_word(&mut src, &mut dest), Ok(3));
        assert_eq!(&dest[..4], b"one\0");
        assert_eq!(read_word(&mut src, &mut dest), Ok(3));
        assert_eq!(&dest[..4], b"two\0");
        assert_eq!(read_word(&mut src, &mut dest), Ok(5));
        assert_eq!(&dest[..6], b"three\0");
        assert_eq!(
            read_word(&mut src, &mut dest),
            Err(ReadWordError::UnexpectedEof)
        );
    }

    #[test]
    fn test_read_word_zero_capacity_fails() {
        let mut src = MemReader::new(b"a");
        let mut dest: [u8; 0] = [];
        assert!(read_word(&mut src, &mut dest).is_err());
    }
}
