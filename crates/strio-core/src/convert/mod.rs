//! Unsigned decimal conversion: integer to text and text to integer.

use crate::io::ByteSink;

/// Digits needed for the largest `u64` value (`18446744073709551615`).
pub const MAX_UINT_DIGITS: usize = 20;

/// Result of [`parse_uint`]: the accumulated value plus how many digit bytes
/// produced it.
///
/// `consumed` distinguishes "parsed the literal zero" (`{0, 1}`) from "no
/// leading digits at all" (`{0, 0}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedUint {
    pub value: u64,
    pub consumed: usize,
}

/// Formats `n` as minimal decimal ASCII into `buf`, returning the text.
///
/// No leading zeros; the value `0` formats as `"0"`. Digits are produced
/// least-significant-first by repeated divide-by-10, then emitted from a
/// reversed tail of `buf`.
pub fn format_uint(n: u64, buf: &mut [u8; MAX_UINT_DIGITS]) -> &[u8] {
    let mut i = MAX_UINT_DIGITS;
    let mut rest = n;
    loop {
        i -= 1;
        buf[i] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    &buf[i..]
}

/// Writes the minimal decimal representation of `n` to `sink`.
///
/// No separators and no newline; pair with
/// [`print_newline`](crate::token::print_newline) when a line is wanted.
pub fn print_uint(sink: &mut impl ByteSink, n: u64) {
    let mut buf = [0u8; MAX_UINT_DIGITS];
    sink.write_bytes(format_uint(n, &mut buf));
}

/// Parses leading ASCII decimal digits from `s`.
///
/// Accumulates `value = value * 10 + digit` in `u64` with wrapping
/// arithmetic: input longer than 20 significant digits wraps silently, the
/// fixed-register behavior of the routine set this follows. Scanning stops
/// at the first non-digit byte (a NUL terminator included). Total over any
/// input; inspect [`ParsedUint::consumed`] to tell "no number" from "zero".
pub fn parse_uint(s: &[u8]) -> ParsedUint {
    let mut value: u64 = 0;
    let mut consumed = 0;
    for &b in s {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.wrapping_mul(10).wrapping_add(u64::from(b - b'0'));
        consumed += 1;
    }
    ParsedUint { value, consumed }
}
