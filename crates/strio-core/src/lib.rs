//! # strio-core
//!
//! Unbuffered console I/O and NUL-terminated string primitives.
//!
//! This crate is the kind of routine set a freestanding program links against
//! when it has no runtime support: length/compare/copy over NUL-terminated
//! byte buffers, unsigned decimal formatting and parsing, and byte-at-a-time
//! standard I/O issued directly as syscalls with no buffering.
//!
//! All buffers are caller-owned; nothing here allocates, retains state across
//! calls, or closes the process file descriptors. The process-global stdin
//! and stdout are modeled as explicit [`io::ByteSource`] / [`io::ByteSink`]
//! handles so tests can substitute in-memory streams.

#![deny(unsafe_code)]

pub mod convert;
pub mod io;
pub mod process;
pub mod string;
#[allow(unsafe_code)]
#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
pub mod syscall;
pub mod token;

// Re-export commonly used items.
pub use convert::{MAX_UINT_DIGITS, ParsedUint, format_uint, parse_uint, print_uint};
pub use io::{ByteSink, ByteSource, MemReader, Stdin, Stdout};
pub use string::{CopyError, string_copy, string_equals, string_length};
pub use token::{
    ReadWordError, print_char, print_newline, print_string, read_char, read_word,
};
