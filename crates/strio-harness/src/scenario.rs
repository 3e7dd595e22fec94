//! Scenario execution.
//!
//! A scenario is the in-process equivalent of one of the throwaway wrapper
//! programs the original driver assembled around the library: it wires fixed
//! data-section strings and a stdin byte stream into a single entry point,
//! then reports through the process observation channels — an exit status
//! byte and captured stdout. Running in-process means the harness substitutes
//! [`MemReader`] for fd 0 and a capture sink for fd 1; the primitive code
//! under test is byte-for-byte the code a real program would link.

use thiserror::Error;

use strio_core::io::MemReader;
use strio_core::{
    parse_uint, print_char, print_newline, print_string, print_uint, read_char, read_word,
    string_copy, string_equals, string_length, ReadWordError,
};

/// What a completed scenario run exposed to the outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Exit status byte the wrapper program would have reported.
    pub exit_code: u8,
    /// Bytes the run wrote to standard output.
    pub stdout: Vec<u8>,
}

/// Scenario execution failures.
///
/// These are harness-level errors (a malformed fixture), distinct from the
/// reported-failure outcomes of the primitives themselves, which scenarios
/// fold into their exit codes.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),
    #[error("scenario '{scenario}' requires argument {index}")]
    MissingArg { scenario: String, index: usize },
    #[error("scenario '{scenario}' argument {index} is not a number: '{raw}'")]
    BadNumber {
        scenario: String,
        index: usize,
        raw: String,
    },
}

/// Builds the NUL-terminated data-section image of an argument string.
fn terminated(arg: &str) -> Vec<u8> {
    let mut buf = arg.as_bytes().to_vec();
    buf.push(0);
    buf
}

fn arg<'a>(scenario: &str, args: &'a [String], index: usize) -> Result<&'a str, ScenarioError> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| ScenarioError::MissingArg {
            scenario: scenario.to_string(),
            index,
        })
}

fn numeric_arg(scenario: &str, args: &[String], index: usize) -> Result<u64, ScenarioError> {
    let raw = arg(scenario, args, index)?;
    raw.parse().map_err(|_| ScenarioError::BadNumber {
        scenario: scenario.to_string(),
        index,
        raw: raw.to_string(),
    })
}

/// Runs one named scenario and returns its observation.
///
/// Exit codes are byte-wide, exactly as a process exit status is: scenarios
/// that report a length truncate it to the low byte.
pub fn execute_scenario(
    scenario: &str,
    args: &[String],
    stdin: &[u8],
) -> Result<Observation, ScenarioError> {
    let mut input = MemReader::new(stdin);
    let mut stdout: Vec<u8> = Vec::new();

    let exit_code = match scenario {
        "string_length" => {
            let s = terminated(arg(scenario, args, 0)?);
            string_length(&s) as u8
        }
        "string_equals" => {
            let a = terminated(arg(scenario, args, 0)?);
            let b = terminated(arg(scenario, args, 1)?);
            u8::from(string_equals(&a, &b))
        }
        "string_copy" => {
            let src = terminated(arg(scenario, args, 0)?);
            let capacity = numeric_arg(scenario, args, 1)? as usize;
            let mut dest = vec![0xAAu8; capacity];
            match string_copy(&src, &mut dest) {
                Ok(_) => {
                    print_string(&mut stdout, &dest);
                    print_newline(&mut stdout);
                    0
                }
                Err(_) => 1,
            }
        }
        "parse_uint" => {
            let s = terminated(arg(scenario, args, 0)?);
            let parsed = parse_uint(&s);
            print_uint(&mut stdout, parsed.value);
            print_char(&mut stdout, b' ');
            print_uint(&mut stdout, parsed.consumed as u64);
            print_newline(&mut stdout);
            0
        }
        "print_uint" => {
            let n = numeric_arg(scenario, args, 0)?;
            print_uint(&mut stdout, n);
            0
        }
        "print_string" => {
            let s = terminated(arg(scenario, args, 0)?);
            print_string(&mut stdout, &s);
            0
        }
        "print_char" => {
            let raw = arg(scenario, args, 0)?;
            let byte = raw.as_bytes().first().copied().unwrap_or(0);
            print_char(&mut stdout, byte);
            0
        }
        "print_newline" => {
            print_newline(&mut stdout);
            0
        }
        "read_char" => match read_char(&mut input) {
            Some(byte) => {
                print_char(&mut stdout, byte);
                0
            }
            None => 1,
        },
        "read_word" => {
            let capacity = numeric_arg(scenario, args, 0)? as usize;
            let mut dest = vec![0u8; capacity];
            match read_word(&mut input, &mut dest) {
                Ok(_) => {
                    print_string(&mut stdout, &dest);
                    print_newline(&mut stdout);
                    0
                }
                Err(ReadWordError::UnexpectedEof) => 1,
                Err(ReadWordError::BufferTooSmall { .. }) => 2,
            }
        }
        "echo_words" => {
            // Echo every token on its own line; exit with the token count.
            let capacity = numeric_arg(scenario, args, 0)? as usize;
            let mut dest = vec![0u8; capacity];
            let mut count: u8 = 0;
            loop {
                match read_word(&mut input, &mut dest) {
                    Ok(_) => {
                        print_string(&mut stdout, &dest);
                        print_newline(&mut stdout);
                        count = count.wrapping_add(1);
                    }
                    Err(ReadWordError::UnexpectedEof) => break count,
                    Err(ReadWordError::BufferTooSmall { .. }) => break 255,
                }
            }
        }
        other => return Err(ScenarioError::UnknownScenario(other.to_string())),
    };

    Ok(Observation { exit_code, stdout })
}
