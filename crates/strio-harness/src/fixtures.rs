//! Fixture loading and management.
//!
//! A fixture case names a scenario (a small wrapper program over the
//! primitive library), the data-section strings and stdin bytes it runs
//! with, and what to observe afterwards. The two observation channels are
//! the ones the original test driver used: the process exit status (one
//! byte) and captured standard-output bytes. Either or both may be pinned.

use serde::{Deserialize, Serialize};

/// What a fixture case expects to observe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expectation {
    /// Expected exit status byte, if pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<u8>,
    /// Expected captured stdout, if pinned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Scenario being driven (see `scenario::execute_scenario`).
    pub scenario: String,
    /// Data-section string arguments for the scenario.
    #[serde(default)]
    pub args: Vec<String>,
    /// Bytes supplied on standard input.
    #[serde(default)]
    pub stdin: String,
    /// Expected observation.
    pub expect: Expectation,
}

/// A collection of fixture cases for one primitive family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Primitive family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }
}

fn case(
    name: &str,
    scenario: &str,
    args: &[&str],
    stdin: &str,
    exit_code: Option<u8>,
    stdout: Option<&str>,
) -> FixtureCase {
    FixtureCase {
        name: name.to_string(),
        scenario: scenario.to_string(),
        args: args.iter().map(|s| (*s).to_string()).collect(),
        stdin: stdin.to_string(),
        expect: Expectation {
            exit_code,
            stdout: stdout.map(str::to_string),
        },
    }
}

/// The built-in conformance suite.
///
/// Distilled from the wrapper programs the original out-of-process driver
/// generated: each case is one library entry point driven with fixed inputs,
/// observed through its exit status or captured stdout.
#[must_use]
pub fn builtin_suite() -> Vec<FixtureSet> {
    vec![
        FixtureSet {
            version: "v1".to_string(),
            family: "string".to_string(),
            cases: vec![
                case("length_hello", "string_length", &["hello"], "", Some(5), None),
                case("length_empty", "string_length", &[""], "", Some(0), None),
                case(
                    "equals_same",
                    "string_equals",
                    &["hello", "hello"],
                    "",
                    Some(1),
                    None,
                ),
                case(
                    "equals_different",
                    "string_equals",
                    &["hello", "world"],
                    "",
                    Some(0),
                    None,
                ),
                case(
                    "equals_prefix_is_not_equal",
                    "string_equals",
                    &["hi", "hi!"],
                    "",
                    Some(0),
                    None,
                ),
                case(
                    "copy_fits",
                    "string_copy",
                    &["hello", "10"],
                    "",
                    Some(0),
                    Some("hello\n"),
                ),
                case(
                    "copy_overflows",
                    "string_copy",
                    &["toolong", "5"],
                    "",
                    Some(1),
                    Some(""),
                ),
            ],
        },
        FixtureSet {
            version: "v1".to_string(),
            family: "convert".to_string(),
            cases: vec![
                case("print_zero", "print_uint", &["0"], "", Some(0), Some("0")),
                case("print_five", "print_uint", &["5"], "", Some(0), Some("5")),
                case(
                    "print_forty_two",
                    "print_uint",
                    &["42"],
                    "",
                    Some(0),
                    Some("42"),
                ),
                case(
                    "print_u64_max",
                    "print_uint",
                    &["18446744073709551615"],
                    "",
                    Some(0),
                    Some("18446744073709551615"),
                ),
                case(
                    "parse_forty_five",
                    "parse_uint",
                    &["45"],
                    "",
                    Some(0),
                    Some("45 2\n"),
                ),
                case(
                    "parse_stops_at_non_digit",
                    "parse_uint",
                    &["123abc"],
                    "",
                    Some(0),
                    Some("123 3\n"),
                ),
                case(
                    "parse_no_digits",
                    "parse_uint",
                    &["abc"],
                    "",
                    Some(0),
                    Some("0 0\n"),
                ),
            ],
        },
        FixtureSet {
            version: "v1".to_string(),
            family: "token".to_string(),
            cases: vec![
                case(
                    "print_string_hello",
                    "print_string",
                    &["hello"],
                    "",
                    Some(0),
                    Some("hello"),
                ),
                case("print_char_a", "print_char", &["A"], "", Some(0), Some("A")),
                case("newline", "print_newline", &[], "", Some(0), Some("\n")),
                case(
                    "read_char_a",
                    "read_char",
                    &[],
                    "A",
                    Some(0),
                    Some("A"),
                ),
                case("read_char_eof", "read_char", &[], "", Some(1), Some("")),
                case(
                    "word_simple",
                    "read_word",
                    &["32"],
                    "hello world",
                    Some(0),
                    Some("hello\n"),
                ),
                case(
                    "word_leading_whitespace",
                    "read_word",
                    &["32"],
                    "   spaced",
                    Some(0),
                    Some("spaced\n"),
                ),
                case("word_empty_input", "read_word", &["32"], "", Some(1), Some("")),
                case(
                    "word_overflow",
                    "read_word",
                    &["4"],
                    "toolong",
                    Some(2),
                    Some(""),
                ),
                case(
                    "word_exact_capacity_still_overflows",
                    "read_word",
                    &["5"],
                    "word",
                    Some(2),
                    Some(""),
                ),
                case(
                    "echo_all_words",
                    "echo_words",
                    &["32"],
                    "  one two\tthree\n",
                    Some(3),
                    Some("one\ntwo\nthree\n"),
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_suite_round_trips_through_json() {
        for set in builtin_suite() {
            let json = set.to_json().expect("serialize");
            let back = FixtureSet::from_json(&json).expect("deserialize");
            assert_eq!(back.family, set.family);
            assert_eq!(back.cases.len(), set.cases.len());
        }
    }

    #[test]
    fn fixture_defaults_apply() {
        let set = FixtureSet::from_json(
            r#"{
                "version":"v1",
                "family":"string",
                "cases":[
                    {"name":"n","scenario":"string_length","args":["x"],"expect":{"exit_code":1}}
                ]
            }"#,
        )
        .expect("valid fixture json");
        assert_eq!(set.cases[0].stdin, "");
        assert!(set.cases[0].expect.stdout.is_none());
    }
}
