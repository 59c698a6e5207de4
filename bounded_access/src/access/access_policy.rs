// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Selects what happens when a requested range or index falls partially or fully
/// outside of a sequence.
///
/// | Policy         | Out of bounds range    | Out of bounds index | Inverted range     |
/// |----------------|------------------------|---------------------|--------------------|
/// | [`Strict`]     | `OutOfRange` error     | `IndexOutOfRange`   | `MalformedRange`   |
/// | [`Truncating`] | clamped to `[0, len]`  | not applicable      | `MalformedRange`   |
/// | [`Safe`]       | absent                 | absent              | `MalformedRange`   |
///
/// The string form is lowercase (`"strict"`, `"truncating"`, `"safe"`), both for
/// [`Display`](std::fmt::Display) / [`FromStr`](std::str::FromStr) (which ignores case)
/// and for serde.
///
/// [`Strict`]: AccessPolicy::Strict
/// [`Truncating`]: AccessPolicy::Truncating
/// [`Safe`]: AccessPolicy::Safe
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum AccessPolicy {
    /// Fail fast: any bounds violation is an error.
    #[default]
    Strict,
    /// Clamp the range to the sequence, possibly producing an empty subsequence.
    Truncating,
    /// Produce the exact subsequence or element, or nothing at all.
    Safe,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case("strict", AccessPolicy::Strict)]
    #[test_case("Truncating", AccessPolicy::Truncating)]
    #[test_case("SAFE", AccessPolicy::Safe)]
    fn test_parse_ignores_case(input: &str, expected: AccessPolicy) {
        assert_eq!(AccessPolicy::from_str(input), Ok(expected));
    }

    #[test]
    fn test_parse_unknown_policy_fails() {
        assert!(AccessPolicy::from_str("clamp").is_err());
    }

    #[test]
    fn test_display_is_lowercase() {
        let names: Vec<String> = AccessPolicy::iter().map(|it| it.to_string()).collect();
        assert_eq!(names, vec!["strict", "truncating", "safe"]);
    }

    #[test]
    fn test_default_is_strict() {
        assert_eq!(AccessPolicy::default(), AccessPolicy::Strict);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&AccessPolicy::Truncating).unwrap();
        assert_eq!(json, "\"truncating\"");

        let parsed: AccessPolicy = serde_json::from_str("\"safe\"").unwrap();
        assert_eq!(parsed, AccessPolicy::Safe);
    }
}
