// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for pass-gauntlet
//!
//! `Requirements` is produced once per round by the generator and is
//! read-only afterwards. `Verdict` is the validator's answer for a single
//! password; an invalid verdict always carries exactly one `Violation`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule set a password must satisfy for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub min_length: usize,
    pub min_uppercase: usize,
    pub min_lowercase: usize,
    pub min_digits: usize,
    pub min_symbols: usize,
    #[serde(default)]
    pub require_start_upper_end_symbol: bool,
    #[serde(default)]
    pub require_no_consecutive_chars: bool,
    #[serde(default)]
    pub require_palindrome: bool,
    #[serde(default)]
    pub require_digit_sum: bool,
    /// Only meaningful when `require_digit_sum` is set.
    #[serde(default)]
    pub digit_sum_target: u32,
}

impl Requirements {
    /// Sum of the four per-class minimums.
    pub fn class_minimum_total(&self) -> usize {
        self.min_uppercase + self.min_lowercase + self.min_digits + self.min_symbols
    }

    pub fn has_special_rules(&self) -> bool {
        self.require_start_upper_end_symbol
            || self.require_no_consecutive_chars
            || self.require_palindrome
            || self.require_digit_sum
    }
}

/// The four mutually exclusive character classes counted by the validator.
/// Whitespace belongs to none of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub fn of(ch: char) -> Option<Self> {
        if ch.is_uppercase() {
            Some(CharClass::Uppercase)
        } else if ch.is_lowercase() {
            Some(CharClass::Lowercase)
        } else if ch.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if ch.is_whitespace() {
            None
        } else {
            Some(CharClass::Symbol)
        }
    }
}

/// Which end of the password broke the start/end rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartEndSide {
    Start,
    End,
}

/// Enumerated failure reason, one per validator check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    TooShort,
    InsufficientUppercase,
    InsufficientLowercase,
    InsufficientDigits,
    InsufficientSymbols,
    StartEndRule,
    ConsecutiveDuplicate,
    NotPalindrome,
    DigitSumMismatch,
    UnsatisfiableDigitSum,
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::TooShort => "too short",
            FailureKind::InsufficientUppercase => "insufficient uppercase",
            FailureKind::InsufficientLowercase => "insufficient lowercase",
            FailureKind::InsufficientDigits => "insufficient digits",
            FailureKind::InsufficientSymbols => "insufficient symbols",
            FailureKind::StartEndRule => "start/end rule violated",
            FailureKind::ConsecutiveDuplicate => "consecutive duplicate",
            FailureKind::NotPalindrome => "not a palindrome",
            FailureKind::DigitSumMismatch => "digit sum mismatch",
            FailureKind::UnsatisfiableDigitSum => "unsatisfiable digit sum",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single violated rule together with the numbers that explain it.
///
/// Positions are zero-based character indices, not byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Violation {
    TooShort { actual: usize, required: usize },
    InsufficientUppercase { found: usize, required: usize },
    InsufficientLowercase { found: usize, required: usize },
    InsufficientDigits { found: usize, required: usize },
    InsufficientSymbols { found: usize, required: usize },
    /// The start/end rule is active but there is nothing to inspect.
    EmptyPassword,
    StartEnd { side: StartEndSide, found: char },
    ConsecutiveDuplicate { character: char, position: usize },
    NotPalindrome,
    DigitSumMismatch { actual: u64, target: u32 },
    /// Digit sum demanded with a nonzero target while zero digits are required.
    UnsatisfiableDigitSum { target: u32 },
}

impl Violation {
    pub fn kind(&self) -> FailureKind {
        match self {
            Violation::TooShort { .. } => FailureKind::TooShort,
            Violation::InsufficientUppercase { .. } => FailureKind::InsufficientUppercase,
            Violation::InsufficientLowercase { .. } => FailureKind::InsufficientLowercase,
            Violation::InsufficientDigits { .. } => FailureKind::InsufficientDigits,
            Violation::InsufficientSymbols { .. } => FailureKind::InsufficientSymbols,
            Violation::EmptyPassword | Violation::StartEnd { .. } => FailureKind::StartEndRule,
            Violation::ConsecutiveDuplicate { .. } => FailureKind::ConsecutiveDuplicate,
            Violation::NotPalindrome => FailureKind::NotPalindrome,
            Violation::DigitSumMismatch { .. } => FailureKind::DigitSumMismatch,
            Violation::UnsatisfiableDigitSum { .. } => FailureKind::UnsatisfiableDigitSum,
        }
    }

    /// Human-readable explanation with the offending counts or positions.
    pub fn detail(&self) -> String {
        match self {
            Violation::TooShort { actual, required } => {
                format!("Too short (Length: {}, Required: {})", actual, required)
            }
            Violation::InsufficientUppercase { found, required } => format!(
                "Not enough uppercase (Found: {}, Required: {})",
                found, required
            ),
            Violation::InsufficientLowercase { found, required } => format!(
                "Not enough lowercase (Found: {}, Required: {})",
                found, required
            ),
            Violation::InsufficientDigits { found, required } => {
                format!("Not enough digits (Found: {}, Required: {})", found, required)
            }
            Violation::InsufficientSymbols { found, required } => {
                format!("Not enough symbols (Found: {}, Required: {})", found, required)
            }
            Violation::EmptyPassword => "Cannot check start/end on an empty password".to_string(),
            Violation::StartEnd {
                side: StartEndSide::Start,
                found,
            } => format!("Must start with an uppercase letter (starts with {:?})", found),
            Violation::StartEnd {
                side: StartEndSide::End,
                found,
            } => format!("Must end with a symbol (ends with {:?})", found),
            Violation::ConsecutiveDuplicate {
                character,
                position,
            } => format!(
                "Found consecutive identical characters ('{}{}') at position {}",
                character, character, position
            ),
            Violation::NotPalindrome => "Password is not a palindrome".to_string(),
            Violation::DigitSumMismatch { actual, target } => format!(
                "Sum of digits is {}, but required sum is {}",
                actual, target
            ),
            Violation::UnsatisfiableDigitSum { target } => format!(
                "Digit sum of {} required, but the rule set requires no digits",
                target
            ),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.detail())
    }
}

/// Outcome of validating one password against one `Requirements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "violation", rename_all = "lowercase")]
pub enum Verdict {
    Valid,
    Invalid(Violation),
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(violation) => Some(violation),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.violation().map(Violation::kind)
    }
}
