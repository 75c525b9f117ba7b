// SPDX-License-Identifier: PMPL-1.0-or-later

//! Password validation against a round's requirements
//!
//! Checks run in a fixed order and stop at the first failure:
//! length, the four class minimums, start/end, consecutive duplicates,
//! palindrome, digit sum. Reordering them changes which reason the player
//! sees, so the order is part of the contract.

use crate::types::{CharClass, Requirements, StartEndSide, Verdict, Violation};

/// Per-class counts and digit sum accumulated in a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub length: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub symbols: usize,
    pub digit_sum: u64,
}

impl Tally {
    pub fn of(password: &str) -> Self {
        let mut tally = Tally::default();
        for ch in password.chars() {
            tally.length += 1;
            match CharClass::of(ch) {
                Some(CharClass::Uppercase) => tally.uppercase += 1,
                Some(CharClass::Lowercase) => tally.lowercase += 1,
                Some(CharClass::Digit) => {
                    tally.digits += 1;
                    tally.digit_sum += u64::from(ch.to_digit(10).unwrap_or(0));
                }
                Some(CharClass::Symbol) => tally.symbols += 1,
                None => {}
            }
        }
        tally
    }
}

pub struct PasswordValidator<'a> {
    reqs: &'a Requirements,
}

impl<'a> PasswordValidator<'a> {
    pub fn new(reqs: &'a Requirements) -> Self {
        Self { reqs }
    }

    pub fn validate(&self, password: &str) -> Verdict {
        let verdict = match self.first_violation(password) {
            Some(violation) => Verdict::Invalid(violation),
            None => Verdict::Valid,
        };
        tracing::debug!(kind = ?verdict.failure_kind(), "password validated");
        verdict
    }

    fn first_violation(&self, password: &str) -> Option<Violation> {
        let tally = Tally::of(password);
        self.check_counts(&tally)
            .or_else(|| self.check_start_end(password))
            .or_else(|| self.check_consecutive(password))
            .or_else(|| self.check_palindrome(password))
            .or_else(|| self.check_digit_sum(&tally))
    }

    fn check_counts(&self, tally: &Tally) -> Option<Violation> {
        let reqs = self.reqs;
        if tally.length < reqs.min_length {
            return Some(Violation::TooShort {
                actual: tally.length,
                required: reqs.min_length,
            });
        }
        if tally.uppercase < reqs.min_uppercase {
            return Some(Violation::InsufficientUppercase {
                found: tally.uppercase,
                required: reqs.min_uppercase,
            });
        }
        if tally.lowercase < reqs.min_lowercase {
            return Some(Violation::InsufficientLowercase {
                found: tally.lowercase,
                required: reqs.min_lowercase,
            });
        }
        if tally.digits < reqs.min_digits {
            return Some(Violation::InsufficientDigits {
                found: tally.digits,
                required: reqs.min_digits,
            });
        }
        if tally.symbols < reqs.min_symbols {
            return Some(Violation::InsufficientSymbols {
                found: tally.symbols,
                required: reqs.min_symbols,
            });
        }
        None
    }

    fn check_start_end(&self, password: &str) -> Option<Violation> {
        if !self.reqs.require_start_upper_end_symbol {
            return None;
        }
        let (Some(first), Some(last)) = (password.chars().next(), password.chars().last())
        else {
            return Some(Violation::EmptyPassword);
        };
        if CharClass::of(first) != Some(CharClass::Uppercase) {
            return Some(Violation::StartEnd {
                side: StartEndSide::Start,
                found: first,
            });
        }
        if CharClass::of(last) != Some(CharClass::Symbol) {
            return Some(Violation::StartEnd {
                side: StartEndSide::End,
                found: last,
            });
        }
        None
    }

    fn check_consecutive(&self, password: &str) -> Option<Violation> {
        if !self.reqs.require_no_consecutive_chars {
            return None;
        }
        let chars: Vec<char> = password.chars().collect();
        chars
            .windows(2)
            .position(|pair| pair[0] == pair[1])
            .map(|position| Violation::ConsecutiveDuplicate {
                character: chars[position],
                position,
            })
    }

    fn check_palindrome(&self, password: &str) -> Option<Violation> {
        if !self.reqs.require_palindrome {
            return None;
        }
        if password.chars().eq(password.chars().rev()) {
            None
        } else {
            Some(Violation::NotPalindrome)
        }
    }

    fn check_digit_sum(&self, tally: &Tally) -> Option<Violation> {
        let reqs = self.reqs;
        if !reqs.require_digit_sum {
            return None;
        }
        // Generation never produces this; fail closed if it shows up anyway.
        if reqs.min_digits == 0 && reqs.digit_sum_target != 0 {
            tracing::warn!(
                target_sum = reqs.digit_sum_target,
                "digit sum required with zero minimum digits"
            );
            return Some(Violation::UnsatisfiableDigitSum {
                target: reqs.digit_sum_target,
            });
        }
        if tally.digit_sum != u64::from(reqs.digit_sum_target) {
            return Some(Violation::DigitSumMismatch {
                actual: tally.digit_sum,
                target: reqs.digit_sum_target,
            });
        }
        None
    }
}
