// SPDX-License-Identifier: PMPL-1.0-or-later

//! Password validation behaviour and check ordering

use pass_gauntlet::rules::{self, Tally};
use pass_gauntlet::types::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn basic(min_length: usize) -> Requirements {
    Requirements {
        min_length,
        ..Requirements::default()
    }
}

#[test]
fn test_all_classes_valid() {
    let reqs = Requirements {
        min_length: 4,
        min_uppercase: 1,
        min_lowercase: 1,
        min_digits: 1,
        min_symbols: 1,
        ..Requirements::default()
    };
    assert_eq!(rules::validate("Ab1!", &reqs), Verdict::Valid);
}

#[test]
fn test_consecutive_duplicate_at_start() {
    let reqs = Requirements {
        require_no_consecutive_chars: true,
        ..basic(4)
    };
    assert_eq!(
        rules::validate("aabb", &reqs),
        Verdict::Invalid(Violation::ConsecutiveDuplicate {
            character: 'a',
            position: 0,
        })
    );
}

#[test]
fn test_palindrome_is_case_sensitive() {
    let reqs = Requirements {
        require_palindrome: true,
        ..basic(3)
    };
    assert_eq!(rules::validate("ABA", &reqs), Verdict::Valid);
    assert_eq!(
        rules::validate("ABa", &reqs).failure_kind(),
        Some(FailureKind::NotPalindrome)
    );
}

#[test]
fn test_digit_sum_exact_match() {
    let mut reqs = Requirements {
        require_digit_sum: true,
        digit_sum_target: 1,
        min_digits: 1,
        ..basic(2)
    };
    assert_eq!(rules::validate("A1", &reqs), Verdict::Valid);

    reqs.digit_sum_target = 2;
    assert_eq!(
        rules::validate("A1", &reqs),
        Verdict::Invalid(Violation::DigitSumMismatch {
            actual: 1,
            target: 2,
        })
    );
}

#[test]
fn test_unsatisfiable_digit_sum_reported_distinctly() {
    let reqs = Requirements {
        require_digit_sum: true,
        digit_sum_target: 3,
        min_digits: 0,
        ..basic(0)
    };
    // Even a password whose digits hit the target cannot pass.
    assert_eq!(
        rules::validate("x3", &reqs),
        Verdict::Invalid(Violation::UnsatisfiableDigitSum { target: 3 })
    );

    let zero_target = Requirements {
        digit_sum_target: 0,
        ..reqs
    };
    assert_eq!(rules::validate("xy", &zero_target), Verdict::Valid);
}

#[test]
fn test_too_short_reported_before_uppercase() {
    let reqs = Requirements {
        min_length: 10,
        min_uppercase: 3,
        ..Requirements::default()
    };
    assert_eq!(
        rules::validate("abc", &reqs),
        Verdict::Invalid(Violation::TooShort {
            actual: 3,
            required: 10,
        })
    );
}

#[test]
fn test_class_checks_in_order() {
    let reqs = Requirements {
        min_length: 1,
        min_uppercase: 1,
        min_lowercase: 1,
        min_digits: 1,
        min_symbols: 1,
        ..Requirements::default()
    };
    let cases = [
        ("abc1!", FailureKind::InsufficientUppercase),
        ("ABC1!", FailureKind::InsufficientLowercase),
        ("Abc!!", FailureKind::InsufficientDigits),
        ("Abc12", FailureKind::InsufficientSymbols),
    ];
    for (password, expected) in cases {
        assert_eq!(
            rules::validate(password, &reqs).failure_kind(),
            Some(expected),
            "password {:?}",
            password
        );
    }
}

#[test]
fn test_start_end_names_failing_side() {
    let reqs = Requirements {
        require_start_upper_end_symbol: true,
        ..basic(2)
    };
    assert_eq!(
        rules::validate("ab!", &reqs),
        Verdict::Invalid(Violation::StartEnd {
            side: StartEndSide::Start,
            found: 'a',
        })
    );
    assert_eq!(
        rules::validate("Ab1", &reqs),
        Verdict::Invalid(Violation::StartEnd {
            side: StartEndSide::End,
            found: '1',
        })
    );
    assert_eq!(rules::validate("Ab#", &reqs), Verdict::Valid);
}

#[test]
fn test_start_end_checked_before_consecutive() {
    let reqs = Requirements {
        require_start_upper_end_symbol: true,
        require_no_consecutive_chars: true,
        ..basic(2)
    };
    assert_eq!(
        rules::validate("aa1", &reqs).failure_kind(),
        Some(FailureKind::StartEndRule)
    );
}

#[test]
fn test_odd_input_is_classified_not_rejected() {
    let everything = Requirements {
        require_start_upper_end_symbol: true,
        require_no_consecutive_chars: true,
        require_palindrome: true,
        require_digit_sum: true,
        digit_sum_target: 4,
        min_digits: 1,
        ..Requirements::default()
    };
    for password in ["", " ", "\u{0}", "\u{1b}[A", "日本語", "A\u{7f}!"] {
        // None of these contain a digit, so the digit minimum trips first.
        assert_eq!(
            rules::validate(password, &everything).failure_kind(),
            Some(FailureKind::InsufficientDigits),
            "password {:?}",
            password
        );
        assert!(
            rules::validate(password, &Requirements::default()).is_valid(),
            "password {:?}",
            password
        );
    }
    assert_eq!(
        rules::validate("", &everything).failure_kind(),
        Some(FailureKind::InsufficientDigits)
    );
}

#[test]
fn test_validate_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(8);
    let reqs = rules::generate(8, &mut rng);
    for password in ["", "Hello1!", "Ab3cD4eF5gH6iJ7kL8m!"] {
        assert_eq!(
            rules::validate(password, &reqs),
            rules::validate(password, &reqs)
        );
    }
}

#[test]
fn test_generated_round_is_satisfiable() {
    let mut rng = StdRng::seed_from_u64(0);
    let reqs = rules::generate(4, &mut rng);
    // Round 4: length 12, 3 upper, 3 lower, 2 digits, 2 symbols, start/end, no repeats.
    let password = "ABCdef12x#y!";
    assert_eq!(Tally::of(password).length, reqs.min_length);
    assert_eq!(rules::validate(password, &reqs), Verdict::Valid);
}
