// SPDX-License-Identifier: PMPL-1.0-or-later

//! Requirement generation properties across rounds

use pass_gauntlet::rules;
use pass_gauntlet::types::Requirements;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generate(round: u32, seed: u64) -> Requirements {
    let mut rng = StdRng::seed_from_u64(seed);
    rules::generate(round, &mut rng)
}

#[test]
fn test_round_one_baseline() {
    let reqs = generate(1, 0);
    assert_eq!(reqs.min_length, 7);
    assert_eq!(reqs.min_uppercase, 1);
    assert_eq!(reqs.min_lowercase, 1);
    assert_eq!(reqs.min_digits, 1);
    assert_eq!(reqs.min_symbols, 0);
    assert!(!reqs.require_start_upper_end_symbol);
    assert!(!reqs.require_no_consecutive_chars);
    assert!(!reqs.require_palindrome);
    assert!(!reqs.require_digit_sum);
}

#[test]
fn test_round_three_start_end_rule() {
    let reqs = generate(3, 0);
    assert!(reqs.require_start_upper_end_symbol);
    assert!(reqs.min_uppercase >= 1);
    assert!(reqs.min_symbols >= 1);
    assert!(reqs.min_length >= 2);
}

#[test]
fn test_invariants_hold_for_many_rounds() {
    for seed in 0..4 {
        for round in 1..=60 {
            let reqs = generate(round, seed);
            assert!(
                reqs.min_length >= reqs.class_minimum_total(),
                "length invariant broken at round {}",
                round
            );
            if reqs.require_start_upper_end_symbol {
                assert!(reqs.min_uppercase >= 1 && reqs.min_symbols >= 1);
                assert!(reqs.min_length >= 2);
            }
            if reqs.require_digit_sum {
                assert!(reqs.min_digits >= 1, "round {} needs a digit", round);
            }
        }
    }
}

#[test]
fn test_digit_sum_target_range() {
    for seed in 0..25 {
        for round in 7..=30 {
            let reqs = generate(round, seed);
            let low = 5 + round / 2;
            let high = low + round * 2;
            assert!(
                (low..=high).contains(&reqs.digit_sum_target),
                "round {} target {} outside {}..={}",
                round,
                reqs.digit_sum_target,
                low,
                high
            );
        }
    }
}

#[test]
fn test_digit_sum_target_unused_before_round_seven() {
    for round in 1..7 {
        let reqs = generate(round, 11);
        assert!(!reqs.require_digit_sum);
        assert_eq!(reqs.digit_sum_target, 0);
    }
}

#[test]
fn test_palindrome_only_on_round_five() {
    for round in 1..=20 {
        assert_eq!(
            generate(round, 0).require_palindrome,
            round == 5,
            "round {}",
            round
        );
    }
}

#[test]
fn test_special_rules_are_monotone() {
    let thresholds: [(u32, fn(&Requirements) -> bool); 3] = [
        (3, |r| r.require_start_upper_end_symbol),
        (4, |r| r.require_no_consecutive_chars),
        (7, |r| r.require_digit_sum),
    ];
    for (threshold, flag) in thresholds {
        for round in 1..=40 {
            assert_eq!(
                flag(&generate(round, 2)),
                round >= threshold,
                "threshold {} round {}",
                threshold,
                round
            );
        }
    }
}

#[test]
fn test_same_seed_same_requirements() {
    for round in [1, 5, 7, 12, 33] {
        assert_eq!(generate(round, 42), generate(round, 42));
    }
}
