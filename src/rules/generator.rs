// SPDX-License-Identifier: PMPL-1.0-or-later

//! Round-based requirement generation

use crate::types::Requirements;
use rand::Rng;

/// Starting minimum password length before round scaling.
pub const BASE_MIN_LEN: usize = 6;
/// First round that requires an uppercase start and a symbol end.
pub const START_END_ROUND: u32 = 3;
/// First round that forbids identical neighbouring characters.
pub const NO_CONSECUTIVE_ROUND: u32 = 4;
/// The only round that demands a palindrome.
pub const PALINDROME_ROUND: u32 = 5;
/// First round that pins the sum of digits.
pub const DIGIT_SUM_ROUND: u32 = 7;
/// Fixed part of the digit-sum target.
pub const DIGIT_SUM_BASE: u32 = 5;

#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementGenerator;

impl RequirementGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate<R: Rng + ?Sized>(&self, round: u32, rng: &mut R) -> Requirements {
        let r = round as usize;
        let mut reqs = Requirements {
            min_length: BASE_MIN_LEN + r + r / 2,
            min_uppercase: 1 + r / 2,
            min_lowercase: 1 + r / 2,
            min_digits: 1 + r / 3,
            min_symbols: if round > 1 { 1 + (r - 1) / 3 } else { 0 },
            ..Requirements::default()
        };
        clamp_length(&mut reqs);

        if round >= START_END_ROUND {
            reqs.require_start_upper_end_symbol = true;
            reqs.min_length = reqs.min_length.max(2);
            reqs.min_uppercase = reqs.min_uppercase.max(1);
            reqs.min_symbols = reqs.min_symbols.max(1);
        }

        if round >= NO_CONSECUTIVE_ROUND {
            reqs.require_no_consecutive_chars = true;
        }

        // Single round only; later rounds drop it again.
        if round == PALINDROME_ROUND {
            reqs.require_palindrome = true;
        }

        if round >= DIGIT_SUM_ROUND {
            reqs.require_digit_sum = true;
            reqs.min_digits = reqs.min_digits.max(1);
            reqs.digit_sum_target = digit_sum_target(round, rng);
        }

        clamp_length(&mut reqs);

        tracing::debug!(round, ?reqs, "generated requirements");
        reqs
    }
}

/// `5 + round/2 + U{0..=2*round}`, one draw from `rng`.
fn digit_sum_target<R: Rng + ?Sized>(round: u32, rng: &mut R) -> u32 {
    let spread = rng.gen_range(0..=round.saturating_mul(2));
    DIGIT_SUM_BASE
        .saturating_add(round / 2)
        .saturating_add(spread)
}

fn clamp_length(reqs: &mut Requirements) {
    reqs.min_length = reqs.min_length.max(reqs.class_minimum_total());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    #[test]
    fn test_round_two_adds_symbols() {
        let mut rng = StdRng::seed_from_u64(1);
        let reqs = RequirementGenerator::new().generate(2, &mut rng);
        assert_eq!(reqs.min_length, 9);
        assert_eq!(reqs.min_uppercase, 2);
        assert_eq!(reqs.min_lowercase, 2);
        assert_eq!(reqs.min_digits, 1);
        assert_eq!(reqs.min_symbols, 1);
        assert!(!reqs.has_special_rules());
    }

    #[test]
    fn test_round_zero_is_total() {
        let mut rng = StdRng::seed_from_u64(1);
        let reqs = RequirementGenerator::new().generate(0, &mut rng);
        assert_eq!(reqs.min_symbols, 0);
        assert!(reqs.min_length >= reqs.class_minimum_total());
    }

    #[test]
    fn test_no_draw_before_digit_sum_round() {
        let generator = RequirementGenerator::new();
        for round in 1..DIGIT_SUM_ROUND {
            let mut rng = StdRng::seed_from_u64(99);
            let mut untouched = rng.clone();
            generator.generate(round, &mut rng);
            assert_eq!(rng.next_u64(), untouched.next_u64(), "round {}", round);
        }
    }

    #[test]
    fn test_digit_sum_round_consumes_entropy() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut untouched = rng.clone();
        RequirementGenerator::new().generate(DIGIT_SUM_ROUND, &mut rng);
        assert_ne!(rng.next_u64(), untouched.next_u64());
    }

    #[test]
    fn test_huge_round_does_not_overflow_target() {
        let mut rng = StdRng::seed_from_u64(5);
        let reqs = RequirementGenerator::new().generate(u32::MAX, &mut rng);
        assert!(reqs.require_digit_sum);
        assert!(reqs.digit_sum_target >= DIGIT_SUM_BASE);
    }
}
