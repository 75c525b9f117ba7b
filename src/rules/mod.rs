// SPDX-License-Identifier: PMPL-1.0-or-later

//! Requirement generation and password validation
//!
//! This is the whole rule engine. Every front-end (the interactive game,
//! the `rules` and `check` commands) goes through these two entry points.

pub mod generator;
pub mod validator;

use crate::types::{Requirements, Verdict};
use rand::Rng;

pub use generator::RequirementGenerator;
pub use validator::{PasswordValidator, Tally};

/// Derive the rule set for `round`, drawing from `rng` only when a digit-sum
/// target is needed.
pub fn generate<R: Rng + ?Sized>(round: u32, rng: &mut R) -> Requirements {
    RequirementGenerator::new().generate(round, rng)
}

/// Check `password` against `reqs`, reporting the first rule it breaks.
pub fn validate(password: &str, reqs: &Requirements) -> Verdict {
    PasswordValidator::new(reqs).validate(password)
}
