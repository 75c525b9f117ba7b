// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pass-Gauntlet — type a password that satisfies an escalating rule set
//! before the clock runs out.
//!
//! The rule engine in [`rules`] is pure: [`rules::generate`] derives a
//! [`types::Requirements`] record from a round number and an injected RNG,
//! and [`rules::validate`] reports the first rule a password breaks. The
//! remaining modules are the terminal host around it:
//! 1. **session**: round counter and shrinking time budget.
//! 2. **input**: hidden key capture bounded by an explicit deadline.
//! 3. **game**: the interactive loop tying the two to the engine.

pub mod config;
pub mod display;
pub mod game;
pub mod input;
pub mod output;
pub mod rules;
pub mod session;
pub mod types;
