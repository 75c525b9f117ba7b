// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console rendering for rounds, verdicts and the end-of-game summary

use crate::session::{GameEnd, GameSummary};
use crate::types::{Requirements, Verdict};
use colored::*;
use std::time::Duration;

/// Plain requirement lines, in display order.
pub fn requirement_lines(reqs: &Requirements) -> Vec<String> {
    let mut lines = vec![format!("Minimum Length: {}", reqs.min_length)];
    if reqs.min_uppercase > 0 {
        lines.push(format!("Minimum Uppercase: {}", reqs.min_uppercase));
    }
    if reqs.min_lowercase > 0 {
        lines.push(format!("Minimum Lowercase: {}", reqs.min_lowercase));
    }
    if reqs.min_digits > 0 {
        lines.push(format!("Minimum Digits: {}", reqs.min_digits));
    }
    if reqs.min_symbols > 0 {
        lines.push(format!(
            "Minimum Symbols (e.g., !@#$%^&*): {}",
            reqs.min_symbols
        ));
    }
    lines
}

pub fn special_rule_lines(reqs: &Requirements) -> Vec<String> {
    if !reqs.has_special_rules() {
        return vec!["(None this round)".to_string()];
    }
    let mut lines = Vec::new();
    if reqs.require_start_upper_end_symbol {
        lines.push("Must START with an Uppercase letter".to_string());
        lines.push("Must END with a Symbol".to_string());
    }
    if reqs.require_no_consecutive_chars {
        lines.push("No consecutive identical characters (e.g., 'aa', '11')".to_string());
    }
    if reqs.require_palindrome {
        lines.push("Must be a PALINDROME (reads the same forwards and backwards)".to_string());
    }
    if reqs.require_digit_sum {
        lines.push(format!(
            "The SUM of all digits must be EXACTLY {}",
            reqs.digit_sum_target
        ));
    }
    lines
}

/// Full text block for `reqs`, as printed by the `rules` command.
pub fn render_requirements(reqs: &Requirements) -> String {
    let mut out = String::from("Requirements:\n");
    for line in requirement_lines(reqs) {
        out.push_str(&format!("  - {}\n", line));
    }
    out.push_str("  --- Special Rules ---\n");
    for line in special_rule_lines(reqs) {
        out.push_str(&format!("  - {}\n", line));
    }
    out
}

pub fn render_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Valid => "Success! Requirements met.".to_string(),
        Verdict::Invalid(violation) => format!(
            "Failure! Password did not meet all requirements.\n    Validation Fail [{}]: {}",
            violation.kind(),
            violation.detail()
        ),
    }
}

pub fn summary_lines(summary: &GameSummary) -> Vec<String> {
    let mut lines = Vec::new();
    match &summary.end {
        Some(GameEnd::Failed { round, .. }) => lines.push(format!(
            "You failed to meet the requirements for round {}.",
            round
        )),
        Some(GameEnd::TimedOut { round }) => {
            lines.push(format!("You ran out of time on round {}.", round))
        }
        Some(GameEnd::InputClosed { round }) => {
            lines.push(format!("You left the game during round {}.", round))
        }
        None => {}
    }
    lines.push(format!(
        "You completed {} round(s).",
        summary.rounds_completed
    ));
    lines
}

pub fn print_banner() {
    println!("{}", "--- Password Gauntlet ---".bold().cyan());
    println!("You will be given password requirements and a time limit.");
    println!("Enter a password meeting the criteria before time runs out!");
}

pub fn print_round(round: u32, time_limit: Duration, reqs: &Requirements) {
    println!();
    println!("{}", format!("--- Round {} ---", round).bold());
    println!("Time Limit: {} seconds", time_limit.as_secs().to_string().yellow());
    println!("Requirements:");
    for line in requirement_lines(reqs) {
        println!("  - {}", line);
    }
    println!("  {}", "--- Special Rules ---".dimmed());
    for line in special_rule_lines(reqs) {
        println!("  - {}", line.magenta());
    }
}

pub fn print_verdict(verdict: &Verdict) {
    match verdict {
        Verdict::Valid => println!("{}", render_verdict(verdict).green().bold()),
        Verdict::Invalid(_) => println!("{}", render_verdict(verdict).red()),
    }
}

pub fn print_timeout() {
    println!("\n\n {}", "*** Time's up! ***".red().bold());
}

pub fn print_summary(summary: &GameSummary) {
    println!("\n{}", "--- Game Over ---".bold().cyan());
    for line in summary_lines(summary) {
        println!("{}", line);
    }
}
