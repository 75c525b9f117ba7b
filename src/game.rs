// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive game loop
//!
//! Each round: generate requirements, show them, capture a password under
//! the round's deadline, validate it, feed the outcome to the session.
//! A timed-out or cancelled capture never reaches the validator.

use crate::config::GameConfig;
use crate::display;
use crate::input::{self, Capture, Deadline, TerminalKeys};
use crate::rules;
use crate::session::{GameSummary, RoundOutcome, Session};
use crate::types::Verdict;
use anyhow::Result;
use crossterm::{cursor, execute, style::Print, terminal};
use rand::Rng;
use std::io::{stdout, Write};
use std::time::Duration;

/// Play until the session ends. `capture` is called at most once per round
/// with that round's deadline and the configured length cap.
pub fn play<R, C>(config: &GameConfig, rng: &mut R, mut capture: C) -> Result<GameSummary>
where
    R: Rng + ?Sized,
    C: FnMut(Deadline, usize) -> Result<Capture>,
{
    let mut session = Session::new(config);

    while !session.is_over() {
        let round = session.round();
        let reqs = rules::generate(round, rng);
        display::print_round(round, session.time_limit(), &reqs);

        let deadline = Deadline::after(session.time_limit());
        let outcome = match capture(deadline, config.max_password_len)? {
            Capture::TimedOut => {
                display::print_timeout();
                RoundOutcome::TimedOut
            }
            Capture::Cancelled => RoundOutcome::InputClosed,
            Capture::Entered(password) => {
                println!();
                let verdict = rules::validate(&password, &reqs);
                display::print_verdict(&verdict);
                match verdict {
                    Verdict::Valid => RoundOutcome::Passed,
                    Verdict::Invalid(violation) => RoundOutcome::Failed(violation),
                }
            }
        };
        tracing::debug!(round, ?outcome, "round finished");
        session.record(outcome);
    }

    let summary = session.summary();
    display::print_summary(&summary);
    Ok(summary)
}

/// Capture from the real terminal with a live countdown on the prompt line.
pub fn terminal_capture(deadline: Deadline, max_len: usize) -> Result<Capture> {
    input::with_raw_mode(|| {
        let mut out = stdout();
        input::capture_hidden(&mut TerminalKeys, deadline, max_len, |remaining| {
            draw_prompt(&mut out, remaining)
        })
    })
}

fn draw_prompt(out: &mut impl Write, remaining: Duration) -> Result<()> {
    // Round up so the prompt reads 1s until the very end.
    let secs = remaining.as_millis().div_ceil(1000);
    execute!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(terminal::ClearType::CurrentLine),
        Print(format!("Enter password ({}s left): ", secs))
    )?;
    Ok(())
}
