// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hidden, deadline-bounded password capture
//!
//! The deadline is an explicit value handed to `capture_hidden`; nothing
//! global is flipped when it expires. Keys come from a `KeySource` so the
//! capture loop can be driven by crossterm in the game and by a script in
//! tests.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::time::{Duration, Instant};

/// Upper bound on a single wait, so the countdown can be redrawn.
pub const TICK: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    pub fn after(limit: Duration) -> Self {
        Self {
            at: Instant::now() + limit,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    /// Ctrl-C, Ctrl-D or Esc.
    Cancel,
}

pub trait KeySource {
    /// Wait at most `timeout` for the next key. `Ok(None)` means nothing arrived.
    fn next_key(&mut self, timeout: Duration) -> Result<Option<Key>>;
}

/// Reads keys from the real terminal. Raw mode must already be enabled.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self, timeout: Duration) -> Result<Option<Key>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}

fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Cancel)
        }
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(ch) => Some(Key::Char(ch)),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Cancel),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    Entered(String),
    TimedOut,
    Cancelled,
}

/// Collect a password without echo until Enter, cancellation or the deadline.
///
/// `on_tick` receives the remaining time before every wait. Characters past
/// `max_len` and control characters are dropped. An Enter that arrives after
/// the deadline still counts as a timeout.
pub fn capture_hidden<K, F>(
    keys: &mut K,
    deadline: Deadline,
    max_len: usize,
    mut on_tick: F,
) -> Result<Capture>
where
    K: KeySource + ?Sized,
    F: FnMut(Duration) -> Result<()>,
{
    let mut buffer: Vec<char> = Vec::new();

    loop {
        let remaining = deadline.remaining();
        if remaining.is_zero() {
            return Ok(Capture::TimedOut);
        }
        on_tick(remaining)?;

        let Some(key) = keys.next_key(remaining.min(TICK))? else {
            continue;
        };
        match key {
            Key::Enter => {
                if deadline.expired() {
                    return Ok(Capture::TimedOut);
                }
                return Ok(Capture::Entered(buffer.into_iter().collect()));
            }
            Key::Cancel => return Ok(Capture::Cancelled),
            Key::Backspace => {
                buffer.pop();
            }
            Key::Char(ch) if !ch.is_control() && buffer.len() < max_len => buffer.push(ch),
            Key::Char(_) => {}
        }
    }
}

/// Run `f` with the terminal in raw mode, restoring it whatever `f` returns.
pub fn with_raw_mode<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    terminal::enable_raw_mode()?;
    let result = f();
    if let Err(err) = terminal::disable_raw_mode() {
        tracing::warn!(error = %err, "failed to restore terminal mode");
    }
    result
}
