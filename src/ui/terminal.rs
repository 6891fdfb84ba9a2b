//! Raw-mode handling shared by the prompts and the countdown.

use crate::core::clock::{Clock, SystemClock};
use chrono::NaiveDateTime;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, execute};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration as StdDuration, Instant};

/// Raw mode for as long as the guard lives. Dropping it also restores the cursor.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = restore_cursor(&mut io::stdout());
        let _ = disable_raw_mode();
    }
}

/// Make the cursor visible again, whatever state the prompt left it in.
pub fn restore_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, cursor::Show)
}

/// Esc, q and Ctrl-C end the session.
pub fn is_abort_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Esc | KeyCode::Char('q') => true,
        _ => false,
    }
}

/// System clock whose ticks watch the keyboard and raise `stop` on an abort key.
/// Needs raw mode, otherwise Ctrl-C arrives as a signal instead of a key.
pub struct KeyWatchClock<'a> {
    stop: &'a AtomicBool,
}

impl<'a> KeyWatchClock<'a> {
    pub fn new(stop: &'a AtomicBool) -> Self {
        Self { stop }
    }
}

impl Clock for KeyWatchClock<'_> {
    fn now(&self) -> NaiveDateTime {
        SystemClock.now()
    }

    fn sleep(&self, interval: StdDuration) {
        let deadline = Instant::now() + interval;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return;
            }
            match event::poll(left) {
                Ok(true) => {
                    if let Ok(Event::Key(key)) = event::read()
                        && is_abort_key(&key)
                    {
                        self.stop.store(true, Ordering::SeqCst);
                        return;
                    }
                }
                Ok(false) => return,
                Err(e) => {
                    log::warn!("keyboard polling failed: {e}");
                    SystemClock.sleep(left);
                    return;
                }
            }
        }
    }
}
