//! Status lines around the summary and the countdown.

use crate::utils::colors::{GREEN, RESET, YELLOW};
use std::fmt;
use std::io::{self, Write};

const BOLD: &str = "\x1b[1m";
const FG_BLUE: &str = "\x1b[34m";
const FG_RED: &str = "\x1b[31m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(&self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (FG_BLUE, "ℹ️"),
            Level::Success => (GREEN, "✅"),
            Level::Warning => (YELLOW, "⚠️"),
            Level::Error => (FG_RED, "❌"),
        }
    }
}

/// One icon-prefixed line. `\r\n` keeps it aligned when the terminal is in raw mode.
pub fn status<W: Write, T: fmt::Display>(out: &mut W, level: Level, msg: T) -> io::Result<()> {
    let (color, icon) = level.style();
    write!(out, "{color}{BOLD}{icon} {RESET}{msg}\r\n")?;
    out.flush()
}

pub fn info<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    status(out, Level::Info, msg)
}

pub fn success<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    status(out, Level::Success, msg)
}

pub fn warning<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    status(out, Level::Warning, msg)
}

pub fn error<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    status(out, Level::Error, msg)
}
