//! Live countdown to bedtime with two progress bars.

use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREY, RESET, color_for_ratio};
use crate::utils::formatting::{format_hms, pad_right, visible_width};
use chrono::{Duration, NaiveDateTime};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue, style::Print};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration as StdDuration;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const DONE: &str = "✔";

fn seconds(d: Duration) -> f64 {
    d.num_milliseconds() as f64 / 1000.0
}

/// Progress from `origin` towards a fixed target time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTrack {
    pub label: String,
    pub origin: NaiveDateTime,
    pub max_seconds: f64,
    pub value_seconds: f64,
}

impl ProgressTrack {
    pub fn new(label: &str, origin: NaiveDateTime, target: NaiveDateTime) -> Self {
        Self {
            label: label.to_string(),
            origin,
            max_seconds: seconds(target - origin),
            value_seconds: 0.0,
        }
    }

    pub fn update(&mut self, now: NaiveDateTime) {
        self.value_seconds = seconds(now - self.origin).min(self.max_seconds);
    }

    /// Completed fraction in [0, 1]. An empty or negative span counts as done.
    pub fn ratio(&self) -> f64 {
        if self.max_seconds <= 0.0 {
            return 1.0;
        }
        (self.value_seconds / self.max_seconds).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.ratio() >= 1.0
    }

    pub fn remaining(&self) -> Duration {
        Duration::milliseconds(((self.max_seconds - self.value_seconds) * 1000.0) as i64)
    }
}

#[derive(Debug, Clone)]
pub struct Countdown {
    pub tracks: [ProgressTrack; 2],
    frame: usize,
}

impl Countdown {
    /// Track (a) runs from `started`, track (b) from the previous wake-up; both end at bedtime.
    pub fn new(bed_time: NaiveDateTime, previous_wakeup: NaiveDateTime, started: NaiveDateTime) -> Self {
        Self {
            tracks: [
                ProgressTrack::new("Go to bed | from application start", started, bed_time),
                ProgressTrack::new("Go to bed | from wakeup time", previous_wakeup, bed_time),
            ],
            frame: 0,
        }
    }

    pub fn tick(&mut self, now: NaiveDateTime) {
        for track in self.tracks.iter_mut() {
            track.update(now);
        }
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn is_finished(&self) -> bool {
        self.tracks.iter().all(ProgressTrack::is_finished)
    }

    /// One line per track: label, bar, percentage, remaining time, spinner.
    pub fn render(&self, bar_width: usize) -> Vec<String> {
        let label_width = self
            .tracks
            .iter()
            .map(|t| visible_width(&t.label))
            .max()
            .unwrap_or(0);

        self.tracks
            .iter()
            .map(|t| {
                let ratio = t.ratio();
                let filled = ((ratio * bar_width as f64).round() as usize).min(bar_width);
                let color = color_for_ratio(ratio);
                let spinner = if t.is_finished() {
                    DONE
                } else {
                    SPINNER[self.frame % SPINNER.len()]
                };

                format!(
                    "{} {color}{}{RESET}{GREY}{}{RESET} {:>3}% {} {}",
                    pad_right(&t.label, label_width),
                    "━".repeat(filled),
                    "━".repeat(bar_width - filled),
                    (ratio * 100.0).floor() as u32,
                    format_hms(t.remaining()),
                    spinner
                )
            })
            .collect()
    }
}

fn draw<W: Write>(out: &mut W, lines: &[String], redraw: bool) -> AppResult<()> {
    if redraw && !lines.is_empty() {
        queue!(out, cursor::MoveUp(lines.len() as u16))?;
    }
    queue!(out, cursor::MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
    for line in lines {
        queue!(out, Print(line), Print("\r\n"))?;
    }
    out.flush()?;
    Ok(())
}

/// Poll `clock` every `interval` until both tracks are complete.
/// Returns the number of ticks taken, or `Interrupted` once `stop` is raised.
pub fn run_countdown<C, W>(
    clock: &C,
    out: &mut W,
    countdown: &mut Countdown,
    interval: StdDuration,
    bar_width: usize,
    stop: &AtomicBool,
) -> AppResult<usize>
where
    C: Clock + ?Sized,
    W: Write,
{
    countdown.tick(clock.now());
    draw(out, &countdown.render(bar_width), false)?;

    let mut ticks = 0;
    while !countdown.is_finished() {
        clock.sleep(interval);
        if stop.load(Ordering::SeqCst) {
            log::debug!("countdown interrupted after {} ticks", ticks);
            return Err(AppError::Interrupted);
        }
        countdown.tick(clock.now());
        draw(out, &countdown.render(bar_width), true)?;
        ticks += 1;
    }

    log::debug!("countdown finished after {} ticks", ticks);
    Ok(ticks)
}
