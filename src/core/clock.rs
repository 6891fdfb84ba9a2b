//! Wall-clock access, injectable so the countdown can run without real delays.

use chrono::{Local, NaiveDateTime};
use std::cell::Cell;
use std::time::Duration as StdDuration;

pub trait Clock {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Block until the next tick.
    fn sleep(&self, interval: StdDuration);
}

/// Real local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&self, interval: StdDuration) {
        std::thread::sleep(interval);
    }
}

/// Clock that only moves when slept on. Used by tests.
#[derive(Debug)]
pub struct ManualClock {
    current: Cell<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        self.current.set(self.current.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.current.get()
    }

    fn sleep(&self, interval: StdDuration) {
        let step = chrono::Duration::from_std(interval).unwrap_or_else(|_| chrono::Duration::zero());
        self.advance(step);
    }
}
