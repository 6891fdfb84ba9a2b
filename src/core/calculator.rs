//! Sleep window calculation.
//!
//! The time between two wake-ups is one "day". Sleep takes one third of it,
//! so bedtime sits one third of the day before the next wake-up.

use chrono::{Duration, NaiveDateTime};

/// Length of a standard waking day, in minutes (16 h).
pub const STANDARD_DAY_MINUTES: f64 = 960.0;

/// Result of a calculation. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepPlan {
    pub previous_wakeup: NaiveDateTime,
    pub future_wakeup: NaiveDateTime,
    pub bed_time: NaiveDateTime,
    pub sleep_duration: Duration,
    pub awake_duration: Duration,
}

impl SleepPlan {
    /// Whole span between the two wake-ups.
    pub fn day_duration(&self) -> Duration {
        self.future_wakeup - self.previous_wakeup
    }

    /// Awake time as a percentage of a 16 h standard day, rounded half to even.
    pub fn day_length_percent(&self) -> i64 {
        day_length_percent(self.awake_duration)
    }
}

/// Compute bedtime and durations.
///
/// Ordering is not validated: if `future_wakeup` is not after
/// `previous_wakeup` the durations come out zero or negative.
pub fn compute(previous_wakeup: NaiveDateTime, future_wakeup: NaiveDateTime) -> SleepPlan {
    let day = future_wakeup - previous_wakeup;
    if day <= Duration::zero() {
        log::warn!(
            "next wake-up {} is not after previous wake-up {}",
            future_wakeup,
            previous_wakeup
        );
    }

    let sleep_duration = day / 3;
    let bed_time = future_wakeup - sleep_duration;
    let awake_duration = bed_time - previous_wakeup;

    log::debug!(
        "day={}m sleep={}m bed_time={} awake={}m",
        day.num_minutes(),
        sleep_duration.num_minutes(),
        bed_time,
        awake_duration.num_minutes()
    );

    SleepPlan {
        previous_wakeup,
        future_wakeup,
        bed_time,
        sleep_duration,
        awake_duration,
    }
}

pub fn day_length_percent(awake: Duration) -> i64 {
    let standard_ms = STANDARD_DAY_MINUTES * 60_000.0;
    (awake.num_milliseconds() as f64 * 100.0 / standard_ms).round_ties_even() as i64
}
