//! Turns a (day, hour, minute) selection into an absolute local timestamp.

use crate::errors::{AppError, AppResult};
use crate::models::InputSection;
use chrono::{Days, NaiveDateTime, NaiveTime};

/// Timestamp for `section`, relative to the calendar date of `now`.
pub fn resolve(section: &InputSection, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(section.hour, section.minute, 0).ok_or_else(|| {
        AppError::InvalidTime(format!("{:02}:{:02}", section.hour, section.minute))
    })?;

    let base = now.date().and_time(time);
    let offset = section.day.offset();

    let shifted = if offset >= 0 {
        base.checked_add_days(Days::new(offset as u64))
    } else {
        base.checked_sub_days(Days::new(offset.unsigned_abs()))
    };

    let ts = shifted.ok_or_else(|| {
        AppError::InvalidTime(format!("{} days from {}", offset, base.format("%Y-%m-%d")))
    })?;

    log::debug!(
        "resolved {:?} {:02}:{:02} -> {}",
        section.day,
        section.hour,
        section.minute,
        ts
    );

    Ok(ts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(14, 37, 12)
            .unwrap()
    }

    #[test]
    fn every_day_hour_minute_matches_shifted_today() {
        let today = now().date();
        for day in [Day::Today, Day::Yesterday, Day::DayBeforeYesterday, Day::Tomorrow] {
            for hour in 0..24 {
                for minute in 0..60 {
                    let got = resolve(&InputSection::new(day, hour, minute), now()).unwrap();
                    let expected = today.and_hms_opt(hour, minute, 0).unwrap()
                        + Duration::days(day.offset());
                    assert_eq!(got, expected);
                }
            }
        }
    }

    #[test]
    fn crosses_month_boundaries() {
        // 2025-03-01 minus two days is 2025-02-27
        let got = resolve(&InputSection::new(Day::DayBeforeYesterday, 7, 5), now()).unwrap();
        assert_eq!(
            got,
            NaiveDate::from_ymd_opt(2025, 2, 27)
                .unwrap()
                .and_hms_opt(7, 5, 0)
                .unwrap()
        );
    }

    #[test]
    fn seconds_of_now_are_dropped() {
        let got = resolve(&InputSection::new(Day::Today, 14, 37), now()).unwrap();
        assert_eq!(got.format("%H:%M:%S").to_string(), "14:37:00");
    }

    #[test]
    fn out_of_range_time_is_rejected() {
        assert!(matches!(
            resolve(&InputSection::new(Day::Today, 24, 0), now()),
            Err(AppError::InvalidTime(_))
        ));
        assert!(matches!(
            resolve(&InputSection::new(Day::Today, 10, 60), now()),
            Err(AppError::InvalidTime(_))
        ));
    }
}
