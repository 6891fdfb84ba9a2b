use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use rsleeptime::core::{calculator, plan_from_inputs, resolver};
use rsleeptime::errors::AppError;
use rsleeptime::models::{Day, InputSection, InputValues};
use rsleeptime::storage::StateStore;

mod common;
use common::setup_state_file;

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 31)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[test]
fn test_full_day_example() {
    let values = InputValues {
        previous_wakeup: InputSection::new(Day::Today, 7, 0),
        future_wakeup: InputSection::new(Day::Tomorrow, 7, 0),
    };
    let plan = plan_from_inputs(&values, noon()).unwrap();

    assert_eq!(plan.day_duration(), Duration::hours(24));
    assert_eq!(plan.sleep_duration, Duration::hours(8));
    assert_eq!(plan.bed_time, noon().date().and_hms_opt(23, 0, 0).unwrap());
    assert_eq!(plan.awake_duration, Duration::hours(16));
    assert_eq!(plan.day_length_percent(), 100);
}

#[test]
fn test_same_day_example() {
    let values = InputValues {
        previous_wakeup: InputSection::new(Day::Today, 6, 0),
        future_wakeup: InputSection::new(Day::Today, 22, 0),
    };
    let plan = plan_from_inputs(&values, noon()).unwrap();

    assert_eq!(plan.day_duration(), Duration::hours(16));
    assert_eq!(plan.sleep_duration, Duration::minutes(320));
    assert_eq!(plan.bed_time, noon().date().and_hms_opt(16, 40, 0).unwrap());
    assert_eq!(plan.awake_duration, Duration::minutes(640));
}

#[test]
fn test_year_boundary() {
    // 2025-12-31 + 1 day = 2026-01-01
    let ts = resolver::resolve(&InputSection::new(Day::Tomorrow, 5, 30), noon()).unwrap();
    assert_eq!(
        ts,
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(5, 30, 0)
            .unwrap()
    );
}

#[test]
fn test_invalid_day_symbol() {
    assert!(matches!(
        "Overmorrow".parse::<Day>(),
        Err(AppError::InvalidDaySelection(_))
    ));
}

#[test]
fn test_invariants_over_all_selections() {
    let now = Local::now().naive_local();
    for prev_day in Day::PAST {
        for fut_day in Day::FUTURE {
            for hour in [0, 5, 11, 17, 23] {
                let prev = resolver::resolve(&InputSection::new(prev_day, hour, 25), now).unwrap();
                let fut = resolver::resolve(&InputSection::new(fut_day, 23 - hour, 55), now).unwrap();
                let plan = calculator::compute(prev, fut);

                assert_eq!(plan.sleep_duration + plan.awake_duration, fut - prev);
                assert_eq!(plan.sleep_duration, (fut - prev) / 3);
                assert_eq!(plan.bed_time, fut - plan.sleep_duration);
                assert_eq!(plan.awake_duration, plan.bed_time - prev);
            }
        }
    }
}

#[test]
fn test_state_round_trip_through_file() {
    let path = setup_state_file("round_trip");
    let store = StateStore::new(&path);
    let values = InputValues {
        previous_wakeup: InputSection::new(Day::DayBeforeYesterday, 23, 55),
        future_wakeup: InputSection::new(Day::Today, 0, 5),
    };

    store.save(&values).unwrap();
    assert_eq!(store.load(), values);

    std::fs::write(&path, "{ broken").unwrap();
    assert_eq!(store.load(), InputValues::default());

    std::fs::remove_file(&path).ok();
    assert_eq!(store.load(), InputValues::default());
}
