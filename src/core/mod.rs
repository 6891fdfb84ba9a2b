pub mod calculator;
pub mod clock;
pub mod resolver;

use crate::errors::AppResult;
use crate::models::InputValues;
use calculator::SleepPlan;
use chrono::NaiveDateTime;

/// Resolve both sections against `now` and compute the plan.
pub fn plan_from_inputs(values: &InputValues, now: NaiveDateTime) -> AppResult<SleepPlan> {
    let previous = resolver::resolve(&values.previous_wakeup, now)?;
    let future = resolver::resolve(&values.future_wakeup, now)?;
    Ok(calculator::compute(previous, future))
}
