use crate::core::calculator::SleepPlan;
use crate::models::InputValues;
use crate::utils::format_hm;
use ansi_term::Colour;
use chrono::NaiveDateTime;

fn hhmm(ts: NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

/// Text shown once the plan is known. `now` drives the "already passed" line.
pub fn render_summary(values: &InputValues, plan: &SleepPlan, now: NaiveDateTime) -> String {
    let green = |s: String| Colour::Green.paint(s).to_string();
    let yellow = |s: String| Colour::Yellow.paint(s).to_string();

    let elapsed = now - plan.previous_wakeup;

    let lines = [
        format!(
            "You woke up {} at {} and want to get up {} at {}.",
            green(values.previous_wakeup.day.to_string()),
            green(hhmm(plan.previous_wakeup)),
            green(values.future_wakeup.day.to_string()),
            green(hhmm(plan.future_wakeup)),
        ),
        format!(
            "To do so you should go to bed at {}.",
            yellow(hhmm(plan.bed_time))
        ),
        format!(
            "You should then sleep {}.",
            yellow(format_hm(plan.sleep_duration))
        ),
        format!(
            "You will wake up as planned at {}.",
            green(hhmm(plan.future_wakeup))
        ),
        String::new(),
        format!(
            "The day began at {}, lasts {} and ends at {}.",
            green(hhmm(plan.previous_wakeup)),
            yellow(format_hm(plan.awake_duration)),
            yellow(hhmm(plan.bed_time)),
        ),
        format!(
            "That makes the day {} of a standard day.",
            yellow(format!("{}%", plan.day_length_percent()))
        ),
        format!("{} have already passed.", yellow(format_hm(elapsed))),
    ];

    lines.join("\n")
}
