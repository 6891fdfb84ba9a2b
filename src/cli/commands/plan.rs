use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::calculator::SleepPlan;
use crate::core::clock::Clock;
use crate::core::clock::SystemClock;
use crate::core::plan_from_inputs;
use crate::errors::AppResult;
use crate::storage::StateStore;
use crate::ui::collector::collect_inputs;
use crate::ui::countdown::{Countdown, run_countdown};
use crate::ui::messages;
use crate::ui::prompt::{Selector, TerminalSelector};
use crate::ui::summary::render_summary;
use crate::ui::terminal::{KeyWatchClock, RawModeGuard};
use crate::utils::path::expand_tilde;
use chrono::Duration;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::Duration as StdDuration;

/// State file for this run: `--state` wins over the configured one.
pub fn state_path(cli: &Cli, cfg: &Config) -> PathBuf {
    expand_tilde(cli.state.as_deref().unwrap_or(&cfg.state_file))
}

/// Handle the interactive session (the only thing the binary does)
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = StateStore::new(state_path(cli, cfg));
    let mut selector = TerminalSelector::default();
    let mut out = io::stdout();

    let plan = plan_session(&store, &mut selector, &SystemClock, &mut out)?;
    if cli.no_countdown {
        return Ok(());
    }

    // raw mode turns Ctrl-C into a key the countdown can see
    let _raw = match RawModeGuard::enable() {
        Ok(guard) => Some(guard),
        Err(e) => {
            log::warn!("raw mode unavailable, Ctrl-C will end the process: {e}");
            None
        }
    };
    let stop = AtomicBool::new(false);
    let clock = KeyWatchClock::new(&stop);

    count_down_to_bed(&plan, &clock, &mut out, cfg, &stop)
}

/// Load → prompt → compute → show the summary.
pub fn plan_session<S, C, W>(
    store: &StateStore,
    selector: &mut S,
    clock: &C,
    out: &mut W,
) -> AppResult<SleepPlan>
where
    S: Selector + ?Sized,
    C: Clock + ?Sized,
    W: Write,
{
    let mut values = store.load();
    collect_inputs(&mut values, selector, store)?;

    let now = clock.now();
    let plan = plan_from_inputs(&values, now)?;

    writeln!(out)?;
    writeln!(out, "{}", render_summary(&values, &plan, now))?;
    writeln!(out)?;

    if plan.day_duration() <= Duration::zero() {
        messages::warning(
            out,
            "Your next wake-up is not after the previous one, the results are negative.",
        )?;
    }

    Ok(plan)
}

/// Live countdown until bedtime, or until `stop` is raised.
pub fn count_down_to_bed<C, W>(
    plan: &SleepPlan,
    clock: &C,
    out: &mut W,
    cfg: &Config,
    stop: &AtomicBool,
) -> AppResult<()>
where
    C: Clock + ?Sized,
    W: Write,
{
    messages::info(out, "Counting down to bedtime (Ctrl+C to stop)")?;

    let mut countdown = Countdown::new(plan.bed_time, plan.previous_wakeup, clock.now());
    run_countdown(
        clock,
        out,
        &mut countdown,
        StdDuration::from_millis(cfg.poll_interval_ms),
        cfg.bar_width,
        stop,
    )?;

    messages::success(out, "Time to go to bed!")?;
    Ok(())
}
