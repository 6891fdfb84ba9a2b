use clap::Parser;

/// Command-line interface definition for rSleeptime
/// Interactive CLI that tells you when to go to bed
#[derive(Parser, Debug)]
#[command(
    name = "rsleeptime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute your bedtime from your last and next wake-up time, then count down to it",
    long_about = None
)]
pub struct Cli {
    /// Override the file where the last selections are stored
    #[arg(long = "state", value_name = "FILE")]
    pub state: Option<String>,

    /// Print the summary and exit without the live countdown
    #[arg(long = "no-countdown")]
    pub no_countdown: bool,
}
