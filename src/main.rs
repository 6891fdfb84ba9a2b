//! rSleeptime main entrypoint.

use rsleeptime::errors::AppError;
use rsleeptime::run;
use rsleeptime::ui::messages;

fn main() {
    println!();
    match run() {
        Ok(()) | Err(AppError::Interrupted) => {}
        Err(e) => {
            let _ = messages::error(&mut std::io::stderr(), format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
