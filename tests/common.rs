#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsl() -> Command {
    cargo_bin_cmd!("rsleeptime")
}

/// Create a unique state file path inside the system temp dir and remove any existing file
pub fn setup_state_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsleeptime_values.json", name));
    let state_path = path.to_string_lossy().to_string();
    fs::remove_file(&state_path).ok();
    state_path
}
