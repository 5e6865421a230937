#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use uuid::Uuid;

pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sonarcheck"))
}

pub fn run_sonarcheck(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .env_remove("SONARCHECK_CATALOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute sonarcheck")
}

pub fn run_json(args: &[&str]) -> serde_json::Value {
    let mut full: Vec<&str> = args.to_vec();
    full.push("--json");
    let output = run_sonarcheck(&full);
    assert!(
        output.status.success(),
        "sonarcheck {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout was not valid JSON")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Unique path in the system temp dir
pub fn temp_path(extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sonarcheck-{}.{}", Uuid::new_v4(), extension))
}
