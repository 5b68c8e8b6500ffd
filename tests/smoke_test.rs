/// Smoke tests to verify the binary runs without panicking
use std::process::{Command, Output};

fn termlife(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_termlife"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute termlife")
}

#[test]
fn binary_shows_help() {
    let output = termlife(&["--help"]);

    assert!(
        output.status.success(),
        "Binary failed to run --help: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--width", "--height", "--speed", "--seed"] {
        assert!(stdout.contains(flag), "Help output should mention {flag}");
    }
}

#[test]
fn binary_shows_version() {
    let output = termlife(&["--version"]);

    assert!(
        output.status.success(),
        "Binary failed to run --version: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("termlife"));
}

#[test]
fn invalid_values_fail_gracefully() {
    for args in [
        &["--print", "--width", "0"][..],
        &["--print", "--height", "-3"],
        &["--print", "--speed", "-1"],
        &["--print", "--pattern", "nonexistent"],
        &["--width", "abc"],
    ] {
        let output = termlife(args);

        assert!(
            !output.status.success(),
            "{args:?} should return error status"
        );

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("panicked at"), "{args:?} should not cause panic");
        assert!(!stderr.is_empty(), "{args:?} should explain the failure");
    }
}

#[test]
fn dimension_error_is_descriptive() {
    let output = termlife(&["--print", "--width", "-5"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("-5x25"));
}

#[test]
fn print_mode_is_deterministic_for_a_seed() {
    let args = [
        "--print", "--width", "12", "--height", "6", "--seed", "42",
        "--generations", "3", "--alive", "#", "--dead", ".",
    ];
    let first = termlife(&args);
    let second = termlife(&args);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let stdout = String::from_utf8_lossy(&first.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[..6].iter().all(|l| l.len() == 12 && l.chars().all(|c| c == '#' || c == '.')));
    assert_eq!(lines[7], "Gen: 3 | PAUSED");
}

#[test]
fn print_mode_with_pattern() {
    let output = termlife(&[
        "--print", "--width", "5", "--height", "5", "--pattern", "blinker",
        "--generations", "1", "--alive", "O", "--dead", ".",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let grid: Vec<&str> = stdout.lines().take(5).collect();
    assert_eq!(grid, vec![".....", "..O..", "..O..", "..O..", "....."]);
}

#[test]
fn negative_seed_is_accepted_and_deterministic() {
    let args = ["--print", "--width", "4", "--height", "4", "--seed", "-1"];
    let first = termlife(&args);
    let second = termlife(&args);

    assert!(
        first.status.success(),
        "Negative seed should be accepted: {}",
        String::from_utf8_lossy(&first.stderr)
    );
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn huge_grid_fails_with_message() {
    let output = termlife(&["--print", "--width", "9223372036854775807", "--height", "2"]);

    assert_eq!(output.status.code(), Some(1), "Oversized grid should exit with an error, not abort");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("too large"));
    assert!(!stderr.contains("memory allocation"));
}
