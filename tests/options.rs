use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cargo_bin() -> Command { Command::cargo_bin("bfint").unwrap() }

fn write_to_tempfile(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

// Marks cell 0, runs past the end of a 2-cell tape, then steps back once.
// A fixed tape lands back on the marker; a growable one does not.
fn bound_probe_bf() -> &'static str { "+>>>-<." }

#[test]
fn test_numeric_flag_prints_decimal_values() {
    let tf = write_to_tempfile("+++.>.");
    cargo_bin()
        .arg("--numeric")
        .arg(tf.path())
        .assert()
        .success()
        .stdout("3 0 ");
}

#[test]
fn test_numeric_from_env() {
    let tf = write_to_tempfile("+.");
    cargo_bin()
        .env("BFINT_NUMERIC", "1")
        .arg(tf.path())
        .assert()
        .success()
        .stdout("1 ");
}

#[test]
fn test_fixed_tape_flag_clamps_pointer() {
    let tf = write_to_tempfile(bound_probe_bf());
    cargo_bin()
        .args(["--numeric", "--fixed-tape", "--tape-size", "2"])
        .arg(tf.path())
        .assert()
        .success()
        .stdout("1 ");
}

#[test]
fn test_growable_tape_is_default() {
    let tf = write_to_tempfile(bound_probe_bf());
    cargo_bin()
        .args(["--numeric", "--tape-size", "2"])
        .arg(tf.path())
        .assert()
        .success()
        .stdout("0 ");
}

#[test]
fn test_tape_settings_from_env() {
    let tf = write_to_tempfile(bound_probe_bf());
    cargo_bin()
        .env("BFINT_TAPE_SIZE", "2")
        .env("BFINT_FIXED_TAPE", "true")
        .env("BFINT_NUMERIC", "yes")
        .arg(tf.path())
        .assert()
        .success()
        .stdout("1 ");
}

#[test]
fn test_eof_defaults_to_zero() {
    let tf = write_to_tempfile("+,.");
    cargo_bin()
        .arg("--numeric")
        .arg(tf.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout("0 ");
}

#[test]
fn test_eof_flag_policies() {
    let tf = write_to_tempfile("+,.");
    for (policy, expected) in [("unchanged", "1 "), ("max", "255 "), ("zero", "0 ")] {
        cargo_bin()
            .args(["--numeric", "--eof", policy])
            .arg(tf.path())
            .write_stdin("")
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn test_flag_overrides_env() {
    let tf = write_to_tempfile("+,.");
    cargo_bin()
        .env("BFINT_EOF", "max")
        .args(["--numeric", "--eof", "unchanged"])
        .arg(tf.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout("1 ");
}

#[test]
fn test_invalid_env_value_falls_back_to_default() {
    let tf = write_to_tempfile("+,.");
    cargo_bin()
        .env("BFINT_EOF", "sometimes")
        .arg("--numeric")
        .arg(tf.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout("0 ");
}

#[test]
fn test_invalid_eof_flag_is_a_usage_error() {
    let tf = write_to_tempfile("+");
    cargo_bin()
        .args(["--eof", "sometimes"])
        .arg(tf.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("sometimes"));
}

#[test]
fn test_oversized_tape_flag_is_rejected() {
    let tf = write_to_tempfile("+.");
    cargo_bin()
        .args(["--tape-size", "4000000000"])
        .arg(tf.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("tape size 4000000000 exceeds the maximum"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_oversized_tape_from_env_is_rejected() {
    let tf = write_to_tempfile("+.");
    cargo_bin()
        .env("BFINT_TAPE_SIZE", "4000000000")
        .arg(tf.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exceeds the maximum"));
}
