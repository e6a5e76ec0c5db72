#![cfg(unix)]

use assert_cmd::prelude::*;
use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::thread::sleep;
use std::time::{Duration, Instant};

fn write_to_tempfile(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn sigint_during_execution_flushes_output_and_exits_130() {
    // Prints 'A' (no newline, so it sits in the stdout buffer), then loops forever.
    let tf = write_to_tempfile(&format!("{}.[]", "+".repeat(65)));

    let mut child = Command::cargo_bin("bfint")
        .unwrap()
        .arg(tf.path())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Give the process time to install its handler and enter the loop.
    sleep(Duration::from_millis(500));

    let sent = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("run kill");
    assert!(sent.success());

    let deadline = Instant::now() + Duration::from_secs(5);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("bfint did not exit after SIGINT");
        }
        sleep(Duration::from_millis(20));
    };

    let mut stdout = Vec::new();
    child.stdout.take().unwrap().read_to_end(&mut stdout).unwrap();

    assert_eq!(status.code(), Some(130));
    assert_eq!(stdout, b"A");
}
