//! End-to-end tests that drive the shell binary through its stdin/stdout.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_shell(input: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mysh"));
    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    match input {
        Some(_) => cmd.stdin(Stdio::piped()),
        None => cmd.stdin(Stdio::null()),
    };

    let mut child = cmd.spawn().expect("failed to start shell");
    if let Some(text) = input {
        child
            .stdin
            .take()
            .expect("stdin not piped")
            .write_all(text.as_bytes())
            .expect("failed to feed input");
    }
    child.wait_with_output().expect("failed to wait for shell")
}

#[test]
fn end_of_input_on_first_read_exits_cleanly() {
    let output = run_shell(None);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn shell_keeps_prompting_after_a_failed_launch() {
    let output = run_shell(Some("this_command_does_not_exist_xyz\nhelp\n"));

    assert!(output.status.success());

    let err = String::from_utf8(output.stderr).unwrap();
    assert!(err.contains("mysh: this_command_does_not_exist_xyz:"));

    // The help listing shows the loop survived the failure.
    let out = String::from_utf8(output.stdout).unwrap();
    assert!(out.contains("  cd\n"));
    assert!(out.contains("  help\n"));
    assert!(out.contains("  exit\n"));
}

#[test]
fn exit_stops_the_loop_before_later_lines() {
    let output = run_shell(Some("exit\nhelp\n"));

    assert!(output.status.success());
    let out = String::from_utf8(output.stdout).unwrap();
    assert!(!out.contains("The following are built in:"));
}

#[test]
fn exit_with_arguments_still_exits_successfully() {
    let output = run_shell(Some("exit 42\n"));

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}
