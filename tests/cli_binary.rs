//! Integration tests for the compiled `cal` binary.
//!
//! Each test runs in a fresh temp directory with `HOME` pointed at it, so
//! neither a local `.cal.toml` nor a global config can leak in.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn cal_command(dir: &Path, args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_cal"));
    command
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("CAL_FORMAT")
        .env_remove("CAL_PRECISION")
        .env_remove("CAL_ON_INVALID")
        .env_remove("CAL_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    command
}

fn run_with_stdin(mut command: Command, stdin: &[u8]) -> Output {
    let mut child = command.spawn().expect("failed to spawn cal");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("failed to write stdin");

    child.wait_with_output().expect("failed to wait for cal")
}

fn cal(dir: &Path, args: &[&str], stdin: impl AsRef<[u8]>) -> Output {
    let mut command = cal_command(dir, args);
    command.env("NO_COLOR", "1");
    run_with_stdin(command, stdin.as_ref())
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// stdin mode
// ---------------------------------------------------------------------------

#[test]
fn prompts_then_prints_results() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &[], "7 2\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Enter two numbers: Sum: 9\nDifference: 5\nProduct: 14\nDivision: 3.50\n"
    );
    assert_eq!(stderr(&output), "");
}

#[test]
fn division_by_zero_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &[], "5 0\n");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "Enter two numbers: Sum: 5\nDifference: 5\nProduct: 0\nDivision by zero is not allowed.\n"
    );
}

#[test]
fn quiet_suppresses_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &["--quiet"], "-4\n2\n");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Sum: -2\nDifference: -6\nProduct: -8\nDivision: -2.00\n"
    );
}

#[test]
fn malformed_input_fails_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &[], "seven 2\n");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Enter two numbers: ");
    assert!(stderr(&output).contains("Error:"), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("\"seven\""), "stderr: {}", stderr(&output));
}

#[test]
fn missing_operand_fails_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &[], "7\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing"), "stderr: {}", stderr(&output));
}

#[test]
fn zero_policy_substitutes_and_warns() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &["-q", "--on-invalid", "zero"], "seven 2\n");

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Sum: 2\nDifference: -2\nProduct: 0\nDivision: 0.00\n"
    );
    assert!(stderr(&output).contains("using 0"), "stderr: {}", stderr(&output));
}

#[test]
fn zero_policy_substitutes_non_utf8_token() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &["-q", "--on-invalid", "zero"], b"\xff 2\n");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Sum: 2\nDifference: -2\nProduct: 0\nDivision: 0.00\n"
    );
}

#[test]
fn non_utf8_token_is_rejected_as_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &["-q"], b"7 \xff\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("is not a valid integer"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn piped_log_output_has_no_ansi_escapes() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_with_stdin(cal_command(dir.path(), &["-v", "7", "2"]), b"");

    assert!(output.status.success());
    let log = stderr(&output);
    assert!(log.contains("DEBUG"), "stderr: {log}");
    assert!(!log.contains('\x1b'), "stderr: {log:?}");
}

// ---------------------------------------------------------------------------
// argv mode and flags
// ---------------------------------------------------------------------------

#[test]
fn positional_operands_skip_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &["-4", "2"], "");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "Sum: -2\nDifference: -6\nProduct: -8\nDivision: -2.00\n"
    );
}

#[test]
fn json_format_has_no_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &["--format", "json"], "7 2\n");

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(parsed["sum"], 9);
    assert_eq!(parsed["division"]["formatted"], "3.50");
}

#[test]
fn precision_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &["--precision", "4", "1", "3"], "");

    assert!(output.status.success());
    assert!(stdout(&output).ends_with("Division: 0.3333\n"));
}

#[test]
fn usage_error_exits_two() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &["--format", "yaml"], "");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn version_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &["version"], "");

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

// ---------------------------------------------------------------------------
// configuration
// ---------------------------------------------------------------------------

#[test]
fn local_config_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".cal.toml"),
        "[output]\nprecision = 3\n\n[input]\non_invalid = \"zero\"\n",
    )
    .unwrap();

    let output = cal(dir.path(), &["-q"], "2 x\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).ends_with("Division by zero is not allowed.\n"));

    let output = cal(dir.path(), &["-q"], "2 3\n");
    assert!(stdout(&output).ends_with("Division: 0.667\n"));
}

#[test]
fn cli_flag_beats_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".cal.toml"), "[output]\nprecision = 5\n").unwrap();

    let output = cal(dir.path(), &["--precision", "1", "2", "3"], "");
    assert!(stdout(&output).ends_with("Division: 0.7\n"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = cal(dir.path(), &["--config", "nope.toml", "1", "2"], "");

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("failed to load configuration"), "stderr: {err}");
    assert!(err.contains("failed to read config file nope.toml: "), "stderr: {err}");

    // The OS error text appears once, not once per layer.
    let detail = err.rsplit(": ").next().unwrap_or_default().trim();
    assert!(!detail.is_empty(), "stderr: {err}");
    assert_eq!(err.matches(detail).count(), 1, "stderr: {err}");
}
