//! Integration tests for command mode (-c/--command flag and scripts)

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Config file with fixed settings, so tests never read the user's config.toml.
fn test_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "sumsheet-test-{}-{}.toml",
        name,
        std::process::id()
    ));
    std::fs::write(&path, content).expect("Failed to write test config");
    path
}

fn run_command(config: &PathBuf, args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_sumsheet"))
        .arg("--config")
        .arg(config)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }

    let output = child.wait_with_output().expect("Failed to wait for command");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn run_default(name: &str, args: &[&str]) -> (String, String, i32) {
    let config = test_config(name, "");
    let result = run_command(&config, args, None);
    let _ = std::fs::remove_file(&config);
    result
}

#[test]
fn test_sum_of_neighbours() {
    let (stdout, _, code) = run_default(
        "sum",
        &[
            "-c", "set A1 5",
            "-c", "set B1 3",
            "-c", "set C1 =A1+B1+2",
            "-c", "edit C1",
        ],
    );
    assert_eq!(stdout, "A1: 5\nB1: 3\nC1: 10.000000\n=A1+B1+2.000000\n");
    assert_eq!(code, 0);
}

#[test]
fn test_circular_references() {
    let (stdout, _, code) = run_default(
        "circular",
        &["-c", "set A1 =B1", "-c", "set B1 =A1"],
    );
    assert_eq!(
        stdout,
        "A1: Error: cell contains non-numeric value\n\
         B1: Error: circular dependency detected\n\
         A1: Error: circular dependency detected\n"
    );
    assert_eq!(code, 0);
}

#[test]
fn test_non_numeric_dependency() {
    let (stdout, _, code) = run_default("text", &["-c", "set A1 hello", "-c", "set B1 =A1+1"]);
    assert_eq!(
        stdout,
        "A1: hello\nB1: Error: cell contains non-numeric value\n"
    );
    assert_eq!(code, 0);
}

#[test]
fn test_bad_reference_sets_exit_code() {
    let (stdout, stderr, code) = run_default("badref", &["-c", "set a1 5", "-c", "set A1 5"]);
    assert_eq!(stdout, "A1: 5\n");
    assert!(stderr.contains("Invalid cell reference"));
    assert_eq!(code, 1);
}

#[test]
fn test_script_from_stdin_and_print() {
    let config = test_config("print", "rows = 3\ncolumns = 3\ncell_display_width = 9\n");
    let script = "# totals\nset A1 1.5\nset B1 2\nset C2 =A1+B1\nprint\n";
    let (stdout, _, code) = run_command(&config, &[], Some(script));
    let _ = std::fs::remove_file(&config);

    assert_eq!(
        stdout,
        "A1: 1.5\nB1: 2\nC2: 3.500000\n\
         \x20    A         B         C\n\
         \x20  1 1.5       2\n\
         \x20  2                     3.500000\n"
    );
    assert_eq!(code, 0);
}

#[test]
fn test_invalid_config_warns_and_uses_defaults() {
    let config = test_config("badcfg", "columns = 40\n");
    let (stdout, stderr, code) = run_command(&config, &["-c", "edit Z20"], None);
    let _ = std::fs::remove_file(&config);
    assert!(stderr.contains("Warning: Failed to load"));
    assert_eq!(stdout, "\n");
    assert_eq!(code, 0);
}

#[test]
fn test_help_exits_cleanly() {
    let (_, stderr, code) = run_default("help", &["--help"]);
    assert!(stderr.contains("Usage: sumsheet"));
    assert_eq!(code, 0);
}
