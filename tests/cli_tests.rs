use std::process::{Command, Output};

const INVALID: &str = "n must be a non-negative integer";

fn binperm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_binperm"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run binperm")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn assert_rejected(args: &[&str]) {
    let output = binperm(args);
    assert_eq!(output.status.code(), Some(1), "args {args:?}");
    assert_eq!(stdout(&output), "", "args {args:?}");
    assert_eq!(stderr(&output).trim_end(), INVALID, "args {args:?}");
}

#[test]
fn test_prints_one_json_line() {
    let output = binperm(&["2"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "[[false,false],[false,true],[true,false],[true,true]]\n"
    );
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_zero_bits() {
    let output = binperm(&["0"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "[[]]\n");
}

#[test]
fn test_blank_argument_reads_as_zero() {
    let output = binperm(&[""]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "[[]]\n");
}

#[test]
fn test_negative_n_exits_with_one() {
    assert_rejected(&["-1"]);
}

#[test]
fn test_fractional_n_exits_with_one() {
    assert_rejected(&["1.5"]);
}

#[test]
fn test_non_numeric_n_exits_with_one() {
    assert_rejected(&["three"]);
}

#[test]
fn test_missing_n_exits_with_one() {
    assert_rejected(&[]);
}

#[test]
fn test_extra_arguments_are_ignored() {
    let output = binperm(&["3", "4"]);
    assert_eq!(output.status.code(), Some(0));
    let all: Vec<Vec<bool>> = serde_json::from_str(stdout(&output).trim_end()).unwrap();
    assert_eq!(all.len(), 8);
    assert_eq!(all[7], vec![true, true, true]);

    let output = binperm(&["1", "--format", "string"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "[[false],[true]]\n");
}

#[test]
fn test_unknown_flag_exits_with_one() {
    let output = binperm(&["--foo"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_help_exits_with_zero() {
    let output = binperm(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("binary permutations"));
}
