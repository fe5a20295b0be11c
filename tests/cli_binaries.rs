use std::io::Write;
use std::process::{Command, Stdio};

const BINARY: &str = env!("CARGO_BIN_EXE_generate-hash");

fn binary_output(args: &[&str]) -> std::process::Output {
    binary_output_with_stdin(args, b"")
}

fn binary_output_with_stdin(args: &[&str], stdin: &[u8]) -> std::process::Output {
    let mut child = Command::new(BINARY)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|error| panic!("failed to run {BINARY}: {error}"));

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("write stdin");

    child.wait_with_output().expect("wait for generate-hash")
}

fn stdout_utf8(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn generate_hash_help_lists_usage() {
    let output = binary_output(&["--help"]);
    assert!(output.status.success(), "--help should succeed");
    assert!(
        output.stderr.is_empty(),
        "help output should not write to stderr"
    );
    let stdout = stdout_utf8(&output);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("generate-hash"));
}

#[test]
fn generate_hash_prints_sha256_by_default() {
    let output = binary_output(&["abc"]);
    assert!(output.status.success());
    assert_eq!(
        stdout_utf8(&output),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n"
    );
}

#[test]
fn generate_hash_md5_reads_stdin() {
    let output = binary_output_with_stdin(&["--algorithm", "md5"], b"abc");
    assert!(output.status.success());
    assert_eq!(stdout_utf8(&output), "900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn generate_hash_rejects_unknown_algorithm() {
    let output = binary_output(&["-a", "sha1", "abc"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("sha1"));
}

#[test]
fn generate_hash_rejects_unknown_flag() {
    let output = binary_output(&["--definitely-not-a-flag"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("--definitely-not-a-flag"));
}

#[test]
fn generate_hash_rejects_non_utf8_stdin() {
    let output = binary_output_with_stdin(&["-a", "md5"], &[0xff, 0xfe]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
