//! CLI integration tests for bench-result-cli.

use bench_result_decoder::ResultFileWriter;
use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bench-result-cli"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute bench-result-cli")
}

fn write_result_file(path: &Path, groups: &[&[f64]], trailing: &[f64]) {
    let mut writer = ResultFileWriter::new(File::create(path).unwrap()).unwrap();
    for group in groups {
        writer.write_group(group).unwrap();
    }
    for &value in trailing {
        writer.write_value(value).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn test_cli_help() {
    let dir = tempdir().unwrap();
    let output = run_in(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("--config"));
}

#[test]
fn test_reads_result_bin_from_working_directory() {
    let dir = tempdir().unwrap();
    write_result_file(&dir.path().join("result.bin"), &[&[1.0, 2.0]], &[]);

    let output = run_in(dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "\n\n\n======== CACHED ENTRY ========\n1.0\t2.0\n-----\nElements total: 2\n\n\n\n"
    );
}

#[test]
fn test_seven_values() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.bin");
    write_result_file(&path, &[&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]], &[]);

    let output = run_in(dir.path(), &["-q", "run.bin"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1.0\t2.0\t3.0\t4.0\t5.0\n6.0\t7.0\n-----\nElements total: 7\n"));
}

#[test]
fn test_empty_file_prints_nothing() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("result.bin")).unwrap();

    let output = run_in(dir.path(), &["-q"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_header_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("result.bin"), b"\x00\x01\x02\x03\x04\x05\x06\x07").unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed header"));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempdir().unwrap();

    let output = run_in(dir.path(), &["-q"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("result.bin"));
}

#[test]
fn test_unterminated_group_policy() {
    let dir = tempdir().unwrap();
    write_result_file(&dir.path().join("result.bin"), &[&[1.0]], &[2.0, 3.0]);

    let lenient = run_in(dir.path(), &["-q"]);
    assert!(lenient.status.success());
    let stdout = String::from_utf8_lossy(&lenient.stdout);
    assert_eq!(stdout.matches("CACHED ENTRY").count(), 1);
    assert!(stdout.contains("Elements total: 1\n"));

    let strict = run_in(dir.path(), &["-q", "--reject-unterminated"]);
    assert!(!strict.status.success());
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("unterminated group"));
}

#[test]
fn test_json_report_to_file() {
    let dir = tempdir().unwrap();
    write_result_file(&dir.path().join("result.bin"), &[&[0.5], &[]], &[]);
    fs::write(
        dir.path().join("reader.toml"),
        "[output]\nformat = \"json\"\noutput_file = \"report.json\"\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &["-q", "--config", "reader.toml"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let report = fs::read_to_string(dir.path().join("report.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({ "groups": [{ "values": [0.5] }, { "values": [] }] })
    );
}
