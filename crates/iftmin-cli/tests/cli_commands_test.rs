//! CLI command tests: spawn the binary and check its observable output.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn cargo_bin() -> PathBuf {
    if let Ok(path) = env::var("CARGO_BIN_EXE_iftmin") {
        return PathBuf::from(path);
    }

    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| repo_root().join("target"));
    let executable_name = format!("iftmin{}", std::env::consts::EXE_SUFFIX);
    let fallback = target_dir.join("debug").join(executable_name);

    if fallback.exists() {
        return fallback;
    }

    panic!(
        "CARGO_BIN_EXE_iftmin is not set and fallback binary was not found at {}",
        fallback.display()
    );
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn sample_path() -> PathBuf {
    repo_root().join("testdata").join("iftmin_sample.edi")
}

fn run_iftmin(args: &[&str]) -> Output {
    Command::new(cargo_bin())
        .args(args)
        .output()
        .expect("run iftmin")
}

#[test]
fn sample_command_prints_reference_interchange() {
    let output = run_iftmin(&["sample"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    assert!(stdout.contains("UNB+UNOC:3"));
    assert!(stdout.contains("GID+2+1:PK'"));
}

#[test]
fn decode_command_outputs_json_to_stdout() {
    let sample = sample_path();
    let output = run_iftmin(&["decode", sample.to_string_lossy().as_ref()]);

    assert!(
        output.status.success(),
        "expected decode to succeed; stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(
        json["header"]["manifest_number"],
        serde_json::json!("1027214650005003")
    );
    assert_eq!(json["shipments"].as_array().map(Vec::len), Some(2));
}

#[test]
fn decode_command_skips_unreadable_files() {
    let sample = sample_path();
    let output = run_iftmin(&[
        "decode",
        "--compact",
        "/nonexistent/missing.edi",
        sample.to_string_lossy().as_ref(),
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout should be UTF-8");
    // Exactly one JSON document: the missing file was skipped
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn export_command_writes_both_csv_files() {
    let out_dir = tempfile::tempdir().expect("create temp dir");
    let sample = sample_path();
    let output = run_iftmin(&[
        "export",
        sample.to_string_lossy().as_ref(),
        "--out",
        out_dir.path().to_string_lossy().as_ref(),
    ]);

    assert!(
        output.status.success(),
        "expected export to succeed; stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let summary = fs::read_to_string(out_dir.path().join("summary.csv")).expect("summary.csv");
    assert!(summary.contains("1027214650005003"));

    let shipments =
        fs::read_to_string(out_dir.path().join("shipments.csv")).expect("shipments.csv");
    // Header plus one row per shipment/item pair
    assert_eq!(shipments.lines().count(), 7);
    assert!(shipments.contains("B0BM6X8KLR"));
}
