use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_xsdb"))
}

fn tmp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("xsdb_cli_{}_{}_{}", std::process::id(), nanos, name));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

#[test]
fn summary_mode_reports_counts() {
    let dir = tmp_dir("summary");
    std::fs::create_dir_all(&dir).unwrap();

    let out = run(&["--datasets-dir", dir.to_string_lossy().as_ref()]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("processes"), "unexpected summary: {stdout}");
    assert!(stdout.contains("missing"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn print_dumps_the_full_table() {
    let dir = tmp_dir("print");
    std::fs::create_dir_all(&dir).unwrap();

    let out = run(&["--print", "--datasets-dir", dir.to_string_lossy().as_ref()]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("process"));
    assert!(stdout.contains("TTTo2L2Nu"));
    assert!(stdout.contains("SingleMuon_RunB"));
    // Missing files are warnings in print mode, not failures.
    assert!(stdout.contains("[MISSING]"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn era_filter_restricts_rows() {
    let dir = tmp_dir("era");
    std::fs::create_dir_all(&dir).unwrap();

    let out = run(&["--print", "--era", "UL17", "--datasets-dir", dir.to_string_lossy().as_ref()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("UL17"));
    assert!(!stdout.contains("UL16preVFP"));
    assert!(!stdout.contains("UL18"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn throw_escalates_missing_files() {
    let dir = tmp_dir("throw");
    std::fs::create_dir_all(&dir).unwrap();

    let out = run(&["--throw", "--datasets-dir", dir.to_string_lossy().as_ref()]);
    assert!(!out.status.success(), "empty datasets dir must fail under --throw");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing"), "unexpected stderr: {stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn output_writes_json_report() {
    let dir = tmp_dir("output");
    std::fs::create_dir_all(&dir).unwrap();
    let report_path = dir.join("report.json");

    let out = run(&[
        "--era",
        "UL18",
        "--datasets-dir",
        dir.to_string_lossy().as_ref(),
        "--output",
        report_path.to_string_lossy().as_ref(),
    ]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));

    let report: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&report_path).unwrap()).unwrap();
    assert_eq!(report["energy"], "13TeV");
    let rows = report["rows"].as_array().unwrap();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r["era"] == "UL18"));
    assert!(!report["missing"].as_array().unwrap().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_era_label_is_rejected() {
    let out = run(&["--era", "UL19"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("UL19"), "unexpected stderr: {stderr}");
}
