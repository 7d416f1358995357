//! CLI behavior tests: exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn seorank_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seorank"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_args_analyzes_empty_input() {
    let dir = TempDir::new().unwrap();
    let mut cmd = seorank_cmd(&dir);
    cmd.arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Score actualizado: 75/100"));
}

#[test]
fn sample_flag_uses_prefilled_values() {
    let dir = TempDir::new().unwrap();
    let mut cmd = seorank_cmd(&dir);
    cmd.arg("--sample").arg("--quiet").arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("midominio.com: 95 (Baja)"));
}

#[test]
fn json_output_valid() {
    let dir = TempDir::new().unwrap();
    let mut cmd = seorank_cmd(&dir);
    cmd.args(["--domain", "tienda.com", "--keywords", "a, b", "--json"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert_eq!(value["input"]["domain"], "tienda.com");
    // 52 + 9 + 9 + 8 + 6 = 84
    assert_eq!(value["result"]["score"], 84);
    assert_eq!(value["result"]["difficulty"], "Baja");
}

#[test]
fn below_threshold_exit_1() {
    let dir = TempDir::new().unwrap();
    let mut cmd = seorank_cmd(&dir);
    cmd.args(["--threshold", "90", "--no-color"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("below threshold 90"));
}

#[test]
fn above_threshold_exit_0() {
    let dir = TempDir::new().unwrap();
    let mut cmd = seorank_cmd(&dir);
    cmd.args(["--sample", "--threshold", "90", "--quiet"]);
    cmd.assert().success();
}

#[test]
fn config_defaults_and_threshold_apply() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".seorankrc.json"),
        r#"{ "threshold": 80, "defaults": { "domain": "config.com" } }"#,
    )
    .unwrap();

    let mut cmd = seorank_cmd(&dir);
    cmd.args(["--quiet", "--no-color"]);
    // 75 is below the configured threshold
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("config.com: 75"));
}

#[test]
fn cli_threshold_overrides_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".seorankrc.json"), r#"{ "threshold": 80 }"#).unwrap();

    let mut cmd = seorank_cmd(&dir);
    cmd.args(["--quiet", "--threshold", "50"]);
    cmd.assert().success();
}

#[test]
fn missing_config_exit_2() {
    let dir = TempDir::new().unwrap();
    let mut cmd = seorank_cmd(&dir);
    cmd.args(["--config", "nope.json"]);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn invalid_config_exit_2() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".seorankrc.json"), "{ broken").unwrap();
    let mut cmd = seorank_cmd(&dir);
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn verbose_logs_signals_to_stderr() {
    let dir = TempDir::new().unwrap();
    let mut cmd = seorank_cmd(&dir);
    cmd.args(["--sample", "--verbose", "--no-color"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("signals computed"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".seorankrc.json");
    let mut cmd = seorank_cmd(&dir);
    cmd.arg("init").arg("--dir").arg(dir.path()).arg("--threshold").arg("65");
    cmd.assert().success();
    assert!(config_path.exists(), ".seorankrc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("\"threshold\": 65"));
    assert!(content.contains("midominio.com"));
}

#[test]
fn init_does_not_overwrite() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".seorankrc.json");
    fs::write(&config_path, r#"{ "threshold": 10 }"#).unwrap();
    let mut cmd = seorank_cmd(&dir);
    cmd.arg("init");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        r#"{ "threshold": 10 }"#
    );
}
