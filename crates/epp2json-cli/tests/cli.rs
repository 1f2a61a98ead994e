use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ITEM: &str = "\"23\",1.0000,1.00,0.23,1.23,1.00,0.23,1.23";

fn header(kind: &str, number: &str, contractor: &str, issued: &str, gross: &str) -> String {
    let mut fields = vec![String::new(); 47];
    fields[0] = kind.to_string();
    fields[4] = number.to_string();
    fields[11] = contractor.to_string();
    fields[12] = contractor.to_string();
    fields[22] = issued.to_string();
    fields[29] = gross.to_string();
    fields[46] = "PLN".to_string();
    fields
        .iter()
        .map(|f| format!("\"{f}\""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Windows-1250 encoded export with one invoice of each type.
fn write_export(dir: &Path) -> PathBuf {
    let mut bytes = b"[INFO]\r\n\"1.11\",0,1250,\"Subiekt GT\",\"SGT\",\"".to_vec();
    // "Łódź" in Windows-1250.
    bytes.extend_from_slice(&[0xA3, 0xF3, 0x64, 0x9F]);
    bytes.extend_from_slice(b"\"\r\n\r\n");

    let sections = [
        header("FZ", "FZ/1", "PKO", "20230510000000", "123.00"),
        header("KFZ", "KFZ/1", "PKO", "20230512000000", "-12.30"),
        header("FS", "FS/1", "ORLEN", "20230620000000", "216.00"),
        header("KFS", "KFS/1", "ORLEN", "", "-10.80"),
    ];
    for header in sections {
        bytes.extend_from_slice(
            format!("[NAGLOWEK]\r\n{header}\r\n[ZAWARTOSC]\r\n{ITEM}\r\n\r\n").as_bytes(),
        );
    }

    let path = dir.join("eksport.epp");
    fs::write(&path, bytes).unwrap();
    path
}

/// Binary under test, with its config directory isolated in `config_home`.
#[allow(deprecated)]
fn epp2json(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("epp2json").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn kinds(json: &serde_json::Value) -> Vec<String> {
    json["faktury"]
        .as_array()
        .unwrap()
        .iter()
        .map(|inv| inv["typ"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn convert_writes_json_and_prints_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());
    let output = dir.path().join("faktury.json");

    epp2json(&dir)
        .args(["convert", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed 4 invoices"))
        .stdout(predicate::str::contains("Purchase invoices (FZ): 1"))
        .stdout(predicate::str::contains("Sale invoices (FS): 1"));

    let json = read_json(&output);
    assert_eq!(json["info"]["company"], "Łódź");
    assert_eq!(kinds(&json), vec!["FZ", "KFZ", "FS", "KFS"]);
    assert_eq!(json["faktury"][3]["data_wystawienia"], "0001-01-01T00:00:00Z");
}

#[test]
fn fz_only_drops_sale_credit_notes() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());
    let output = dir.path().join("out.json");

    epp2json(&dir)
        .args(["convert", "--fz-only", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(kinds(&read_json(&output)), vec!["FZ", "KFZ", "FS"]);
}

#[test]
fn fs_only_drops_purchase_credit_notes() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());
    let output = dir.path().join("out.json");

    epp2json(&dir)
        .args(["convert", "--fs-only", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(kinds(&read_json(&output)), vec!["FZ", "FS", "KFS"]);
}

#[test]
fn brief_listing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());
    let output = dir.path().join("brief.json");

    epp2json(&dir)
        .args(["convert", "--brief", "--compact", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(!text.contains('\n'));

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json[0]["kontrahent"], "PKO");
    assert_eq!(json[0]["kwota"], 123.0);
    assert_eq!(json[0]["liczba_pozycji"], 1);
}

#[test]
fn missing_input_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();

    epp2json(&dir)
        .args(["convert", "--input"])
        .arg(dir.path().join("nope.epp"))
        .arg("--output")
        .arg(dir.path().join("out.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open file"));
}

#[test]
fn malformed_header_fails_with_phase() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.epp");
    let text = concat!(
        "[INFO]\r\n\"1.11\",0\r\n",
        "[NAGLOWEK]\r\n\"FZ,1\r\n",
        "[ZAWARTOSC]\r\n1\r\n",
    );
    fs::write(&input, text).unwrap();

    epp2json(&dir)
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse invoice header"));
}

#[test]
fn stats_reports_types_and_months() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());

    epp2json(&dir)
        .args(["stats", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("KFS"))
        .stdout(predicate::str::contains("2023-05: 2 invoices"))
        .stdout(predicate::str::contains("2023-06: 1 invoices"));
}

#[test]
fn stats_filters_by_contractor() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());

    epp2json(&dir)
        .args(["stats", "--contractor", "ORL", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 invoices for contractor ORL"));
}

#[test]
fn validate_reports_negative_amounts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());

    epp2json(&dir)
        .args(["validate", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Negative gross amount in invoice KFZ/1"));

    epp2json(&dir)
        .args(["validate", "--strict", "-i"])
        .arg(&input)
        .assert()
        .failure();
}

#[test]
fn config_init_and_get() {
    let dir = tempfile::tempdir().unwrap();

    epp2json(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("epp2json").join("config.json").exists());

    epp2json(&dir)
        .args(["config", "set", "parse.include_sale", "false"])
        .assert()
        .success();

    epp2json(&dir)
        .args(["config", "get", "parse.include_sale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));
}

#[test]
fn config_file_controls_filtering() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());
    let output = dir.path().join("out.json");
    let config = dir.path().join("custom.json");
    fs::write(&config, r#"{"parse": {"include_purchase": false}}"#).unwrap();

    epp2json(&dir)
        .arg("--config")
        .arg(&config)
        .args(["convert", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(kinds(&read_json(&output)), vec!["FZ", "FS", "KFS"]);
}

#[test]
fn config_commands_use_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.json");
    fs::write(&config, r#"{"output": {"pretty": false}}"#).unwrap();

    epp2json(&dir)
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "parse.include_purchase", "false"])
        .assert()
        .success();

    let saved = read_json(&config);
    assert_eq!(saved["parse"]["include_purchase"], false);
    assert_eq!(saved["output"]["pretty"], false);
    assert!(!dir.path().join("epp2json").join("config.json").exists());

    epp2json(&dir)
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "output.pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));

    epp2json(&dir)
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.json"));
}

#[test]
fn log_level_follows_verbosity_and_rust_log() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_export(dir.path());
    let output = dir.path().join("out.json");

    let convert = |cmd: &mut Command| {
        cmd.args(["convert", "-i"])
            .arg(&input)
            .arg("-o")
            .arg(&output)
            .assert()
            .success()
    };

    convert(&mut epp2json(&dir)).stderr(predicate::str::contains("Parsed 4 invoices").not());
    convert(epp2json(&dir).arg("-v")).stderr(predicate::str::contains("Parsed 4 invoices"));
    convert(epp2json(&dir).env("RUST_LOG", "info"))
        .stderr(predicate::str::contains("Parsed 4 invoices"));
}
