use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PRESCRIPTION: &str = "R\n1) Tab. PARACET 650\n1-0-1\n(After Food)\n";

/// Command with an isolated config directory.
fn rxner(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rxner").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home);
    cmd
}

fn write_transcript(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, PRESCRIPTION).unwrap();
    path
}

#[test]
fn process_transcript_prints_table_and_json() {
    let dir = TempDir::new().unwrap();
    let input = write_transcript(&dir, "rx.txt");

    rxner(dir.path())
        .arg("process")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Extracted Items (table):\nmedicine"))
        .stdout(predicate::str::contains("PARACET"))
        .stdout(predicate::str::contains("\n\nJSON:\n["))
        .stdout(predicate::str::contains("morning and evening; after food"));
}

#[test]
fn process_json_format() {
    let dir = TempDir::new().unwrap();
    let input = write_transcript(&dir, "rx.txt");

    let output = rxner(dir.path())
        .args(["process", "--format", "json"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        items,
        serde_json::json!([{
            "medicine": "PARACET",
            "dosage": "650",
            "frequency": "morning and evening; after food",
            "duration": null,
            "source": "1) Tab. PARACET 650"
        }])
    );
}

#[test]
fn process_debug_dumps_ocr_and_lines() {
    let dir = TempDir::new().unwrap();
    let input = write_transcript(&dir, "rx.txt");

    rxner(dir.path())
        .args(["process", "--debug", "-f", "table"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("--- RAW OCR ---\nR\n"))
        .stdout(predicate::str::contains("--- LINES ---\n00: R\n01: 1) Tab. PARACET 650\n"));
}

#[test]
fn process_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write_transcript(&dir, "rx.txt");
    let out = dir.path().join("items.csv");

    rxner(dir.path())
        .args(["process", "-f", "csv", "-o"])
        .arg(&out)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("medicine,dosage,frequency,duration\nPARACET,650,"));
}

#[test]
fn process_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    rxner(dir.path())
        .args(["process", "/no/such/prescription.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "file not found -> /no/such/prescription.png",
        ));
}

#[test]
fn missing_file_reported_before_bad_default_config() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("rxner");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), "{ not json").unwrap();

    rxner(dir.path())
        .args(["process", "/no/such/prescription.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "file not found -> /no/such/prescription.png",
        ));
}

#[test]
fn process_unreadable_image_is_pipeline_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("scan.png");
    fs::write(&input, b"not an image").unwrap();

    rxner(dir.path())
        .args(["process", "--model-dir"])
        .arg(dir.path().join("models"))
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pipeline error"));
}

#[test]
fn config_init_respects_force() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf").join("rxner.json");

    rxner(dir.path())
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["extraction"]["max_medicine_words"], 6);

    rxner(dir.path())
        .args(["config", "init", "--output"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    rxner(dir.path())
        .args(["config", "init", "--force", "--output"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn config_set_writes_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("my.json");

    rxner(dir.path())
        .arg("-c")
        .arg(&path)
        .args(["config", "set", "ocr.engine", "tesseract"])
        .assert()
        .success();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["ocr"]["engine"], "tesseract");
    assert!(!dir.path().join("rxner").join("config.json").exists());

    rxner(dir.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "ocr.engine"])
        .assert()
        .success()
        .stdout("\"tesseract\"\n");
}

#[test]
fn explicit_config_drops_source() {
    let dir = TempDir::new().unwrap();
    let input = write_transcript(&dir, "rx.txt");
    let config = dir.path().join("rx.json");
    fs::write(&config, r#"{"output": {"include_source": false}}"#).unwrap();

    rxner(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["process", "-f", "json"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\"").not());
}

#[test]
fn batch_writes_outputs_and_summary() {
    let dir = TempDir::new().unwrap();
    write_transcript(&dir, "a.txt");
    write_transcript(&dir, "b.txt");
    let out = dir.path().join("out");
    let pattern = dir.path().join("*.txt");

    rxner(dir.path())
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("-o")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files"));

    assert!(out.join("a.json").exists());
    assert!(out.join("b.json").exists());

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert!(summary.starts_with("filename,status,item_count,processing_time_ms,error\n"));
    assert!(summary.contains("a.txt,success,1,"));
    assert!(summary.contains("b.txt,success,1,"));
}

#[test]
fn batch_without_matches_fails() {
    let dir = TempDir::new().unwrap();
    let pattern = dir.path().join("*.png");

    rxner(dir.path())
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}
