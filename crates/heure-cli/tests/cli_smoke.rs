use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn help_works() -> Result<(), Box<dyn std::error::Error>> {
    Command::new(assert_cmd::cargo::cargo_bin!("heure-cli"))
        .arg("--help")
        .assert()
        .success();
    Ok(())
}

#[test]
fn default_file_names_in_working_dir() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(
        dir.path().join("brackets.json"),
        r#"{"fights": [{"heure": "08/11 20h11", "x": 1}, {"y": [{"heure": "25/12 23h59"}]}]}"#,
    )?;

    Command::new(assert_cmd::cargo::cargo_bin!("heure-cli"))
        .current_dir(dir.path())
        .env_remove("HEURE_YEAR")
        .assert()
        .success();

    let out = fs::read_to_string(dir.path().join("combats_updated.json"))?;
    let v: serde_json::Value = serde_json::from_str(&out)?;
    assert_eq!(
        v,
        serde_json::json!({"fights": [{"x": 1, "date": "2025-11-08", "time": "20:11"}, {"y": [{"date": "2025-12-25", "time": "23:59"}]}]})
    );
    Ok(())
}

#[test]
fn malformed_heure_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("in.json");
    let output = dir.path().join("out.json");
    fs::write(&input, r#"{"heure": "2025-11-08 20:11"}"#)?;

    Command::new(assert_cmd::cargo::cargo_bin!("heure-cli"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid heure"));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn missing_input_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    Command::new(assert_cmd::cargo::cargo_bin!("heure-cli"))
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("brackets.json"));
    assert!(!dir.path().join("combats_updated.json").exists());
    Ok(())
}

#[test]
fn year_flag_and_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("in.json");
    fs::write(&input, r#"[{"heure": "29/02 08h00"}]"#)?;

    let output = Command::new(assert_cmd::cargo::cargo_bin!("heure-cli"))
        .arg("-i")
        .arg(&input)
        .arg("--year")
        .arg("2028")
        .arg("--stdout")
        .output()?;
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(v, serde_json::json!([{"date": "2028-02-29", "time": "08:00"}]));
    assert!(!dir.path().join("combats_updated.json").exists());
    Ok(())
}

#[test]
fn year_from_environment() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("brackets.json"), r#"{"combat": {"heure": "14/06 11h30"}}"#)?;

    Command::new(assert_cmd::cargo::cargo_bin!("heure-cli"))
        .current_dir(dir.path())
        .env("HEURE_YEAR", "2024")
        .assert()
        .success();

    let out = fs::read_to_string(dir.path().join("combats_updated.json"))?;
    assert!(out.contains("\"date\": \"2024-06-14\""));
    assert!(!out.contains("heure"));
    Ok(())
}
