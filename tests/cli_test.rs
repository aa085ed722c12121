use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn numex(working_directory: &Path) -> Command {
    let mut command = Command::cargo_bin("numex").unwrap();
    command
        .current_dir(working_directory)
        .env_remove("INPUT_DIRECTORY")
        .env_remove("OUTPUT_DIRECTORY");
    command
}

fn write_input(root: &Path, subdirectory: &str, name: &str, content: &str) {
    let directory = root.join(subdirectory);
    fs::create_dir_all(&directory).unwrap();
    fs::write(directory.join(name), content).unwrap();
}

#[test]
fn test_run_without_arguments_uses_config_ini() {
    let temp_dir = tempdir().unwrap();
    write_input(
        &temp_dir.path().join("input"),
        "region_a",
        "TEST_store1.txt",
        "items: 3, range 5-7, code9",
    );
    fs::write(
        temp_dir.path().join("config.ini"),
        "[Directories]\nINPUT_DIRECTORY = input\nOUTPUT_DIRECTORY = output\n",
    )
    .unwrap();

    numex(temp_dir.path()).assert().success();

    let output = temp_dir.path().join("output/test_auchan_success_store1.txt");
    assert_eq!(fs::read_to_string(output).unwrap(), "3\n5\n6\n7\n9\n");
}

#[test]
fn test_environment_overrides_config_file() {
    let temp_dir = tempdir().unwrap();
    write_input(&temp_dir.path().join("real_input"), "a", "TEST_x.txt", "1-2");
    fs::write(
        temp_dir.path().join("config.ini"),
        "[Directories]\nINPUT_DIRECTORY = ignored_input\nOUTPUT_DIRECTORY = ignored_output\n",
    )
    .unwrap();

    numex(temp_dir.path())
        .env("INPUT_DIRECTORY", "real_input")
        .env("OUTPUT_DIRECTORY", "real_output")
        .assert()
        .success();

    let output = temp_dir.path().join("real_output/test_auchan_success_x.txt");
    assert_eq!(fs::read_to_string(output).unwrap(), "1\n2\n");
    assert!(!temp_dir.path().join("ignored_output").exists());
}

#[test]
fn test_environment_only_without_config_file() {
    let temp_dir = tempdir().unwrap();
    write_input(&temp_dir.path().join("in"), "a", "TEST_y.txt", "7");

    numex(temp_dir.path())
        .env("INPUT_DIRECTORY", "in")
        .env("OUTPUT_DIRECTORY", "out")
        .assert()
        .success();

    assert!(temp_dir.path().join("out/test_auchan_success_y.txt").is_file());
}

#[test]
fn test_missing_configuration_fails() {
    let temp_dir = tempdir().unwrap();

    numex(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("INPUT_DIRECTORY"));
}

#[test]
fn test_missing_input_directory_fails_without_output() {
    let temp_dir = tempdir().unwrap();

    numex(temp_dir.path())
        .env("INPUT_DIRECTORY", "missing")
        .env("OUTPUT_DIRECTORY", "output")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));

    assert!(!temp_dir.path().join("output").exists());
}

#[test]
fn test_yaml_config_option() {
    let temp_dir = tempdir().unwrap();
    write_input(&temp_dir.path().join("input"), "a", "TEST_z.txt", "9");
    fs::write(
        temp_dir.path().join("settings.yaml"),
        "Directories:\n  INPUT_DIRECTORY: input\n  OUTPUT_DIRECTORY: output\n",
    )
    .unwrap();

    numex(temp_dir.path())
        .args(["--config", "settings.yaml"])
        .assert()
        .success();

    assert!(temp_dir.path().join("output/test_auchan_success_z.txt").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp_dir = tempdir().unwrap();
    write_input(&temp_dir.path().join("input"), "a", "TEST_d.txt", "1-3");

    numex(temp_dir.path())
        .env("INPUT_DIRECTORY", "input")
        .env("OUTPUT_DIRECTORY", "output")
        .arg("--dry")
        .assert()
        .success()
        .stdout(predicate::str::contains("test_auchan_success_d.txt"));

    assert!(!temp_dir.path().join("output").exists());
}

#[test]
fn test_log_file_option() {
    let temp_dir = tempdir().unwrap();
    write_input(&temp_dir.path().join("input"), "a", "TEST_l.txt", "5");

    numex(temp_dir.path())
        .env("INPUT_DIRECTORY", "input")
        .env("OUTPUT_DIRECTORY", "output")
        .args(["--log-file", "run.log"])
        .assert()
        .success();

    let log = fs::read_to_string(temp_dir.path().join("run.log")).unwrap();
    assert!(log.contains("TEST_l.txt"));
}
