use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn drawing_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("drawing").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

#[test]
fn help_prints_description() {
    let temp = TempDir::new().unwrap();
    drawing_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Retained-mode 2D scene renderer"));
}

#[test]
fn no_output_prints_usage() {
    let temp = TempDir::new().unwrap();
    drawing_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn list_shapes_announces_builtin_types() {
    let temp = TempDir::new().unwrap();
    drawing_cmd(&temp)
        .arg("--list-shapes")
        .assert()
        .success()
        .stdout(predicate::eq("Circle\nRectangle\nTriangle\n"));
}

#[test]
fn demo_scene_is_written_as_png() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("demo.png");

    drawing_cmd(&temp)
        .args(["--width", "640", "--height", "480", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 640x480 scene with 3 shape(s)"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn shapes_by_name_use_config_size() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(
        &config,
        "[surface]\nwidth = 200\nheight = 120\n\n[shapes]\nfill_color = \"#FF0000\"\n",
    )
    .unwrap();
    let output = temp.path().join("named.png");

    drawing_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .args(["--shape", "Circle", "--shape", "Triangle", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 200x120 scene with 2 shape(s)"));
}

#[test]
fn abstract_shape_name_is_rejected() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("never.png");

    drawing_cmd(&temp)
        .args(["--shape", "Shape", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("abstract"));

    assert!(!output.exists());
}

#[test]
fn out_of_range_dimensions_are_rejected() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("never.png");

    for args in [["--width", "0"], ["--height", "16385"]] {
        drawing_cmd(&temp)
            .args(args)
            .arg("--output")
            .arg(&output)
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value"));
    }

    assert!(!output.exists());
}
