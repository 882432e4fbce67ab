use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn easel_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("easel").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

fn write_script(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("script.json");
    fs::write(&path, json).unwrap();
    path
}

const STAR_AND_LINE: &str = r#"{
    "actions": [
        {"action": "set_color", "color": "red"},
        {"action": "select_tool", "tool": "star"},
        {"action": "drag", "from": [40, 40], "to": [60, 40], "steps": 2},
        {"action": "select_tool", "tool": "line"},
        {"action": "drag", "from": [0, 0], "to": [100, 80]}
    ]
}"#;

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    easel_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replay drawing scripts onto a canvas",
        ));
}

#[test]
fn no_arguments_prints_summary() {
    let temp = TempDir::new().unwrap();
    easel_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("easel --script"));
}

#[test]
fn script_exports_png() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STAR_AND_LINE);
    let output = temp.path().join("out.png");

    easel_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"))
        .stdout(predicate::str::contains("Line Tool"))
        .stdout(predicate::str::contains("3 item(s)"));

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn unsupported_extension_falls_back_to_postscript() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STAR_AND_LINE);

    easel_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.webp"))
        .assert()
        .success()
        .stdout(predicate::str::contains("saved PostScript instead"));

    assert!(temp.path().join("out.ps").exists());
    assert!(!temp.path().join("out.webp").exists());
}

#[test]
fn jpeg_extension_writes_jpeg() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STAR_AND_LINE);
    let output = temp.path().join("out.jpg");

    easel_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("saved PostScript instead").not());

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(&[0xFF, 0xD8, 0xFF]));
    assert!(!temp.path().join("out.ps").exists());
}

#[test]
fn disabled_fallback_fails_on_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), STAR_AND_LINE);
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[export]\npostscript_fallback = false\n").unwrap();

    easel_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .arg("--output")
        .arg(temp.path().join("out.webp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported image format"));
}

#[test]
fn default_output_uses_configured_directory() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), r#"[{"action": "drag", "from": [5, 5], "to": [5, 5]}]"#);
    let save_dir = temp.path().join("saved");
    let config_dir = temp.path().join("easel");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        format!(
            "[export]\nsave_directory = \"{}\"\nfilename_template = \"sketch\"\n",
            save_dir.display()
        ),
    )
    .unwrap();

    easel_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .assert()
        .success();

    assert!(save_dir.join("sketch.png").exists());
}

#[test]
fn bad_filename_template_falls_back_to_default() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), r#"[{"action": "drag", "from": [5, 5], "to": [5, 5]}]"#);
    let save_dir = temp.path().join("saved");
    let config = temp.path().join("custom.toml");
    fs::write(
        &config,
        format!(
            "[export]\nsave_directory = \"{}\"\nfilename_template = \"drawing_%\"\n",
            save_dir.display()
        ),
    )
    .unwrap();

    easel_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("drawing_"));

    let saved: Vec<_> = fs::read_dir(&save_dir).unwrap().collect();
    assert_eq!(saved.len(), 1);
}

#[test]
fn malformed_script_reports_path() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), "[{\"action\": \"paint\"}]");

    easel_cmd(temp.path())
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("script.json"));
}

#[test]
fn init_config_writes_once() {
    let temp = TempDir::new().unwrap();

    easel_cmd(temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config"));
    assert!(temp.path().join("easel/config.toml").exists());

    easel_cmd(temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn tool_flag_overrides_configured_default() {
    let temp = TempDir::new().unwrap();
    let script = write_script(temp.path(), r#"[{"action": "drag", "from": [5, 5], "to": [25, 5]}]"#);

    easel_cmd(temp.path())
        .args(["--tool", "circle", "--script"])
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("circle.png"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Circle Tool"))
        .stdout(predicate::str::contains("1 item(s)"));
}
