// The glyph tool stand-in is a POSIX shell script.
#![cfg(unix)]
// assert_cmd::cargo_bin is deprecated but still works
#![allow(deprecated)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{TempDir, tempdir};

/// Prints one 600x700 square glyph per character of the text argument.
const SQUARE_TOOL: &str = r#"text="$2"
printf '['
i=0
while [ "$i" -lt "${#text}" ]; do
  if [ "$i" -gt 0 ]; then printf ','; fi
  printf '{"path":"M 0 0 L 600 0 L 600 700 L 0 700 Z","advance":600,"minX":0,"maxX":600,"height":700}'
  i=$((i + 1))
done
printf ']'
"#;

const FAILING_TOOL: &str = "echo 'font HelveticaNeue-Bold not found' >&2\nexit 4\n";

fn tool(dir: &Path, body: &str) -> PathBuf {
    let script = dir.join("tool.sh");
    fs::write(&script, body).unwrap();
    script
}

fn glyphmark(dir: &TempDir, subcommand: &str, script: &Path) -> Command {
    let mut cmd = Command::cargo_bin("glyphmark").unwrap();
    cmd.env("RUST_LOG", "info")
        .current_dir(dir.path())
        .arg(subcommand)
        .arg("--glyph-tool")
        .arg("sh")
        .arg("--glyph-tool-arg")
        .arg(script);
    cmd
}

fn icon_command(dir: &TempDir, script: &Path, output: &Path) -> Command {
    let mut cmd = glyphmark(dir, "icon", script);
    cmd.arg("--work-dir").arg(dir.path()).arg("--output").arg(output);
    cmd
}

#[test]
fn test_icon_writes_svg() {
    let dir = tempdir().unwrap();
    let script = tool(dir.path(), SQUARE_TOOL);
    let output = dir.path().join("assets").join("logo.svg");

    icon_command(&dir, &script, &output)
        .args(["--palette", "0", "ab", "Alpha", "Beta"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Generated icon at"))
        .stderr(predicate::str::contains("#77BEF0"));

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("viewBox=\"0 0 100 100\""));
    assert_eq!(svg.matches("<clipPath ").count(), 2);
    assert!(svg.contains("fill=\"#88410f\""));
}

#[test]
fn test_short_name_too_long() {
    let dir = tempdir().unwrap();
    let script = tool(dir.path(), SQUARE_TOOL);
    let output = dir.path().join("logo.svg");

    icon_command(&dir, &script, &output)
        .args(["ABCD", "Too", "Long"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Short name must be at most 3 characters"))
        .stderr(predicate::str::contains("Usage: glyphmark"));
    assert!(!output.exists());
}

#[test]
fn test_missing_full_name() {
    let dir = tempdir().unwrap();
    let script = tool(dir.path(), SQUARE_TOOL);
    let output = dir.path().join("logo.svg");

    icon_command(&dir, &script, &output)
        .arg("AB")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required arguments"));
    assert!(!output.exists());
}

#[test]
fn test_glyph_tool_failure_is_reported() {
    let dir = tempdir().unwrap();
    let script = tool(dir.path(), FAILING_TOOL);
    let output = dir.path().join("logo.svg");

    icon_command(&dir, &script, &output)
        .args(["AB", "Alpha", "Beta"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("glyph tool failed (AB)"))
        .stderr(predicate::str::contains("font HelveticaNeue-Bold not found"));
    assert!(!output.exists());
}

#[test]
fn test_setup_skip_assets() {
    let dir = tempdir().unwrap();
    let script = tool(dir.path(), SQUARE_TOOL);

    glyphmark(&dir, "setup", &script)
        .arg("--project-dir")
        .arg(dir.path())
        .args(["--skip-assets", "--palette", "4", "hi", "home", "indicator"])
        .assert()
        .success()
        .stderr(predicate::str::contains("app.capgo.plugin.HomeIndicator"))
        .stderr(predicate::str::contains("home indicator example app"));

    let svg = fs::read_to_string(dir.path().join("assets").join("logo.svg")).unwrap();
    assert!(svg.contains("fill=\"#0B1D51\""));
}
