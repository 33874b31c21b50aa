// file: tests/cli_test.rs
// description: exit codes and output side effects of the remates binary

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn remates(dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_remates"));
    command.current_dir(dir.path()).arg("--color=false");
    command
}

#[test]
fn test_no_input_prints_usage_and_exits_1() {
    let dir = TempDir::new().unwrap();
    let output = remates(&dir).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_input_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("salida.xlsx");

    let output = remates(&dir)
        .arg(dir.path().join("no_existe.html"))
        .arg(&target)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!target.exists());
    assert!(!dir.path().join("remates_html.xlsx").exists());
}

#[test]
fn test_default_output_and_summary() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("edicto.html");
    fs::write(
        &input,
        "<p>REMATE LA FINCA de Cartago, con una base de MIL COLONES EXACTOS.</p>",
    )
    .unwrap();

    let output = remates(&dir).arg(&input).output().unwrap();

    assert!(output.status.success());
    assert!(dir.path().join("remates_html.xlsx").exists());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saved 1 remates to remates_html.xlsx"));
}
