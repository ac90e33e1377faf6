//! CLI Tests
//!
//! xlsx2sqlバイナリを実際に起動して、終了コードと出力ファイルを検証します。

use rust_xlsxwriter::{Workbook, XlsxError};
use std::fs;
use std::path::Path;
use std::process::Command;

fn write_fixture(path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Codes")?;

    worksheet.write_string(0, 0, "code")?;
    worksheet.write_string(0, 1, "full")?;
    worksheet.write_string(0, 2, "short")?;
    worksheet.write_string(1, 0, "A1")?;
    worksheet.write_string(1, 1, "Full Name")?;
    worksheet.write_string(1, 2, "O'Brien")?;
    worksheet.write_string(2, 0, "B2")?;
    worksheet.write_string(2, 2, "Bee")?;

    workbook.save(path)
}

fn xlsx2sql() -> Command {
    Command::new(env!("CARGO_BIN_EXE_xlsx2sql"))
}

#[test]
fn test_cli_batch_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("codes.xlsx");
    write_fixture(&input).unwrap();
    let output = dir.path().join("out").join("updates.sql");

    let result = xlsx2sql()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    let script = fs::read_to_string(&output).unwrap();
    assert!(script.starts_with("BEGIN;\n\nWITH vals(code, name) AS (\n"));
    assert!(script.contains("    ('A1','O''Brien'),\n    ('B2','Bee')\n"));
    assert!(script.contains("IS DISTINCT FROM v.name;"));

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("(2 updates)"));
}

#[test]
fn test_cli_per_row_with_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("codes.xlsx");
    write_fixture(&input).unwrap();
    let output = dir.path().join("per_row.sql");

    let result = xlsx2sql()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .args(["--sheet", "Codes", "--mode", "per-row"])
        .output()
        .unwrap();

    assert!(result.status.success());
    let script = fs::read_to_string(&output).unwrap();
    assert_eq!(script.matches("UPDATE documents\n").count(), 2);
    assert!(script.ends_with("WHERE data->>'code' = 'B2';\nCOMMIT;\n"));
}

#[test]
fn test_cli_only_diff_false() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("codes.xlsx");
    write_fixture(&input).unwrap();
    let output = dir.path().join("all.sql");

    let result = xlsx2sql()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(&output)
        .arg("--only-diff=false")
        .output()
        .unwrap();

    assert!(result.status.success());
    let script = fs::read_to_string(&output).unwrap();
    assert!(script.contains("WHERE d.data->>'code' = v.code;\n"));
    assert!(!script.contains("IS DISTINCT FROM"));
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("updates.sql");

    let result = xlsx2sql()
        .arg("--in")
        .arg(dir.path().join("missing.xlsx"))
        .arg("--out")
        .arg(&output)
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(!output.exists());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Failed to open workbook"));
}

#[test]
fn test_cli_unknown_sheet_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("codes.xlsx");
    write_fixture(&input).unwrap();

    let result = xlsx2sql()
        .arg("--in")
        .arg(&input)
        .arg("--out")
        .arg(dir.path().join("updates.sql"))
        .args(["--sheet", "Nope"])
        .output()
        .unwrap();

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Sheet 'Nope' not found"));
}

#[test]
fn test_cli_requires_input() {
    let result = xlsx2sql().output().unwrap();
    assert!(!result.status.success());
}
