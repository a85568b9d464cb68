//! CLI contract tests.
//!
//! These exercise the binary's argument handling and exit-code contract
//! without needing pdfium or Tesseract: every case here fails (or is
//! rejected) before the rendering pipeline starts.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn pdfocr() -> Command {
    Command::cargo_bin("pdfocr").expect("binary builds")
}

#[test]
fn missing_argument_exits_1_with_usage() {
    pdfocr()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn nonexistent_path_exits_1_with_error() {
    pdfocr()
        .arg("/definitely/not/a/real/file.pdf")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: File not found: /definitely/not/a/real/file.pdf",
        ))
        .stdout(predicate::str::is_empty());
}

#[test]
fn non_pdf_file_exits_0_with_diagnostic_and_empty_stdout() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"this is not a pdf").unwrap();

    pdfocr()
        .arg(f.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("not a valid PDF"))
        // The absorbed failure still prints an empty result line.
        .stdout("\n");
}

#[test]
fn non_pdf_file_with_json_prints_nothing_to_stdout() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"GIF89a...").unwrap();

    pdfocr()
        .arg("--json")
        .arg(f.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Error:"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_mentions_page_block_format() {
    pdfocr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Page N ---"));
}
