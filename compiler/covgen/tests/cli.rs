//! End-to-end tests for the covgen binary and library entry points.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::io::Write;
use std::path::Path;
use std::process::Command as Process;

use covgen::{generate, CliOptions};
use covgen_codegen::BreakpointPlacement;
use covgen_ir::CoverageError;
use pretty_assertions::assert_eq;

const FIXED: &str = "void fixed_tests() {\n\tVector<int> v = {1, 2, 3};\n\tBREAKPOINT;\n}\n";

fn fixed_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXED.as_bytes()).unwrap();
    file
}

fn options_for(path: &Path) -> CliOptions {
    CliOptions {
        fixed_path: path.to_path_buf(),
        ..CliOptions::default()
    }
}

fn covgen_bin() -> Process {
    Process::new(env!("CARGO_BIN_EXE_covgen"))
}

// ── Library ─────────────────────────────────────────────────────

#[test]
fn generate_appends_fixed_block_before_main() {
    let file = fixed_file();
    let program = generate(&options_for(file.path())).unwrap();
    let fixed_at = program.find(FIXED).unwrap();
    let main_at = program.find("int main()").unwrap();
    assert!(program.find("void stanford_other()").unwrap() < fixed_at);
    assert!(fixed_at < main_at);
    assert!(program.contains("\tfixed_tests();\n\treturn 0;\n}\n"));
}

#[test]
fn generate_reports_missing_fixed_block() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate(&options_for(&dir.path().join("fixed_tests"))).unwrap_err();
    assert!(matches!(err, CoverageError::ResourceNotFound { .. }));
}

#[test]
fn custom_entry_reaches_main() {
    let file = fixed_file();
    let options = CliOptions {
        entry: "run_fixed".to_string(),
        breakpoints: BreakpointPlacement::EachScope,
        ..options_for(file.path())
    };
    let program = generate(&options).unwrap();
    assert!(program.contains("\tstanford_other();\n\trun_fixed();\n"));
    // one per family scope plus the one inside the fixed block
    assert_eq!(program.matches("BREAKPOINT;").count(), 10 + 1);
}

// ── Binary ──────────────────────────────────────────────────────

#[test]
fn binary_writes_program_to_stdout() {
    let file = fixed_file();
    let output = covgen_bin()
        .arg(format!("--fixed={}", file.path().display()))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, generate(&options_for(file.path())).unwrap());
    assert!(stdout.starts_with("#include \"deque.h\"\n"));
}

#[test]
fn binary_missing_resource_emits_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = covgen_bin()
        .arg(format!("--fixed={}", dir.path().join("absent").display()))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot read fixed test block"), "{stderr}");
}

#[test]
fn binary_writes_output_file() {
    let file = fixed_file();
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("coverage.cpp");
    let output = covgen_bin()
        .arg(format!("--fixed={}", file.path().display()))
        .arg("-o")
        .arg(&out_path)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let written = std::fs::read_to_string(&out_path).unwrap();
    assert!(written.contains("Map<string, int> map_string_int = {{\"stanford\", 106}, {"));
}

#[test]
fn binary_rejects_unknown_flag() {
    let output = covgen_bin().arg("--bogus").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
