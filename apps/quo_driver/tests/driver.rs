//! End-to-end tests against the built `quo-driver` binary: real process
//! exit codes, real stdout/stderr, a stubbed compiler standing in for a
//! real `c++`/`g++`/`clang++` so these don't depend on the host toolchain.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

fn quo_driver_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_quo-driver"))
}

/// Writes an executable shell script standing in for a C++ compiler: it
/// copies its first argument (the staged `.cpp` file the driver passes it)
/// to `captured_cpp`, then exits 0.
fn write_copying_stub_compiler(dir: &Path, captured_cpp: &Path) -> PathBuf {
    let script = dir.join("stub-cxx");
    fs::write(&script, format!("#!/bin/sh\ncp \"$1\" \"{}\"\n", captured_cpp.display())).unwrap();
    make_executable(&script);
    script
}

/// Writes an executable shell script that records (to stderr) that it ran,
/// then fails. Used to prove a compiler was never invoked.
fn write_trap_compiler(dir: &Path) -> PathBuf {
    let script = dir.join("trap-cxx");
    fs::write(&script, "#!/bin/sh\necho \"compiler invoked\" >&2\nexit 1\n").unwrap();
    make_executable(&script);
    script
}

fn make_executable(path: &Path) {
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

#[test]
fn valid_source_compiles_and_produces_translated_cpp() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.quo");
    fs::write(&input, "fn Main() Int { return 0; }").unwrap();
    let captured_cpp = dir.path().join("captured.cpp");
    let stub = write_copying_stub_compiler(dir.path(), &captured_cpp);

    let output = Command::new(quo_driver_bin())
        .arg(&input)
        .env("CXX", &stub)
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let cpp_text = fs::read_to_string(&captured_cpp).unwrap();
    assert!(cpp_text.contains("#include \"quo_runtime.h\""));
    assert!(cpp_text.contains("Int Main() {"));
}

#[test]
fn lex_error_exits_nonzero_with_stage_named_in_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.quo");
    fs::write(&input, "var x = `").unwrap();

    let output = Command::new(quo_driver_bin()).arg(&input).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("lex error"));
}

#[test]
fn parse_error_exits_nonzero_with_stage_and_line_in_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.quo");
    fs::write(&input, "fn Main( Int { return 0; }").unwrap();

    let output = Command::new(quo_driver_bin()).arg(&input).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parse error"));
    assert!(stderr.contains("line"));
}

#[test]
fn emit_tokens_prints_non_empty_output_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.quo");
    fs::write(&input, "fn Main() Int { return 0; }").unwrap();

    let output = Command::new(quo_driver_bin())
        .arg("--emit-tokens")
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

#[test]
fn emit_ast_prints_non_empty_output_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.quo");
    fs::write(&input, "fn Main() Int { return 0; }").unwrap();

    let output = Command::new(quo_driver_bin())
        .arg("--emit-ast")
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

#[test]
fn emit_cpp_prints_non_empty_output_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("main.quo");
    fs::write(&input, "fn Main() Int { return 0; }").unwrap();

    let output = Command::new(quo_driver_bin())
        .arg("--emit-cpp")
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("quo_runtime.h"));
}

#[test]
fn emit_flags_on_an_invalid_fixture_exit_nonzero_without_invoking_a_compiler() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.quo");
    // Lexically invalid, so every flag fails at the same, earliest stage —
    // `--emit-tokens` only exercises lexing, so a parse-only error wouldn't
    // trip it.
    fs::write(&input, "var x = `").unwrap();
    let trap = write_trap_compiler(dir.path());

    for flag in ["--emit-tokens", "--emit-ast", "--emit-cpp"] {
        let output = Command::new(quo_driver_bin())
            .arg(flag)
            .arg(&input)
            .env("CXX", &trap)
            .output()
            .unwrap();

        assert!(!output.status.success(), "{flag} should have failed to parse");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            !stderr.contains("compiler invoked"),
            "{flag} must not reach the compiler stage"
        );
    }
}
