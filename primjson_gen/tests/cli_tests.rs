/* CLI Tests
 *
 * Run the built binary against the fixtures and inspect what it writes.
 */

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn primjson_gen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_primjson-gen"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run primjson-gen")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

#[test]
fn generate_writes_one_file_per_logical_name() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sample = fixture("sample.yaml");

    let output = primjson_gen(&["generate", "-f", path_arg(&sample), "-o", path_arg(dir.path())]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let mut written: Vec<String> = std::fs::read_dir(dir.path())
        .expect("read output dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(
        written,
        [
            "Sample.DiceRoll.g.cs",
            "Sample.DiceRollPrimitiveJsonConverter.g.cs",
            "Sample.EnvironmentNameConverter.g.cs",
        ]
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[✓] Generated"));
}

#[test]
fn generate_honours_config_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("options.yaml");
    std::fs::write(&config, "adapter-suffix: JsonAdapter\nfile-suffix: .cs\ngenerator-version: 2.0.0\n").expect("write config");
    let out = dir.path().join("out");

    let output = primjson_gen(&[
        "generate",
        "-f",
        path_arg(&fixture("file_name.yaml")),
        "-o",
        path_arg(&out),
        "--config",
        path_arg(&config),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let adapter = std::fs::read_to_string(out.join("FileNameJsonAdapter.cs")).expect("adapter written");
    assert!(adapter.contains("public partial class FileNameJsonAdapter"));
    assert!(adapter.contains("\"2.0.0\")]"));
    assert!(out.join("FileName.cs").exists());
}

#[test]
fn deny_diagnostics_fails_but_still_writes_valid_sources() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = primjson_gen(&[
        "generate",
        "-f",
        path_arg(&fixture("invalid.yaml")),
        "-f",
        path_arg(&fixture("file_name.yaml")),
        "-o",
        path_arg(dir.path()),
        "--deny-diagnostics",
    ]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning PRIM001"));
    assert!(stderr.contains("warning PRIM005"));
    assert!(dir.path().join("FileNamePrimitiveJsonConverter.g.cs").exists());
}

#[test]
fn check_reports_json() {
    let output = primjson_gen(&["check", "-f", path_arg(&fixture("sample.yaml")), "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    let mappings = report["mappings"].as_array().expect("mappings");
    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings[0]["wrapper"], "Sample.DiceRoll");
    assert_eq!(mappings[0]["primitive"], "Int32");
    assert_eq!(mappings[1]["adapter"], "Sample.EnvironmentNameConverter");
    assert_eq!(report["diagnostics"].as_array().map(Vec::len), Some(0));
}

#[test]
fn check_fails_on_diagnostics() {
    let output = primjson_gen(&["check", "-f", path_arg(&fixture("invalid.yaml"))]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Type 'TwoWay' must contain only one pair of conversion operators"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("missing.yaml");
    let output = primjson_gen(&["check", "-f", path_arg(&missing)]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.yaml"));
}

#[test]
fn check_reports_logical_names_from_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("options.yaml");
    std::fs::write(&config, "adapter-suffix: JsonAdapter\nfile-suffix: .cs\n").expect("write config");

    let output = primjson_gen(&[
        "check",
        "-f",
        path_arg(&fixture("file_name.yaml")),
        "-c",
        path_arg(&config),
        "--format",
        "json",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(report["mappings"][0]["adapter"], "FileNameJsonAdapter");
    assert_eq!(report["mappings"][0]["logical-name"], "FileNameJsonAdapter.cs");
}

#[test]
fn empty_adapter_suffix_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = dir.path().join("options.yaml");
    std::fs::write(&config, "adapter-suffix: \"\"\n").expect("write config");
    let out = dir.path().join("out");

    let output = primjson_gen(&[
        "generate",
        "-f",
        path_arg(&fixture("file_name.yaml")),
        "-o",
        path_arg(&out),
        "-c",
        path_arg(&config),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("adapter-suffix"));
    assert!(!out.exists());
}
