use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "hvz-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_hvz-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    for name in ["smoke", "disclosure", "resources", "content"] {
        assert!(content.contains(name), "missing {name}");
    }
}

#[test]
fn cli_static_run_reports_json() {
    let exe = env!("CARGO_BIN_EXE_hvz-tester");
    let output_path = temp_path("static");
    let status = Command::new(exe)
        .args(["--mode", "static", "--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());

    let report = std::fs::read_to_string(output_path).expect("read report");
    let parsed: serde_json::Value = serde_json::from_str(&report).expect("json report");
    let results = parsed.as_array().expect("result list");
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r["passed"] == serde_json::Value::Bool(true)));
    assert!(results.iter().all(|r| r["mode"] == "static"));
}

#[test]
fn cli_runs_with_unknown_browser() {
    let exe = env!("CARGO_BIN_EXE_hvz-tester");
    let output_path = temp_path("browser");
    let output = Command::new(exe)
        .args([
            "--mode",
            "browser",
            "--browsers",
            "unknown",
            "--report",
            "markdown",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown browser"));
    let report = std::fs::read_to_string(output_path).expect("read report");
    assert!(report.contains("# HvZ Site Test Results"));
}
