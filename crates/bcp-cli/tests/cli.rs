//! End-to-end tests driving the `bcp` binary against a temporary data file

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn bcp(home: &Path, data_file: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bcp"))
        .env("HOME", home)
        .env_remove("BCP_DATA_FILE")
        .env_remove("RUST_LOG")
        .arg("--file")
        .arg(data_file)
        .args(args)
        .output()
        .expect("Failed to run bcp")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_register_plan_and_review() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("bcp_data.json");

    let out = bcp(temp.path(), &data, &["review"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains("not ready"));

    let out = bcp(
        temp.path(),
        &data,
        &["risk", "add", "Server Outage", "--impact", "high", "--probability", "medium"],
    );
    assert!(out.status.success(), "{:?}", out);

    let out = bcp(temp.path(), &data, &["review"]);
    assert!(stdout(&out).contains("Some risks have no plans"));

    let out = bcp(
        temp.path(),
        &data,
        &[
            "plan",
            "add",
            "--risk",
            "Server Outage",
            "--steps",
            "Fail over to the standby region",
            "--responsible",
            "Ops on-call",
        ],
    );
    assert!(out.status.success(), "{:?}", out);

    let out = bcp(temp.path(), &data, &["review"]);
    assert!(stdout(&out).contains("100% ready"));

    let raw = std::fs::read_to_string(&data).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["risks"][0]["impact"], "High");
    assert_eq!(value["plans"][0]["responsible"], "Ops on-call");
}

#[test]
fn test_search_is_case_insensitive() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("bcp_data.json");
    bcp(
        temp.path(),
        &data,
        &["risk", "add", "Server Outage", "-i", "high", "-p", "low"],
    );

    for keyword in ["server", "SERVER", "erv"] {
        let out = bcp(temp.path(), &data, &["search", keyword]);
        assert!(stdout(&out).contains("  - Server Outage"), "keyword {}", keyword);
    }

    let out = bcp(temp.path(), &data, &["--json", "search", "outage"]);
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["risks"][0]["name"], "Server Outage");
}

#[test]
fn test_validation_failures_exit_nonzero() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("bcp_data.json");

    let out = bcp(
        temp.path(),
        &data,
        &["plan", "add", "-r", "Fire", "-s", "Evacuate", "-o", "Warden"],
    );
    assert!(!out.status.success());
    assert!(!data.exists());

    let out = bcp(temp.path(), &data, &["risk", "add", " ", "-i", "low", "-p", "low"]);
    assert!(!out.status.success());

    let out = bcp(temp.path(), &data, &["risk", "add", "Fire", "-i", "severe", "-p", "low"]);
    assert!(!out.status.success());
}

#[test]
fn test_corrupt_file_warns_and_recovers() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("bcp_data.json");
    std::fs::write(&data, "{ definitely not json").unwrap();

    let out = bcp(temp.path(), &data, &["risk", "list"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Warning"));
    assert!(stdout(&out).contains("No risks registered yet."));
}

#[test]
fn test_reads_legacy_arabic_file() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("bcp_data.json");
    std::fs::write(
        &data,
        r#"{
    "risks": [{"name": "انقطاع الكهرباء", "impact": "عالي", "probability": "ضعيف"}],
    "plans": []
}"#,
    )
    .unwrap();

    let out = bcp(temp.path(), &data, &["risk", "list"]);
    let text = stdout(&out);
    assert!(text.contains("انقطاع الكهرباء"));
    assert!(text.contains("عالي (High)"));
    assert!(text.contains("ضعيف (Low)"));
}

#[test]
fn test_log_keeps_earlier_runs() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("bcp_data.json");

    let out = bcp(temp.path(), &data, &["risk", "add", "Fire", "-i", "high", "-p", "low"]);
    assert!(out.status.success(), "{:?}", out);
    bcp(temp.path(), &data, &["review"]);
    bcp(temp.path(), &data, &["--help"]);

    let log = std::fs::read_to_string(temp.path().join(".bcp").join("logs").join("bcp.log"))
        .expect("Failed to read log file");
    assert!(log.contains("Added risk \"Fire\""), "log was: {}", log);
    assert!(log.matches("Using data file").count() >= 2);
}
