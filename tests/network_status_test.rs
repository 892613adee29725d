use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;

use podnet::{error::Error, status::network_info, types::NetworkStatus};

const PODMAN_STATUS: &str = r#"{
    "podman": {
        "interfaces": {
            "eth0": {
                "subnets": [
                    {
                        "ipnet": "10.88.0.9/16",
                        "gateway": "10.88.0.1"
                    }
                ],
                "mac_address": "f2:99:8d:fb:5a:57"
            }
        }
    }
}"#;

/// Test helper to run the podnet binary against a directory
fn run_podnet(dir: &Path, extra: &[&str]) -> (Option<i32>, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_podnet"))
        .arg(dir)
        .args(extra)
        .env_remove("RUST_LOG")
        .env_remove("PODNET_DIR")
        .output()
        .expect("Failed to run podnet");

    (
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn test_lookup_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();
    let status_path = temp_dir.path().join("network.status");

    // Not attached to a network yet.
    let info = network_info(temp_dir.path()).unwrap();
    assert!(info.is_empty());

    fs::write(&status_path, PODMAN_STATUS).unwrap();
    let info = network_info(temp_dir.path()).unwrap();
    assert_eq!(info.ip, "10.88.0.9/16");
    assert_eq!(info.mac, "f2:99:8d:fb:5a:57");

    let status = NetworkStatus::read_from_dir(temp_dir.path())
        .unwrap()
        .expect("network.status should exist");
    let (name, iface) = status.primary_interface().unwrap();
    assert_eq!(name, "eth0");
    assert_eq!(
        iface.first_subnet().unwrap().gateway.as_deref(),
        Some("10.88.0.1")
    );

    fs::write(&status_path, "invalid json").unwrap();
    let res = network_info(temp_dir.path());
    assert!(matches!(res, Err(Error::FailedToDecode(_))));
}

#[test]
fn test_cli_text_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("network.status"), PODMAN_STATUS).unwrap();

    let (code, stdout, stderr) = run_podnet(temp_dir.path(), &[]);

    assert_eq!(code, Some(0), "podnet failed: {}", stderr);
    assert_eq!(stdout, "ip: 10.88.0.9/16\nmac: f2:99:8d:fb:5a:57\n");
}

#[test]
fn test_cli_json_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("network.status"), PODMAN_STATUS).unwrap();

    let (code, stdout, stderr) = run_podnet(temp_dir.path(), &["--output", "json"]);

    assert_eq!(code, Some(0), "podnet failed: {}", stderr);
    let result: Value = serde_json::from_str(&stdout).expect("Failed to parse output");
    assert_eq!(result["ip"], "10.88.0.9/16");
    assert_eq!(result["mac"], "f2:99:8d:fb:5a:57");
}

#[test]
fn test_cli_not_configured() {
    let temp_dir = tempfile::tempdir().unwrap();

    let (code, stdout, stderr) = run_podnet(temp_dir.path(), &[]);

    assert_eq!(code, Some(0), "podnet failed: {}", stderr);
    assert_eq!(stdout, "network not configured\n");
}

#[test]
fn test_cli_invalid_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("network.status"), "invalid json").unwrap();

    let (code, stdout, _) = run_podnet(temp_dir.path(), &["-o", "json"]);

    assert_eq!(code, Some(6));
    let result: Value = serde_json::from_str(&stdout).expect("Failed to parse error result");
    assert_eq!(result["code"], 6);
    assert_eq!(result["msg"], "Failed to decode content");
    assert!(result["details"].as_str().unwrap().contains("network.status"));
}

#[test]
fn test_cli_unreadable() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::create_dir(temp_dir.path().join("network.status")).unwrap();

    let (code, stdout, stderr) = run_podnet(temp_dir.path(), &[]);

    assert_eq!(code, Some(5));
    assert!(stdout.is_empty());
    assert!(stderr.contains("I/O failure"));
}
