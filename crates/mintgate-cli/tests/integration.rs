#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG_ENV: &[&str] = &[
    "MINTGATE_CONFIG",
    "NEYNAR_API_KEY",
    "CAST_HASH",
    "BASE_URL",
    "NEYNAR_API_URL",
    "PORT",
];

/// `mintgate` with none of its configuration inherited from the environment.
fn mintgate() -> Command {
    let mut cmd = Command::cargo_bin("mintgate").unwrap();
    for var in CONFIG_ENV {
        cmd.env_remove(var);
    }
    cmd
}

// ---------------------------------------------------------------------------
// mintgate config validate
// ---------------------------------------------------------------------------

#[test]
fn validate_lists_missing_values_but_succeeds() {
    mintgate()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[warning] NEYNAR_API_KEY is not set",
        ))
        .stdout(predicate::str::contains("[warning] CAST_HASH is not set"))
        .stdout(predicate::str::contains("[warning] BASE_URL is not set"));
}

#[test]
fn validate_complete_env_config_is_clean() {
    mintgate()
        .args(["config", "validate"])
        .env("NEYNAR_API_KEY", "key")
        .env("CAST_HASH", "0xcafe")
        .env("BASE_URL", "https://gate.example")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid. No warnings."));
}

#[test]
fn validate_fails_on_schemeless_base_url() {
    mintgate()
        .args(["config", "validate", "--base-url", "gate.example"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] BASE_URL"))
        .stderr(predicate::str::contains("config validation found errors"));
}

#[test]
fn validate_json_output() {
    let output = mintgate()
        .args(["config", "validate", "--json"])
        .env("NEYNAR_API_KEY", "key")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let warnings = json["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0]["level"], "warning");
}

// ---------------------------------------------------------------------------
// mintgate config show
// ---------------------------------------------------------------------------

#[test]
fn show_redacts_api_key() {
    mintgate()
        .args(["config", "show", "--json"])
        .env("NEYNAR_API_KEY", "super-secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("***"))
        .stdout(predicate::str::contains("super-secret").not());
}

#[test]
fn show_reads_yaml_file_and_flags_override_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mintgate.yaml");
    std::fs::write(
        &path,
        "cast_hash: \"0xfile\"\nbase_url: https://file.example\nport: 8080\n",
    )
    .unwrap();

    mintgate()
        .args(["config", "show", "--config"])
        .arg(&path)
        .args(["--base-url", "https://flag.example"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0xfile"))
        .stdout(predicate::str::contains("base_url: https://flag.example"))
        .stdout(predicate::str::contains("port: 8080"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    mintgate()
        .args(["config", "show", "--config"])
        .arg(dir.path().join("absent.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// mintgate serve
// ---------------------------------------------------------------------------

#[test]
fn serve_reports_taken_port_without_banner() {
    let taken = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
    let port = taken.local_addr().unwrap().port().to_string();
    mintgate()
        .args(["serve", "--port", &port])
        .assert()
        .failure()
        .stdout(predicate::str::contains("listening").not())
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

#[test]
fn help_lists_subcommands() {
    mintgate()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("config"));
}
