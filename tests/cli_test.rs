//! E2E tests for the prodcat binary.
//!
//! Runs the compiled binary against a mock catalog endpoint and verifies
//! user-visible behavior: messages, exit codes, and the output file.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get the prodcat binary command with env isolation.
fn prodcat_cmd() -> Command {
    let mut cmd = Command::cargo_bin("prodcat").expect("binary builds");
    for var in [
        "PRODCAT_URL",
        "PRODCAT_OUTPUT",
        "PRODCAT_COMPACT",
        "PRODCAT_CONFIG",
        "PRODCAT_LOG",
        "PRODCAT_LOG_FORMAT",
        "PRODCAT_LOG_FILE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Start a mock server on a dedicated runtime that outlives the command run.
fn start_server() -> (tokio::runtime::Runtime, MockServer) {
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let server = rt.block_on(MockServer::start());
    (rt, server)
}

#[test]
fn help_prints_usage() {
    prodcat_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("product catalog"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn writes_grouped_output_file() {
    let (rt, server) = start_server();
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id":1,"title":"A","price":9.5,"category":"x"}]"#,
                "application/json",
            ))
            .mount(&server),
    );

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("grouped_products.json");

    prodcat_cmd()
        .arg(format!("{}/products", server.uri()))
        .arg("-o")
        .arg(&output)
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data successfully written"));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, r#"{"x":[{"id":1,"title":"A","price":9.5}]}"#);
}

#[test]
fn pretty_output_is_the_default() {
    let (rt, server) = start_server();
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[{"id":1,"title":"A","price":9.5,"category":"x"}]"#,
                "application/json",
            ))
            .mount(&server),
    );

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("grouped_products.json");

    prodcat_cmd()
        .arg(format!("{}/products", server.uri()))
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains('\n'), "pretty output should be indented");
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["x"][0]["id"], 1);
}

#[test]
fn failed_fetch_reports_unsuccessful_and_exits_zero() {
    let (rt, server) = start_server();
    rt.block_on(
        Mock::given(method("GET"))
            .and(path("/products"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server),
    );

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("grouped_products.json");

    prodcat_cmd()
        .arg(format!("{}/products", server.uri()))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unsuccessful request."));

    assert!(!output.exists());
}

#[test]
fn malformed_config_file_fails_with_parse_exit_code() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "url = [broken").unwrap();

    prodcat_cmd()
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}
