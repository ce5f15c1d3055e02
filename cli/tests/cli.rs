use assert_cmd::assert::{Assert, OutputAssertExt};
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `mpcli` with credentials set and requests aimed at `base_url`.
fn cmd(base_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("mpcli").unwrap();
    cmd.env("MP_API_USERNAME", "test-user")
        .env("MP_API_TOKEN", "test-token")
        .env("MP_API_BASE", base_url)
        .env("MP_API_MAX_ATTEMPTS", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Run `cmd` off the async runtime that drives the mock server.
async fn run(mut cmd: Command) -> Assert {
    tokio::task::spawn_blocking(move || cmd.output())
        .await
        .expect("command thread")
        .expect("mpcli runs")
        .assert()
}

#[test]
fn help_lists_subcommands() {
    let output = Command::cargo_bin("mpcli").unwrap().arg("--help").assert().success();
    let help = String::from_utf8_lossy(&output.get_output().stdout).into_owned();

    for name in [
        "lists",
        "create-list",
        "pf-add",
        "segment-create",
        "df-update",
        "list-add-fields",
        "unsubs-by-list",
        "sms-unsubs-profs",
    ] {
        assert!(help.contains(name), "missing {name} in:\n{help}");
    }
}

#[test]
fn missing_credentials_fail() {
    Command::cargo_bin("mpcli")
        .unwrap()
        .env_remove("MP_API_USERNAME")
        .env_remove("MP_API_TOKEN")
        .args(["opens", "1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Error: API username/token missing."));
}

#[test]
fn pf_add_without_contact_fails_locally() {
    // Nothing listens on port 1, so only a local failure can pass
    cmd("http://127.0.0.1:1")
        .args(["pf-add", "12", "--mobile", "5551234"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Provide email_address OR mobile_number+mobile_prefix"));
}

#[test]
fn invalid_sms_type_is_rejected() {
    cmd("http://127.0.0.1:1")
        .args(["sms-unsubs-profs", "3", "2024-06-01", "--type", "during"])
        .assert()
        .failure()
        .stderr(contains("must be one of: on, before, after"));
}

#[test]
fn malformed_rules_json_is_rejected() {
    cmd("http://127.0.0.1:1")
        .args(["segment-create", "Johns", "--rules-json", "{\"Segments\":"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Invalid --rules-json"));
}

#[tokio::test(flavor = "multi_thread")]
async fn lists_walks_every_page() {
    let server = MockServer::start().await;
    for (offset, page) in [
        ("0", json!({ "data": [{ "id": 1 }, { "id": 2 }] })),
        ("2", json!({ "data": [{ "id": 3 }] })),
    ] {
        Mock::given(method("GET"))
            .and(path("/Lists"))
            .and(header("apiusername", "test-user"))
            .and(query_param("limit", "2"))
            .and(query_param("offset", offset))
            .respond_with(ResponseTemplate::new(200).set_body_json(page))
            .expect(1)
            .mount(&server)
            .await;
    }

    let mut command = cmd(&server.uri());
    command.args(["lists", "--limit", "2"]);
    let output = run(command).await.success().get_output().stdout.clone();

    let printed: Value = serde_json::from_slice(&output).expect("stdout is JSON");
    assert_eq!(printed, json!([{ "id": 1 }, { "id": 2 }, { "id": 3 }]));
}

#[tokio::test(flavor = "multi_thread")]
async fn api_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/Stats/GetOpens"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .expect(1)
        .mount(&server)
        .await;

    let mut command = cmd(&server.uri());
    command.args(["opens", "42"]);

    run(command)
        .await
        .failure()
        .code(1)
        .stderr(contains("Error: 401 error from ").and(contains("invalid token")));
}

#[tokio::test(flavor = "multi_thread")]
async fn debug_prints_request_trace() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/Send/SendNewsletter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
        .mount(&server)
        .await;

    let mut command = cmd(&server.uri());
    command.args(["--debug", "send-now", "5"]);

    run(command)
        .await
        .success()
        .stdout(contains("Request: POST ").and(contains("\"newsletterid\": 5")));
}
