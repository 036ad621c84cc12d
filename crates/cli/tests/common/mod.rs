//! Shared test utilities for the CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount a small backend on a wiremock server.
//!
//! Invariants / Assumptions:
//! - No `ALIGNAK_BACKEND_*` variable leaks in from the host environment.

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use alignak_backend_client::testing::items_page;

/// Returns a hermetic `alignak-backend-import` command.
pub fn cli_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("alignak-backend-import");

    cmd.env("DOTENV_DISABLED", "1");
    for suffix in [
        "API_URL",
        "TOKEN",
        "USERNAME",
        "PASSWORD",
        "ALLOW_GENERATE_TOKEN",
        "SKIP_VERIFY",
        "TIMEOUT",
        "MAX_RETRIES",
        "PAGE_SIZE",
    ] {
        cmd.env_remove(format!("ALIGNAK_BACKEND_{suffix}"));
    }
    cmd.env("RUST_LOG", "warn");

    cmd
}

/// Returns a hermetic command pointed at `base_url` with a static token.
#[allow(dead_code)]
pub fn cli_cmd_with_backend(base_url: &str) -> Command {
    let mut cmd = cli_cmd();
    cmd.env("ALIGNAK_BACKEND_API_URL", base_url)
        .env("ALIGNAK_BACKEND_TOKEN", "static-token")
        .env("ALIGNAK_BACKEND_MAX_RETRIES", "0");
    cmd
}

fn collection(endpoint: &str) -> Vec<Value> {
    match endpoint {
        "command" => vec![json!({"_id": "c1", "name": "check_ping", "command_line": "check_ping -H $HOSTADDRESS$"})],
        "timeperiod" => vec![json!({"_id": "t1", "name": "24x7", "dateranges": [{"monday": "00:00-24:00"}]})],
        "host" => vec![json!({
            "_id": "h1",
            "name": "srv01",
            "address": "10.0.0.1",
            "check_command": "c1",
            "check_period": "t1",
            "active_checks_enabled": true
        })],
        "service" => vec![json!({
            "_id": "s1",
            "name": "ping",
            "host_name": "h1",
            "check_command": "c1",
            "check_command_args": "-w 100"
        })],
        _ => Vec::new(),
    }
}

/// Mount every collection the importer reads.
#[allow(dead_code)]
pub async fn mount_backend(server: &MockServer) {
    for endpoint in [
        "command",
        "timeperiod",
        "contactgroup",
        "contact",
        "hostgroup",
        "host",
        "servicegroup",
        "service",
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/{endpoint}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(items_page(collection(endpoint))))
            .mount(server)
            .await;
    }
}
