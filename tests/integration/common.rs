//! Common utilities for integration tests

use std::process::{Command, Output};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const REPO: &str = "owner/repo";
pub const RELEASES_PATH: &str = "/repos/owner/repo/releases";

/// Command for the binary, pointed at the mock server with a token set
pub fn release_tags_command(server: &MockServer) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_release-tags"));
    cmd.env("RELEASE_TAGS_API_URL", server.uri())
        .env("RELEASE_TAGS_REPO", REPO)
        .env("GITHUB_TOKEN", "test-token")
        .env_remove("RUST_LOG");
    cmd
}

/// Run a command off the async runtime so the mock server keeps serving
pub async fn run(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

/// Mount a 200 response for one page, expected exactly once
pub async fn mount_page(server: &MockServer, page: u32, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(RELEASES_PATH))
        .and(query_param("per_page", "100"))
        .and(query_param("page", page.to_string()))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-remaining", "4999")
                .set_body_json(body),
        )
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a response with the given status for every request
pub async fn mount_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(RELEASES_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub fn release(tag: &str, prerelease: bool) -> serde_json::Value {
    serde_json::json!({
        "tag_name": tag,
        "name": tag,
        "draft": false,
        "prerelease": prerelease,
    })
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
