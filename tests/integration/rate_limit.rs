//! Tests for rate limit pacing

use super::common::*;
use assert_cmd::assert::OutputAssertExt;
use predicates::prelude::*;
use serde_json::json;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use wiremock::matchers::query_param;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn epoch_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

async fn mount_page_with_limit(server: &MockServer, page: &str, remaining: u64, reset: u64) {
    let body = if page == "1" {
        json!([release("v1.0", false)])
    } else {
        json!([])
    };

    Mock::given(query_param("page", page))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-remaining", remaining.to_string().as_str())
                .insert_header("x-ratelimit-reset", reset.to_string().as_str())
                .set_body_json(body),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_exhausted_window_waits_then_continues() {
    let server = MockServer::start().await;
    let reset = epoch_now() + 3;
    mount_page_with_limit(&server, "1", 0, reset).await;
    mount_page_with_limit(&server, "2", 60, reset + 3600).await;

    let start = Instant::now();
    let output = run(release_tags_command(&server)).await;
    let elapsed = start.elapsed();

    // The page that exhausted the window is used, not refetched
    output
        .assert()
        .success()
        .stdout("v1.0 \n")
        .stderr(predicate::str::contains("rate limit exhausted"));
    assert!(elapsed >= Duration::from_secs(2), "waited only {:?}", elapsed);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_remaining_quota_does_not_wait() {
    let server = MockServer::start().await;
    let reset = epoch_now() + 3600;
    mount_page_with_limit(&server, "1", 1, reset).await;
    mount_page_with_limit(&server, "2", 59, reset).await;

    let start = Instant::now();
    let output = run(release_tags_command(&server)).await;

    output
        .assert()
        .success()
        .stdout("v1.0 \n")
        .stderr(predicate::str::contains("rate limit exhausted").not());
    assert!(start.elapsed() < Duration::from_secs(30));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reset_already_passed_does_not_wait() {
    let server = MockServer::start().await;
    let reset = epoch_now() - 60;
    mount_page_with_limit(&server, "1", 0, reset).await;
    mount_page_with_limit(&server, "2", 0, reset).await;

    let output = run(release_tags_command(&server)).await;

    output
        .assert()
        .success()
        .stdout("v1.0 \n")
        .stderr(predicate::str::contains("rate limit exhausted").not());
}
