//! Mock implementations of service traits for testing

use super::traits::{Clock, ReleaseSource};
use crate::core::{TagsError, TagsResult};
use crate::github::{PageResponse, RateLimit};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted release source
///
/// Serves queued responses in order and records the page number and
/// (tokio) instant of every request. Once the script runs out it serves
/// an empty page.
///
/// # Example
///
/// ```
/// use release_tags::di::mocks::MockReleaseSource;
///
/// let source = MockReleaseSource::new()
///     .with_json_page(r#"[{"tag_name":"v1.0.0","prerelease":false}]"#)
///     .with_json_page("[]");
///
/// assert_eq!(source.request_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct MockReleaseSource {
    responses: Arc<Mutex<VecDeque<TagsResult<PageResponse>>>>,
    requests: Arc<Mutex<Vec<(u32, tokio::time::Instant)>>>,
}

impl MockReleaseSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an arbitrary response
    pub fn with_response(self, response: TagsResult<PageResponse>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Queue a 200 response with plenty of rate limit left
    pub fn with_json_page(self, body: &str) -> Self {
        self.with_page(200, RateLimit::default(), body)
    }

    pub fn with_page(self, status: u16, rate_limit: RateLimit, body: &str) -> Self {
        self.with_response(Ok(PageResponse {
            status,
            rate_limit,
            body: body.to_string(),
        }))
    }

    /// Queue a failure reported by the source itself
    pub fn with_error(self, error: TagsError) -> Self {
        self.with_response(Err(error))
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Page numbers requested, in order
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests.lock().unwrap().iter().map(|(p, _)| *p).collect()
    }

    /// Instants at which each request was issued
    pub fn request_times(&self) -> Vec<tokio::time::Instant> {
        self.requests.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }
}

#[async_trait]
impl ReleaseSource for MockReleaseSource {
    async fn fetch_page(&self, page: u32) -> TagsResult<PageResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((page, tokio::time::Instant::now()));

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(PageResponse {
                    status: 200,
                    rate_limit: RateLimit::default(),
                    body: "[]".to_string(),
                })
            })
    }
}

/// Clock stuck at a fixed epoch second
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_epoch(&self) -> i64 {
        self.0
    }
}
