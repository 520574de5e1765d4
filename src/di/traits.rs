//! Trait definitions for dependency injection

use crate::core::TagsResult;
use crate::github::PageResponse;
use async_trait::async_trait;

/// Source of release listing pages
///
/// Returns the raw response of one page. Status handling, rate limit pacing
/// and parsing are the caller's job.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetch page `page` (1-based) of the releases listing
    async fn fetch_page(&self, page: u32) -> TagsResult<PageResponse>;
}

/// Wall clock used for rate limit reset arithmetic
pub trait Clock: Send + Sync {
    /// Current time in seconds since the Unix epoch
    fn now_epoch(&self) -> i64;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}
