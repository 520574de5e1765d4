//! Release lister
//!
//! Walks the releases listing one page at a time and collects the tags of
//! stable (non-prerelease) releases. A page that yields no stable tags ends
//! the walk; that page is not merged.

use crate::core::{TagsError, TagsResult};
use crate::di::traits::{Clock, ReleaseSource, SystemClock};
use crate::github::{GitHubRelease, RateLimit};
use std::time::Duration;

pub struct ReleaseLister<S, C = SystemClock> {
    source: S,
    repo: String,
    clock: C,
}

impl<S: ReleaseSource> ReleaseLister<S> {
    pub fn new(source: S, repo: impl Into<String>) -> Self {
        Self::with_clock(source, repo, SystemClock)
    }
}

impl<S: ReleaseSource, C: Clock> ReleaseLister<S, C> {
    pub fn with_clock(source: S, repo: impl Into<String>, clock: C) -> Self {
        Self {
            source,
            repo: repo.into(),
            clock,
        }
    }

    /// Collect the stable tags of every page, in service order.
    ///
    /// Any failure aborts the walk and the tags gathered so far are dropped.
    pub async fn collect_tags(&self) -> TagsResult<Vec<String>> {
        let mut tags = Vec::new();
        let mut page = 1u32;

        loop {
            let page_tags = self.fetch_stable_tags(page).await?;

            if page_tags.is_empty() {
                tracing::info!("No stable releases on page {}, stopping", page);
                break;
            }

            tracing::debug!("Page {}: {} stable tags", page, page_tags.len());
            tags.extend(page_tags);
            page += 1;
        }

        Ok(tags)
    }

    /// Fetch one page and return its stable tags.
    ///
    /// Order of checks: status, rate limit pacing, then parsing. When the
    /// rate limit is exhausted the wait happens here, after this page is in
    /// hand, so it delays the next request rather than repeating this one.
    pub async fn fetch_stable_tags(&self, page: u32) -> TagsResult<Vec<String>> {
        let response = self.source.fetch_page(page).await?;

        if let Some(err) = TagsError::from_status(response.status, &self.repo) {
            return Err(err);
        }

        self.pace(&response.rate_limit).await;

        let releases = parse_releases(&response.body)?;
        Ok(stable_tags(&releases))
    }

    async fn pace(&self, rate_limit: &RateLimit) {
        let Some(wait) = rate_limit.wait_secs(self.clock.now_epoch()) else {
            return;
        };

        // wait_secs reads a missing reset as 0, so a positive wait implies one
        let reset_at = rate_limit
            .reset
            .and_then(|r| chrono::DateTime::from_timestamp(r, 0))
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();

        tracing::warn!(
            "GitHub API rate limit exhausted, waiting {} seconds until reset at {}",
            wait,
            reset_at
        );

        tokio::time::sleep(Duration::from_secs(wait)).await;
    }
}

/// Deserialize a page body into releases.
pub fn parse_releases(body: &str) -> TagsResult<Vec<GitHubRelease>> {
    serde_json::from_str(body).map_err(|source| TagsError::InvalidJson {
        body: body.to_string(),
        source,
    })
}

/// Tags of the entries whose `prerelease` is `false`, in array order.
///
/// Entries with a null, missing or non-boolean flag are skipped.
pub fn stable_tags(releases: &[GitHubRelease]) -> Vec<String> {
    releases
        .iter()
        .filter_map(|r| r.stable_tag().map(str::to_string))
        .collect()
}

/// Each tag followed by a single space.
pub fn render_tags(tags: &[String]) -> String {
    tags.iter().map(|t| format!("{} ", t)).collect()
}
