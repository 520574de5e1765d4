//! GitHub releases API client implementation

use crate::config::Config;
use crate::core::{TagsError, TagsResult};
use crate::di::traits::ReleaseSource;
use crate::github::types::{PageResponse, RateLimit};
use async_trait::async_trait;
use reqwest::{header, Client as HttpClient};

/// GitHub API client for one repository's releases
pub struct GitHubClient {
    http_client: HttpClient,
    releases_url: String,
    per_page: u32,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: &Config) -> TagsResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| TagsError::Config(format!("Invalid user agent: {}", e)))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(ref token) = config.token {
            let mut value = header::HeaderValue::from_str(&format!("token {}", token))
                .map_err(|e| TagsError::Config(format!("Invalid GitHub token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let http_client = HttpClient::builder()
            .default_headers(headers)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            releases_url: config.releases_url(),
            per_page: config.per_page,
        })
    }

    /// Fetch one page of releases as status, rate limit and body text
    pub async fn fetch_page(&self, page: u32) -> TagsResult<PageResponse> {
        tracing::debug!("GET {} page={} per_page={}", self.releases_url, page, self.per_page);

        let response = self
            .http_client
            .get(&self.releases_url)
            .query(&[("per_page", self.per_page), ("page", page)])
            .send()
            .await?;

        let status = response.status().as_u16();
        let rate_limit = RateLimit::from_headers(response.headers());
        let body = response.text().await?;

        Ok(PageResponse {
            status,
            rate_limit,
            body,
        })
    }
}

#[async_trait]
impl ReleaseSource for GitHubClient {
    async fn fetch_page(&self, page: u32) -> TagsResult<PageResponse> {
        Self::fetch_page(self, page).await
    }
}
