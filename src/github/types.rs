//! GitHub API type definitions

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// GitHub release information
///
/// Both fields are optional: a missing value or one of the wrong JSON type
/// reads as `None` instead of failing the whole page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GitHubRelease {
    #[serde(default, deserialize_with = "lenient")]
    pub tag_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub prerelease: Option<bool>,
}

impl GitHubRelease {
    /// Tag of a release explicitly flagged `"prerelease": false`
    pub fn stable_tag(&self) -> Option<&str> {
        match self.prerelease {
            Some(false) => self.tag_name.as_deref(),
            _ => None,
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// GitHub API rate limit state, read fresh from each response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests left in the current window
    pub remaining: Option<u64>,
    /// Epoch seconds at which the window resets
    pub reset: Option<i64>,
}

impl RateLimit {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            remaining: header_number(headers, "x-ratelimit-remaining"),
            reset: header_number(headers, "x-ratelimit-reset"),
        }
    }

    /// Whether the window is used up. A missing header counts as not exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Seconds to wait before the next request, given the current epoch time.
    ///
    /// Returns `None` unless the window is exhausted and the reset lies in the
    /// future. The wait is not capped.
    pub fn wait_secs(&self, now: i64) -> Option<u64> {
        if !self.is_exhausted() {
            return None;
        }

        let wait = self.reset.unwrap_or(0).saturating_sub(now);
        (wait > 0).then_some(wait as u64)
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<T>().ok())
}

/// One page of the releases listing, before status handling and parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub status: u16,
    pub rate_limit: RateLimit,
    pub body: String,
}
