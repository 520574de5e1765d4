use crate::core::{TagsError, TagsResult};
use std::time::Duration;

/// Repository whose releases are listed unless `RELEASE_TAGS_REPO` overrides it.
pub const DEFAULT_REPO: &str = "protocolbuffers/protobuf";

/// GitHub REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Releases requested per page (the API maximum).
pub const PER_PAGE: u32 = 100;

/// Connect and total timeout for every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const REPO_ENV: &str = "RELEASE_TAGS_REPO";
pub const API_URL_ENV: &str = "RELEASE_TAGS_API_URL";

/// Runtime configuration, built once at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL, without a trailing slash
    pub api_url: String,

    /// Repository in `owner/name` form
    pub repo: String,

    /// Access credential sent as `Authorization: token ...`
    pub token: Option<String>,

    pub per_page: u32,

    pub timeout: Duration,

    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            repo: DEFAULT_REPO.to_string(),
            token: None,
            per_page: PER_PAGE,
            timeout: REQUEST_TIMEOUT,
            user_agent: format!("release-tags/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> TagsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> TagsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();

        if let Some(url) = get(API_URL_ENV) {
            config.api_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(repo) = get(REPO_ENV) {
            config.repo = repo.trim().to_string();
        }
        validate_repo(&config.repo)?;

        config.token = get(TOKEN_ENV).map(|t| t.trim().to_string());

        Ok(config)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// URL of the releases listing endpoint, without query parameters.
    pub fn releases_url(&self) -> String {
        format!("{}/repos/{}/releases", self.api_url, self.repo)
    }
}

fn validate_repo(repo: &str) -> TagsResult<()> {
    match repo.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(())
        }
        _ => Err(TagsError::Config(format!(
            "Invalid repository '{}', expected owner/name",
            repo
        ))),
    }
}
