//! GitHub integration
//!
//! This module provides the releases API client and its wire types:
//! - Fetch one page of a repository's releases
//! - Read the rate limit headers of each response

pub mod client;
pub mod types;

pub use client::GitHubClient;
pub use types::{GitHubRelease, PageResponse, RateLimit};
