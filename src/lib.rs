//! release-tags: list the stable release tags of a GitHub repository
//!
//! The library walks the paginated releases API, waits out exhausted rate
//! limit windows, and collects the tags of every non-prerelease release.

/// Error types.
pub mod core;

/// Configuration from the environment.
pub mod config;

/// GitHub releases API client.
pub mod github;

/// Dependency injection seams and test doubles.
pub mod di;

/// Pagination, filtering and output rendering.
pub mod lister;

pub use crate::core::{format_error_with_help, TagsError, TagsResult};
