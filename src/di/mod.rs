//! Dependency injection infrastructure
//!
//! The lister talks to the releases API and the wall clock through traits,
//! so tests can script responses and pin the time.
//!
//! # Example (Testing)
//! ```
//! use release_tags::di::mocks::{FixedClock, MockReleaseSource};
//! use release_tags::lister::ReleaseLister;
//!
//! let source = MockReleaseSource::new().with_json_page("[]");
//! let lister = ReleaseLister::with_clock(source, "owner/repo", FixedClock(0));
//! ```

pub mod mocks;
pub mod traits;

// Re-export key types
pub use traits::{Clock, ReleaseSource, SystemClock};
