//! Core error types shared by every module.

pub mod error;
pub mod error_help;

pub use error::{TagsError, TagsResult};
pub use error_help::format_error_with_help;
