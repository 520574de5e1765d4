//! Fatal error rendering with suggestions for the operator.

use super::error::TagsError;

/// Suggestion shown under a fatal error, if there is a useful one.
pub fn suggestion(error: &TagsError) -> Option<&'static str> {
    match error {
        TagsError::Http(e) if e.is_timeout() => {
            Some("The request timed out. Check your network connection and try again.")
        }
        TagsError::Http(_) => Some("Check your network connection and try again."),
        TagsError::Unauthorized => {
            Some("The token in GITHUB_TOKEN was rejected. Generate a new one or unset it.")
        }
        TagsError::Forbidden => Some(
            "Wait for the rate limit window to reset, or set GITHUB_TOKEN to raise the limit to 5000/hour.",
        ),
        TagsError::NotFound(_) => {
            Some("Check RELEASE_TAGS_REPO. Private repositories also need GITHUB_TOKEN.")
        }
        TagsError::ServerError | TagsError::ServiceUnavailable(_) => {
            Some("The API is having problems. Try again later.")
        }
        TagsError::Config(_) => {
            Some("Check RELEASE_TAGS_REPO (owner/name) and GITHUB_TOKEN.")
        }
        TagsError::UnexpectedStatus(_) | TagsError::InvalidJson { .. } => None,
    }
}

/// Format an error for stderr: the error line, a suggestion, and for
/// unparseable responses the raw body.
pub fn format_error_with_help(error: &TagsError) -> String {
    let mut out = format!("Error: {}", error);

    if let Some(help) = suggestion(error) {
        out.push_str("\n  help: ");
        out.push_str(help);
    }

    if let TagsError::InvalidJson { body, .. } = error {
        out.push_str("\n  response body:\n");
        out.push_str(body);
    }

    out
}
