use thiserror::Error;

pub type TagsResult<T> = Result<T, TagsError>;

#[derive(Error, Debug)]
pub enum TagsError {
    /// Transport failure, including connect and request timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unauthorized (401): check the credential in GITHUB_TOKEN")]
    Unauthorized,

    #[error("Forbidden (403): access denied, likely due to the API rate limit")]
    Forbidden,

    #[error("Not Found (404): repository {0} not found")]
    NotFound(String),

    #[error("Internal Server Error (500): the API reported a server error")]
    ServerError,

    #[error("Service Unavailable ({0}): the API is temporarily unavailable")]
    ServiceUnavailable(u16),

    #[error("Unexpected status code {0}")]
    UnexpectedStatus(u16),

    /// The response body was not a JSON array of releases.
    #[error("Invalid JSON response: {source}")]
    InvalidJson {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TagsError {
    /// Map a non-200 HTTP status to its fatal error.
    ///
    /// Returns `None` for 200, which is the only status the lister accepts.
    pub fn from_status(status: u16, repo: &str) -> Option<Self> {
        match status {
            200 => None,
            401 => Some(TagsError::Unauthorized),
            403 => Some(TagsError::Forbidden),
            404 => Some(TagsError::NotFound(repo.to_string())),
            500 => Some(TagsError::ServerError),
            502..=504 => Some(TagsError::ServiceUnavailable(status)),
            other => Some(TagsError::UnexpectedStatus(other)),
        }
    }
}
