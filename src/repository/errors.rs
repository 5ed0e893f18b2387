use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Contact already exists")]
    Conflict,

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RepositoryError::Timeout
        } else if err.is_connect() || err.is_request() || err.is_body() {
            RepositoryError::ConnectionError(format!("Connection error: {err}"))
        } else if err.is_decode() {
            RepositoryError::MalformedResponse(format!("Decode error: {err}"))
        } else {
            RepositoryError::Unexpected(format!("Unexpected http error: {err}"))
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::MalformedResponse(format!("Deserialization error: {err}"))
    }
}
