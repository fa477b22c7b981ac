use std::path::PathBuf;

/// Errors surfaced by every fetch, parse and write step.
///
/// Nothing is recovered locally: the first error aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL does not have the `/fiction/<id>` shape on the configured site.
    #[error("invalid fiction url: {0}")]
    InvalidUrl(String),

    /// The identifier is not a non-empty run of ASCII digits.
    #[error("fiction id must be a number, got {0:?}")]
    InvalidId(String),

    /// Timeout, connection failure, or a non-success HTTP status.
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("chapter content not found at {0}")]
    ContentNotFound(String),

    #[error("io error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),
}

pub type Result<T, E = FetchError> = std::result::Result<T, E>;
