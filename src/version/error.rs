use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error {status} for {url}")]
    UnexpectedStatus { url: String, status: u16 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("No version candidates to select from")]
    EmptyInput,

    #[error("No candidate contains a version number: {0:?}")]
    Malformed(Vec<String>),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid pattern for feed '{feed}' at level {level}: {pattern}")]
    InvalidPattern {
        feed: String,
        level: usize,
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("Pattern failed to run for feed '{feed}' at level {level}: {source}")]
    MatchFailed {
        feed: String,
        level: usize,
        #[source]
        source: fancy_regex::Error,
    },

    #[error(transparent)]
    Select(#[from] SelectError),
}
