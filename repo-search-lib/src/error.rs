use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchClientError {
    #[error("invalid search URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Transport(#[from] reqwest_middleware::Error),

    #[error("could not decode search response: {0}")]
    Decode(#[from] DecodeError),
}

/// Why a response body could not be turned into records.
///
/// Field-level problems never show up here: they fall back to defaults.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("body is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("top-level JSON value is not an object")]
    NotAnObject,

    #[error("\"items\" is missing or is not an array")]
    MissingItems,
}
