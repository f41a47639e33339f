use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("config error: {0}")]
    Config(String),

    #[error("query is required")]
    EmptyQuery,

    #[error("unrecognized query format: {0:?}")]
    UnrecognizedQuery(String),

    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("photo decode error: {0}")]
    PhotoDecode(String),
}

pub type Result<T> = std::result::Result<T, LookupError>;
