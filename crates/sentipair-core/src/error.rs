use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentipairError {
    #[error("No usable transcript for {link}: {reason}")]
    TranscriptUnavailable { link: String, reason: String },

    #[error("Too few caption fragments to infer punctuation: {fragments}")]
    DegenerateVideo { fragments: usize },

    #[error("Channel discovery failed for {channel}: {reason}")]
    DiscoveryFailed { channel: String, reason: String },

    #[error("Synonym lookup failed for {word}: {reason}")]
    SynonymLookupFailed { word: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SentipairError>;
