use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructureError {
    #[error("Invalid pattern {pattern:?} for section '{section}': {source}")]
    InvalidPattern {
        section: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
