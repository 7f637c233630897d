use thiserror::Error;

/// Problems with the word bank. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("the word bank has no categories")]
    NoCategories,
    #[error("category '{0}' has no words")]
    EmptyCategory(String),
    #[error("category '{category}' has invalid word '{word}' (expected lowercase letters a-z)")]
    InvalidWord { category: String, word: String },
    #[error("category '{0}' is not in the word bank")]
    UnknownCategory(String),
    #[error("malformed word bank: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    #[error("could not read word bank: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
