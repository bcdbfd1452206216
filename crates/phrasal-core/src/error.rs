use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Token at position {position} has no children to span")]
    EmptySubtree { position: usize },

    #[error("No subtree root among token indices {indices:?}")]
    NoRootFound { indices: Vec<Option<i64>> },

    #[error("Expected exactly one root, found {} at positions {positions:?}", positions.len())]
    MissingOrMultipleRoots { positions: Vec<usize> },

    #[error("Duplicate token index {index} at positions {first} and {second}")]
    DuplicateIndex {
        index: i64,
        first: usize,
        second: usize,
    },

    #[error("Tree index covers {tree} tokens but the sentence has {tokens}")]
    IndexMismatch { tokens: usize, tree: usize },

    #[error("Invalid part-of-speech tag: {0}")]
    InvalidPosTag(String),

    #[error("Invalid configuration value for {key}: {value}")]
    Config { key: String, value: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
