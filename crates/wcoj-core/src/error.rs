use thiserror::Error;

/// Canonical result for every WCOJ crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Malformed join tree: {0}")]
    MalformedTree(String),

    #[error("Unknown relation '{0}' referenced by join tree")]
    UnknownRelation(String),

    #[error("Invalid cardinality: {0}")]
    InvalidCardinality(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Hashing error: {0}")]
    Hash(String),
}

impl Error {
    /// True for every defect in the shape or the leaves of a join tree.
    pub fn is_malformed_tree(&self) -> bool {
        matches!(self, Error::MalformedTree(_) | Error::UnknownRelation(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Hash(e.to_string())
    }
}
