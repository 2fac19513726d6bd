/// Alias for `Result<T, DeckError>`.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that can occur when building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    /// An override catalog breaks the 78-card, unique-id invariant.
    #[error("malformed override catalog: {0}")]
    MalformedOverrideCatalog(String),

    /// The override file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The override file is not a JSON array of cards.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
