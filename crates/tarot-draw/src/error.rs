//! Error types for the draw engine.

use thiserror::Error;

/// Result type for draw operations.
pub type TarotResult<T> = Result<T, TarotError>;

/// Errors that can surface from a draw request.
#[derive(Debug, Error)]
pub enum TarotError {
    /// The catalog has too few cards to fill the three positions.
    #[error("insufficient catalog: need at least 3 cards, found {found}")]
    InsufficientCatalog {
        /// Number of cards in the catalog at draw time.
        found: usize,
    },

    /// Catalog construction failed.
    #[error("{0}")]
    Deck(#[from] tarot_deck::DeckError),

    /// An explicit store operation failed.
    #[error("{0}")]
    Store(#[from] crate::store::StoreError),
}
