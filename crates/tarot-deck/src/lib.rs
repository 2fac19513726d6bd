//! Card model and the 78-card catalog for Daily Light Tarot.
//!
//! The catalog is built once, either generated from the built-in copy tables
//! or taken from a caller-supplied override deck, and never mutated after.

/// Card records, suits, ranks, and partial override entries.
pub mod card;
/// The ordered catalog and its builders.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// Static card copy and text helpers.
pub mod text;

/// Re-export card types.
pub use card::{Arcana, CardRecord, PartialCard, Rank, Suit};
/// Re-export catalog types and builders.
pub use catalog::{Catalog, CatalogSource, DECK_SIZE, build_catalog, build_catalog_checked};
/// Re-export error types.
pub use error::{DeckError, DeckResult};
