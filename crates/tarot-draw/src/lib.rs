//! Deterministic three-card draw engine for Daily Light Tarot.
//!
//! Derives a 32-bit seed from the day, the user's name and a device id,
//! shuffles the catalog with a Mulberry32 stream, and orients the first three
//! cards. Around the engine sit the device identity, the per-day cache,
//! reveal tracking and the summary text.

pub mod cache;
pub mod config;
pub mod draw;
pub mod error;
pub mod identity;
pub mod position;
pub mod reading;
pub mod reveal;
pub mod rng;
pub mod seed;
pub mod shuffle;
pub mod store;
pub mod summary;

pub use cache::DailyCache;
pub use config::{Pacing, ReadingConfig};
pub use draw::{CardPick, DrawEngine, DrawMode, DrawResult, Entropy, FixedEntropy, ThreadEntropy};
pub use error::{TarotError, TarotResult};
pub use position::Position;
pub use reading::ReadingService;
pub use reveal::{RevealState, RevealedCard};
pub use seed::{DayKey, SeedMaterial, fnv1a_32};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use summary::{Summary, share_text};
