//! The draw engine: seed material in, three oriented cards out.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use tarot_deck::{CardRecord, Catalog};

use crate::error::{TarotError, TarotResult};
use crate::position::Position;
use crate::rng::Mulberry32;
use crate::seed::{DayKey, SeedMaterial};
use crate::shuffle::shuffled_copy;

/// Number of cards in a spread.
pub const SPREAD_SIZE: usize = 3;

/// A card is upright when its orientation value is strictly above this.
pub const UPRIGHT_THRESHOLD: f64 = 0.3;

/// How a draw was seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawMode {
    /// Reproducible for a given day, name and device.
    Daily,
    /// Fresh on every request.
    Surprise,
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Surprise => write!(f, "surprise"),
        }
    }
}

/// One drawn card with its orientation and spread position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPick {
    /// The card, shared with the catalog.
    pub card: Arc<CardRecord>,
    /// Orientation.
    pub upright: bool,
    /// Spread slot, matching this pick's index.
    pub position: Position,
}

impl CardPick {
    /// The light text for this pick's orientation.
    pub fn light(&self) -> &str {
        self.card.light(self.upright)
    }
}

/// A complete draw. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    /// Daily or surprise.
    pub mode: DrawMode,
    /// Local calendar day the draw was made for.
    pub day_key: DayKey,
    /// The user name, trimmed.
    pub user_name: String,
    /// Exact string the seed was hashed from.
    pub seed_material: String,
    /// Theme, Gentle Advice and Outcome, in that order.
    pub picks: [CardPick; SPREAD_SIZE],
    /// When the draw was made.
    pub created_at: DateTime<Utc>,
}

impl DrawResult {
    /// The pick at a spread position.
    pub fn pick(&self, position: Position) -> &CardPick {
        &self.picks[position.index()]
    }

    /// Card names in spread order.
    pub fn card_names(&self) -> Vec<&str> {
        self.picks.iter().map(|p| p.card.name.as_str()).collect()
    }
}

/// Source of the random component mixed into surprise seeds.
pub trait Entropy {
    /// A value in `[0, 1)`.
    fn sample(&mut self) -> f64;
}

/// Entropy from the thread-local OS-seeded generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn sample(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Entropy that always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub f64);

impl Entropy for FixedEntropy {
    fn sample(&mut self) -> f64 {
        self.0
    }
}

/// Shuffle the catalog with `seed` and orient the first three cards.
///
/// The stream is consumed shuffle first (`len - 1` values), then one value
/// per pick in spread order.
pub fn pick_three(catalog: &Catalog, seed: u32) -> TarotResult<[CardPick; SPREAD_SIZE]> {
    if catalog.len() < SPREAD_SIZE {
        return Err(TarotError::InsufficientCatalog {
            found: catalog.len(),
        });
    }

    let mut rng = Mulberry32::new(seed);
    let shuffled = shuffled_copy(catalog.cards(), &mut rng);

    Ok(std::array::from_fn(|idx| CardPick {
        card: Arc::clone(&shuffled[idx]),
        upright: rng.next_f64() > UPRIGHT_THRESHOLD,
        position: Position::ALL[idx],
    }))
}

/// Produces draws from a fixed catalog.
#[derive(Debug)]
pub struct DrawEngine<E = ThreadEntropy> {
    catalog: Catalog,
    entropy: E,
}

impl DrawEngine<ThreadEntropy> {
    /// Engine with thread-local entropy for surprise draws.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_entropy(catalog, ThreadEntropy)
    }
}

impl<E: Entropy> DrawEngine<E> {
    /// Engine with an injected entropy source.
    pub fn with_entropy(catalog: Catalog, entropy: E) -> Self {
        Self { catalog, entropy }
    }

    /// The catalog draws are made from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Draw three cards.
    ///
    /// `now` carries the caller's local offset; its calendar date becomes the
    /// day key. Fails only when the catalog has fewer than three cards.
    pub fn draw<Tz: TimeZone>(
        &mut self,
        mode: DrawMode,
        user_name: &str,
        device_id: &str,
        now: &DateTime<Tz>,
    ) -> TarotResult<DrawResult> {
        if self.catalog.len() < SPREAD_SIZE {
            return Err(TarotError::InsufficientCatalog {
                found: self.catalog.len(),
            });
        }

        let day_key = DayKey::of(now);
        let material = match mode {
            DrawMode::Daily => SeedMaterial::daily(&day_key, user_name, device_id),
            DrawMode::Surprise => SeedMaterial::surprise(
                now.timestamp_millis(),
                self.entropy.sample(),
                user_name,
                device_id,
            ),
        };
        let seed = material.seed();
        debug!(%mode, day = %day_key, seed, "derived draw seed");

        let picks = pick_three(&self.catalog, seed)?;
        debug!(
            cards = ?picks.iter().map(|p| p.card.id.as_str()).collect::<Vec<_>>(),
            "assembled draw"
        );

        Ok(DrawResult {
            mode,
            day_key,
            user_name: user_name.trim().to_string(),
            seed_material: material.into_string(),
            picks,
            created_at: now.with_timezone(&Utc),
        })
    }
}
