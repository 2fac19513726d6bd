//! Per-day cache of the daily draw.
//!
//! Keyed by day only: whichever daily draw is stored first for a day is the
//! one returned for the rest of that day, whatever name is supplied later.

use tracing::{debug, info, warn};

use crate::draw::{DrawMode, DrawResult};
use crate::seed::DayKey;
use crate::store::{KeyValueStore, StoreResult};

/// Prefix of every daily cache key.
pub const DAILY_KEY_PREFIX: &str = "tarot_daily_";

/// Store key for a day's draw.
pub fn daily_key(day: &DayKey) -> String {
    format!("{DAILY_KEY_PREFIX}{day}")
}

/// Daily draws persisted in a [`KeyValueStore`].
#[derive(Debug)]
pub struct DailyCache<S> {
    store: S,
}

impl<S: KeyValueStore> DailyCache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The cached draw for `day`, if one is stored and readable.
    ///
    /// Read failures, unparseable entries and entries that are not a daily
    /// draw for `day` count as a miss.
    pub fn load(&self, day: &DayKey) -> Option<DrawResult> {
        let key = daily_key(day);
        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(%day, "no cached daily draw");
                return None;
            }
            Err(e) => {
                warn!(%day, error = %e, "daily cache unreadable");
                return None;
            }
        };

        match serde_json::from_str::<DrawResult>(&raw) {
            Ok(draw) if draw.mode == DrawMode::Daily && draw.day_key == *day => {
                info!(%day, "daily draw served from cache");
                Some(draw)
            }
            Ok(draw) => {
                warn!(
                    %day,
                    mode = %draw.mode,
                    stored_day = %draw.day_key,
                    "discarding mismatched daily cache entry"
                );
                None
            }
            Err(e) => {
                warn!(%day, error = %e, "discarding corrupt daily cache entry");
                None
            }
        }
    }

    /// Persist a daily draw under its day key.
    ///
    /// Surprise draws are never cached. Returns whether the draw was written;
    /// a failed write is logged and otherwise ignored.
    pub fn save(&mut self, draw: &DrawResult) -> bool {
        if draw.mode != DrawMode::Daily {
            return false;
        }
        match self.try_save(draw) {
            Ok(()) => {
                debug!(day = %draw.day_key, "cached daily draw");
                true
            }
            Err(e) => {
                warn!(day = %draw.day_key, error = %e, "failed to cache daily draw");
                false
            }
        }
    }

    fn try_save(&mut self, draw: &DrawResult) -> StoreResult<()> {
        let json = serde_json::to_string(draw)?;
        self.store.set(&daily_key(&draw.day_key), &json)
    }

    /// Forget the draw for `day`.
    pub fn clear(&mut self, day: &DayKey) -> StoreResult<()> {
        self.store.remove(&daily_key(day))
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
