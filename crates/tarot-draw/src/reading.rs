//! Reading service: the draw engine wired to its stores.
//!
//! Owns the engine, the identity store and the daily cache, and implements
//! the get-or-create policy for daily draws.

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::cache::DailyCache;
use crate::draw::{DrawEngine, DrawMode, DrawResult, Entropy, ThreadEntropy};
use crate::error::TarotResult;
use crate::identity;
use crate::seed::DayKey;
use crate::store::KeyValueStore;

/// Daily and surprise readings for one device.
///
/// `I` holds the device identity and `C` the daily cache; they may be the
/// same kind of store or entirely separate backends.
#[derive(Debug)]
pub struct ReadingService<I, C, E = ThreadEntropy> {
    engine: DrawEngine<E>,
    identity: I,
    cache: DailyCache<C>,
}

impl<I: KeyValueStore, C: KeyValueStore, E: Entropy> ReadingService<I, C, E> {
    /// Wire an engine to its identity store and daily cache store.
    pub fn new(engine: DrawEngine<E>, identity_store: I, cache_store: C) -> Self {
        Self {
            engine,
            identity: identity_store,
            cache: DailyCache::new(cache_store),
        }
    }

    /// The daily cache.
    pub fn cache(&self) -> &DailyCache<C> {
        &self.cache
    }

    /// This device's persisted identifier.
    pub fn device_id(&mut self, now: DateTime<Utc>) -> String {
        identity::device_id(&mut self.identity, now)
    }

    /// Today's draw: the cached one if present, otherwise a new draw that is
    /// cached before it is returned.
    pub fn daily<Tz: TimeZone>(
        &mut self,
        user_name: &str,
        now: &DateTime<Tz>,
    ) -> TarotResult<DrawResult> {
        let day = DayKey::of(now);
        if let Some(cached) = self.cache.load(&day) {
            return Ok(cached);
        }

        let device_id = self.device_id(now.with_timezone(&Utc));
        let draw = self
            .engine
            .draw(DrawMode::Daily, user_name, &device_id, now)?;
        self.cache.save(&draw);
        info!(%day, "new daily draw");
        Ok(draw)
    }

    /// A fresh surprise draw. Never cached and never read from cache.
    pub fn surprise<Tz: TimeZone>(
        &mut self,
        user_name: &str,
        now: &DateTime<Tz>,
    ) -> TarotResult<DrawResult> {
        let device_id = self.device_id(now.with_timezone(&Utc));
        self.engine
            .draw(DrawMode::Surprise, user_name, &device_id, now)
    }

    /// The cached daily draw for `day`, without drawing.
    pub fn cached_daily(&self, day: &DayKey) -> Option<DrawResult> {
        self.cache.load(day)
    }

    /// Drop the cached daily draw for `day`.
    pub fn forget_daily(&mut self, day: &DayKey) -> TarotResult<()> {
        self.cache.clear(day)?;
        info!(%day, "cleared daily draw");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::FixedEntropy;
    use crate::error::TarotError;
    use crate::identity::DEVICE_ID_KEY;
    use crate::store::{MemoryStore, StoreError, StoreResult};
    use chrono::FixedOffset;
    use tarot_deck::{Catalog, PartialCard};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Err(StoreError::Io(std::io::Error::other("read-only medium")))
        }
        fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Io(std::io::Error::other("read-only medium")))
        }
        fn remove(&mut self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Io(std::io::Error::other("read-only medium")))
        }
    }

    fn at(d: u32, h: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, d, h, 0, 0)
            .unwrap()
    }

    fn service(entropy: f64) -> ReadingService<MemoryStore, MemoryStore, FixedEntropy> {
        let mut identity = MemoryStore::new();
        identity.set(DEVICE_ID_KEY, "device123").unwrap();
        ReadingService::new(
            DrawEngine::with_entropy(Catalog::generate(), FixedEntropy(entropy)),
            identity,
            MemoryStore::new(),
        )
    }

    #[test]
    fn daily_uses_persisted_device_id() {
        let mut s = service(0.5);
        let draw = s.daily("Alice", &at(1, 9)).unwrap();
        assert_eq!(draw.seed_material, "daily|2024-01-01|alice|device123");
        assert_eq!(draw.picks[0].card.id, "maj_16_the_tower");
    }

    #[test]
    fn daily_is_idempotent_within_a_day() {
        let mut s = service(0.5);
        let first = s.daily("Alice", &at(1, 9)).unwrap();
        let second = s.daily("Alice", &at(1, 21)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.created_at, second.created_at);
    }

    #[test]
    fn cache_is_keyed_by_day_only() {
        let mut s = service(0.5);
        let first = s.daily("Alice", &at(1, 9)).unwrap();
        let other_name = s.daily("Bob", &at(1, 10)).unwrap();
        assert_eq!(first, other_name);
        assert_eq!(other_name.user_name, "Alice");
    }

    #[test]
    fn new_day_new_draw() {
        let mut s = service(0.5);
        let monday = s.daily("Alice", &at(1, 9)).unwrap();
        let tuesday = s.daily("Alice", &at(2, 9)).unwrap();
        assert_ne!(monday.day_key, tuesday.day_key);
        assert_eq!(tuesday.picks[0].card.id, "maj_07_the_chariot");
        assert!(s.cached_daily(&monday.day_key).is_some());
    }

    #[test]
    fn surprise_is_never_cached() {
        let mut s = service(0.25);
        let surprise = s.surprise("Alice", &at(1, 9)).unwrap();
        assert_eq!(surprise.mode, DrawMode::Surprise);
        assert!(s.cached_daily(&surprise.day_key).is_none());
        assert!(s.cache().store().is_empty());
    }

    #[test]
    fn surprise_does_not_replace_daily() {
        let mut s = service(0.25);
        let daily = s.daily("Alice", &at(1, 9)).unwrap();
        s.surprise("Alice", &at(1, 10)).unwrap();
        assert_eq!(s.daily("Alice", &at(1, 11)).unwrap(), daily);
    }

    #[test]
    fn device_id_generated_when_absent() {
        let mut s = ReadingService::new(
            DrawEngine::with_entropy(Catalog::generate(), FixedEntropy(0.5)),
            MemoryStore::new(),
            MemoryStore::new(),
        );
        let draw = s.daily("", &at(1, 9)).unwrap();
        let id = s.device_id(Utc::now());
        assert!(draw.seed_material.ends_with(&format!("||{id}")));
    }

    #[test]
    fn broken_stores_fall_back_to_fresh_draws() {
        let mut s = ReadingService::new(
            DrawEngine::with_entropy(Catalog::generate(), FixedEntropy(0.5)),
            BrokenStore,
            BrokenStore,
        );
        let a = s.daily("Alice", &at(1, 9)).unwrap();
        let b = s.daily("Alice", &at(1, 9)).unwrap();
        assert_eq!(a.mode, DrawMode::Daily);
        // Each call gets a fresh device id, so nothing ties the draws together.
        assert_ne!(a.seed_material, b.seed_material);
    }

    #[test]
    fn forget_daily_allows_a_new_draw() {
        let mut s = service(0.5);
        let first = s.daily("Alice", &at(1, 9)).unwrap();
        s.forget_daily(&first.day_key).unwrap();
        assert!(s.cached_daily(&first.day_key).is_none());

        let again = s.daily("Bob", &at(1, 10)).unwrap();
        assert_eq!(again.user_name, "Bob");
        assert_ne!(again.created_at, first.created_at);
    }

    #[test]
    fn identity_and_cache_stores_are_independent() {
        let mut identity = MemoryStore::new();
        identity.set(DEVICE_ID_KEY, "device123").unwrap();
        let mut s = ReadingService::new(
            DrawEngine::with_entropy(Catalog::generate(), FixedEntropy(0.5)),
            identity,
            BrokenStore,
        );
        let a = s.daily("Alice", &at(1, 9)).unwrap();
        let b = s.daily("Alice", &at(1, 10)).unwrap();
        // Nothing is cached, but the persisted id keeps the draw stable.
        assert_eq!(a.picks, b.picks);
        assert_eq!(a.picks[0].card.id, "maj_16_the_tower");
    }

    #[test]
    fn insufficient_catalog_surfaces() {
        let tiny = Catalog::from_records(vec![
            PartialCard {
                id: "only".into(),
                name: "Only".into(),
                ..Default::default()
            }
            .into_record(),
        ]);
        let mut s = ReadingService::new(
            DrawEngine::with_entropy(tiny, FixedEntropy(0.5)),
            MemoryStore::new(),
            MemoryStore::new(),
        );
        assert!(matches!(
            s.daily("a", &at(1, 9)),
            Err(TarotError::InsufficientCatalog { found: 1 })
        ));
        assert!(s.cache().store().is_empty());
    }
}
