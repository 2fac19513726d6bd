//! The ordered, immutable card catalog.
//!
//! A catalog is either generated from the built-in copy tables or supplied by
//! the caller as an override list. Cards are shared behind `Arc` so draws can
//! hold them without copying or borrowing the catalog.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::card::{Arcana, CardRecord, PartialCard, Rank, Suit};
use crate::error::{DeckError, DeckResult};
use crate::text::{self, MajorLight};

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = 78;

/// Where a catalog's cards came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Built from the copy tables in [`crate::text`].
    Generated,
    /// Supplied verbatim by the caller.
    Override,
}

/// An ordered sequence of cards. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Arc<CardRecord>>,
    source: CatalogSource,
}

impl Catalog {
    /// Generate the standard 78-card deck.
    ///
    /// Output is identical on every call: 22 Majors in canonical order, then
    /// the 56 Minors suit by suit, each suit Ace to King.
    pub fn generate() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for (i, name) in text::MAJORS.iter().enumerate() {
            let id = format!("maj_{i:02}_{}", text::slug(name));
            let light = text::major_light(name).unwrap_or(MajorLight::GENERIC);
            cards.push(CardRecord {
                image: text::image_path(&id),
                id,
                name: (*name).to_string(),
                arcana: Arcana::Major,
                suit: None,
                rank: None,
                light_upright: light.upright.to_string(),
                light_reversed: light.reversed.to_string(),
                keywords: text::major_keywords(name)
                    .iter()
                    .map(|s| (*s).to_string())
                    .collect(),
            });
        }

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(minor_card(suit, rank));
            }
        }

        Self {
            cards: cards.into_iter().map(Arc::new).collect(),
            source: CatalogSource::Generated,
        }
    }

    /// Wrap a caller-supplied deck without checking it.
    pub fn from_records(records: Vec<CardRecord>) -> Self {
        Self {
            cards: records.into_iter().map(Arc::new).collect(),
            source: CatalogSource::Override,
        }
    }

    /// Parse an override deck from a JSON array of [`PartialCard`]s.
    pub fn parse_override(json: &str) -> DeckResult<Vec<CardRecord>> {
        let partials: Vec<PartialCard> = serde_json::from_str(json)?;
        Ok(partials.into_iter().map(PartialCard::into_record).collect())
    }

    /// Read an override deck from a JSON file.
    pub fn read_override(path: &Path) -> DeckResult<Vec<CardRecord>> {
        let json = std::fs::read_to_string(path)?;
        Self::parse_override(&json)
    }

    /// Check the 78-card, unique, non-empty id invariant.
    pub fn validate(&self) -> DeckResult<()> {
        if self.cards.len() != DECK_SIZE {
            return Err(DeckError::MalformedOverrideCatalog(format!(
                "expected {DECK_SIZE} cards, found {}",
                self.cards.len()
            )));
        }

        let mut seen = HashSet::with_capacity(self.cards.len());
        for (index, card) in self.cards.iter().enumerate() {
            if card.id.is_empty() {
                return Err(DeckError::MalformedOverrideCatalog(format!(
                    "card at index {index} has an empty id"
                )));
            }
            if !seen.insert(card.id.as_str()) {
                return Err(DeckError::MalformedOverrideCatalog(format!(
                    "duplicate id \"{}\"",
                    card.id
                )));
            }
        }
        Ok(())
    }

    /// All cards in catalog order.
    pub fn cards(&self) -> &[Arc<CardRecord>] {
        &self.cards
    }

    /// Iterate over the cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter().map(|c| c.as_ref())
    }

    /// Find a card by id.
    pub fn get(&self, id: &str) -> Option<&Arc<CardRecord>> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the catalog has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Where the cards came from.
    pub fn source(&self) -> CatalogSource {
        self.source
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::generate()
    }
}

fn minor_card(suit: Suit, rank: Rank) -> CardRecord {
    let id = format!("min_{}_{}", text::slug(suit.name()), text::slug(rank.name()));
    let upright = format!("{} ({}.)", rank.light(), suit.tone());
    CardRecord {
        image: text::image_path(&id),
        id,
        name: format!("{rank} of {suit}"),
        arcana: Arcana::Minor,
        suit: Some(suit),
        rank: Some(rank),
        light_reversed: text::gentle_reverse(&upright),
        light_upright: upright,
        keywords: suit.tone().split(',').map(|s| s.trim().to_string()).collect(),
    }
}

/// Build the active catalog.
///
/// A non-empty override is used as-is; completeness is the caller's
/// responsibility. Use [`build_catalog_checked`] to enforce it.
pub fn build_catalog(override_deck: Option<Vec<CardRecord>>) -> Catalog {
    match override_deck {
        Some(records) if !records.is_empty() => {
            debug!(cards = records.len(), "using override catalog");
            Catalog::from_records(records)
        }
        _ => Catalog::generate(),
    }
}

/// Build the active catalog, rejecting an override that fails
/// [`Catalog::validate`].
pub fn build_catalog_checked(override_deck: Option<Vec<CardRecord>>) -> DeckResult<Catalog> {
    let catalog = build_catalog(override_deck);
    if catalog.source() == CatalogSource::Override {
        catalog.validate()?;
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(catalog: &Catalog) -> Vec<String> {
        catalog.iter().map(|c| c.id.clone()).collect()
    }

    fn tiny_deck(n: usize) -> Vec<CardRecord> {
        (0..n)
            .map(|i| {
                PartialCard {
                    id: format!("card_{i}"),
                    name: format!("Card {i}"),
                    ..Default::default()
                }
                .into_record()
            })
            .collect()
    }

    #[test]
    fn generated_has_78_unique_cards() {
        let catalog = Catalog::generate();
        assert_eq!(catalog.len(), DECK_SIZE);
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.source(), CatalogSource::Generated);
    }

    #[test]
    fn generation_is_stable() {
        let a = Catalog::generate();
        let b = Catalog::generate();
        let a_cards: Vec<&CardRecord> = a.iter().collect();
        let b_cards: Vec<&CardRecord> = b.iter().collect();
        assert_eq!(a_cards, b_cards);
    }

    #[test]
    fn majors_come_first() {
        let catalog = Catalog::generate();
        let ids = ids(&catalog);
        assert_eq!(ids[0], "maj_00_the_fool");
        assert_eq!(ids[2], "maj_02_the_high_priestess");
        assert_eq!(ids[10], "maj_10_wheel_of_fortune");
        assert_eq!(ids[21], "maj_21_the_world");
        assert!(catalog.iter().take(22).all(|c| c.arcana == Arcana::Major));
        assert!(catalog.iter().take(22).all(|c| c.suit.is_none() && c.rank.is_none()));
    }

    #[test]
    fn minors_are_suit_major_rank_minor() {
        let catalog = Catalog::generate();
        let ids = ids(&catalog);
        assert_eq!(ids[22], "min_wands_ace");
        assert_eq!(ids[35], "min_wands_king");
        assert_eq!(ids[36], "min_cups_ace");
        assert_eq!(ids[77], "min_pentacles_king");
        assert_eq!(catalog.iter().filter(|c| c.arcana == Arcana::Minor).count(), 56);
    }

    #[test]
    fn major_record() {
        let catalog = Catalog::generate();
        let fool = catalog.get("maj_00_the_fool").unwrap();
        assert_eq!(fool.name, "The Fool");
        assert_eq!(fool.image, "./assets/cards/maj_00_the_fool.webp");
        assert_eq!(fool.keywords, vec!["clarity", "growth", "alignment"]);
        assert!(fool.light_upright.starts_with("A fresh start wants you."));

        let sun = catalog.get("maj_19_the_sun").unwrap();
        assert_eq!(sun.keywords, vec!["joy", "confidence", "visibility"]);
    }

    #[test]
    fn minor_record() {
        let catalog = Catalog::generate();
        let ace = catalog.get("min_wands_ace").unwrap();
        assert_eq!(ace.name, "Ace of Wands");
        assert_eq!(ace.suit, Some(Suit::Wands));
        assert_eq!(ace.rank, Some(Rank::Ace));
        assert_eq!(
            ace.light_upright,
            "A fresh beginning appears. Keep it simple and say yes to the first step. \
             (spark, confidence, creativity.)"
        );
        assert_eq!(
            ace.light_reversed,
            "Gentle note: slow down and soften. A fresh beginning appears. Keep it simple \
             and say yes to the first step. (spark, confidence, creativity.)"
        );
        assert_eq!(ace.keywords, vec!["spark", "confidence", "creativity"]);
        assert_eq!(ace.image, "./assets/cards/min_wands_ace.webp");

        let king = catalog.get("min_pentacles_king").unwrap();
        assert_eq!(king.keywords, vec!["stability", "money", "body", "home"]);
    }

    #[test]
    fn every_card_has_text() {
        for card in Catalog::generate().iter() {
            assert!(!card.light_upright.is_empty(), "{}", card.id);
            assert!(!card.light_reversed.is_empty(), "{}", card.id);
        }
    }

    #[test]
    fn empty_override_generates() {
        let catalog = build_catalog(Some(Vec::new()));
        assert_eq!(catalog.source(), CatalogSource::Generated);
        assert_eq!(catalog.len(), DECK_SIZE);
        assert_eq!(build_catalog(None).len(), DECK_SIZE);
    }

    #[test]
    fn override_is_used_verbatim() {
        let catalog = build_catalog(Some(tiny_deck(5)));
        assert_eq!(catalog.source(), CatalogSource::Override);
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.cards()[4].id, "card_4");
    }

    #[test]
    fn checked_rejects_short_override() {
        let err = build_catalog_checked(Some(tiny_deck(5))).unwrap_err();
        assert!(matches!(err, DeckError::MalformedOverrideCatalog(_)));
        assert!(err.to_string().contains("expected 78 cards, found 5"));
    }

    #[test]
    fn checked_rejects_duplicate_ids() {
        let mut deck = tiny_deck(DECK_SIZE);
        deck[40].id = "card_3".to_string();
        let err = build_catalog_checked(Some(deck)).unwrap_err();
        assert!(err.to_string().contains("duplicate id \"card_3\""));
    }

    #[test]
    fn checked_rejects_empty_id() {
        let mut deck = tiny_deck(DECK_SIZE);
        deck[7].id = String::new();
        let err = build_catalog_checked(Some(deck)).unwrap_err();
        assert!(err.to_string().contains("index 7"));
    }

    #[test]
    fn checked_accepts_complete_override() {
        let catalog = build_catalog_checked(Some(tiny_deck(DECK_SIZE))).unwrap();
        assert_eq!(catalog.source(), CatalogSource::Override);
    }

    #[test]
    fn parse_override_json() {
        let json = r#"[
            {"id": "a", "name": "Alpha", "light_upright": "Up"},
            {"id": "b", "name": "Beta", "suit": "Cups", "rank": "Ace"}
        ]"#;
        let deck = Catalog::parse_override(json).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck[0].light_upright, "Up");
        assert_eq!(deck[1].arcana, Arcana::Minor);
    }

    #[test]
    fn parse_override_rejects_garbage() {
        let err = Catalog::parse_override("{\"not\": \"a list\"}").unwrap_err();
        assert!(matches!(err, DeckError::Json(_)));
    }

    #[test]
    fn read_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.json");
        std::fs::write(&path, r#"[{"id": "a", "name": "Alpha"}]"#).unwrap();
        let deck = Catalog::read_override(&path).unwrap();
        assert_eq!(deck[0].name, "Alpha");

        let missing = Catalog::read_override(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, DeckError::Io(_)));
    }
}
