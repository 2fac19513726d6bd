//! One-at-a-time card reveals.

use crate::draw::{CardPick, DrawResult, SPREAD_SIZE};

/// Keywords shown per card at most.
const MAX_KEYWORDS: usize = 4;

/// Which spread positions have been turned over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: [bool; SPREAD_SIZE],
}

impl RevealState {
    /// All cards face down.
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn over card `index`.
    ///
    /// Returns `None` when the index is out of range or the card is already
    /// face up, so repeated taps have no effect.
    pub fn reveal<'d>(
        &mut self,
        draw: &'d DrawResult,
        index: usize,
    ) -> Option<RevealedCard<'d>> {
        let slot = self.revealed.get_mut(index)?;
        if *slot {
            return None;
        }
        *slot = true;
        Some(RevealedCard {
            index,
            pick: &draw.picks[index],
        })
    }

    /// Whether card `index` is face up.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Whether every card is face up.
    pub fn all_revealed(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }

    /// Number of face-up cards.
    pub fn count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// The lowest face-down index, if any.
    pub fn next_hidden(&self) -> Option<usize> {
        self.revealed.iter().position(|r| !*r)
    }
}

/// A card that has just been turned over, with its reading lines.
#[derive(Debug, Clone, Copy)]
pub struct RevealedCard<'d> {
    /// Spread index.
    pub index: usize,
    /// The pick at that index.
    pub pick: &'d CardPick,
}

impl RevealedCard<'_> {
    /// `"1. Theme — The Tower"`.
    pub fn heading(&self) -> String {
        format!(
            "{}. {} — {}",
            self.index + 1,
            self.pick.position.label(),
            self.pick.card.name
        )
    }

    /// Orientation followed by up to four keywords.
    pub fn meta(&self) -> String {
        let orientation = if self.pick.upright {
            "Upright"
        } else {
            "Reversed (gentle)"
        };
        let keywords: Vec<&str> = self
            .pick
            .card
            .keywords
            .iter()
            .take(MAX_KEYWORDS)
            .map(String::as_str)
            .collect();
        format!("{orientation} • {}", keywords.join(" · "))
    }

    /// The light text for the pick's orientation.
    pub fn message(&self) -> &str {
        self.pick.light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawEngine, DrawMode};
    use chrono::{FixedOffset, TimeZone};
    use tarot_deck::Catalog;

    fn golden_draw() -> DrawResult {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .unwrap();
        DrawEngine::new(Catalog::generate())
            .draw(DrawMode::Daily, "alice", "device123", &now)
            .unwrap()
    }

    #[test]
    fn reveal_each_once() {
        let draw = golden_draw();
        let mut state = RevealState::new();
        assert_eq!(state.next_hidden(), Some(0));

        assert!(state.reveal(&draw, 1).is_some());
        assert!(state.reveal(&draw, 1).is_none());
        assert!(state.is_revealed(1));
        assert_eq!(state.next_hidden(), Some(0));
        assert!(!state.all_revealed());

        state.reveal(&draw, 0);
        state.reveal(&draw, 2);
        assert!(state.all_revealed());
        assert_eq!(state.count(), 3);
        assert_eq!(state.next_hidden(), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let draw = golden_draw();
        let mut state = RevealState::new();
        assert!(state.reveal(&draw, 3).is_none());
        assert!(!state.is_revealed(3));
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn reversed_card_lines() {
        let draw = golden_draw();
        let mut state = RevealState::new();
        let card = state.reveal(&draw, 0).unwrap();
        assert_eq!(card.heading(), "1. Theme — The Tower");
        assert_eq!(card.meta(), "Reversed (gentle) • clarity · growth · alignment");
        assert!(card.message().starts_with("You can soften the shake-up."));
    }

    #[test]
    fn upright_card_lines() {
        let draw = golden_draw();
        let mut state = RevealState::new();
        let card = state.reveal(&draw, 1).unwrap();
        assert_eq!(card.heading(), "2. Gentle Advice — Seven of Pentacles");
        assert_eq!(card.meta(), "Upright • stability · money · body · home");
        assert!(card.message().starts_with("Reflection and intention."));
    }
}
