//! Card records and their classification enums.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text;

/// Which half of the deck a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    /// One of the 22 trump cards.
    Major,
    /// One of the 56 suited cards.
    Minor,
}

impl fmt::Display for Arcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "Major"),
            Self::Minor => write!(f, "Minor"),
        }
    }
}

/// The four Minor Arcana suits, in canonical deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Fire: spark and creativity.
    Wands,
    /// Water: feelings and connection.
    Cups,
    /// Air: clarity and mindset.
    Swords,
    /// Earth: stability and home.
    Pentacles,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    /// Display name of the suit.
    pub fn name(self) -> &'static str {
        match self {
            Self::Wands => "Wands",
            Self::Cups => "Cups",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
        }
    }

    /// The comma-separated tone phrase appended to every card of this suit.
    pub fn tone(self) -> &'static str {
        match self {
            Self::Wands => "spark, confidence, creativity",
            Self::Cups => "feelings, connection, kindness",
            Self::Swords => "clarity, truth, mindset",
            Self::Pentacles => "stability, money, body, home",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fourteen Minor Arcana ranks, in canonical deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 1.
    Ace,
    /// Rank 2.
    Two,
    /// Rank 3.
    Three,
    /// Rank 4.
    Four,
    /// Rank 5.
    Five,
    /// Rank 6.
    Six,
    /// Rank 7.
    Seven,
    /// Rank 8.
    Eight,
    /// Rank 9.
    Nine,
    /// Rank 10.
    Ten,
    /// First court card.
    Page,
    /// Second court card.
    Knight,
    /// Third court card.
    Queen,
    /// Fourth court card.
    King,
}

impl Rank {
    /// All ranks in canonical order.
    pub const ALL: [Rank; 14] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Page,
        Rank::Knight,
        Rank::Queen,
        Rank::King,
    ];

    /// Display name of the rank.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Page => "Page",
            Self::Knight => "Knight",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }

    /// The suit-independent upright message for this rank.
    pub fn light(self) -> &'static str {
        match self {
            Self::Ace => {
                "A fresh beginning appears. Keep it simple and say yes to the first step."
            }
            Self::Two => "Balance and choice. Pick the option that feels calm and aligned.",
            Self::Three => {
                "Support and expansion. Share, collaborate, and let good things grow."
            }
            Self::Four => {
                "Stability and rest. Protect your energy and strengthen your foundation."
            }
            Self::Five => {
                "A small challenge brings growth. Be kind to yourself and adjust gently."
            }
            Self::Six => "Progress and harmony. Accept help and enjoy smoother momentum.",
            Self::Seven => "Reflection and intention. Choose the path that matches your values.",
            Self::Eight => {
                "Movement and mastery. Consistent small actions create big results."
            }
            Self::Nine => {
                "Nearly there. Stay steady, celebrate resilience, and keep your boundaries."
            }
            Self::Ten => "A cycle completes. Release what’s heavy and keep what’s meaningful.",
            Self::Page => {
                "Curiosity and learning. Explore lightly — a message or idea arrives."
            }
            Self::Knight => "Forward motion. Take confident action, but keep it heart-aware.",
            Self::Queen => "Warm leadership. Nurture what matters and trust your inner wisdom.",
            Self::King => {
                "Mature mastery. Lead calmly, make the clear decision, and stay grounded."
            }
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card in the catalog. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Major or Minor.
    pub arcana: Arcana,
    /// Suit, absent for Major cards.
    pub suit: Option<Suit>,
    /// Rank, absent for Major cards.
    pub rank: Option<Rank>,
    /// Message shown when the card lands upright.
    pub light_upright: String,
    /// Message shown when the card lands reversed.
    pub light_reversed: String,
    /// Short display tags.
    pub keywords: Vec<String>,
    /// Image reference, never resolved by this crate.
    pub image: String,
}

impl CardRecord {
    /// The light text for the given orientation.
    pub fn light(&self, upright: bool) -> &str {
        if upright {
            &self.light_upright
        } else {
            &self.light_reversed
        }
    }
}

/// An override deck entry as supplied by a caller.
///
/// Only `id` and `name` are required. Everything else is completed by
/// [`PartialCard::into_record`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialCard {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Major or Minor. Inferred from `suit` when absent.
    #[serde(default)]
    pub arcana: Option<Arcana>,
    /// Suit, if any.
    #[serde(default)]
    pub suit: Option<Suit>,
    /// Rank, if any.
    #[serde(default)]
    pub rank: Option<Rank>,
    /// Upright text.
    #[serde(default)]
    pub light_upright: Option<String>,
    /// Reversed text.
    #[serde(default)]
    pub light_reversed: Option<String>,
    /// Display tags.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Image reference.
    #[serde(default)]
    pub image: Option<String>,
}

impl PartialCard {
    /// Fill in every missing field with the catalog defaults.
    pub fn into_record(self) -> CardRecord {
        let arcana = self.arcana.unwrap_or(if self.suit.is_some() {
            Arcana::Minor
        } else {
            Arcana::Major
        });
        let image = self
            .image
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| text::image_path(&self.id));

        CardRecord {
            arcana,
            suit: self.suit,
            rank: self.rank,
            light_upright: non_empty_or(self.light_upright, text::GENERIC_UPRIGHT),
            light_reversed: non_empty_or(self.light_reversed, text::GENERIC_REVERSED),
            keywords: self.keywords,
            image,
            id: self.id,
            name: self.name,
        }
    }
}

impl From<PartialCard> for CardRecord {
    fn from(partial: PartialCard) -> Self {
        partial.into_record()
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
