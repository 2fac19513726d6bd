//! The three fixed spread positions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A slot in the three-card spread. Picks are matched to positions by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// What energy is around you today.
    Theme,
    /// The kind next step.
    GentleAdvice,
    /// Where this can lead.
    Outcome,
}

impl Position {
    /// Positions in spread order.
    pub const ALL: [Position; 3] = [Position::Theme, Position::GentleAdvice, Position::Outcome];

    /// Zero-based spread index.
    pub fn index(self) -> usize {
        match self {
            Self::Theme => 0,
            Self::GentleAdvice => 1,
            Self::Outcome => 2,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Theme => "Theme",
            Self::GentleAdvice => "Gentle Advice",
            Self::Outcome => "Outcome",
        }
    }

    /// One-line explanation shown beneath the label.
    pub fn help(self) -> &'static str {
        match self {
            Self::Theme => "What energy is around you today",
            Self::GentleAdvice => "The kind next step",
            Self::Outcome => "Where this can lead (with your intention)",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
