//! Configuration for a reading session.

use std::time::Duration;

use tarot_deck::{CardRecord, Catalog, build_catalog, build_catalog_checked};

use crate::error::TarotResult;

/// Delays between presentation stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pacing {
    /// Shuffle animation before the cards are laid out.
    pub shuffle: Duration,
    /// Pause after each reveal before moving to the next card.
    pub reveal_pause: Duration,
    /// Interstitial between the last reveal and the summary.
    pub ready_pause: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            shuffle: Duration::from_millis(2400),
            reveal_pause: Duration::from_millis(2000),
            ready_pause: Duration::from_millis(2000),
        }
    }
}

impl Pacing {
    /// No delays at all.
    pub fn instant() -> Self {
        Self {
            shuffle: Duration::ZERO,
            reveal_pause: Duration::ZERO,
            ready_pause: Duration::ZERO,
        }
    }

    /// Every delay multiplied by `factor`. Negative or non-finite factors
    /// count as zero; products too large for a `Duration` saturate.
    pub fn scaled(self, factor: f64) -> Self {
        let factor = if factor.is_finite() { factor.max(0.0) } else { 0.0 };
        Self {
            shuffle: scale(self.shuffle, factor),
            reveal_pause: scale(self.reveal_pause, factor),
            ready_pause: scale(self.ready_pause, factor),
        }
    }
}

fn scale(delay: Duration, factor: f64) -> Duration {
    Duration::try_from_secs_f64(delay.as_secs_f64() * factor).unwrap_or(Duration::MAX)
}

/// Configuration for a reading session.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// Reject override decks that break the 78 unique id invariant.
    pub validate_override: bool,
    /// Presentation delays.
    pub pacing: Pacing,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            validate_override: true,
            pacing: Pacing::default(),
        }
    }
}

impl ReadingConfig {
    /// Enable or disable override validation.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate_override = validate;
        self
    }

    /// Scale the default delays (0 disables them).
    pub fn with_pace(mut self, factor: f64) -> Self {
        self.pacing = Pacing::default().scaled(factor);
        self
    }

    /// Build the catalog, validating an override if configured to.
    pub fn catalog(&self, override_deck: Option<Vec<CardRecord>>) -> TarotResult<Catalog> {
        if self.validate_override {
            Ok(build_catalog_checked(override_deck)?)
        } else {
            Ok(build_catalog(override_deck))
        }
    }
}
