//! Reading summary and the plain-text share block.

use std::fmt;

use crate::draw::DrawResult;
use crate::position::Position;

const MAX_LINE_CHARS: usize = 180;
const KEEP_CHARS: usize = 177;

/// Closing line of every summary.
pub const TINY_INTENTION: &str = "Tiny intention: pick one kind action that matches your Theme, \
                                  and do it within the next 24 hours.";

/// Trim `text` and cap it at 180 characters, ellipsizing longer texts.
pub fn shorten(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX_LINE_CHARS {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(KEEP_CHARS).collect();
    out.push('…');
    out
}

/// The three-line storyline shown once every card is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Personal or generic greeting.
    pub greeting: String,
    /// Shortened Theme text.
    pub theme: String,
    /// Shortened Gentle Advice text.
    pub advice: String,
    /// Shortened Outcome text.
    pub outcome: String,
}

impl Summary {
    /// Summarize a draw.
    pub fn of(draw: &DrawResult) -> Self {
        let name = draw.user_name.trim();
        let greeting = if name.is_empty() {
            "Here’s your gentle storyline for today:".to_string()
        } else {
            format!("{name}, here’s your gentle storyline for today:")
        };

        Self {
            greeting,
            theme: shorten(draw.pick(Position::Theme).light()),
            advice: shorten(draw.pick(Position::GentleAdvice).light()),
            outcome: shorten(draw.pick(Position::Outcome).light()),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.greeting)?;
        writeln!(f, "Theme: {}", self.theme)?;
        writeln!(f, "Gentle advice: {}", self.advice)?;
        writeln!(f, "Outcome: {}", self.outcome)?;
        write!(f, "{TINY_INTENTION}")
    }
}

/// Plain-text block for sharing a reading.
pub fn share_text(draw: &DrawResult) -> String {
    format!(
        "Daily Light Tarot ({})\nCards: {}\n\n{}",
        draw.day_key,
        draw.card_names().join(" | "),
        Summary::of(draw)
    )
}
