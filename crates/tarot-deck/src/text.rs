//! Static card copy: Major names and texts, generic fallbacks, and the
//! string helpers used to derive ids, image paths and reversed texts.

/// The 22 Major Arcana in canonical order. Index is the card's ordinal.
pub const MAJORS: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

/// Upright text used for a Major missing from the lookup table.
pub const GENERIC_UPRIGHT: &str =
    "A meaningful message arrives: trust your path and take a gentle step forward.";

/// Reversed text used for a Major missing from the lookup table.
pub const GENERIC_REVERSED: &str =
    "A softer pace helps. Give yourself space to reset and choose again kindly.";

/// Prefix prepended to every synthesized reversed text.
pub const REVERSED_PREFIX: &str = "Gentle note: slow down and soften. ";

/// Upright and reversed copy for one Major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MajorLight {
    /// Upright text.
    pub upright: &'static str,
    /// Reversed text.
    pub reversed: &'static str,
}

impl MajorLight {
    /// The copy used when a Major has no table entry.
    pub const GENERIC: MajorLight = MajorLight {
        upright: GENERIC_UPRIGHT,
        reversed: GENERIC_REVERSED,
    };
}

/// Look up the copy for a Major by name.
///
/// The table does not have to cover every name in [`MAJORS`]; callers fall
/// back to [`MajorLight::GENERIC`].
pub fn major_light(name: &str) -> Option<MajorLight> {
    let light = match name {
        "The Fool" => MajorLight {
            upright: "A fresh start wants you. Say yes to curiosity, keep it playful, and trust you’ll learn as you go.",
            reversed: "Pause before leaping. Choose the smallest brave step and let confidence catch up gently.",
        },
        "The Magician" => MajorLight {
            upright: "You already have the tools. Focus your energy, keep it simple, and watch momentum build.",
            reversed: "Your power is real — it just needs direction. Pick one priority and commit to it kindly.",
        },
        "The High Priestess" => MajorLight {
            upright: "Your intuition is speaking softly. Create a quiet moment today and you’ll know what to do.",
            reversed: "If things feel fuzzy, slow down. More clarity arrives when you stop forcing an answer.",
        },
        "The Empress" => MajorLight {
            upright: "Nurture brings abundance. Care for your body, your home, and your heart — beauty multiplies.",
            reversed: "Give yourself the care you give others. A little rest is productive right now.",
        },
        "The Emperor" => MajorLight {
            upright: "Structure supports you. Set a clear boundary, a simple plan, and lead with calm confidence.",
            reversed: "Loosen the grip. You’ll get better results with flexibility and a softer pace.",
        },
        "The Hierophant" => MajorLight {
            upright: "Lean on trusted wisdom. A teacher, tradition, or proven method can guide you today.",
            reversed: "You’re allowed to do it your way. Keep what works, release what feels outdated.",
        },
        "The Lovers" => MajorLight {
            upright: "A heart-led choice is here. Choose what aligns with your values and feels mutually uplifting.",
            reversed: "Re-align with what you truly want. Honest communication brings sweetness back.",
        },
        "The Chariot" => MajorLight {
            upright: "You’re moving forward. Steer with focus, keep distractions small, and celebrate progress.",
            reversed: "Slow the pace to stay in control. One clear goal beats ten rushed ones.",
        },
        "Strength" => MajorLight {
            upright: "Gentle courage wins. Meet the day with patience, kindness, and steady self-belief.",
            reversed: "Be tender with yourself. Confidence returns when you stop being harsh and start being supportive.",
        },
        "The Hermit" => MajorLight {
            upright: "Quiet clarity. A short break from noise helps you hear your inner guidance clearly.",
            reversed: "You don’t have to do this alone. Reach out to one safe person for support.",
        },
        "Wheel of Fortune" => MajorLight {
            upright: "Good shifts are in motion. Stay open — a lucky turn comes from saying yes to change.",
            reversed: "If things feel stuck, adjust one small habit. The wheel turns with tiny consistent choices.",
        },
        "Justice" => MajorLight {
            upright: "Balance and fairness. Make the clean decision — the one you’ll feel proud of tomorrow.",
            reversed: "Be honest, not punitive. A gentle correction and clear truth will set things right.",
        },
        "The Hanged Man" => MajorLight {
            upright: "A new perspective helps. Pause, breathe, and let an unexpected insight arrive.",
            reversed: "You’ve waited long enough. Take a small action that releases the pressure.",
        },
        "Death" => MajorLight {
            upright: "A clean ending, a brighter beginning. Release what’s done — you’re making space for better.",
            reversed: "Let go gradually. You don’t have to force a big goodbye; soften out of what no longer fits.",
        },
        "Temperance" => MajorLight {
            upright: "Harmony is your magic. Blend patience with progress, and you’ll feel beautifully steady.",
            reversed: "Too much of anything drains you. Return to simple routines that restore your balance.",
        },
        "The Devil" => MajorLight {
            upright: "Notice what tugs at you. Freedom comes from naming the pattern — then choosing yourself.",
            reversed: "You’re breaking free. One brave boundary today loosens an old chain.",
        },
        "The Tower" => MajorLight {
            upright: "A truth clears the air. What falls away makes room for something more aligned and peaceful.",
            reversed: "You can soften the shake-up. Choose honesty now and you’ll avoid bigger disruption later.",
        },
        "The Star" => MajorLight {
            upright: "Hope is real. Healing and good news arrive when you keep the faith and take gentle steps.",
            reversed: "Refill your cup. Rest, nature, and kindness to self bring your sparkle back.",
        },
        "The Moon" => MajorLight {
            upright: "Trust your inner compass. Not everything is clear yet — follow what feels safe and true.",
            reversed: "Fog is lifting. Ask one direct question and you’ll get the clarity you need.",
        },
        "The Sun" => MajorLight {
            upright: "Joy and warmth. Celebrate a win, be visible, and let good energy meet you halfway.",
            reversed: "Let yourself receive. You don’t need to earn happiness — allow it in.",
        },
        "Judgement" => MajorLight {
            upright: "A renewal moment. Forgive the past, claim the lesson, and step into your next chapter.",
            reversed: "Be compassionate with your timeline. You’re not behind — you’re becoming.",
        },
        "The World" => MajorLight {
            upright: "Completion and reward. You’ve grown — acknowledge it, then open the door to what’s next.",
            reversed: "You’re almost there. Finish one meaningful loop, then celebrate properly.",
        },
        _ => return None,
    };
    Some(light)
}

/// Display keywords for a Major.
pub fn major_keywords(name: &str) -> [&'static str; 3] {
    match name {
        "The Sun" => ["joy", "confidence", "visibility"],
        "The Star" => ["hope", "healing", "guidance"],
        "Strength" => ["courage", "patience", "kindness"],
        _ => ["clarity", "growth", "alignment"],
    }
}

/// Lower-case `s`, collapse every run of characters outside `[a-z0-9]` into a
/// single `_`, then strip one leading and one trailing `_`.
pub fn slug(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_gap = false;
    for c in lower.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            in_gap = false;
        } else if !in_gap {
            out.push('_');
            in_gap = true;
        }
    }
    let trimmed = out.strip_prefix('_').unwrap_or(&out);
    trimmed.strip_suffix('_').unwrap_or(trimmed).to_string()
}

/// Default image reference for a card id.
pub fn image_path(id: &str) -> String {
    format!("./assets/cards/{id}.webp")
}

/// Synthesize a reversed text from an upright one.
///
/// Prepends [`REVERSED_PREFIX`] and, when the first word is "a", "an" or
/// "the" in any case, replaces that word with "A". No other grammar is
/// touched: "The sun rises" becomes "A sun rises".
pub fn gentle_reverse(upright: &str) -> String {
    let split = upright
        .find(char::is_whitespace)
        .unwrap_or(upright.len());
    let (first, rest) = upright.split_at(split);
    let is_article = ["a", "an", "the"]
        .iter()
        .any(|article| first.eq_ignore_ascii_case(article));

    if is_article {
        format!("{REVERSED_PREFIX}A{rest}")
    } else {
        format!("{REVERSED_PREFIX}{upright}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_major_has_copy() {
        for name in MAJORS {
            assert!(major_light(name).is_some(), "missing copy for {name}");
        }
    }

    #[test]
    fn unknown_major_has_no_copy() {
        assert_eq!(major_light("The Jester"), None);
        assert_eq!(
            major_light("The Jester").unwrap_or(MajorLight::GENERIC).upright,
            GENERIC_UPRIGHT
        );
    }

    #[test]
    fn keywords() {
        assert_eq!(major_keywords("The Sun"), ["joy", "confidence", "visibility"]);
        assert_eq!(major_keywords("Death"), ["clarity", "growth", "alignment"]);
    }

    #[test]
    fn slugs() {
        assert_eq!(slug("The High Priestess"), "the_high_priestess");
        assert_eq!(slug("Wheel of Fortune"), "wheel_of_fortune");
        assert_eq!(slug("  --Ace!! "), "ace");
        assert_eq!(slug("Pentacles"), "pentacles");
        assert_eq!(slug(""), "");
    }

    #[test]
    fn reverse_keeps_leading_a() {
        assert_eq!(
            gentle_reverse("A cycle completes."),
            "Gentle note: slow down and soften. A cycle completes."
        );
    }

    #[test]
    fn reverse_replaces_the_and_an() {
        assert_eq!(
            gentle_reverse("The door opens."),
            "Gentle note: slow down and soften. A door opens."
        );
        assert_eq!(
            gentle_reverse("an idea lands."),
            "Gentle note: slow down and soften. A idea lands."
        );
        assert_eq!(
            gentle_reverse("THE end"),
            "Gentle note: slow down and soften. A end"
        );
    }

    #[test]
    fn reverse_leaves_other_words() {
        assert_eq!(
            gentle_reverse("Theory first."),
            "Gentle note: slow down and soften. Theory first."
        );
        assert_eq!(
            gentle_reverse("Balance and choice."),
            "Gentle note: slow down and soften. Balance and choice."
        );
    }

    #[test]
    fn reverse_single_word_and_empty() {
        assert_eq!(gentle_reverse("the"), "Gentle note: slow down and soften. A");
        assert_eq!(gentle_reverse(""), "Gentle note: slow down and soften. ");
    }
}
