//! Seed material and the 32-bit seed hash.
//!
//! The seed material string is the reproducibility contract: for a daily draw
//! it depends only on the day, the normalized name and the device id.

use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Hash a string with 32-bit FNV-1a over its UTF-8 bytes.
pub fn fnv1a_32(input: &str) -> u32 {
    input.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Trim and lower-case a user name for use in seed material.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A local calendar date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    /// Key for a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    /// Key for the calendar date of `now` in its own time zone.
    pub fn of<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::from_date(now.date_naive())
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(Self::from_date)
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The exact string a draw's seed is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedMaterial(String);

impl SeedMaterial {
    /// `daily|<day>|<name>|<device>`.
    pub fn daily(day: &DayKey, user_name: &str, device_id: &str) -> Self {
        Self(format!(
            "daily|{day}|{}|{device_id}",
            normalize_name(user_name)
        ))
    }

    /// `surprise|<unix millis>|<entropy>|<name>|<device>`.
    ///
    /// `entropy` is rendered in shortest round-trip decimal form.
    pub fn surprise(now_millis: i64, entropy: f64, user_name: &str, device_id: &str) -> Self {
        Self(format!(
            "surprise|{now_millis}|{entropy}|{}|{device_id}",
            normalize_name(user_name)
        ))
    }

    /// The 32-bit seed for this material.
    pub fn seed(&self) -> u32 {
        fnv1a_32(&self.0)
    }

    /// The material as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SeedMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
