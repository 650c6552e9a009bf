//! Rank observation types.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, Timelike as _};
use serde::{Deserialize, Serialize};

use crate::constants::OBSERVED_AT_FORMAT;
use crate::error::{CoreError, Result};

/// Catalog identifier of an application (the App Store `trackId`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(i64);

impl AppId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Validate an identifier typed by the user.
    ///
    /// Surrounding whitespace is ignored; what remains must be a non-empty
    /// run of ASCII digits that fits in an `i64`. Signs are rejected.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidInput` carrying the raw input.
    pub fn parse_input(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidInput(format!("not a numeric app id: {input:?}")));
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidInput(format!("app id out of range: {trimmed}")))
    }
}

impl FromStr for AppId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_input(s)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based rank of an app within one word's search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(NonZeroU32);

impl Position {
    /// `None` for zero: zero is never a valid rank.
    #[must_use]
    pub fn new(rank: u32) -> Option<Self> {
        NonZeroU32::new(rank).map(Self)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rank of `target` in `results`, counting from 1.
///
/// Only the first occurrence counts when the catalog returns an id twice.
#[must_use]
pub fn position_of(results: &[AppId], target: AppId) -> Option<Position> {
    let index = results.iter().position(|id| *id == target)?;
    u32::try_from(index).ok().and_then(|i| Position::new(i.saturating_add(1)))
}

/// Wall-clock time of a run, truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObservedAt(NaiveDateTime);

impl ObservedAt {
    /// Current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_naive(Local::now().naive_local())
    }

    #[must_use]
    pub fn from_naive(at: NaiveDateTime) -> Self {
        Self(at.with_nanosecond(0).unwrap_or(at))
    }

    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for ObservedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(OBSERVED_AT_FORMAT))
    }
}

impl FromStr for ObservedAt {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(s, OBSERVED_AT_FORMAT)
            .map(Self)
            .map_err(|e| CoreError::InvalidInput(format!("bad timestamp {s:?}: {e}")))
    }
}

impl Serialize for ObservedAt {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObservedAt {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One row of the rank history: where `identifier` ranked for `word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankObservation {
    pub identifier: AppId,
    pub word: String,
    pub position: Option<Position>,
    pub observed_at: ObservedAt,
}

impl RankObservation {
    #[must_use]
    pub fn new(
        identifier: AppId,
        word: impl Into<String>,
        position: Option<Position>,
        observed_at: ObservedAt,
    ) -> Self {
        Self { identifier, word: word.into(), position, observed_at }
    }
}
