// src/model.rs
//! Input contract: one crawled game document.
//!
//! ```text
//! { "metainfo": { url, seasonName, gameKey, date, home{name,score,players[]},
//!                 away{...}, winner, quarters[] },
//!   "Q1": [ {home, away, time}, ... ],
//!   "Q2": [ ... ], ... }
//! ```
//! Period keys are looked up by the labels in `metainfo.quarters`; anything
//! else at the top level is ignored.
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::DecodeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    /// Capitalized label used in tabular exports.
    pub fn label(self) -> &'static str {
        match self {
            Side::Home => "Home",
            Side::Away => "Away",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::Home => "home",
            Side::Away => "away",
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub players: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metainfo {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub season_name: String,
    pub game_key: String,
    #[serde(default)]
    pub date: String,
    pub home: TeamInfo,
    pub away: TeamInfo,
    #[serde(default)]
    pub winner: String,
    #[serde(default)]
    pub quarters: Vec<String>,
}

impl Metainfo {
    pub fn team(&self, side: Side) -> &TeamInfo {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

/// One play-by-play line. At most one side is expected to be non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub home: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub away: String,
    /// Game clock; advisory only, list order is authoritative.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
}

impl Event {
    pub fn new(home: &str, away: &str, time: &str) -> Self {
        Self { home: s!(home), away: s!(away), time: s!(time) }
    }

    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// A period listed in `metainfo.quarters`; `events` is `None` when the
/// document has no key for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Period {
    pub label: String,
    pub events: Option<Vec<Event>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub meta: Metainfo,
    pub periods: Vec<Period>,
}

#[derive(Deserialize)]
struct RawGame {
    metainfo: Option<Metainfo>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl GameRecord {
    pub fn from_json_str(text: &str) -> Result<Self, DecodeError> {
        let raw: RawGame = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        let raw: RawGame = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(mut raw: RawGame) -> Result<Self, DecodeError> {
        let meta = raw.metainfo.ok_or(DecodeError::MissingMetainfo)?;
        if meta.quarters.is_empty() {
            return Err(DecodeError::NoQuarters);
        }

        let mut periods = Vec::with_capacity(meta.quarters.len());
        for label in &meta.quarters {
            let events = match raw.rest.remove(label) {
                Some(v) => Some(
                    serde_json::from_value::<Vec<Event>>(v).map_err(|source| {
                        DecodeError::MalformedPeriod { label: label.clone(), source }
                    })?,
                ),
                None => None,
            };
            periods.push(Period { label: label.clone(), events });
        }

        Ok(Self { meta, periods })
    }
}
