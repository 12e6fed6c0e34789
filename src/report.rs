// src/report.rs
//! Decoder output: per-quarter and cumulative box scores for one game.
use serde::Serialize;

use crate::error::DecodeWarning;
use crate::model::{Metainfo, Side};
use crate::stats::StatLine;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerLine {
    pub name: String,
    #[serde(flatten)]
    pub stats: StatLine,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamTable {
    pub side: Side,
    pub name: String,
    pub players: Vec<PlayerLine>,
}

impl TeamTable {
    pub fn player(&self, name: &str) -> Option<&StatLine> {
        self.players.iter().find(|p| p.name == name).map(|p| &p.stats)
    }

    /// Sum of all player lines.
    pub fn totals(&self) -> StatLine {
        self.players
            .iter()
            .fold(StatLine::new(), |acc, p| acc + p.stats)
    }
}

/// One period (`Q1`) or cumulative range (`Q1-Q2`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodTable {
    pub label: String,
    pub home: TeamTable,
    pub away: TeamTable,
}

impl PeriodTable {
    pub fn team(&self, side: Side) -> &TeamTable {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameReport {
    pub meta: Metainfo,
    pub quarters: Vec<PeriodTable>,
    pub cumulative: Vec<PeriodTable>,
    pub warnings: Vec<DecodeWarning>,
}

impl GameReport {
    pub fn game_key(&self) -> &str {
        &self.meta.game_key
    }

    pub fn quarter(&self, label: &str) -> Option<&PeriodTable> {
        self.quarters.iter().find(|p| p.label == label)
    }

    /// Whole-game totals (the last cumulative range), if any period was decoded.
    pub fn full_game(&self) -> Option<&PeriodTable> {
        self.cumulative.last()
    }
}
