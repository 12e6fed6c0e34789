// src/decode/mod.rs
//! # Event decoder
//!
//! Turns one crawled game ([`GameRecord`]) into per-quarter and cumulative
//! per-player box scores ([`GameReport`]).
//!
//! ```text
//! GameRecord ─┬─ roster::Roster (home, away)
//!             └─ for each period present:
//!                  quarter::aggregate_quarter ── classify::ActionTable
//!                                    ↘ TeamLines (raw counts)
//!                cumulative::cumulate → Q1, Q1-Q2, ...
//!                                    ↘ GameReport (derived on read)
//! ```
//!
//! Decoding is pure: the same record and options always give the same report,
//! and a [`Decoder`] can be shared across threads.
pub mod classify;
pub mod cumulative;
pub mod quarter;
pub mod roster;

use log::{debug, info};

use crate::config::options::DecodeOptions;
use crate::error::{DecodeError, DecodeWarning};
use crate::model::{GameRecord, Side};
use crate::report::{GameReport, PeriodTable, PlayerLine, TeamTable};

use classify::ActionTable;
use quarter::{QuarterCtx, TeamLines};
use roster::Roster;

#[derive(Clone, Debug, Default)]
pub struct Decoder {
    table: ActionTable,
}

impl Decoder {
    pub fn new(opts: &DecodeOptions) -> Self {
        Self { table: ActionTable::for_policy(opts.dunk_policy) }
    }

    pub fn with_table(table: ActionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ActionTable {
        &self.table
    }

    pub fn decode_str(&self, text: &str) -> Result<GameReport, DecodeError> {
        self.decode(&GameRecord::from_json_str(text)?)
    }

    pub fn decode(&self, game: &GameRecord) -> Result<GameReport, DecodeError> {
        let meta = &game.meta;
        let home = Roster::from_names(&meta.team(Side::Home).players);
        let away = Roster::from_names(&meta.team(Side::Away).players);
        for (side, roster) in [(Side::Home, &home), (Side::Away, &away)] {
            if roster.is_empty() {
                return Err(DecodeError::EmptyRoster { side });
            }
            if roster.has_duplicates() {
                debug!("{}: {side} roster has duplicate names", meta.game_key);
            }
        }

        let mut warnings = Vec::new();
        let mut quarters: Vec<(String, TeamLines)> = Vec::with_capacity(game.periods.len());

        for period in &game.periods {
            let Some(events) = period.events.as_deref() else {
                let w = DecodeWarning::MissingPeriod {
                    game: meta.game_key.clone(),
                    period: period.label.clone(),
                };
                info!("{w}");
                warnings.push(w);
                continue;
            };
            let ctx = QuarterCtx { game: &meta.game_key, period: &period.label };
            let lines = quarter::aggregate_quarter(&self.table, &home, &away, events, ctx, &mut warnings);
            quarters.push((period.label.clone(), lines));
        }

        let cumulative = cumulative::cumulate(&quarters);
        let build = |label: &str, lines: &TeamLines| PeriodTable {
            label: s!(label),
            home: team_table(Side::Home, &meta.team(Side::Home).name, &home, lines),
            away: team_table(Side::Away, &meta.team(Side::Away).name, &away, lines),
        };

        debug!(
            "{}: {} periods decoded, {} warnings",
            meta.game_key,
            quarters.len(),
            warnings.len()
        );

        Ok(GameReport {
            meta: meta.clone(),
            quarters: quarters.iter().map(|(l, lines)| build(l.as_str(), lines)).collect(),
            cumulative: cumulative.iter().map(|(l, lines)| build(l.as_str(), lines)).collect(),
            warnings,
        })
    }
}

fn team_table(side: Side, name: &str, roster: &Roster, lines: &TeamLines) -> TeamTable {
    TeamTable {
        side,
        name: s!(name),
        players: roster
            .names()
            .iter()
            .zip(lines.side(side))
            .map(|(name, stats)| PlayerLine { name: name.clone(), stats: *stats })
            .collect(),
    }
}

/// Decode with a one-off [`Decoder`].
pub fn decode_game(game: &GameRecord, opts: &DecodeOptions) -> Result<GameReport, DecodeError> {
    Decoder::new(opts).decode(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::DunkPolicy;
    use crate::stats::Stat;
    use serde_json::json;

    fn game() -> GameRecord {
        GameRecord::from_value(json!({
            "metainfo": {
                "gameKey": "T1",
                "home": {"name": "H", "players": ["김선형", "\"오세근\""]},
                "away": {"name": "A", "players": ["허훈\n문정현"]},
                "quarters": ["Q1", "Q2"]
            },
            "Q1": [
                {"home": "김선형 덩크슛성공", "away": "허훈 블록", "time": "1:00"},
                {"home": "팀리바운드", "away": null, "time": "1:05"},
                {"home": "오세근 교체(IN)", "away": "", "time": "1:10"}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn both_sides_of_one_event_are_decoded() {
        let report = Decoder::default().decode(&game()).unwrap();
        let q1 = &report.quarters[0];
        assert_eq!(q1.home.player("김선형").unwrap().get(Stat::Dk), 1);
        assert_eq!(q1.away.player("허훈").unwrap().get(Stat::Blk), 1);
        assert!(q1.home.player("오세근").unwrap().is_zero());
        assert_eq!(q1.away.players.len(), 2);
    }

    #[test]
    fn missing_period_is_omitted_with_warning() {
        let report = Decoder::default().decode(&game()).unwrap();
        assert_eq!(report.quarters.len(), 1);
        assert_eq!(report.cumulative.len(), 1);
        assert_eq!(
            report.warnings,
            [DecodeWarning::MissingPeriod { game: s!("T1"), period: s!("Q2") }]
        );
    }

    #[test]
    fn custom_table_matches_policy_options() {
        let opts = DecodeOptions { dunk_policy: DunkPolicy::Separate };
        let custom = Decoder::with_table(ActionTable::for_policy(DunkPolicy::Separate));
        assert_eq!(custom.table(), Decoder::new(&opts).table());
        assert_eq!(
            custom.decode(&game()).unwrap(),
            decode_game(&game(), &opts).unwrap()
        );
    }
}
