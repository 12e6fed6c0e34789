// src/table.rs
//
// Flat, tabular view of decoded reports, for CSV/TSV export.
// One row per (game, period range, team, player):
//
//   Season, Game, Period, Scope, Team, Side, Player, PTS, 2PM, ... , PF
//
use crate::config::options::Scope;
use crate::model::Side;
use crate::report::{GameReport, PeriodTable};
use crate::stats::COLUMNS;

/// Headers + rows, ready for export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

const KEY_HEADERS: [&str; 7] = ["Season", "Game", "Period", "Scope", "Team", "Side", "Player"];

pub fn headers() -> Vec<String> {
    KEY_HEADERS
        .iter()
        .chain(COLUMNS.iter())
        .map(|h| s!(*h))
        .collect()
}

pub fn report_rows(report: &GameReport, scope: Scope) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    if matches!(scope, Scope::Quarters | Scope::Both) {
        for period in &report.quarters {
            push_period(&mut rows, report, period, "quarter");
        }
    }
    if matches!(scope, Scope::Cumulative | Scope::Both) {
        for period in &report.cumulative {
            push_period(&mut rows, report, period, "cumulative");
        }
    }
    rows
}

fn push_period(rows: &mut Vec<Vec<String>>, report: &GameReport, period: &PeriodTable, scope: &str) {
    for side in Side::BOTH {
        let team = period.team(side);
        for player in &team.players {
            let mut row = Vec::with_capacity(KEY_HEADERS.len() + COLUMNS.len());
            row.push(report.meta.season_name.clone());
            row.push(report.meta.game_key.clone());
            row.push(period.label.clone());
            row.push(s!(scope));
            row.push(team.name.clone());
            row.push(s!(side.label()));
            row.push(player.name.clone());
            row.extend(player.stats.columns().iter().map(|(_, v)| v.to_string()));
            rows.push(row);
        }
    }
}

/// Rows for many games, with a single header row.
pub fn dataset<'a>(reports: impl IntoIterator<Item = &'a GameReport>, scope: Scope) -> DataSet {
    let mut rows = Vec::new();
    for report in reports {
        rows.extend(report_rows(report, scope));
    }
    DataSet { headers: Some(headers()), rows }
}
