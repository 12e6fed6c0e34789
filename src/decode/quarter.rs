// src/decode/quarter.rs
use log::{debug, warn};

use crate::config::consts::TEAM_PREFIX;
use crate::error::DecodeWarning;
use crate::model::{Event, Side};
use crate::stats::StatLine;

use super::classify::ActionTable;
use super::roster::{Attribution, Roster};

/// Raw stat lines for both teams, index-aligned with each roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamLines {
    pub home: Vec<StatLine>,
    pub away: Vec<StatLine>,
}

impl TeamLines {
    pub fn zeroed(home: &Roster, away: &Roster) -> Self {
        Self {
            home: vec![StatLine::new(); home.len()],
            away: vec![StatLine::new(); away.len()],
        }
    }

    pub fn side(&self, side: Side) -> &[StatLine] {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<StatLine> {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// Element-wise sum of raw counts. Both sides must come from the same rosters.
    pub fn accumulate(&mut self, other: &TeamLines) {
        for side in Side::BOTH {
            for (acc, line) in self.side_mut(side).iter_mut().zip(other.side(side)) {
                *acc += line;
            }
        }
    }
}

/// Where an event came from, for warnings.
#[derive(Clone, Copy, Debug)]
pub struct QuarterCtx<'a> {
    pub game: &'a str,
    pub period: &'a str,
}

impl QuarterCtx<'_> {
    fn report(&self, warnings: &mut Vec<DecodeWarning>, w: DecodeWarning) {
        warn!("{w}");
        warnings.push(w);
    }
}

/// Fold one period's events into fresh per-player lines.
///
/// Home text only touches the home roster and away text only the away roster.
/// Empty text and team-level records are skipped. Anything that can't be
/// attributed or classified is reported and left out; the rest still applies.
pub fn aggregate_quarter(
    table: &ActionTable,
    home: &Roster,
    away: &Roster,
    events: &[Event],
    ctx: QuarterCtx<'_>,
    warnings: &mut Vec<DecodeWarning>,
) -> TeamLines {
    let mut lines = TeamLines::zeroed(home, away);

    for event in events {
        for side in Side::BOTH {
            let text = event.text(side).trim();
            if text.is_empty() || text.starts_with(TEAM_PREFIX) {
                continue;
            }

            let roster = match side {
                Side::Home => home,
                Side::Away => away,
            };

            let (index, action) = match roster.attribute(text) {
                Attribution::Player { index, action } => (index, action),
                Attribution::None => {
                    ctx.report(warnings, DecodeWarning::Unattributed {
                        game: s!(ctx.game),
                        period: s!(ctx.period),
                        side,
                        text: s!(text),
                    });
                    continue;
                }
                Attribution::Ambiguous(candidates) => {
                    ctx.report(warnings, DecodeWarning::Ambiguous {
                        game: s!(ctx.game),
                        period: s!(ctx.period),
                        side,
                        text: s!(text),
                        candidates: candidates
                            .iter()
                            .map(|&i| roster.names()[i].clone())
                            .collect(),
                    });
                    continue;
                }
            };

            match table.classify(action) {
                Some(rule) if rule.is_silent() => {
                    debug!("{} {}: skip {:?} ({text})", ctx.game, ctx.period, rule.kind);
                }
                Some(rule) => lines.side_mut(side)[index].apply(rule.delta),
                None => ctx.report(warnings, DecodeWarning::Unrecognized {
                    game: s!(ctx.game),
                    period: s!(ctx.period),
                    side,
                    text: s!(text),
                }),
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;

    const CTX: QuarterCtx<'static> = QuarterCtx { game: "S45G01N1", period: "Q1" };

    fn run(home: &[&str], away: &[&str], events: &[Event]) -> (TeamLines, Vec<DecodeWarning>) {
        let mut warnings = Vec::new();
        let lines = aggregate_quarter(
            &ActionTable::default(),
            &Roster::from_names(home),
            &Roster::from_names(away),
            events,
            CTX,
            &mut warnings,
        );
        (lines, warnings)
    }

    #[test]
    fn sides_stay_separate() {
        // Same name on both rosters: the side column decides.
        let (lines, warnings) = run(
            &["선수A"],
            &["선수A"],
            &[Event::new("선수A 스틸", "", "0:01"), Event::new("", "선수A 턴오버", "0:02")],
        );
        assert!(warnings.is_empty());
        assert_eq!(lines.home[0].get(Stat::Stl), 1);
        assert_eq!(lines.home[0].get(Stat::To), 0);
        assert_eq!(lines.away[0].get(Stat::To), 1);
        assert_eq!(lines.away[0].get(Stat::Stl), 0);
    }

    #[test]
    fn team_lines_and_blanks_are_skipped() {
        let (lines, warnings) = run(
            &["선수A"],
            &["선수B"],
            &[
                Event::new("", "", "1쿼터 시작"),
                Event::new("팀리바운드", "", "0:07"),
                Event::new("", "팀파울", "0:27"),
                Event::new("  ", "", "0:30"),
            ],
        );
        assert!(warnings.is_empty());
        assert!(lines.home[0].is_zero());
        assert!(lines.away[0].is_zero());
    }

    #[test]
    fn substitution_is_silent() {
        let (lines, warnings) = run(&["선수A"], &[], &[Event::new("선수A 교체(IN)", "", "0:27")]);
        assert!(warnings.is_empty());
        assert!(lines.home[0].is_zero());
    }

    #[test]
    fn unknown_player_is_reported() {
        let (lines, warnings) = run(&["선수A"], &[], &[Event::new("선수Z 스틸", "", "0:01")]);
        assert!(lines.home[0].is_zero());
        assert!(matches!(&warnings[..], [DecodeWarning::Unattributed { side: Side::Home, .. }]));
    }

    #[test]
    fn duplicate_names_are_warned_and_skipped() {
        let (lines, warnings) = run(
            &["이현석", "이현석", "허훈"],
            &[],
            &[Event::new("이현석 스틸", "", "0:01"), Event::new("허훈 어시스트", "", "0:02")],
        );
        assert!(lines.home[0].is_zero());
        assert!(lines.home[1].is_zero());
        assert_eq!(lines.home[2].get(Stat::Ast), 1);
        assert_eq!(
            warnings,
            [DecodeWarning::Ambiguous {
                game: s!("S45G01N1"),
                period: s!("Q1"),
                side: Side::Home,
                text: s!("이현석 스틸"),
                candidates: vec![s!("이현석"), s!("이현석")],
            }]
        );
    }

    #[test]
    fn keyword_inside_name_does_not_misfire() {
        // Only the text after the name is classified.
        let (lines, _) = run(&["블록 파울"], &[], &[Event::new("블록 파울 스틸", "", "0:01")]);
        assert_eq!(lines.home[0].get(Stat::Stl), 1);
        assert_eq!(lines.home[0].get(Stat::Blk), 0);
        assert_eq!(lines.home[0].get(Stat::Pf), 0);
    }
}
