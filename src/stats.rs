// src/stats.rs
//! Box-score stat codes, the per-player stat line, and derived fields.
//!
//! A [`StatLine`] only stores raw counting stats. Everything else
//! (FGM/FGA, PTS, REB, the four percentages) comes from [`StatLine::derived`]
//! and is recomputed on demand, so summing two lines and deriving again is
//! always correct. Percentages are never added together.
use std::fmt;
use std::ops::{Add, AddAssign};

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Raw counting stats, in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stat {
    TwoPm,
    TwoPa,
    ThreePm,
    ThreePa,
    Ftm,
    Fta,
    Oreb,
    Dreb,
    Ast,
    Stl,
    Blk,
    To,
    Pf,
    Dk,
    Dka,
    Gd,
}

impl Stat {
    pub const COUNT: usize = 16;

    pub const ALL: [Stat; Stat::COUNT] = [
        Stat::TwoPm, Stat::TwoPa, Stat::ThreePm, Stat::ThreePa,
        Stat::Ftm, Stat::Fta, Stat::Oreb, Stat::Dreb,
        Stat::Ast, Stat::Stl, Stat::Blk, Stat::To,
        Stat::Pf, Stat::Dk, Stat::Dka, Stat::Gd,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Stat::TwoPm => "2PM",
            Stat::TwoPa => "2PA",
            Stat::ThreePm => "3PM",
            Stat::ThreePa => "3PA",
            Stat::Ftm => "FTM",
            Stat::Fta => "FTA",
            Stat::Oreb => "OREB",
            Stat::Dreb => "DREB",
            Stat::Ast => "AST",
            Stat::Stl => "STL",
            Stat::Blk => "BLK",
            Stat::To => "TO",
            Stat::Pf => "PF",
            Stat::Dk => "DK",
            Stat::Dka => "DKA",
            Stat::Gd => "GD",
        }
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A set of `{stat: increment}` pairs produced by one classified event.
pub type Delta = [(Stat, u32)];

/// Raw counting stats for one player over one period or range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatLine {
    counts: [u32; Stat::COUNT],
}

impl StatLine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, stat: Stat) -> u32 {
        self.counts[stat.index()]
    }

    #[inline]
    pub fn add(&mut self, stat: Stat, n: u32) {
        self.counts[stat.index()] += n;
    }

    pub fn apply(&mut self, delta: &Delta) {
        for &(stat, n) in delta {
            self.add(stat, n);
        }
    }

    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    pub fn derived(&self) -> Derived {
        let two_pm = self.get(Stat::TwoPm);
        let two_pa = self.get(Stat::TwoPa);
        let three_pm = self.get(Stat::ThreePm);
        let three_pa = self.get(Stat::ThreePa);
        let ftm = self.get(Stat::Ftm);
        let fta = self.get(Stat::Fta);

        let fgm = two_pm + three_pm;
        let fga = two_pa + three_pa;

        Derived {
            fgm,
            fga,
            pts: 2 * two_pm + 3 * three_pm + ftm,
            reb: self.get(Stat::Oreb) + self.get(Stat::Dreb),
            fg_pct: percentage(fgm, fga),
            two_pct: percentage(two_pm, two_pa),
            three_pct: percentage(three_pm, three_pa),
            ft_pct: percentage(ftm, fta),
        }
    }

    /// Full box-score row in export order.
    pub fn columns(&self) -> [(&'static str, StatValue); 24] {
        use StatValue::{Count, Pct};
        let d = self.derived();
        let c = |s: Stat| Count(self.get(s));
        [
            ("PTS", Count(d.pts)),
            ("2PM", c(Stat::TwoPm)),
            ("2PA", c(Stat::TwoPa)),
            ("2P%", Pct(d.two_pct)),
            ("3PM", c(Stat::ThreePm)),
            ("3PA", c(Stat::ThreePa)),
            ("3P%", Pct(d.three_pct)),
            ("FGM", Count(d.fgm)),
            ("FGA", Count(d.fga)),
            ("FG%", Pct(d.fg_pct)),
            ("FTM", c(Stat::Ftm)),
            ("FTA", c(Stat::Fta)),
            ("FT%", Pct(d.ft_pct)),
            ("OREB", c(Stat::Oreb)),
            ("DREB", c(Stat::Dreb)),
            ("REB", Count(d.reb)),
            ("AST", c(Stat::Ast)),
            ("STL", c(Stat::Stl)),
            ("BLK", c(Stat::Blk)),
            ("GD", c(Stat::Gd)),
            ("DK", c(Stat::Dk)),
            ("DKA", c(Stat::Dka)),
            ("TO", c(Stat::To)),
            ("PF", c(Stat::Pf)),
        ]
    }
}

/// Export column codes, matching [`StatLine::columns`].
pub const COLUMNS: [&str; 24] = [
    "PTS", "2PM", "2PA", "2P%", "3PM", "3PA", "3P%", "FGM", "FGA", "FG%",
    "FTM", "FTA", "FT%", "OREB", "DREB", "REB", "AST", "STL", "BLK", "GD",
    "DK", "DKA", "TO", "PF",
];

impl AddAssign<&StatLine> for StatLine {
    fn add_assign(&mut self, rhs: &StatLine) {
        for (a, b) in self.counts.iter_mut().zip(rhs.counts.iter()) {
            *a += *b;
        }
    }
}

impl Add for StatLine {
    type Output = StatLine;
    fn add(mut self, rhs: StatLine) -> StatLine {
        self += &rhs;
        self
    }
}

impl Serialize for StatLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let cols = self.columns();
        let mut map = serializer.serialize_map(Some(cols.len()))?;
        for (code, value) in &cols {
            match value {
                StatValue::Count(n) => map.serialize_entry(code, n)?,
                StatValue::Pct(p) => map.serialize_entry(code, p)?,
            }
        }
        map.end()
    }
}

/// Fields computed from raw counts; never stored, never summed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Derived {
    pub fgm: u32,
    pub fga: u32,
    pub pts: u32,
    pub reb: u32,
    pub fg_pct: f64,
    pub two_pct: f64,
    pub three_pct: f64,
    pub ft_pct: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatValue {
    Count(u32),
    Pct(f64),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::Pct(p) => write!(f, "{p:.1}"),
        }
    }
}

/// `made / attempted * 100` to one decimal, half-to-even; `0.0` when nothing was attempted.
pub fn percentage(made: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        return 0.0;
    }
    let pct = f64::from(made) / f64::from(attempted) * 100.0;
    (pct * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 1), 100.0);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(5, 7), 71.4);
    }

    #[test]
    fn derived_from_raw_counts() {
        let mut line = StatLine::new();
        line.apply(&[(Stat::TwoPm, 3), (Stat::TwoPa, 5), (Stat::ThreePm, 1), (Stat::ThreePa, 4)]);
        line.apply(&[(Stat::Ftm, 2), (Stat::Fta, 2), (Stat::Oreb, 1), (Stat::Dreb, 4)]);

        let d = line.derived();
        assert_eq!(d.fgm, 4);
        assert_eq!(d.fga, 9);
        assert_eq!(d.pts, 11);
        assert_eq!(d.reb, 5);
        assert_eq!(d.fg_pct, 44.4);
        assert_eq!(d.two_pct, 60.0);
        assert_eq!(d.three_pct, 25.0);
        assert_eq!(d.ft_pct, 100.0);
    }

    #[test]
    fn sum_then_derive() {
        let mut a = StatLine::new();
        a.apply(&[(Stat::TwoPm, 1), (Stat::TwoPa, 1)]);
        let mut b = StatLine::new();
        b.apply(&[(Stat::TwoPa, 3)]);

        // 100.0 and 0.0 would "average" to 50.0; the real rate is 1/4.
        assert_eq!((a + b).derived().two_pct, 25.0);
    }

    #[test]
    fn columns_match_header_order() {
        let cols = StatLine::new().columns();
        let codes: Vec<&str> = cols.iter().map(|(c, _)| *c).collect();
        assert_eq!(codes, COLUMNS);
    }

    #[test]
    fn every_raw_stat_is_exported() {
        for stat in Stat::ALL {
            assert!(COLUMNS.contains(&stat.code()), "{stat}");
        }
    }

    #[test]
    fn serializes_as_code_map() {
        let mut line = StatLine::new();
        line.apply(&[(Stat::ThreePm, 1), (Stat::ThreePa, 1)]);
        let v = serde_json::to_value(line).unwrap();
        assert_eq!(v["PTS"], 3);
        assert_eq!(v["3P%"], 100.0);
        assert_eq!(v["2P%"], 0.0);
    }

    #[test]
    fn pct_display_keeps_one_decimal() {
        assert_eq!(StatValue::Pct(100.0).to_string(), "100.0");
        assert_eq!(StatValue::Pct(0.0).to_string(), "0.0");
        assert_eq!(StatValue::Count(12).to_string(), "12");
    }
}
