// src/decode/cumulative.rs
use crate::config::consts::RANGE_SEP;

use super::quarter::TeamLines;

/// Running totals over each prefix of `quarters`: `Q1`, `Q1-Q2`, `Q1-Q2-Q3`, ...
///
/// Only raw counts are summed; derived fields come from the summed line when
/// they are read.
pub fn cumulate(quarters: &[(String, TeamLines)]) -> Vec<(String, TeamLines)> {
    let mut out = Vec::with_capacity(quarters.len());
    let mut labels: Vec<&str> = Vec::with_capacity(quarters.len());
    let mut running: Option<TeamLines> = None;

    for (label, lines) in quarters {
        labels.push(label);
        let total = match running.take() {
            Some(mut acc) => {
                acc.accumulate(lines);
                acc
            }
            None => lines.clone(),
        };
        out.push((labels.join(RANGE_SEP), total.clone()));
        running = Some(total);
    }
    out
}
