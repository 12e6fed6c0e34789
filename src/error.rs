// src/error.rs
use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::model::Side;

/// Failures that stop decoding of a single game.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed game document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("game document has no `metainfo`")]
    MissingMetainfo,

    #[error("{side} roster is empty")]
    EmptyRoster { side: Side },

    #[error("`metainfo.quarters` is empty")]
    NoQuarters,

    #[error("period {label} is not a list of events: {source}")]
    MalformedPeriod {
        label: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DecodeError {
    /// Attach a path to a failure raised while reading/decoding a file.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DecodeError::Io { path: path.into(), source }
    }
}

/// Recoverable conditions; the game still decodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodeWarning {
    /// Action text matched no rule in the action table.
    Unrecognized { game: String, period: String, side: Side, text: String },
    /// No roster name starts the action text.
    Unattributed { game: String, period: String, side: Side, text: String },
    /// Identical roster names tie for the same action text.
    Ambiguous { game: String, period: String, side: Side, text: String, candidates: Vec<String> },
    /// Listed in `metainfo.quarters` but absent from the document.
    MissingPeriod { game: String, period: String },
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeWarning::Unrecognized { game, period, side, text } => {
                write!(f, "Unrecognized event: {text} - {game} {period} ({side})")
            }
            DecodeWarning::Unattributed { game, period, side, text } => {
                write!(f, "No player for event: {text} - {game} {period} ({side})")
            }
            DecodeWarning::Ambiguous { game, period, side, text, candidates } => {
                write!(f, "Ambiguous player for event: {text} - {game} {period} ({side}) candidates={candidates:?}")
            }
            DecodeWarning::MissingPeriod { game, period } => {
                write!(f, "Missing period data: {game} {period}")
            }
        }
    }
}
