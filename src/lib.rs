// src/lib.rs
//! Decode KBL play-by-play game logs into per-player box scores.
//!
//! ```no_run
//! use kbl_decode::{decode::Decoder, config::options::DecodeOptions};
//!
//! let text = std::fs::read_to_string("S45G01N13.json")?;
//! let report = Decoder::new(&DecodeOptions::default()).decode_str(&text)?;
//! for period in &report.cumulative {
//!     println!("{} {:?}", period.label, period.home.player("허훈"));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[macro_use]
pub mod macros;

pub mod config;
pub mod error;
pub mod model;
pub mod stats;
pub mod decode;
pub mod report;

pub mod batch;
pub mod cli;
pub mod csv;
pub mod file;
pub mod logger;
pub mod progress;
pub mod table;

pub use decode::{decode_game, Decoder};
pub use error::{DecodeError, DecodeWarning};
pub use model::{Event, GameRecord, Side};
pub use report::GameReport;
