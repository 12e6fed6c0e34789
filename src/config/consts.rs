// src/config/consts.rs

// Play-by-play conventions
pub const TEAM_PREFIX: &str = "팀";     // team-level records: 팀리바운드, 팀파울, 팀속공
pub const RANGE_SEP: &str = "-";        // cumulative labels: Q1-Q2-Q3

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "box_scores";

// Batch input
pub const GAME_FILE_EXT: &str = "json";

// Concurrency
pub const WORKERS: usize = 4;

// Logging
pub const DEFAULT_LOG_FILE: &str = "kbl_decode.log";
