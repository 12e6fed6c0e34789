// src/file.rs

use std::{
    collections::HashMap,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::GAME_FILE_EXT;
use crate::config::options::{ExportFormat, ExportOptions, ExportType};
use crate::csv::to_export_string;
use crate::error::DecodeError;
use crate::model::GameRecord;
use crate::report::GameReport;
use crate::table;

/* ---------------- Input ---------------- */

/// Read and parse one crawled game document.
pub fn read_game(path: &Path) -> Result<GameRecord, DecodeError> {
    let text = fs::read_to_string(path).map_err(|e| DecodeError::io(path, e))?;
    GameRecord::from_json_str(&text)
}

/// Expand files/directories into the list of game documents to decode.
/// Directories are walked recursively; within a directory, games are
/// ordered by their number (`S45G01N2` before `S45G01N13`).
pub fn collect_game_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, DecodeError> {
    let mut out = Vec::new();
    for input in inputs {
        if input.is_dir() {
            walk_dir(input, &mut out)?;
        } else {
            out.push(input.clone());
        }
    }
    Ok(out)
}

fn walk_dir(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), DecodeError> {
    let mut files = Vec::new();
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| DecodeError::io(dir, e))? {
        let path = entry.map_err(|e| DecodeError::io(dir, e))?.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if path.extension().and_then(|s| s.to_str()) == Some(GAME_FILE_EXT) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| {
        (game_number(a).unwrap_or(u32::MAX), a).cmp(&(game_number(b).unwrap_or(u32::MAX), b))
    });
    out.append(&mut files);

    subdirs.sort();
    for sub in subdirs {
        walk_dir(&sub, out)?;
    }
    Ok(())
}

/// Game number from a `S<season>G<round>N<number>` file stem.
pub fn game_number(path: &Path) -> Option<u32> {
    let stem = path.file_stem()?.to_str()?;
    let tail = &stem[stem.rfind('N')? + 1..];
    let digits: String = tail.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/* ---------------- Output ---------------- */

/// Write decoded reports according to ExportOptions. Returns every path written.
pub fn export_reports(
    export: &ExportOptions,
    reports: &[GameReport],
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    match export.export_type {
        ExportType::SingleFile => {
            let path = export.out_path();
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            write_reports(&path, export, reports)?;
            Ok(vec![path])
        }
        ExportType::PerGame => {
            let outdir = export.out_path();
            ensure_directory(&outdir)?;

            let mut seen: HashMap<String, usize> = HashMap::new();
            let mut written = Vec::with_capacity(reports.len());
            for report in reports {
                let stem = sanitize_filename(report.game_key());
                let path = resolve_filename(&outdir, &stem, &mut seen, export.format.ext());
                write_reports(&path, export, std::slice::from_ref(report))?;
                written.push(path);
            }
            Ok(written)
        }
    }
}

fn write_reports(
    path: &Path,
    export: &ExportOptions,
    reports: &[GameReport],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = BufWriter::new(File::create(path)?);

    match export.format.delim() {
        Some(sep) => {
            let ds = table::dataset(reports, export.scope);
            let contents = to_export_string(&ds.headers, &ds.rows, export.include_headers, sep)?;
            out.write_all(contents.as_bytes())?;
        }
        None => {
            debug_assert_eq!(export.format, ExportFormat::Json);
            // A single game is written as an object, several as an array.
            match reports {
                [one] => serde_json::to_writer_pretty(&mut out, one)?,
                many => serde_json::to_writer_pretty(&mut out, many)?,
            }
        }
    }

    out.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Keep letters, digits, `-` and `_`; everything else becomes `_`.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() || ch == '-' { out.push(ch); last_us = false; }
        else if !last_us { out.push('_'); last_us = true; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("game") } else { out }
}

/// Duplicate handling **only within this run**
pub fn resolve_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv" | "json"
) -> PathBuf {
    let count = seen_names.entry(stem.to_string()).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_number_from_stem() {
        assert_eq!(game_number(Path::new("kbl/2024-2025/S45G01N13.json")), Some(13));
        assert_eq!(game_number(Path::new("S39G01N270.json")), Some(270));
        assert_eq!(game_number(Path::new("notes.json")), None);
    }

    #[test]
    fn sanitize_keeps_keys_and_hangul() {
        assert_eq!(sanitize_filename("S45G01N13"), "S45G01N13");
        assert_eq!(sanitize_filename("수원 KT/..."), "수원_KT");
        assert_eq!(sanitize_filename("///"), "game");
    }

    #[test]
    fn duplicate_stems_get_counters() {
        let mut seen = HashMap::new();
        let dir = Path::new("out");
        assert_eq!(resolve_filename(dir, "g", &mut seen, "csv"), dir.join("g.csv"));
        assert_eq!(resolve_filename(dir, "g", &mut seen, "csv"), dir.join("g (2).csv"));
    }
}
