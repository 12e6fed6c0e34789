// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub decode: DecodeOptions,
    pub export: ExportOptions,
}

/* ---------------- Decoding ---------------- */

/// How made dunks are credited. The league logs a dunk as its own entry,
/// never alongside a separate 2-point entry. A missed dunk is DKA only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DunkPolicy {
    /// Dunk make also counts as 2PM/2PA (and 2 points).
    #[default]
    CountsAsTwoPoint,
    /// DK/DKA only; field-goal columns untouched.
    Separate,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub dunk_policy: DunkPolicy,
}

/* ---------------- Export ---------------- */

/// Which tables end up in the export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scope {
    Quarters,
    #[default]
    Cumulative,
    Both,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerGame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for tabular formats; `None` for JSON.
    pub fn delim(&self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    pub scope: Scope,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            scope: Scope::default(),
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// SingleFile: `<dir>/<stem>.<ext>`. PerGame: the directory itself.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();

        match self.export_type {
            ExportType::SingleFile => {
                let mut name = self.out_path.file_stem.clone();
                name.push(".");
                name.push(self.out_path.ext.as_deref().unwrap_or(self.format.ext()));
                path.push(name);
            }
            ExportType::PerGame => { /* directory only */ }
        }
        path
    }

    /// Parse user text into dir + stem (+ extension if one was typed).
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();

        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
                // A typed extension sticks even if the format changes later.
                self.out_path.ext = p
                    .extension()
                    .map(|e| e.to_string_lossy().into_owned());
            }
            ExportType::PerGame => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<String>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
