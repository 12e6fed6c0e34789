// src/cli.rs
use std::{error::Error, path::{Path, PathBuf}};

use log::{info, LevelFilter};

use crate::{
    batch,
    config::consts::DEFAULT_LOG_FILE,
    config::options::{AppOptions, DunkPolicy, ExportFormat, ExportType, Scope},
    decode::Decoder,
    file,
    logger::FileLogger,
    progress::Progress,
};

pub enum Command {
    Help,
    Run(Params),
}

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub inputs: Vec<PathBuf>,        // game files and/or directories
    pub options: AppOptions,
    pub out: Option<String>,         // file for single export, dir for --per-game
    pub log_file: Option<PathBuf>,   // None → DEFAULT_LOG_FILE
    pub verbose: bool,               // debug-level log + echo warnings
}

pub const HELP: &str = include_str!("cli_help.txt");

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, Box<dyn Error>> {
    let mut params = Params::default();
    let export = &mut params.options.export;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => params.out = Some(args.next().ok_or("Missing output path")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    "json" => ExportFormat::Json,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--scope" => {
                let v = args.next().ok_or("Missing value for --scope")?;
                export.scope = match v.to_ascii_lowercase().as_str() {
                    "quarters" | "quarter" => Scope::Quarters,
                    "cumulative" => Scope::Cumulative,
                    "both" => Scope::Both,
                    other => return Err(format!("Unknown scope: {}", other).into()),
                };}
            "--dunk" => {
                let v = args.next().ok_or("Missing value for --dunk")?;
                params.options.decode.dunk_policy = match v.to_ascii_lowercase().as_str() {
                    "counts-as-two" | "two" => DunkPolicy::CountsAsTwoPoint,
                    "separate" => DunkPolicy::Separate,
                    other => return Err(format!("Unknown dunk policy: {}", other).into()),
                };}
            "--per-game" => export.export_type = ExportType::PerGame,
            "--no-headers" => export.include_headers = false,
            "--log" => params.log_file = Some(PathBuf::from(args.next().ok_or("Missing log path")?)),
            "-v" | "--verbose" => params.verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ => params.inputs.push(PathBuf::from(a)),
        }
    }

    if params.inputs.is_empty() {
        return Err("No input files or directories given (see --help)".into());
    }
    if let Some(out) = &params.out {
        export.set_path(out);
    }
    Ok(Command::Run(params))
}

/// Summary of what was produced.
pub struct RunSummary {
    pub decoded: usize,
    pub failed: usize,
    pub warnings: usize,
    pub files_written: Vec<PathBuf>,
}

pub fn run(params: &Params) -> Result<RunSummary, Box<dyn Error>> {
    let level = if params.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let log_path = params.log_file.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    FileLogger::new(Some(&log_path), level, params.verbose)?.install()?;

    let paths = file::collect_game_files(&params.inputs)?;
    if paths.is_empty() {
        return Err("No game files found".into());
    }
    info!("Decoding {} games", paths.len());

    let decoder = Decoder::new(&params.options.decode);
    let mut progress = CliProgress::default();
    let outcome = batch::decode_files(&decoder, paths, Some(&mut progress));
    let (reports, failed) = outcome.into_parts();

    for (path, e) in &failed {
        eprintln!("Skipped {}: {e}", path.display());
    }

    let warnings = reports.iter().map(|r| r.warnings.len()).sum();
    let files_written = if reports.is_empty() {
        Vec::new()
    } else {
        file::export_reports(&params.options.export, &reports)?
    };

    for p in &files_written {
        println!("Wrote {}", p.display());
    }
    eprintln!(
        "{} decoded, {} failed, {} warnings (details in {})",
        reports.len(),
        failed.len(),
        warnings,
        log_path.display()
    );

    Ok(RunSummary { decoded: reports.len(), failed: failed.len(), warnings, files_written })
}

/// Prints one line per game to stderr.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, path: &Path, warnings: usize) {
        self.done += 1;
        let note = if warnings > 0 { format!(" ({warnings} warnings)") } else { s!() };
        eprintln!("[{}/{}] {}{}", self.done, self.total, path.display(), note);
    }

    fn item_failed(&mut self, path: &Path, err: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {} FAILED: {}", self.done, self.total, path.display(), err);
    }
}
