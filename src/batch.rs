// src/batch.rs
use std::{
    path::PathBuf,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }},
    thread,
};

use log::{error, info};

use crate::{
    config::consts::WORKERS,
    decode::Decoder,
    error::DecodeError,
    file,
    progress::Progress,
    report::GameReport,
};

/// Per-file outcome, in input order.
pub struct BatchOutcome {
    pub results: Vec<(PathBuf, Result<GameReport, DecodeError>)>,
}

impl BatchOutcome {
    pub fn reports(&self) -> impl Iterator<Item = &GameReport> {
        self.results.iter().filter_map(|(_, r)| r.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &DecodeError)> {
        self.results.iter().filter_map(|(p, r)| r.as_ref().err().map(|e| (p, e)))
    }

    /// Split into decoded reports and failures, keeping input order.
    pub fn into_parts(self) -> (Vec<GameReport>, Vec<(PathBuf, DecodeError)>) {
        let mut ok = Vec::new();
        let mut failed = Vec::new();
        for (path, result) in self.results {
            match result {
                Ok(report) => ok.push(report),
                Err(e) => failed.push((path, e)),
            }
        }
        (ok, failed)
    }
}

/// Decode many game files on a small worker pool.
///
/// Games share nothing but the read-only decoder. A failing game is recorded
/// and never stops the others.
pub fn decode_files(
    decoder: &Decoder,
    paths: Vec<PathBuf>,
    mut progress: Option<&mut dyn Progress>,
) -> BatchOutcome {
    let workers = WORKERS.min(paths.len()).max(1);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(paths.len());
        p.log(&format!("Decoding {} games on {} workers", paths.len(), workers));
    }

    type Msg = (usize, Result<GameReport, DecodeError>);

    let paths = Arc::new(paths);
    let decoder = Arc::new(decoder.clone());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Msg>();

    for _ in 0..workers {
        let paths = Arc::clone(&paths);
        let decoder = Arc::clone(&decoder);
        let idx = Arc::clone(&counter);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= paths.len() {
                    break;
                }
                let result = file::read_game(&paths[i]).and_then(|game| decoder.decode(&game));
                if tx.send((i, result)).is_err() {
                    break;
                }
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut slots: Vec<Option<Result<GameReport, DecodeError>>> =
        (0..paths.len()).map(|_| None).collect();

    for (i, result) in res_rx.iter() {
        let path = &paths[i];
        match &result {
            Ok(report) => {
                info!("{}: decoded {} ({} warnings)", path.display(), report.game_key(), report.warnings.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(path, report.warnings.len());
                }
            }
            Err(e) => {
                error!("{}: {e}", path.display());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(path, &e.to_string());
                }
            }
        }
        slots[i] = Some(result);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // A worker that panicked leaves its slot empty; surface that as a failure.
    let results = paths
        .iter()
        .zip(slots)
        .map(|(path, slot)| {
            let result = slot.unwrap_or_else(|| {
                Err(DecodeError::io(path, std::io::Error::other("worker stopped before decoding")))
            });
            (path.clone(), result)
        })
        .collect();

    BatchOutcome { results }
}
