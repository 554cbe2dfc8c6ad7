//! Root-split parallel search.
//!
//! The coordinator searches the first few ordered root moves itself to get a
//! bound, then splits the remaining moves into contiguous chunks, one per
//! worker thread. Workers rebuild the position from FEN, score their chunk
//! with that fixed bound and send back a single report. Leftover moves that
//! do not divide evenly are searched on the calling thread.
//!
//! The bound is not tightened across workers while they run, so a worker may
//! explore lines another worker has already beaten. Every non-seed move sees
//! the same window however the moves are split, so the best score does not
//! depend on the worker count. Which of several equally scored moves wins can.

use std::num::NonZeroUsize;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};
use once_cell::sync::Lazy;

use crate::board::{Move, Position};

use super::alphabeta::SearchContext;
use super::constants::SEARCH_STACK_SIZE;
use super::depth::effective_depth;
use super::move_order::order_moves;
use super::{Score, SearchConfig, SearchError, SearchOutcome, SearchParams, SearchStats};

/// Hardware threads reported by the OS, read once per process.
static AVAILABLE_PARALLELISM: Lazy<usize> = Lazy::new(|| {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
});

/// Number of worker threads a search with `params` dispatches at most.
#[must_use]
pub fn available_workers(params: &SearchParams) -> usize {
    params
        .threads
        .unwrap_or_else(|| AVAILABLE_PARALLELISM.saturating_sub(params.reserved_threads))
}

/// Best (move, score) pair from one contributor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorkResult {
    pub best_move: Option<Move>,
    pub score: Score,
}

impl WorkResult {
    #[must_use]
    pub fn empty() -> Self {
        WorkResult {
            best_move: None,
            score: Score::NEG_INFINITY,
        }
    }

    /// Keep `mv` if it strictly beats the current best, or if nothing is held yet.
    pub fn offer(&mut self, mv: Move, score: Score) {
        if self.best_move.is_none() || score > self.score {
            self.best_move = Some(mv);
            self.score = score;
        }
    }

    pub fn merge(&mut self, other: WorkResult) {
        if let Some(mv) = other.best_move {
            self.offer(mv, other.score);
        }
    }
}

/// Everything a worker needs; sent once and owned by the worker.
#[derive(Clone, Debug)]
pub struct WorkerTask {
    pub worker_id: usize,
    pub depth: u32,
    pub quiescence_depth: u32,
    pub moves: Vec<Move>,
    pub fen: String,
    pub alpha: Score,
    pub params: SearchParams,
}

/// The single message a worker sends back.
#[derive(Debug)]
pub struct WorkerReport {
    pub worker_id: usize,
    pub result: Result<WorkResult, SearchError>,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Score every move in `moves` with the same `alpha`.
///
/// A chunk whose moves all stayed at the sentinel still reports its first move.
fn search_chunk(
    pos: &mut Position,
    moves: &[Move],
    depth: u32,
    quiescence_depth: u32,
    alpha: Score,
    params: &SearchParams,
) -> (Result<WorkResult, SearchError>, SearchStats) {
    let mut ctx = SearchContext::new(pos, params, quiescence_depth);
    let mut best = WorkResult::empty();
    for &mv in moves {
        match ctx.search_root_move(mv, depth, alpha) {
            Ok(score) => {
                if score > best.score {
                    best.best_move = Some(mv);
                    best.score = score;
                }
            }
            Err(err) => return (Err(err), ctx.stats),
        }
    }
    if best.best_move.is_none() {
        best.best_move = moves.first().copied();
    }
    (Ok(best), ctx.stats)
}

fn run_worker(task: WorkerTask) -> WorkerReport {
    let start = Instant::now();
    let mut pos = match Position::from_fen(&task.fen) {
        Ok(pos) => pos,
        Err(err) => {
            return WorkerReport {
                worker_id: task.worker_id,
                result: Err(err.into()),
                stats: SearchStats::default(),
                elapsed: start.elapsed(),
            }
        }
    };
    let (result, stats) = search_chunk(
        &mut pos,
        &task.moves,
        task.depth,
        task.quiescence_depth,
        task.alpha,
        &task.params,
    );
    let elapsed = start.elapsed();
    debug!(
        "worker {} searched {} moves: {} nodes in {:?}",
        task.worker_id,
        task.moves.len(),
        stats.total_nodes(),
        elapsed
    );
    WorkerReport {
        worker_id: task.worker_id,
        result,
        stats,
        elapsed,
    }
}

/// Pick the best move for the side to move in `pos`.
///
/// `pos` is only read; callers apply the returned move themselves.
pub fn choose_move(
    pos: &Position,
    config: &SearchConfig,
    params: &SearchParams,
) -> Result<SearchOutcome, SearchError> {
    config.validate()?;
    let start = Instant::now();

    let root_moves = pos.legal_moves();
    if root_moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let depth = effective_depth(config.search_depth, pos.non_king_count(), params);
    let ordered = order_moves(pos, root_moves);
    let seed_count = params.seed_moves.min(ordered.len());
    let (seed_moves, rest) = ordered.split_at(seed_count);

    let mut stats = SearchStats::default();
    let mut best = WorkResult::empty();

    // Seed phase: running best becomes the shared bound.
    let mut local = pos.clone();
    let mut alpha = Score::NEG_INFINITY;
    {
        let mut ctx = SearchContext::new(&mut local, params, config.quiescence_depth);
        for &mv in seed_moves {
            let score = ctx.search_root_move(mv, depth, alpha)?;
            best.offer(mv, score);
            alpha = alpha.max(score);
        }
        stats.merge(&ctx.stats);
    }
    debug!(
        "seed phase: {} moves, alpha {alpha:.2}, {} nodes",
        seed_moves.len(),
        stats.total_nodes()
    );

    let workers = available_workers(params);
    let chunk_len = if workers == 0 { 0 } else { rest.len() / workers };
    let (parallel, remainder) = rest.split_at(chunk_len * workers);

    let (tx, rx) = mpsc::channel::<WorkerReport>();
    let mut handles: Vec<(usize, JoinHandle<()>)> = Vec::new();
    let mut unspawned: Vec<&[Move]> = Vec::new();
    let fen = pos.to_fen();

    if chunk_len > 0 {
        for (worker_id, chunk) in parallel.chunks(chunk_len).enumerate() {
            let task = WorkerTask {
                worker_id,
                depth,
                quiescence_depth: config.quiescence_depth,
                moves: chunk.to_vec(),
                fen: fen.clone(),
                alpha,
                params: params.clone(),
            };
            let tx = tx.clone();
            let spawned = thread::Builder::new()
                .name(format!("search-{worker_id}"))
                .stack_size(SEARCH_STACK_SIZE)
                .spawn(move || {
                    let report = run_worker(task);
                    let _ = tx.send(report);
                });
            match spawned {
                Ok(handle) => handles.push((worker_id, handle)),
                Err(err) => {
                    warn!("could not spawn search worker {worker_id}: {err}; searching locally");
                    unspawned.push(chunk);
                }
            }
        }
    }
    drop(tx);

    // Remainder (and any chunk without a thread) runs here with the same bound.
    unspawned.insert(0, remainder);
    for chunk in unspawned.into_iter().filter(|c| !c.is_empty()) {
        let (result, chunk_stats) = search_chunk(
            &mut local,
            chunk,
            depth,
            config.quiescence_depth,
            alpha,
            params,
        );
        stats.merge(&chunk_stats);
        best.merge(result?);
    }

    let dispatched = handles.len();
    let degraded = collect_reports(&rx, handles, params.worker_timeout, &mut best, &mut stats)?;

    let best_move = match best.best_move {
        Some(mv) => mv,
        None => ordered[0],
    };
    let outcome = SearchOutcome {
        best_move,
        score: best.score,
        depth,
        stats,
        elapsed: start.elapsed(),
        workers: dispatched,
        degraded,
    };
    debug!(
        "chose {} score {:.2} depth {} nodes {} workers {} in {:?}",
        outcome.best_move,
        outcome.score,
        outcome.depth,
        outcome.stats.total_nodes(),
        outcome.workers,
        outcome.elapsed
    );
    Ok(outcome)
}

/// Wait for every dispatched worker. Returns `true` if the deadline cut the wait short.
fn collect_reports(
    rx: &mpsc::Receiver<WorkerReport>,
    handles: Vec<(usize, JoinHandle<()>)>,
    timeout: Option<Duration>,
    best: &mut WorkResult,
    stats: &mut SearchStats,
) -> Result<bool, SearchError> {
    let deadline = timeout.map(|t| Instant::now() + t);
    let mut pending: Vec<(usize, JoinHandle<()>)> = handles;

    while !pending.is_empty() {
        let received = match deadline {
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                rx.recv_timeout(remaining)
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(report) => {
                if let Some(idx) = pending.iter().position(|(id, _)| *id == report.worker_id) {
                    let (_, handle) = pending.swap_remove(idx);
                    let _ = handle.join();
                }
                stats.merge(&report.stats);
                best.merge(report.result?);
            }
            Err(RecvTimeoutError::Timeout) => {
                let missing: Vec<usize> = pending.iter().map(|(id, _)| *id).collect();
                warn!("search deadline reached; workers {missing:?} did not report, using partial result");
                return Ok(true);
            }
            Err(RecvTimeoutError::Disconnected) => {
                let worker_id = pending.iter().map(|(id, _)| *id).min().unwrap_or(0);
                return Err(SearchError::WorkerLost { worker_id });
            }
        }
    }
    Ok(false)
}
