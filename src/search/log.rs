use super::SearchOutcome;

pub struct SearchInfo {
    pub depth: u32,
    pub score_cp: i64,
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u128,
    pub pv: String,
}

impl SearchInfo {
    #[must_use]
    pub fn from_outcome(outcome: &SearchOutcome) -> Self {
        let time_ms = outcome.elapsed.as_millis();
        let nps = if time_ms == 0 {
            outcome.stats.total_nodes()
        } else {
            (u128::from(outcome.stats.total_nodes()) * 1000 / time_ms) as u64
        };
        SearchInfo {
            depth: outcome.depth,
            score_cp: (outcome.score * 100.0).round() as i64,
            nodes: outcome.stats.total_nodes(),
            nps,
            time_ms,
            pv: outcome.best_move.to_string(),
        }
    }
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!(
            "info depth {} score cp {} nodes {} nps {} time {} pv {}",
            info.depth, info.score_cp, info.nodes, info.nps, info.time_ms, info.pv
        );
    }
}

/// Routes search info through the `log` facade at debug level.
pub struct LogLogger;

impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        log::debug!(
            "depth {} score {} nodes {} nps {} time {}ms best {}",
            info.depth,
            info.score_cp,
            info.nodes,
            info.nps,
            info.time_ms,
            info.pv
        );
    }
}
