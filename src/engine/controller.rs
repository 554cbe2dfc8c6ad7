//! Engine controller implementation.

use parking_lot::{Mutex, MutexGuard};

use crate::board::{Move, Position};
use crate::search::{
    choose_move, LogLogger, SearchConfig, SearchError, SearchInfo, SearchLogger, SearchOutcome,
    SearchParams,
};

/// Owns the authoritative game position and runs move requests against it.
///
/// All methods take `&self`, so an `Engine` can be shared across threads.
/// Only one move request runs at a time; a second one, or any attempt to
/// change the position while a request is running, fails with
/// [`SearchError::SearchInProgress`].
pub struct Engine {
    position: Mutex<Position>,
    config: Mutex<SearchConfig>,
    params: Mutex<SearchParams>,
    busy: Mutex<()>,
}

impl Engine {
    /// Engine at the starting position with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default(), SearchParams::default())
    }

    #[must_use]
    pub fn with_config(config: SearchConfig, params: SearchParams) -> Self {
        Engine {
            position: Mutex::new(Position::new()),
            config: Mutex::new(config),
            params: Mutex::new(params),
            busy: Mutex::new(()),
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>, SearchError> {
        self.busy.try_lock().ok_or(SearchError::SearchInProgress)
    }

    /// Snapshot of the current position
    #[must_use]
    pub fn position(&self) -> Position {
        self.position.lock().clone()
    }

    pub fn set_position(&self, position: Position) -> Result<(), SearchError> {
        let _busy = self.guard()?;
        *self.position.lock() = position;
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> SearchConfig {
        *self.config.lock()
    }

    pub fn set_config(&self, config: SearchConfig) {
        *self.config.lock() = config;
    }

    /// Current tunables; changes apply to the next move request.
    pub fn params_mut(&self) -> MutexGuard<'_, SearchParams> {
        self.params.lock()
    }

    #[must_use]
    pub fn params(&self) -> SearchParams {
        self.params.lock().clone()
    }

    /// Search the current position without changing it.
    pub fn think(&self) -> Result<SearchOutcome, SearchError> {
        let _busy = self.guard()?;
        self.search_snapshot()
    }

    /// Search, then play the chosen move on the authoritative position.
    pub fn play(&self) -> Result<SearchOutcome, SearchError> {
        let _busy = self.guard()?;
        let outcome = self.search_snapshot()?;
        self.position.lock().apply(outcome.best_move)?;
        Ok(outcome)
    }

    fn search_snapshot(&self) -> Result<SearchOutcome, SearchError> {
        let snapshot = self.position();
        let config = self.config();
        let params = self.params();
        let outcome = choose_move(&snapshot, &config, &params)?;
        if outcome.degraded {
            log::warn!(
                "move {} chosen from a partial search",
                snapshot.san(outcome.best_move)
            );
        }
        LogLogger.info(&SearchInfo::from_outcome(&outcome));
        Ok(outcome)
    }

    /// Play a move for the side to move (the human's move in a game).
    pub fn apply_move(&self, mv: Move) -> Result<(), SearchError> {
        let _busy = self.guard()?;
        self.position.lock().apply(mv)?;
        Ok(())
    }

    /// Take back the last move. Returns `false` if there is nothing to undo.
    pub fn undo(&self) -> Result<bool, SearchError> {
        let _busy = self.guard()?;
        Ok(self.position.lock().undo())
    }

    /// Back to the starting position with an empty history.
    pub fn reset(&self) -> Result<(), SearchError> {
        self.set_position(Position::new())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_engine() -> Engine {
        Engine::with_config(SearchConfig::new(2, 1), SearchParams::with_threads(2))
    }

    #[test]
    fn test_think_leaves_position_untouched() {
        let engine = quick_engine();
        let outcome = engine.think().unwrap();
        assert_eq!(engine.position(), Position::new());
        assert!(Position::new().legal_moves().contains(&outcome.best_move));
    }

    #[test]
    fn test_play_applies_best_move() {
        let engine = quick_engine();
        let outcome = engine.play().unwrap();
        let pos = engine.position();
        assert_eq!(pos.ply_count(), 1);
        let mut expected = Position::new();
        expected.apply(outcome.best_move).unwrap();
        assert_eq!(pos, expected);
    }

    #[test]
    fn test_human_move_then_undo_and_reset() {
        let engine = quick_engine();
        let mv = engine.position().parse_uci("e2e4").unwrap();
        engine.apply_move(mv).unwrap();
        assert_eq!(engine.position().ply_count(), 1);
        assert!(engine.undo().unwrap());
        assert!(!engine.undo().unwrap());

        engine.apply_move(mv).unwrap();
        engine.reset().unwrap();
        assert_eq!(engine.position(), Position::new());
    }

    #[test]
    fn test_illegal_human_move_rejected() {
        let engine = quick_engine();
        let other = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let foreign = other.parse_uci("a1a8").unwrap();
        assert!(matches!(
            engine.apply_move(foreign),
            Err(SearchError::IllegalMove(_))
        ));
    }

    #[test]
    fn test_finished_game_reports_no_moves() {
        let engine = quick_engine();
        let mate = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
        engine.set_position(mate).unwrap();
        assert_eq!(engine.play().unwrap_err(), SearchError::NoLegalMoves);
    }

    #[test]
    fn test_busy_engine_rejects_second_request() {
        let engine = quick_engine();
        let busy = engine.busy.lock();
        assert_eq!(engine.think().unwrap_err(), SearchError::SearchInProgress);
        assert_eq!(engine.reset().unwrap_err(), SearchError::SearchInProgress);
        drop(busy);
        assert!(engine.think().is_ok());
    }

    #[test]
    fn test_settings_are_applied() {
        let engine = quick_engine();
        engine.set_config(SearchConfig::new(1, 0));
        engine.params_mut().adaptive_depth = false;
        let outcome = engine.think().unwrap();
        assert_eq!(outcome.depth, 1);
        assert!(!engine.params().adaptive_depth);
    }
}
