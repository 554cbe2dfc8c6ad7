use crate::board::Move;
use crate::search::{SearchInfo, SearchLogger, SearchOutcome, StdoutLogger};

pub fn print_ready() {
    println!("readyok");
}

pub fn print_info(outcome: &SearchOutcome) {
    StdoutLogger.info(&SearchInfo::from_outcome(outcome));
}

pub fn print_bestmove(best_move: Option<Move>) {
    if let Some(best_move) = best_move {
        println!("bestmove {best_move}");
    } else {
        println!("bestmove (none)");
    }
}
