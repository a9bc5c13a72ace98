//! Engine abstraction shared by the search-backed and baseline engines.
//!
//! Engines report diagnostics as `info` lines in their output instead of
//! logging, so a caller can forward or drop them as it sees fit.

use std::sync::Arc;

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::moves::chess_move::Move;
use crate::search::threading::SearchControl;

/// Per-request overrides. `None` falls back to the engine's own setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Installs a shared stop signal for subsequent searches.
    fn set_stop_signal(&mut self, _control: Option<Arc<SearchControl>>) {}

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> ChessResult<EngineOutput>;
}
