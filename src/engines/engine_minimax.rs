//! Fixed-depth minimax engine.

use std::sync::Arc;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::search::minimax::{MiniMax, SearchConfig};
use crate::search::threading::{SearchControl, ThreadingConfig};

pub struct MinimaxEngine {
    config: SearchConfig,
    threading: ThreadingConfig,
    stop_signal: Option<Arc<SearchControl>>,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig { max_depth: depth },
            threading: ThreadingConfig::default(),
            stop_signal: None,
        }
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threading = ThreadingConfig { threads };
        self
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().max_depth)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "TileChess Minimax"
    }

    fn set_stop_signal(&mut self, control: Option<Arc<SearchControl>>) {
        self.stop_signal = control;
    }

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> ChessResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.config.max_depth).max(1);
        let threads = params.threads.unwrap_or(self.threading.threads);
        let control = self
            .stop_signal
            .clone()
            .unwrap_or_else(|| Arc::new(SearchControl::new()));

        let searcher = MiniMax::new(depth).with_threading(ThreadingConfig { threads });
        let result = searcher.search(board, &control)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {} time {}",
            result.reached_depth,
            result.best_score,
            result.nodes,
            result.elapsed.as_millis()
        ));
        out.info_lines.push(format!(
            "info string minimax_engine threads {} legal_moves {}",
            searcher.threading().normalized_threads(),
            board.current_player().legal_moves().len()
        ));

        if !result.best_move.is_null() {
            out.info_lines.push(format!(
                "info string minimax_engine best_move {}",
                result.best_move
            ));
            out.best_move = Some(result.best_move);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::board::Board;

    #[test]
    fn reports_move_and_info_lines() {
        let board = Board::create_standard_board();
        let mut engine = MinimaxEngine::new(4);
        let out = engine
            .choose_move(
                &board,
                &GoParams {
                    depth: Some(1),
                    threads: None,
                },
            )
            .expect("search should succeed");

        let best = out.best_move.expect("start position has moves");
        assert!(board.current_player().is_move_legal(&best));
        assert!(out.info_lines[0].starts_with("info depth 1 score cp "));
        assert!(out
            .info_lines
            .iter()
            .any(|line| line.starts_with("info string minimax_engine best_move")));
    }
}
