//! Uniform random legal-move engine.
//!
//! A baseline opponent for diagnostics and tests. Seeded construction makes
//! its choices reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::ChessResult;
use crate::game_state::board::Board;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "TileChess Random"
    }

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> ChessResult<EngineOutput> {
        let legal_moves = board.current_player().legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        out.best_move = legal_moves.choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::board::Board;

    #[test]
    fn picks_a_legal_move() {
        let board = Board::create_standard_board();
        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&board, &GoParams::default())
            .expect("random engine never fails");
        let chosen = out.best_move.expect("start position has moves");
        assert!(board.current_player().is_move_legal(&chosen));
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let board = Board::create_standard_board();
        let mut a = RandomEngine::with_seed(7);
        let mut b = RandomEngine::with_seed(7);
        for _ in 0..5 {
            let left = a.choose_move(&board, &GoParams::default()).expect("move");
            let right = b.choose_move(&board, &GoParams::default()).expect("move");
            assert_eq!(left.best_move, right.best_move);
        }
    }
}
