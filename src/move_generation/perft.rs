//! Move-path enumeration for validating move generation.
//!
//! Walks every legal line to a fixed depth and tallies properties of the
//! final ply. Counts match published perft tables except for promotions,
//! which are generated as queen moves only.

use std::thread;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &Move, after: &Board) {
        self.nodes += 1;

        if mv.is_attack() {
            self.captures += 1;
        }
        if mv.is_en_passant() {
            self.en_passant += 1;
        }
        if mv.is_castling_move() {
            self.castles += 1;
        }
        if mv.is_promotion() {
            self.promotions += 1;
        }

        let defender = after.current_player();
        if defender.is_in_check() {
            self.checks += 1;
            if !defender.has_legal_move() {
                self.checkmates += 1;
            }
        }
    }
}

pub fn perft(board: &Board, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    for mv in board.current_player().legal_moves() {
        perft_recurse(board, mv, depth, &mut total);
    }
    total
}

/// Leaf-node count only, without the per-ply tallies.
pub fn perft_nodes(board: &Board, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = board.current_player().legal_moves();
    if depth == 1 {
        return moves.len();
    }
    moves
        .iter()
        .map(|mv| perft_nodes(&mv.execute(board), depth - 1))
        .sum()
}

/// Same counts as `perft`, with one worker thread per root move.
pub fn perft_multi_threaded(board: &Board, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(perft(board, 0));
    }

    let mut handles = Vec::new();
    for mv in board.current_player().legal_moves().iter().copied() {
        let root = board.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(&root, &mv, depth, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle.join().map_err(|_| ChessError::WorkerPanicked)?;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse(board: &Board, mv: &Move, remaining: u8, counts: &mut PerftCounts) {
    let after = mv.execute(board);
    if remaining == 1 {
        counts.record_leaf(mv, &after);
        return;
    }

    for child in after.current_player().legal_moves() {
        perft_recurse(&after, child, remaining - 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_multi_threaded, perft_nodes, PerftCounts};
    use crate::game_state::board::Board;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let board = Board::create_standard_board();
        assert_eq!(
            perft(&board, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_depth_two() {
        let board = Board::create_standard_board();
        let counts = perft(&board, 2);
        assert_eq!(counts.nodes, 400);
        assert_eq!(counts.captures, 0);
        assert_eq!(counts.checks, 0);
        assert_eq!(perft_nodes(&board, 2), 400);
    }

    #[test]
    fn start_position_depth_three_tallies() {
        let board = Board::create_standard_board();
        let counts = perft(&board, 3);
        assert_eq!(counts.nodes, 8902);
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn threaded_perft_matches_single_threaded() {
        let board = Board::create_standard_board();
        let threaded = perft_multi_threaded(&board, 2).expect("workers should not panic");
        assert_eq!(threaded, perft(&board, 2));
    }
}
