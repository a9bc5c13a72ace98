use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Queen moves: all diagonal rays, then all orthogonal rays.
pub fn generate_queen_moves(board: &Board, queen: &Piece, out: &mut Vec<Move>) {
    generate_bishop_moves(board, queen, out);
    generate_rook_moves(board, queen, out);
}
