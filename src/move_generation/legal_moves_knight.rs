use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::push_target_moves;
use crate::moves::chess_move::Move;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(board: &Board, knight: &Piece, out: &mut Vec<Move>) {
    push_target_moves(board, knight, knight_targets(knight.position()), out);
}
