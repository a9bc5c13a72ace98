use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::chess_move::Move;
use crate::moves::rook_moves::{trace_ray, ROOK_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, rook: &Piece, out: &mut Vec<Move>) {
    for offset in ROOK_DIRECTIONS {
        let ray = trace_ray(rook.position(), offset, board.occupancy());
        push_ray_moves(board, rook, ray, offset, out);
    }
}
