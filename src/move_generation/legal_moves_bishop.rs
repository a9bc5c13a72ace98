use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::bishop_moves::{trace_ray, BISHOP_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(board: &Board, bishop: &Piece, out: &mut Vec<Move>) {
    for offset in BISHOP_DIRECTIONS {
        let ray = trace_ray(bishop.position(), offset, board.occupancy());
        push_ray_moves(board, bishop, ray, offset, out);
    }
}
