use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::piece::Piece;
use crate::moves::chess_move::Move;

/// Quiet move onto an empty tile, capture onto an enemy piece, nothing onto
/// a friendly piece.
#[inline]
pub fn target_move(board: &Board, piece: &Piece, destination: Square) -> Option<Move> {
    match board.piece_at(destination) {
        None => Some(Move::Quiet {
            moved: *piece,
            destination,
        }),
        Some(occupant) if occupant.alliance() != piece.alliance() => Some(Move::Capture {
            moved: *piece,
            destination,
            attacked: *occupant,
        }),
        Some(_) => None,
    }
}

/// Emits moves for every set bit of `targets`, lowest tile first.
pub fn push_target_moves(board: &Board, piece: &Piece, mut targets: u64, out: &mut Vec<Move>) {
    while targets != 0 {
        let destination = targets.trailing_zeros() as Square;
        out.extend(target_move(board, piece, destination));
        targets &= targets - 1;
    }
}

/// Emits moves along one ray in walking order, nearest square first.
pub fn push_ray_moves(board: &Board, piece: &Piece, mut ray: u64, offset: i32, out: &mut Vec<Move>) {
    while ray != 0 {
        let destination = if offset < 0 {
            63 - ray.leading_zeros() as Square
        } else {
            ray.trailing_zeros() as Square
        };
        out.extend(target_move(board, piece, destination));
        ray &= !(1u64 << destination);
    }
}
