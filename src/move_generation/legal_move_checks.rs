//! Attack and self-check detection.
//!
//! Attacks are looked up outward from the target square: a square is
//! attacked when an enemy pawn, knight or king sits on one of the matching
//! offset squares, or a matching slider is the first blocker on a ray.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Alliance, PieceType, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

/// True when some piece of `attacker` could capture on `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Alliance) -> bool {
    let occupancy = board.occupancy();

    // A defender pawn on `square` would attack exactly the squares an
    // attacking pawn must stand on.
    any_attacker_on(board, pawn_attacks(attacker.opponent(), square), attacker, |kind| {
        kind == PieceType::Pawn
    }) || any_attacker_on(board, knight_targets(square), attacker, |kind| {
        kind == PieceType::Knight
    }) || any_attacker_on(board, king_targets(square), attacker, |kind| kind.is_king())
        || any_attacker_on(board, bishop_attacks(square, occupancy), attacker, |kind| {
            matches!(kind, PieceType::Bishop | PieceType::Queen)
        })
        || any_attacker_on(board, rook_attacks(square, occupancy), attacker, |kind| {
            matches!(kind, PieceType::Rook | PieceType::Queen)
        })
}

/// True when `alliance` has a king and it is attacked. A side without a king
/// is never in check.
pub fn is_king_in_check(board: &Board, alliance: Alliance) -> bool {
    board
        .king(alliance)
        .is_some_and(|king| is_square_attacked(board, king.position(), alliance.opponent()))
}

/// True when playing `mv` on `board` exposes the mover's own king.
pub fn leaves_king_in_check(board: &Board, mv: &Move) -> bool {
    let Some(moved) = mv.moved_piece() else {
        return false;
    };
    let probe = mv.execute(board);
    is_king_in_check(&probe, moved.alliance())
}

fn any_attacker_on(
    board: &Board,
    mut squares: u64,
    attacker: Alliance,
    matches_kind: impl Fn(PieceType) -> bool,
) -> bool {
    while squares != 0 {
        let square = squares.trailing_zeros() as Square;
        if let Some(piece) = board.piece_at(square) {
            if piece.alliance() == attacker && matches_kind(piece.kind()) {
                return true;
            }
        }
        squares &= squares - 1;
    }
    false
}
