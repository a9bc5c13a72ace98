//! Castling move generation for one side.
//!
//! Castling depends on which squares the opponent attacks, so it is produced
//! at the player level rather than by the king's own move generator.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::castling_geometry;
use crate::game_state::chess_types::{Alliance, Square};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::chess_move::{CastleMove, Move};

/// Castling moves currently available to `alliance`: kingside first, then
/// queenside.
pub fn calculate_king_castles(board: &Board, alliance: Alliance, in_check: bool) -> Vec<Move> {
    let mut castles = Vec::new();
    let geometry = castling_geometry(alliance);

    let Some(king) = board.king(alliance).copied() else {
        return castles;
    };
    if in_check || !king.is_first_move() || king.position() != geometry.king_start {
        return castles;
    }

    let opponent = alliance.opponent();

    if all_empty(board, &geometry.king_side_between)
        && none_attacked(board, &geometry.king_side_between, opponent)
    {
        if let Some(rook) = unmoved_rook(board, geometry.king_side_rook_start, alliance) {
            castles.push(Move::KingSideCastle(CastleMove {
                king,
                king_destination: geometry.king_side_king_destination,
                rook,
                rook_destination: geometry.king_side_rook_destination,
            }));
        }
    }

    if all_empty(board, &geometry.queen_side_between)
        && none_attacked(board, &geometry.queen_side_king_path, opponent)
    {
        if let Some(rook) = unmoved_rook(board, geometry.queen_side_rook_start, alliance) {
            castles.push(Move::QueenSideCastle(CastleMove {
                king,
                king_destination: geometry.queen_side_king_destination,
                rook,
                rook_destination: geometry.queen_side_rook_destination,
            }));
        }
    }

    castles
}

fn all_empty(board: &Board, squares: &[Square]) -> bool {
    squares.iter().all(|square| !board.is_occupied(*square))
}

fn none_attacked(board: &Board, squares: &[Square], attacker: Alliance) -> bool {
    squares
        .iter()
        .all(|square| !is_square_attacked(board, *square, attacker))
}

fn unmoved_rook(board: &Board, square: Square, alliance: Alliance) -> Option<Piece> {
    board
        .piece_at(square)
        .filter(|piece| {
            piece.kind().is_rook() && piece.is_first_move() && piece.alliance() == alliance
        })
        .copied()
}
