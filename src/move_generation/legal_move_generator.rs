//! Per-piece pseudo-legal move generation.
//!
//! Dispatches on the piece type and collects every move the piece's movement
//! rules allow on the given board. Self-check is not considered here; the
//! player layer filters those moves out.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceType;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

/// Pseudo-legal moves of a single piece.
pub fn calculate_legal_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(28);
    generate_piece_moves(board, piece, &mut moves);
    moves
}

/// Pseudo-legal moves of every piece in `pieces`, concatenated in order.
pub fn calculate_standard_moves(board: &Board, pieces: &[Piece]) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for piece in pieces {
        generate_piece_moves(board, piece, &mut moves);
    }
    moves
}

#[inline]
pub fn generate_piece_moves(board: &Board, piece: &Piece, out: &mut Vec<Move>) {
    match piece.kind() {
        PieceType::Pawn => generate_pawn_moves(board, piece, out),
        PieceType::Knight => generate_knight_moves(board, piece, out),
        PieceType::Bishop => generate_bishop_moves(board, piece, out),
        PieceType::Rook => generate_rook_moves(board, piece, out),
        PieceType::Queen => generate_queen_moves(board, piece, out),
        PieceType::King => generate_king_moves(board, piece, out),
    }
}

#[cfg(test)]
mod tests {
    use super::{calculate_legal_moves, calculate_standard_moves};
    use crate::game_state::board::Board;
    use crate::game_state::board_builder::BoardBuilder;
    use crate::game_state::chess_types::{Alliance, PieceType};
    use crate::game_state::piece::Piece;

    #[test]
    fn start_position_has_twenty_pseudo_legal_moves_per_side() {
        let board = Board::create_standard_board();
        assert_eq!(calculate_standard_moves(&board, board.white_pieces()).len(), 20);
        assert_eq!(calculate_standard_moves(&board, board.black_pieces()).len(), 20);
    }

    #[test]
    fn boxed_in_pieces_have_no_moves() {
        let board = Board::create_standard_board();
        let rook = *board.piece_at(56).expect("a1 rook");
        let king = *board.piece_at(60).expect("e1 king");
        assert!(calculate_legal_moves(&rook, &board).is_empty());
        assert!(calculate_legal_moves(&king, &board).is_empty());
    }

    #[test]
    fn slider_moves_walk_each_direction_nearest_first() {
        let rook = Piece::new(PieceType::Rook, 35, Alliance::White);
        let board = BoardBuilder::new()
            .set_piece(rook)
            .set_piece(Piece::new(PieceType::Pawn, 19, Alliance::Black))
            .set_piece(Piece::new(PieceType::Pawn, 34, Alliance::White))
            .set_move_maker(Alliance::White)
            .build();

        let destinations: Vec<_> = calculate_legal_moves(&rook, &board)
            .iter()
            .filter_map(|mv| mv.destination_coordinate())
            .collect();
        // Up to the d6 capture, nothing left (own pawn on c4), right to h4,
        // then down to d1.
        assert_eq!(destinations, vec![27, 19, 36, 37, 38, 39, 43, 51, 59]);
    }

    #[test]
    fn queen_combines_diagonal_and_orthogonal_rays() {
        let queen = Piece::new(PieceType::Queen, 35, Alliance::White);
        let board = BoardBuilder::new()
            .set_piece(queen)
            .set_move_maker(Alliance::White)
            .build();
        assert_eq!(calculate_legal_moves(&queen, &board).len(), 27);
    }
}
