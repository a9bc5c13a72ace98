//! Move execution: builds the successor board for a ply.

use crate::game_state::board::Board;
use crate::game_state::board_builder::BoardBuilder;
use crate::game_state::piece::Piece;
use crate::moves::chess_move::{CastleMove, Move};

/// Successor board of `mv` played on `board`.
///
/// Panics on the null move, and when `board` does not hold the moved piece
/// (or castling rook) on its recorded square.
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    builder_for(board, mv).build()
}

/// Builder holding the successor position of `mv`, ready to `build`.
pub fn builder_for(board: &Board, mv: &Move) -> BoardBuilder {
    let mut builder = BoardBuilder::new();

    match *mv {
        Move::Null => panic!("cannot execute the null move"),
        Move::KingSideCastle(castle) | Move::QueenSideCastle(castle) => {
            place_castle(board, &castle, &mut builder);
        }
        Move::Quiet { moved, destination } => {
            place_moved(board, moved, None, &mut builder);
            builder.set_piece(moved.move_to(destination));
        }
        Move::PawnJump { moved, destination } => {
            place_moved(board, moved, None, &mut builder);
            let landed = moved.move_to(destination);
            builder.set_piece(landed);
            builder.set_en_passant_pawn(landed);
        }
        Move::Capture {
            moved,
            destination,
            attacked,
        }
        | Move::EnPassantCapture {
            moved,
            destination,
            attacked,
        } => {
            place_moved(board, moved, Some(attacked), &mut builder);
            builder.set_piece(moved.move_to(destination));
        }
        Move::Promotion {
            moved,
            destination,
            attacked,
            promote_to,
        } => {
            place_moved(board, moved, attacked, &mut builder);
            builder.set_piece(Piece::with_first_move(
                promote_to,
                destination,
                moved.alliance(),
                false,
            ));
        }
    }

    if let Some(moved) = mv.moved_piece() {
        builder.set_move_maker(moved.alliance().opponent());
    }
    builder
}

/// Copies every piece except the mover and its victim.
fn place_moved(board: &Board, moved: Piece, attacked: Option<Piece>, builder: &mut BoardBuilder) {
    assert_on_board(board, &moved);
    for piece in board.all_pieces() {
        if *piece != moved && Some(*piece) != attacked {
            builder.set_piece(*piece);
        }
    }
}

fn place_castle(board: &Board, castle: &CastleMove, builder: &mut BoardBuilder) {
    assert_on_board(board, &castle.king);
    assert_on_board(board, &castle.rook);
    for piece in board.all_pieces() {
        if *piece != castle.king && *piece != castle.rook {
            builder.set_piece(*piece);
        }
    }
    builder.set_piece(castle.king.move_to(castle.king_destination));
    builder.set_piece(castle.rook.move_to(castle.rook_destination));
}

fn assert_on_board(board: &Board, piece: &Piece) {
    assert!(
        board.piece_at(piece.position()) == Some(piece),
        "stale move: {:?} is not on tile {} of this board",
        piece.kind(),
        piece.position()
    );
}
