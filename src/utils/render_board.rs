//! Plain-text board diagrams.
//!
//! White pieces are upper-case, black pieces lower-case and empty tiles `-`.
//! Rank 8 (tiles 0..8) is printed first. `parse_rendered_board` reads the
//! same layout back, with or without the file/rank labels, which keeps test
//! positions readable.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::board_builder::BoardBuilder;
use crate::game_state::chess_rules::STANDARD_BACK_RANK;
use crate::game_state::chess_types::{Alliance, PieceType, Square, NUM_TILES_PER_ROW};
use crate::game_state::piece::Piece;

const FILE_LABELS: &str = "  a b c d e f g h";

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str(FILE_LABELS);
    out.push('\n');

    for row in 0..NUM_TILES_PER_ROW {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        for file in 0..NUM_TILES_PER_ROW {
            out.push(' ');
            out.push_str(&board.get_tile(row * NUM_TILES_PER_ROW + file).to_string());
        }
        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);
    out
}

/// Reads a diagram in the `render_board` layout into a board with `next` to
/// move.
///
/// Pieces standing on their initial square are marked as unmoved, so kings
/// and rooks on their home squares keep castling rights and pawns on their
/// home rank may still jump.
pub fn parse_rendered_board(text: &str, next: Alliance) -> ChessResult<Board> {
    let rows: Vec<Vec<&str>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != FILE_LABELS.trim())
        .map(|line| {
            line.split_whitespace()
                .filter(|token| !token.chars().all(|c| c.is_ascii_digit()))
                .collect()
        })
        .collect();

    if rows.len() != NUM_TILES_PER_ROW {
        return Err(ChessError::InvalidBoardDiagram(format!(
            "expected 8 ranks, found {}",
            rows.len()
        )));
    }

    let mut builder = BoardBuilder::new();
    for (row, tokens) in rows.iter().enumerate() {
        if tokens.len() != NUM_TILES_PER_ROW {
            return Err(ChessError::InvalidBoardDiagram(format!(
                "rank {} has {} tiles",
                8 - row,
                tokens.len()
            )));
        }

        for (file, token) in tokens.iter().enumerate() {
            if *token == "-" {
                continue;
            }
            let square = (row * NUM_TILES_PER_ROW + file) as Square;
            builder.set_piece(parse_piece(token, square)?);
        }
    }

    builder.set_move_maker(next);
    Ok(builder.build())
}

fn parse_piece(token: &str, square: Square) -> ChessResult<Piece> {
    let mut chars = token.chars();
    let (Some(symbol), None) = (chars.next(), chars.next()) else {
        return Err(ChessError::InvalidBoardDiagram(format!("bad tile token {token:?}")));
    };
    let kind = PieceType::from_symbol(symbol)
        .ok_or_else(|| ChessError::InvalidBoardDiagram(format!("unknown piece {symbol:?}")))?;
    let alliance = if symbol.is_ascii_uppercase() {
        Alliance::White
    } else {
        Alliance::Black
    };

    Ok(Piece::with_first_move(
        kind,
        square,
        alliance,
        is_initial_square(kind, square, alliance),
    ))
}

fn is_initial_square(kind: PieceType, square: Square, alliance: Alliance) -> bool {
    if kind == PieceType::Pawn {
        return alliance.is_pawn_home_square(square);
    }
    let home_row = match alliance {
        Alliance::White => 7,
        Alliance::Black => 0,
    };
    let row = square as usize / NUM_TILES_PER_ROW;
    row == home_row && STANDARD_BACK_RANK[square as usize % NUM_TILES_PER_ROW] == kind
}
