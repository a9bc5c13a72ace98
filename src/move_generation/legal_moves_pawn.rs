use crate::game_state::board::Board;
use crate::game_state::chess_rules::is_valid_tile_coordinate;
use crate::game_state::chess_types::{PieceType, Square};
use crate::game_state::piece::Piece;
use crate::moves::chess_move::Move;
use crate::moves::pawn_moves::{
    is_pawn_attack_excluded, PAWN_ATTACK_OFFSETS, PAWN_JUMP_OFFSET, PAWN_PUSH_OFFSET,
};

/// Pawn moves in offset order: push, jump, then the two diagonals.
/// Promotions default to a queen.
pub fn generate_pawn_moves(board: &Board, pawn: &Piece, out: &mut Vec<Move>) {
    let alliance = pawn.alliance();
    let direction = alliance.direction();
    let from = pawn.position() as i32;

    let push = from + PAWN_PUSH_OFFSET * direction;
    if is_valid_tile_coordinate(push) && !board.is_occupied(push as Square) {
        let destination = push as Square;
        if alliance.is_pawn_promotion_square(destination) {
            out.push(Move::Promotion {
                moved: *pawn,
                destination,
                attacked: None,
                promote_to: PieceType::Queen,
            });
        } else {
            out.push(Move::Quiet {
                moved: *pawn,
                destination,
            });
        }

        let jump = from + PAWN_JUMP_OFFSET * direction;
        if pawn.is_first_move()
            && alliance.is_pawn_home_square(pawn.position())
            && is_valid_tile_coordinate(jump)
            && !board.is_occupied(jump as Square)
        {
            out.push(Move::PawnJump {
                moved: *pawn,
                destination: jump as Square,
            });
        }
    }

    for offset in PAWN_ATTACK_OFFSETS {
        if is_pawn_attack_excluded(alliance, pawn.position() as usize, offset) {
            continue;
        }
        let target = from + offset * direction;
        if !is_valid_tile_coordinate(target) {
            continue;
        }
        let destination = target as Square;

        match board.piece_at(destination) {
            Some(occupant) if occupant.alliance() != alliance => {
                if alliance.is_pawn_promotion_square(destination) {
                    out.push(Move::Promotion {
                        moved: *pawn,
                        destination,
                        attacked: Some(*occupant),
                        promote_to: PieceType::Queen,
                    });
                } else {
                    out.push(Move::Capture {
                        moved: *pawn,
                        destination,
                        attacked: *occupant,
                    });
                }
            }
            Some(_) => {}
            None => {
                if let Some(victim) = en_passant_victim(board, pawn, destination) {
                    out.push(Move::EnPassantCapture {
                        moved: *pawn,
                        destination,
                        attacked: victim,
                    });
                }
            }
        }
    }
}

/// The board's en-passant pawn when it is an enemy pawn standing beside
/// `pawn`, directly behind `destination`.
fn en_passant_victim(board: &Board, pawn: &Piece, destination: Square) -> Option<Piece> {
    let candidate = *board.en_passant_pawn()?;
    let behind = destination as i32 + PAWN_PUSH_OFFSET * pawn.alliance().opposite_direction();

    let beside = candidate.kind() == PieceType::Pawn
        && candidate.alliance() != pawn.alliance()
        && candidate.position() as i32 == behind
        && (candidate.position() as i32 - pawn.position() as i32).abs() == 1
        && board.piece_at(candidate.position()) == Some(&candidate);

    beside.then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::board_builder::BoardBuilder;
    use crate::game_state::chess_types::{Alliance, PieceType};
    use crate::game_state::piece::Piece;
    use crate::moves::chess_move::Move;

    fn with_kings(builder: &mut BoardBuilder) -> &mut BoardBuilder {
        builder
            .set_piece(Piece::new(PieceType::King, 60, Alliance::White))
            .set_piece(Piece::new(PieceType::King, 4, Alliance::Black))
    }

    #[test]
    fn home_rank_pawn_pushes_and_jumps() {
        let pawn = Piece::new(PieceType::Pawn, 52, Alliance::White);
        let board = with_kings(BoardBuilder::new().set_piece(pawn))
            .set_move_maker(Alliance::White)
            .build();

        let mut moves = Vec::new();
        generate_pawn_moves(&board, &pawn, &mut moves);
        assert_eq!(
            moves,
            vec![
                Move::Quiet {
                    moved: pawn,
                    destination: 44
                },
                Move::PawnJump {
                    moved: pawn,
                    destination: 36
                },
            ]
        );
    }

    #[test]
    fn blocked_pawn_cannot_jump_over_a_piece() {
        let pawn = Piece::new(PieceType::Pawn, 11, Alliance::Black);
        let board = with_kings(
            BoardBuilder::new()
                .set_piece(pawn)
                .set_piece(Piece::new(PieceType::Knight, 19, Alliance::White)),
        )
        .set_move_maker(Alliance::Black)
        .build();

        let mut moves = Vec::new();
        generate_pawn_moves(&board, &pawn, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn edge_pawn_captures_do_not_wrap() {
        // White pawn on a3 (40); black pieces on h5 (31) and b4 (33).
        let pawn = Piece::with_first_move(PieceType::Pawn, 40, Alliance::White, false);
        let board = with_kings(
            BoardBuilder::new()
                .set_piece(pawn)
                .set_piece(Piece::new(PieceType::Rook, 31, Alliance::Black))
                .set_piece(Piece::new(PieceType::Rook, 33, Alliance::Black)),
        )
        .set_move_maker(Alliance::White)
        .build();

        let mut moves = Vec::new();
        generate_pawn_moves(&board, &pawn, &mut moves);
        let destinations: Vec<_> = moves.iter().filter_map(Move::destination_coordinate).collect();
        assert_eq!(destinations, vec![32, 33]);
    }

    #[test]
    fn promotion_defaults_to_queen() {
        let pawn = Piece::with_first_move(PieceType::Pawn, 14, Alliance::White, false);
        let board = with_kings(
            BoardBuilder::new()
                .set_piece(pawn)
                .set_piece(Piece::new(PieceType::Knight, 7, Alliance::Black)),
        )
        .set_move_maker(Alliance::White)
        .build();

        let mut moves = Vec::new();
        generate_pawn_moves(&board, &pawn, &mut moves);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.promotion_piece() == Some(PieceType::Queen)));
        assert_eq!(moves.iter().filter(|mv| mv.is_attack()).count(), 1);
    }

    #[test]
    fn en_passant_requires_marked_adjacent_pawn() {
        let pawn = Piece::with_first_move(PieceType::Pawn, 28, Alliance::White, false);
        let victim = Piece::with_first_move(PieceType::Pawn, 29, Alliance::Black, false);

        let marked = with_kings(BoardBuilder::new().set_piece(pawn).set_piece(victim))
            .set_en_passant_pawn(victim)
            .set_move_maker(Alliance::White)
            .build();
        let unmarked = with_kings(BoardBuilder::new().set_piece(pawn).set_piece(victim))
            .set_move_maker(Alliance::White)
            .build();

        let mut moves = Vec::new();
        generate_pawn_moves(&marked, &pawn, &mut moves);
        assert!(moves.contains(&Move::EnPassantCapture {
            moved: pawn,
            destination: 21,
            attacked: victim,
        }));

        moves.clear();
        generate_pawn_moves(&unmarked, &pawn, &mut moves);
        assert!(moves.iter().all(|mv| !mv.is_en_passant()));
    }
}
