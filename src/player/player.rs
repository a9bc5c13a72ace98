//! Per-side view of a board.
//!
//! `Player` borrows a `Board` and answers the legality questions for one
//! alliance: which moves are legal, whether its king is in check, and whether
//! the game is over for it. Everything it reports is derived from the board
//! and cached inside it, so repeated queries are cheap.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Alliance;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::{is_king_in_check, leaves_king_in_check};
use crate::moves::chess_move::Move;
use crate::player::castling::calculate_king_castles;
use crate::player::move_transition::{MoveStatus, MoveTransition};

/// King and check state of one side, computed once per board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    king: Option<Piece>,
    in_check: bool,
}

impl PlayerState {
    pub(crate) fn calculate(board: &Board, alliance: Alliance) -> Self {
        Self {
            king: board.king(alliance).copied(),
            in_check: is_king_in_check(board, alliance),
        }
    }

    #[inline]
    pub fn king(&self) -> Option<&Piece> {
        self.king.as_ref()
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }
}

/// Standard moves plus castles, minus every move that leaves the king
/// attacked.
pub(crate) fn calculate_player_legal_moves(board: &Board, alliance: Alliance) -> Vec<Move> {
    candidate_moves(board, alliance)
        .filter(|mv| !leaves_king_in_check(board, mv))
        .collect()
}

fn candidate_moves(board: &Board, alliance: Alliance) -> impl Iterator<Item = Move> + '_ {
    let in_check = board.player_state(alliance).in_check();
    board
        .standard_moves(alliance)
        .iter()
        .copied()
        .chain(calculate_king_castles(board, alliance, in_check))
}

#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
}

impl<'a> Player<'a> {
    #[inline]
    pub fn new(board: &'a Board, alliance: Alliance) -> Self {
        Self { board, alliance }
    }

    #[inline]
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    #[inline]
    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.board, self.alliance.opponent())
    }

    #[inline]
    pub fn active_pieces(&self) -> &'a [Piece] {
        self.board.active_pieces(self.alliance)
    }

    pub fn king(&self) -> Option<&'a Piece> {
        self.board.player_state(self.alliance).king()
    }

    pub fn legal_moves(&self) -> &'a [Move] {
        self.board.legal_moves_for(self.alliance)
    }

    /// The opponent's legal moves on the same board.
    pub fn opponent_moves(&self) -> &'a [Move] {
        self.opponent().legal_moves()
    }

    /// True when `mv` is one of this player's legal moves. A promotion may
    /// name any valid promotion piece.
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        if mv.promotion_piece().is_some_and(|kind| !kind.is_promotion_target()) {
            return false;
        }
        self.legal_moves().iter().any(|legal| legal.same_ply_as(mv))
    }

    pub fn is_in_check(&self) -> bool {
        self.board.player_state(self.alliance).in_check()
    }

    pub fn is_in_check_mate(&self) -> bool {
        self.is_in_check() && !self.has_legal_move()
    }

    pub fn is_in_stale_mate(&self) -> bool {
        !self.is_in_check() && !self.has_legal_move()
    }

    /// True when at least one legal move exists. Stops at the first one found
    /// unless the full legal move list is already cached.
    pub fn has_legal_move(&self) -> bool {
        if let Some(moves) = self.board.cached_legal_moves(self.alliance) {
            return !moves.is_empty();
        }
        candidate_moves(self.board, self.alliance).any(|mv| !leaves_king_in_check(self.board, &mv))
    }

    /// Plays `mv` if it is legal for this player.
    ///
    /// The transition's status reports why a move was rejected; the board is
    /// never changed in that case.
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        if mv.is_null() || !self.is_move_legal(mv) {
            return MoveTransition::rejected(self.board, *mv, MoveStatus::IllegalMove);
        }

        let to_board = mv.execute(self.board);
        if is_king_in_check(&to_board, self.alliance) {
            return MoveTransition::rejected(self.board, *mv, MoveStatus::LeavesPlayerInCheck);
        }

        MoveTransition {
            from_board: self.board,
            to_board,
            transition_move: *mv,
            status: MoveStatus::Done,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::board_builder::BoardBuilder;
    use crate::game_state::chess_types::{Alliance, PieceType};
    use crate::game_state::piece::Piece;
    use crate::moves::chess_move::Move;
    use crate::player::move_transition::MoveStatus;

    #[test]
    fn start_position_player_is_not_in_check() {
        let board = Board::create_standard_board();
        let white = board.current_player();
        assert!(!white.is_in_check());
        assert!(!white.is_in_check_mate());
        assert!(!white.is_in_stale_mate());
        assert!(white.has_legal_move());
        assert_eq!(white.opponent().alliance(), Alliance::Black);
        assert_eq!(white.opponent_moves().len(), 20);
        assert_eq!(white.active_pieces().len(), 16);
        assert_eq!(white.king().map(|k| k.position()), Some(60));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // White king e1, white bishop e2 pinned by black rook e8.
        let board = BoardBuilder::new()
            .set_piece(Piece::new(PieceType::King, 60, Alliance::White))
            .set_piece(Piece::new(PieceType::Bishop, 52, Alliance::White))
            .set_piece(Piece::new(PieceType::Rook, 4, Alliance::Black))
            .set_piece(Piece::new(PieceType::King, 0, Alliance::Black))
            .set_move_maker(Alliance::White)
            .build();

        let white = board.current_player();
        assert!(white
            .legal_moves()
            .iter()
            .all(|mv| mv.moved_piece().map(|p| p.kind()) == Some(PieceType::King)));
    }

    #[test]
    fn make_move_reports_illegal_and_keeps_board() {
        let board = Board::create_standard_board();
        let rook = *board.piece_at(56).expect("a1 rook");
        let bogus = Move::Quiet {
            moved: rook,
            destination: 40,
        };

        let transition = board.current_player().make_move(&bogus);
        assert_eq!(transition.status(), MoveStatus::IllegalMove);
        assert_eq!(transition.to_board().next_move_maker(), Alliance::White);
        assert!(transition.to_board().is_occupied(56));
    }

    #[test]
    fn make_move_rejects_null_move() {
        let board = Board::create_standard_board();
        let transition = board.current_player().make_move(&Move::Null);
        assert_eq!(transition.status(), MoveStatus::IllegalMove);
    }

    #[test]
    fn make_move_plays_legal_move() {
        let board = Board::create_standard_board();
        let first = board.current_player().legal_moves()[0];
        let transition = board.current_player().make_move(&first);
        assert!(transition.status().is_done());
        assert_eq!(transition.to_board().next_move_maker(), Alliance::Black);
    }

    #[test]
    fn promotion_to_king_or_pawn_is_illegal() {
        let pawn = Piece::with_first_move(PieceType::Pawn, 8, Alliance::White, false);
        let board = BoardBuilder::new()
            .set_piece(pawn)
            .set_piece(Piece::new(PieceType::King, 60, Alliance::White))
            .set_piece(Piece::new(PieceType::King, 7, Alliance::Black))
            .set_move_maker(Alliance::White)
            .build();
        let white = board.current_player();

        for promote_to in [PieceType::King, PieceType::Pawn] {
            let promotion = Move::Promotion {
                moved: pawn,
                destination: 0,
                attacked: None,
                promote_to,
            };
            assert!(!white.is_move_legal(&promotion));
            let transition = white.make_move(&promotion);
            assert_eq!(transition.status(), MoveStatus::IllegalMove);
            assert!(transition.to_board().piece_at(0).is_none());
        }

        let knight = Move::Promotion {
            moved: pawn,
            destination: 0,
            attacked: None,
            promote_to: PieceType::Knight,
        };
        let transition = white.make_move(&knight);
        assert!(transition.status().is_done());
        assert_eq!(
            transition.to_board().piece_at(0).map(|p| p.kind()),
            Some(PieceType::Knight)
        );
        assert_eq!(
            transition
                .to_board()
                .white_pieces()
                .iter()
                .filter(|p| p.kind().is_king())
                .count(),
            1
        );
    }

    #[test]
    fn bare_king_in_corner_is_stalemated() {
        // Black king a8, white queen c7, white king c6 (classic stalemate).
        let board = BoardBuilder::new()
            .set_piece(Piece::new(PieceType::King, 0, Alliance::Black))
            .set_piece(Piece::new(PieceType::Queen, 10, Alliance::White))
            .set_piece(Piece::new(PieceType::King, 18, Alliance::White))
            .set_move_maker(Alliance::Black)
            .build();

        let black = board.current_player();
        assert!(!black.is_in_check());
        assert!(!black.has_legal_move());
        assert!(black.is_in_stale_mate());
        assert!(!black.is_in_check_mate());
    }
}
