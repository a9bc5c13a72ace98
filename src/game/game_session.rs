//! One game in progress: the live board, the move log, and the match setup
//! deciding which side the computer plays.

use crate::errors::{ChessError, ChessResult};
use crate::game::match_config::MatchConfig;
use crate::game::move_log::MoveLog;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Alliance, PieceType, Square};
use crate::move_generation::move_factory::MoveFactory;
use crate::moves::chess_move::Move;
use crate::player::move_transition::MoveStatus;
use crate::search::minimax::MiniMax;
use crate::search::threading::SearchControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Checkmate { winner: Alliance },
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    config: MatchConfig,
    move_log: MoveLog,
}

impl GameSession {
    pub fn new(config: MatchConfig) -> Self {
        Self::from_board(Board::create_standard_board(), config)
    }

    pub fn from_board(board: Board, config: MatchConfig) -> Self {
        Self {
            move_log: MoveLog::new(board.clone()),
            board,
            config,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[inline]
    pub fn move_log(&self) -> &MoveLog {
        &self.move_log
    }

    /// Mutable access for browsing the log with its cursor.
    pub fn move_log_mut(&mut self) -> &mut MoveLog {
        &mut self.move_log
    }

    /// Plays the legal move from `from` to `to` for the side to move.
    /// Promotions become queens.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveStatus {
        let mv = MoveFactory::create_move(&self.board, from, to);
        self.play(mv)
    }

    pub fn attempt_move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promote_to: PieceType,
    ) -> MoveStatus {
        let mv = MoveFactory::create_move_with_promotion(&self.board, from, to, promote_to);
        self.play(mv)
    }

    pub fn is_ai_turn(&self) -> bool {
        self.outcome() == GameOutcome::InProgress
            && self.config.is_ai(self.board.next_move_maker())
    }

    /// Searches the live board at the configured depth and plays the result.
    pub fn play_ai_move(&mut self) -> ChessResult<Move> {
        let searcher = MiniMax::with_config(self.config.search_config())
            .with_threading(self.config.threading_config());
        let control = SearchControl::new();
        let result = searcher.search(&self.board, &control)?;

        if result.best_move.is_null() {
            return Err(ChessError::NoLegalMoves);
        }
        match self.play(result.best_move) {
            MoveStatus::Done => Ok(result.best_move),
            _ => Err(ChessError::NoLegalMoves),
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        let player = self.board.current_player();
        if player.has_legal_move() {
            GameOutcome::InProgress
        } else if player.is_in_check() {
            GameOutcome::Checkmate {
                winner: player.alliance().opponent(),
            }
        } else {
            GameOutcome::Stalemate
        }
    }

    /// Takes back the newest move and returns it, restoring the board from
    /// before it was played.
    pub fn undo_last_move(&mut self) -> Option<Move> {
        let entry = self.move_log.remove_last_move()?;
        self.board = self.move_log.latest_board().clone();
        Some(entry.mv)
    }

    fn play(&mut self, mv: Move) -> MoveStatus {
        let transition = self.board.current_player().make_move(&mv);
        let status = transition.status();
        if status.is_done() {
            let next = transition.into_board();
            self.move_log.add_move(mv, next.clone());
            self.board = next;
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::{GameOutcome, GameSession};
    use crate::game::match_config::{MatchConfig, PlayerControl};
    use crate::game_state::chess_types::{Alliance, PieceType};
    use crate::player::move_transition::MoveStatus;
    use crate::utils::render_board::parse_rendered_board;

    fn human_game() -> GameSession {
        GameSession::new(MatchConfig {
            white: PlayerControl::Human,
            black: PlayerControl::Human,
            ..MatchConfig::default()
        })
    }

    #[test]
    fn legal_moves_are_logged_and_illegal_ones_ignored() {
        let mut game = human_game();
        assert_eq!(game.attempt_move(52, 36), MoveStatus::Done);
        assert_eq!(game.board().next_move_maker(), Alliance::Black);

        // White pawn again while Black is to move.
        assert_eq!(game.attempt_move(51, 35), MoveStatus::IllegalMove);
        assert_eq!(game.move_log().len(), 1);
        assert_eq!(game.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn undo_restores_previous_board() {
        let mut game = human_game();
        game.attempt_move(52, 36);
        game.attempt_move(12, 28);

        let undone = game.undo_last_move().expect("a move was played");
        assert_eq!(undone.destination_coordinate(), Some(28));
        assert_eq!(game.board().next_move_maker(), Alliance::Black);
        assert!(game.board().piece_at(12).is_some());

        game.undo_last_move();
        assert!(game.board().piece_at(52).is_some());
        assert!(game.undo_last_move().is_none());
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = human_game();
        for (from, to) in [(53, 45), (12, 28), (54, 38), (3, 39)] {
            assert_eq!(game.attempt_move(from, to), MoveStatus::Done);
        }
        assert_eq!(
            game.outcome(),
            GameOutcome::Checkmate {
                winner: Alliance::Black
            }
        );
        assert!(!game.is_ai_turn());
    }

    #[test]
    fn computer_side_plays_when_on_turn() {
        let mut game = GameSession::new(MatchConfig {
            search_depth: 1,
            ..MatchConfig::default()
        });
        assert!(!game.is_ai_turn());
        game.attempt_move(52, 36);
        assert!(game.is_ai_turn());

        let reply = game.play_ai_move().expect("black has moves");
        assert_eq!(reply.moved_piece().map(|p| p.alliance()), Some(Alliance::Black));
        assert_eq!(game.move_log().len(), 2);
        assert!(!game.is_ai_turn());
    }

    #[test]
    fn promotion_choice_is_honoured() {
        let board = parse_rendered_board(
            "
            - - - - - - - k
            P - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - K - - -
            ",
            Alliance::White,
        )
        .expect("diagram should parse");
        let mut game = GameSession::from_board(board, MatchConfig::default());

        assert_eq!(
            game.attempt_move_with_promotion(8, 0, PieceType::Rook),
            MoveStatus::Done
        );
        assert_eq!(game.board().piece_at(0).map(|p| p.kind()), Some(PieceType::Rook));
    }

    #[test]
    fn stalemate_is_reported() {
        let board = parse_rendered_board(
            "
            k - - - - - - -
            - - Q - - - - -
            - - K - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            - - - - - - - -
            ",
            Alliance::Black,
        )
        .expect("diagram should parse");
        let mut game = GameSession::from_board(board, MatchConfig::default());
        assert_eq!(game.outcome(), GameOutcome::Stalemate);
        assert!(!game.is_ai_turn());
        assert!(game.play_ai_move().is_err());
    }
}
