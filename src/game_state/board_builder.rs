use crate::game_state::board::Board;
use crate::game_state::chess_types::{Alliance, Square, NUM_TILES};
use crate::game_state::piece::Piece;

/// Accumulates a position before it is frozen into a `Board`.
///
/// Pieces are keyed by their own square, so setting a second piece on an
/// occupied square replaces the first one. A next move maker must be set
/// before `build`.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    pub(crate) board_config: [Option<Piece>; NUM_TILES],
    pub(crate) next_move_maker: Option<Alliance>,
    pub(crate) en_passant_pawn: Option<Piece>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            board_config: [None; NUM_TILES],
            next_move_maker: None,
            en_passant_pawn: None,
        }
    }
}

impl BoardBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.board_config[piece.position() as usize] = Some(piece);
        self
    }

    pub fn remove_piece(&mut self, square: Square) -> &mut Self {
        self.board_config[square as usize] = None;
        self
    }

    pub fn set_move_maker(&mut self, alliance: Alliance) -> &mut Self {
        self.next_move_maker = Some(alliance);
        self
    }

    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Freeze the accumulated position.
    ///
    /// Panics when no next move maker was set.
    pub fn build(&self) -> Board {
        Board::from_builder(self)
    }
}
