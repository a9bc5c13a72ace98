//! Immutable board snapshot.
//!
//! A `Board` is built once by `BoardBuilder` and never changes afterwards.
//! Every rules-level change (executing a move) produces a new `Board`. The
//! derived rule data (pseudo-legal moves, king/check state, filtered legal
//! moves) is computed from scratch for each snapshot on first use and cached
//! inside it, so a snapshot built only to probe for self-check never pays for
//! a full legality pass.

use std::fmt;
use std::sync::OnceLock;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board_builder::BoardBuilder;
use crate::game_state::chess_rules::STANDARD_BACK_RANK;
use crate::game_state::chess_types::{Alliance, PieceType, Square, NUM_TILES};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_generator::calculate_standard_moves;
use crate::moves::chess_move::Move;
use crate::player::player::{calculate_player_legal_moves, Player, PlayerState};
use crate::utils::render_board::render_board;

/// One square of the board, empty or holding exactly one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    coordinate: Square,
    piece: Option<Piece>,
}

impl Tile {
    #[inline]
    pub const fn coordinate(&self) -> Square {
        self.coordinate
    }

    #[inline]
    pub const fn is_tile_occupied(&self) -> bool {
        self.piece.is_some()
    }

    #[inline]
    pub const fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.piece {
            Some(piece) => write!(f, "{}", piece.symbol()),
            None => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    tiles: [Tile; NUM_TILES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    en_passant_pawn: Option<Piece>,
    next_move_maker: Alliance,
    occupancy: u64,

    // Lazily derived, indexed by `Alliance::index`.
    standard_moves: [OnceLock<Vec<Move>>; 2],
    player_states: [OnceLock<PlayerState>; 2],
    legal_moves: [OnceLock<Vec<Move>>; 2],
}

impl Board {
    pub(crate) fn from_builder(builder: &BoardBuilder) -> Self {
        let Some(next_move_maker) = builder.next_move_maker else {
            panic!("board builder requires a next move maker before build");
        };

        let tiles: [Tile; NUM_TILES] = std::array::from_fn(|i| Tile {
            coordinate: i as Square,
            piece: builder.board_config[i],
        });

        let occupancy = tiles
            .iter()
            .filter(|tile| tile.is_tile_occupied())
            .fold(0u64, |acc, tile| acc | (1u64 << tile.coordinate()));

        Self {
            white_pieces: calculate_active_pieces(&tiles, Alliance::White),
            black_pieces: calculate_active_pieces(&tiles, Alliance::Black),
            tiles,
            en_passant_pawn: builder.en_passant_pawn,
            next_move_maker,
            occupancy,
            standard_moves: [OnceLock::new(), OnceLock::new()],
            player_states: [OnceLock::new(), OnceLock::new()],
            legal_moves: [OnceLock::new(), OnceLock::new()],
        }
    }

    /// Standard starting position with White to move.
    pub fn create_standard_board() -> Self {
        let mut builder = BoardBuilder::new();

        for (file, kind) in STANDARD_BACK_RANK.iter().enumerate() {
            let file = file as Square;
            builder.set_piece(Piece::new(*kind, file, Alliance::Black));
            builder.set_piece(Piece::new(PieceType::Pawn, 8 + file, Alliance::Black));
            builder.set_piece(Piece::new(PieceType::Pawn, 48 + file, Alliance::White));
            builder.set_piece(Piece::new(*kind, 56 + file, Alliance::White));
        }

        builder.set_move_maker(Alliance::White);
        builder.build()
    }

    /// Tile at `coordinate`.
    ///
    /// Panics when `coordinate` is outside `0..64`; use `try_get_tile` for
    /// unchecked input.
    #[inline]
    pub fn get_tile(&self, coordinate: usize) -> &Tile {
        assert!(
            coordinate < NUM_TILES,
            "tile coordinate {coordinate} is outside the board"
        );
        &self.tiles[coordinate]
    }

    pub fn try_get_tile(&self, coordinate: i32) -> ChessResult<&Tile> {
        usize::try_from(coordinate)
            .ok()
            .and_then(|index| self.tiles.get(index))
            .ok_or(ChessError::OutOfRange(coordinate))
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.get_tile(square as usize).piece()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get_tile(square as usize).is_tile_occupied()
    }

    /// Occupied tiles as a bit set, bit `i` for tile `i`.
    #[inline]
    pub fn occupancy(&self) -> u64 {
        self.occupancy
    }

    #[inline]
    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    #[inline]
    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    #[inline]
    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        match alliance {
            Alliance::White => &self.white_pieces,
            Alliance::Black => &self.black_pieces,
        }
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.white_pieces.iter().chain(self.black_pieces.iter())
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.white_pieces.len() + self.black_pieces.len()
    }

    pub fn king(&self, alliance: Alliance) -> Option<&Piece> {
        self.active_pieces(alliance)
            .iter()
            .find(|piece| piece.kind().is_king())
    }

    /// Pawn that advanced two squares on the previous ply, if any.
    #[inline]
    pub fn en_passant_pawn(&self) -> Option<&Piece> {
        self.en_passant_pawn.as_ref()
    }

    #[inline]
    pub fn next_move_maker(&self) -> Alliance {
        self.next_move_maker
    }

    #[inline]
    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, alliance)
    }

    #[inline]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }

    #[inline]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }

    #[inline]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.next_move_maker)
    }

    /// Re-resolves the player to move from the two player views.
    pub fn get_player(&self) -> Player<'_> {
        let current = self.current_player();
        if current.alliance() == Alliance::Black {
            self.black_player()
        } else {
            self.white_player()
        }
    }

    /// Pseudo-legal moves of every piece of `alliance`, in tile order.
    pub fn standard_moves(&self, alliance: Alliance) -> &[Move] {
        self.standard_moves[alliance.index()]
            .get_or_init(|| calculate_standard_moves(self, self.active_pieces(alliance)))
    }

    /// White's legal moves followed by Black's legal moves.
    pub fn get_all_legal_moves(&self) -> Vec<Move> {
        let white = self.white_player().legal_moves();
        let black = self.black_player().legal_moves();
        let mut moves = Vec::with_capacity(white.len() + black.len());
        moves.extend_from_slice(white);
        moves.extend_from_slice(black);
        moves
    }

    pub(crate) fn player_state(&self, alliance: Alliance) -> &PlayerState {
        self.player_states[alliance.index()].get_or_init(|| PlayerState::calculate(self, alliance))
    }

    pub(crate) fn legal_moves_for(&self, alliance: Alliance) -> &[Move] {
        self.legal_moves[alliance.index()].get_or_init(|| calculate_player_legal_moves(self, alliance))
    }

    pub(crate) fn cached_legal_moves(&self, alliance: Alliance) -> Option<&[Move]> {
        self.legal_moves[alliance.index()].get().map(Vec::as_slice)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

fn calculate_active_pieces(tiles: &[Tile], alliance: Alliance) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(|tile| tile.piece().copied())
        .filter(|piece| piece.alliance() == alliance)
        .collect()
}
