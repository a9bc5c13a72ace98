//! Played moves with the position after each one.
//!
//! The log keeps a browsing cursor separate from the live position, so a
//! front end can step through earlier boards without undoing anything.

use chrono::{DateTime, Utc};

use crate::game_state::board::Board;
use crate::game_state::chess_types::Alliance;
use crate::game_state::piece::Piece;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone)]
pub struct MoveLogEntry {
    pub mv: Move,
    pub board_after: Board,
    /// Move text with `+` for check or `#` for checkmate appended.
    pub notation: String,
    pub played_at: DateTime<Utc>,
}

/// One line of the move history: White's move and Black's reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryRow {
    pub white: Option<String>,
    pub black: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MoveLog {
    initial: Board,
    entries: Vec<MoveLogEntry>,
    /// Number of entries applied to the board being viewed.
    cursor: usize,
}

impl MoveLog {
    pub fn new(initial: Board) -> Self {
        Self {
            initial,
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Appends a played move and moves the cursor to the newest position.
    pub fn add_move(&mut self, mv: Move, board_after: Board) {
        let notation = format!("{mv}{}", check_suffix(&board_after));
        self.entries.push(MoveLogEntry {
            mv,
            board_after,
            notation,
            played_at: Utc::now(),
        });
        self.cursor = self.entries.len();
    }

    pub fn remove_last_move(&mut self) -> Option<MoveLogEntry> {
        let removed = self.entries.pop();
        self.cursor = self.cursor.min(self.entries.len());
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Returns false when already at the initial position.
    pub fn step_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Returns false when already at the newest position.
    pub fn step_forward(&mut self) -> bool {
        if self.cursor == self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn board_at_cursor(&self) -> &Board {
        match self.cursor {
            0 => &self.initial,
            n => &self.entries[n - 1].board_after,
        }
    }

    /// Board after the newest entry, or the initial board when empty.
    pub fn latest_board(&self) -> &Board {
        self.entries
            .last()
            .map_or(&self.initial, |entry| &entry.board_after)
    }

    pub fn history_rows(&self) -> Vec<HistoryRow> {
        let mut rows: Vec<HistoryRow> = Vec::new();
        let mut mover = self.initial.next_move_maker();

        for entry in &self.entries {
            match mover {
                Alliance::White => rows.push(HistoryRow {
                    white: Some(entry.notation.clone()),
                    black: None,
                }),
                Alliance::Black => match rows.last_mut() {
                    Some(row) if row.black.is_none() => row.black = Some(entry.notation.clone()),
                    _ => rows.push(HistoryRow {
                        white: None,
                        black: Some(entry.notation.clone()),
                    }),
                },
            }
            mover = mover.opponent();
        }
        rows
    }

    /// Captured pieces of `alliance`, lowest value first.
    pub fn taken_pieces(&self, alliance: Alliance) -> Vec<Piece> {
        let mut taken: Vec<Piece> = self
            .entries
            .iter()
            .filter_map(|entry| entry.mv.attacked_piece())
            .filter(|piece| piece.alliance() == alliance)
            .collect();
        taken.sort_by_key(|piece| piece.value());
        taken
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MoveLogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&MoveLogEntry> {
        self.entries.last()
    }
}

fn check_suffix(board_after: &Board) -> &'static str {
    let defender = board_after.current_player();
    if defender.is_in_check_mate() {
        "#"
    } else if defender.is_in_check() {
        "+"
    } else {
        ""
    }
}
