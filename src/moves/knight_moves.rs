//! Knight target tables built from tile-index offsets.
//!
//! Each offset is dropped on the columns where it would wrap to the opposite
//! edge of the board.

use crate::game_state::chess_rules::{EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN};
use crate::game_state::chess_types::{Square, NUM_TILES};

pub const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub const KNIGHT_TARGETS: [u64; NUM_TILES] = generate_knight_targets();

#[inline]
pub const fn knight_targets(square: Square) -> u64 {
    KNIGHT_TARGETS[square as usize]
}

/// True when `offset` from `square` would wrap around a board edge.
pub const fn is_knight_excluded(square: usize, offset: i32) -> bool {
    (FIRST_COLUMN[square] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[square] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[square] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[square] && matches!(offset, -15 | -6 | 10 | 17))
}

const fn generate_knight_targets() -> [u64; NUM_TILES] {
    let mut table = [0u64; NUM_TILES];
    let mut sq = 0usize;

    while sq < NUM_TILES {
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < KNIGHT_OFFSETS.len() {
            let offset = KNIGHT_OFFSETS[i];
            let destination = sq as i32 + offset;
            if destination >= 0 && destination < NUM_TILES as i32 && !is_knight_excluded(sq, offset) {
                targets |= 1u64 << destination;
            }
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{knight_targets, KNIGHT_TARGETS};

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let d4 = 35u8;
        assert_eq!(KNIGHT_TARGETS[d4 as usize].count_ones(), 8);
    }

    #[test]
    fn knight_in_corner_does_not_wrap() {
        let a8 = 0u8;
        let h1 = 63u8;
        assert_eq!(knight_targets(a8), (1u64 << 10) | (1u64 << 17));
        assert_eq!(knight_targets(h1), (1u64 << 46) | (1u64 << 53));
    }

    #[test]
    fn knight_on_b_file_skips_wrapping_offsets() {
        // b1 reaches a3, c3 and d2 only.
        let b1 = 57u8;
        assert_eq!(knight_targets(b1), (1u64 << 40) | (1u64 << 42) | (1u64 << 51));
    }
}
