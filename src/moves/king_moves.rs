//! King target tables.

use crate::game_state::chess_rules::{EIGHTH_COLUMN, FIRST_COLUMN};
use crate::game_state::chess_types::{Square, NUM_TILES};

pub const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub const KING_TARGETS: [u64; NUM_TILES] = generate_king_targets();

#[inline]
pub const fn king_targets(square: Square) -> u64 {
    KING_TARGETS[square as usize]
}

pub const fn is_king_excluded(square: usize, offset: i32) -> bool {
    (FIRST_COLUMN[square] && matches!(offset, -9 | -1 | 7))
        || (EIGHTH_COLUMN[square] && matches!(offset, -7 | 1 | 9))
}

const fn generate_king_targets() -> [u64; NUM_TILES] {
    let mut table = [0u64; NUM_TILES];
    let mut sq = 0usize;

    while sq < NUM_TILES {
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < KING_OFFSETS.len() {
            let offset = KING_OFFSETS[i];
            let destination = sq as i32 + offset;
            if destination >= 0 && destination < NUM_TILES as i32 && !is_king_excluded(sq, offset) {
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
    use super::{king_targets, KING_TARGETS};

    #[test]
    fn king_in_corner_has_three_targets() {
        assert_eq!(KING_TARGETS[0].count_ones(), 3);
        assert_eq!(KING_TARGETS[63].count_ones(), 3);
    }

    #[test]
    fn king_on_h_file_does_not_wrap_to_a_file() {
        // h5 = 31; neighbours on the a-file would be 24, 32 and 40.
        let targets = king_targets(31);
        assert_eq!(targets.count_ones(), 5);
        assert_eq!(targets & ((1u64 << 24) | (1u64 << 32) | (1u64 << 40)), 0);
    }
}
