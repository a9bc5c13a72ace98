//! Diagonal ray walking for bishops (and the diagonal half of the queen).

use crate::game_state::chess_rules::{EIGHTH_COLUMN, FIRST_COLUMN};
use crate::game_state::chess_types::{Square, NUM_TILES};

pub const BISHOP_DIRECTIONS: [i32; 4] = [-9, -7, 7, 9];

#[inline]
pub const fn is_bishop_excluded(square: usize, offset: i32) -> bool {
    (FIRST_COLUMN[square] && matches!(offset, -9 | 7))
        || (EIGHTH_COLUMN[square] && matches!(offset, -7 | 9))
}

/// Squares reached along every diagonal, stopping on (and including) the
/// first occupied square.
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, offset| acc | trace_ray(square, *offset, occupancy))
}

/// One diagonal ray from `square`, ending on the first blocker.
pub fn trace_ray(square: Square, offset: i32, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut current = square as i32;

    loop {
        if is_bishop_excluded(current as usize, offset) {
            break;
        }
        let next = current + offset;
        if next < 0 || next >= NUM_TILES as i32 {
            break;
        }
        let bit = 1u64 << next;
        attacks |= bit;
        if (occupancy & bit) != 0 {
            break;
        }
        current = next;
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;

    #[test]
    fn empty_board_bishop_on_d4_sees_thirteen_squares() {
        let d4 = 35u8;
        assert_eq!(bishop_attacks(d4, 0).count_ones(), 13);
    }

    #[test]
    fn ray_stops_on_blocker() {
        // c1 = 58, blocker on e3 = 44; f4 = 37 must be hidden.
        let attacks = bishop_attacks(58, 1u64 << 44);
        assert_ne!(attacks & (1u64 << 44), 0);
        assert_eq!(attacks & (1u64 << 37), 0);
    }

    #[test]
    fn h_file_bishop_does_not_wrap() {
        // h4 = 39 moving -7 would land on a6 = 32 without the exclusion.
        let attacks = bishop_attacks(39, 0);
        assert_eq!(attacks & (1u64 << 32), 0);
        assert_eq!(attacks.count_ones(), 7);
    }
}
