//! Orthogonal ray walking for rooks (and the orthogonal half of the queen).

use crate::game_state::chess_rules::{EIGHTH_COLUMN, FIRST_COLUMN};
use crate::game_state::chess_types::{Square, NUM_TILES};

pub const ROOK_DIRECTIONS: [i32; 4] = [-8, -1, 1, 8];

#[inline]
pub const fn is_rook_excluded(square: usize, offset: i32) -> bool {
    (FIRST_COLUMN[square] && offset == -1) || (EIGHTH_COLUMN[square] && offset == 1)
}

pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, offset| acc | trace_ray(square, *offset, occupancy))
}

pub fn trace_ray(square: Square, offset: i32, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut current = square as i32;

    loop {
        if is_rook_excluded(current as usize, offset) {
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
