//! Pawn geometry: push offsets and diagonal capture tables per alliance.

use crate::game_state::chess_rules::{EIGHTH_COLUMN, FIRST_COLUMN};
use crate::game_state::chess_types::{Alliance, Square, NUM_TILES};

pub const PAWN_PUSH_OFFSET: i32 = 8;
pub const PAWN_JUMP_OFFSET: i32 = 16;
pub const PAWN_ATTACK_OFFSETS: [i32; 2] = [7, 9];

pub const WHITE_PAWN_ATTACKS: [u64; NUM_TILES] = generate_pawn_attacks(Alliance::White);
pub const BLACK_PAWN_ATTACKS: [u64; NUM_TILES] = generate_pawn_attacks(Alliance::Black);

#[inline]
pub const fn pawn_attacks(alliance: Alliance, square: Square) -> u64 {
    match alliance {
        Alliance::White => WHITE_PAWN_ATTACKS[square as usize],
        Alliance::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

/// True when the unscaled diagonal `offset` (7 or 9) would wrap for a pawn
/// of `alliance` standing on `square`.
pub const fn is_pawn_attack_excluded(alliance: Alliance, square: usize, offset: i32) -> bool {
    match (offset, alliance) {
        (7, Alliance::White) | (9, Alliance::Black) => EIGHTH_COLUMN[square],
        (9, Alliance::White) | (7, Alliance::Black) => FIRST_COLUMN[square],
        _ => false,
    }
}

const fn generate_pawn_attacks(alliance: Alliance) -> [u64; NUM_TILES] {
    let mut table = [0u64; NUM_TILES];
    let mut sq = 0usize;

    while sq < NUM_TILES {
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < PAWN_ATTACK_OFFSETS.len() {
            let offset = PAWN_ATTACK_OFFSETS[i];
            let destination = sq as i32 + offset * alliance.direction();
            if destination >= 0
                && destination < NUM_TILES as i32
                && !is_pawn_attack_excluded(alliance, sq, offset)
            {
                attacks |= 1u64 << destination;
            }
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::Alliance;

    #[test]
    fn white_pawn_on_e2_attacks_d3_and_f3() {
        let e2 = 52u8;
        assert_eq!(pawn_attacks(Alliance::White, e2), (1u64 << 43) | (1u64 << 45));
    }

    #[test]
    fn black_pawn_on_e7_attacks_d6_and_f6() {
        let e7 = 12u8;
        assert_eq!(pawn_attacks(Alliance::Black, e7), (1u64 << 19) | (1u64 << 21));
    }

    #[test]
    fn edge_pawns_attack_a_single_square() {
        // a2 = 48 and h7 = 15.
        assert_eq!(pawn_attacks(Alliance::White, 48), 1u64 << 41);
        assert_eq!(pawn_attacks(Alliance::Black, 15), 1u64 << 22);
    }
}
