//! Precomputed attack-mask and ray tables.

use once_cell::sync::Lazy;

use super::{piece_offsets, PAWN_OFFSETS};
use crate::board::types::{Piece, Square};

/// Index range of `(from - to) + 119` over valid square pairs.
const TABLE_SIZE: usize = 239;

/// One bit per piece type in the attack-mask table.
#[inline]
pub(super) const fn mask_bit(piece: Piece) -> u8 {
    1 << piece.index()
}

fn index_for(from: Square, to: Square) -> usize {
    (from.index() as i16 - to.index() as i16 + 119) as usize
}

/// For every relative offset, the set of piece types that could attack
/// across it on an empty board. Pawn bits are set for both colors'
/// capture diagonals; the attack detector resolves direction.
pub(super) static ATTACK_MASKS: Lazy<[u8; TABLE_SIZE]> = Lazy::new(|| {
    let mut masks = [0u8; TABLE_SIZE];

    for from in Square::all() {
        for offsets in &PAWN_OFFSETS {
            for &delta in &offsets[2..] {
                if let Some(to) = from.offset(delta) {
                    masks[index_for(from, to)] |= mask_bit(Piece::Pawn);
                }
            }
        }

        for leaper in [Piece::Knight, Piece::King] {
            for &delta in piece_offsets(leaper) {
                if let Some(to) = from.offset(delta) {
                    masks[index_for(from, to)] |= mask_bit(leaper);
                }
            }
        }

        for slider in [Piece::Bishop, Piece::Rook] {
            for &delta in piece_offsets(slider) {
                let mut next = from.offset(delta);
                while let Some(to) = next {
                    masks[index_for(from, to)] |= mask_bit(slider) | mask_bit(Piece::Queen);
                    next = to.offset(delta);
                }
            }
        }
    }

    masks
});

/// For every relative offset along a slider line, the unit step that walks
/// from the attacker toward the target; 0 off-line.
pub(super) static RAYS: Lazy<[i16; TABLE_SIZE]> = Lazy::new(|| {
    let mut rays = [0i16; TABLE_SIZE];

    for from in Square::all() {
        for &delta in piece_offsets(Piece::Queen) {
            let mut next = from.offset(delta);
            while let Some(to) = next {
                rays[index_for(from, to)] = delta;
                next = to.offset(delta);
            }
        }
    }

    rays
});
