//! 0x88 movement geometry.
//!
//! Movement is expressed as signed offsets on the 0x88 index. Two derived
//! tables, indexed by `(from - to) + 119`, answer "could piece type T reach
//! across this relative offset" (attack masks) and "which unit step walks
//! from attacker toward target" (rays) in constant time.

mod tables;

use super::types::{Color, Piece, Square};
use tables::{mask_bit, ATTACK_MASKS, RAYS};

/// Pawn offsets per color: single push, double push, the two capture
/// diagonals. Indexed by `Color::index()`.
pub(crate) const PAWN_OFFSETS: [[i16; 4]; 2] = [
    [-16, -32, -17, -15], // White marches toward index 0 (rank 8)
    [16, 32, 17, 15],
];

/// Step offsets for the non-pawn piece types. Sliders repeat their offsets,
/// leapers apply them once.
pub(crate) fn piece_offsets(piece: Piece) -> &'static [i16] {
    match piece {
        Piece::Pawn => &[],
        Piece::Knight => &[-18, -33, -31, -14, 18, 33, 31, 14],
        Piece::Bishop => &[-17, -15, 17, 15],
        Piece::Rook => &[-16, 1, 16, -1],
        Piece::Queen | Piece::King => &[-17, -16, -15, 1, 17, 16, 15, -1],
    }
}

/// Index into the attack-mask and ray tables for a square pair.
#[inline]
pub(crate) fn table_index(from: Square, to: Square) -> usize {
    (from.index() as i16 - to.index() as i16 + 119) as usize
}

/// Could a piece of this type attack across `from -> to` on an empty board?
/// Pawns match in both directions; callers resolve color separately.
#[inline]
pub(crate) fn piece_can_reach(piece: Piece, from: Square, to: Square) -> bool {
    ATTACK_MASKS[table_index(from, to)] & mask_bit(piece) != 0
}

/// Direction of a pawn attack across `from -> to`: positive differences
/// belong to White, which sits at higher indices and captures upward.
#[inline]
pub(crate) fn pawn_attack_color(from: Square, to: Square) -> Color {
    if from.index() > to.index() {
        Color::White
    } else {
        Color::Black
    }
}

/// Unit step walking from `from` toward `to` along a slider line
/// (0 when the squares share no line).
#[inline]
pub(crate) fn ray_step(from: Square, to: Square) -> i16 {
    RAYS[table_index(from, to)]
}
