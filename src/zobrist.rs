//! Zobrist keys for position identity.
//!
//! Every distinct position maps to a 64-bit key; the repetition table
//! counts key occurrences to detect threefold repetition.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{CastlingRights, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][raw 0x88 index]
    piece_keys: [[[u64; 128]; 2]; 6],
    black_to_move_key: u64,
    // castling_keys[color][side]: 0 = kingside, 1 = queenside
    castling_keys: [[u64; 2]; 2],
    // en_passant_keys[file]: only the file of the target matters
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed keeps hashes reproducible across runs.
        let mut rng = StdRng::seed_from_u64(0x00C5_1E55_u64);
        let mut piece_keys = [[[0u64; 128]; 2]; 6];
        let mut castling_keys = [[0u64; 2]; 2];
        let mut en_passant_keys = [0u64; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.index()][color.index()][sq.index() as usize]
    }

    pub(crate) fn side(&self, color: Color) -> u64 {
        match color {
            Color::White => 0,
            Color::Black => self.black_to_move_key,
        }
    }

    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        let mut key = 0;
        for color in Color::BOTH {
            if rights.has(color, true) {
                key ^= self.castling_keys[color.index()][0];
            }
            if rights.has(color, false) {
                key ^= self.castling_keys[color.index()][1];
            }
        }
        key
    }

    pub(crate) fn en_passant(&self, target: Option<Square>) -> u64 {
        match target {
            Some(sq) => self.en_passant_keys[sq.file()],
            None => 0,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
