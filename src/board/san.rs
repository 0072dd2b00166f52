//! Standard Algebraic Notation (SAN) support.
//!
//! Encoding follows scoresheet conventions: "e4", "Nf3", "exd5", "O-O",
//! "e8=Q". Decoding strips trailing check/annotation glyphs and matches
//! the cleaned string against the encoding of every legal move, so the
//! two directions can never disagree.

use super::error::SanError;
use super::state::Board;
use super::types::{Move, Piece};

/// Drop trailing annotation ("!?", "??", ...) and check/mate glyphs.
fn clean_san(san: &str) -> &str {
    san.trim_end_matches(['?', '!']).trim_end_matches(['+', '#'])
}

impl Board {
    /// Format a move in Standard Algebraic Notation.
    #[must_use]
    pub fn move_to_san(&self, mv: &Move) -> String {
        if mv.is_castle_kingside() {
            return "O-O".to_string();
        }
        if mv.is_castle_queenside() {
            return "O-O-O".to_string();
        }

        let mut san = String::new();

        if mv.piece() != Piece::Pawn {
            san.push(mv.piece().to_char().to_ascii_uppercase());
            san.push_str(&self.disambiguator(mv));
        }

        if mv.is_capture() {
            if mv.piece() == Piece::Pawn {
                san.push((b'a' + mv.from().file() as u8) as char);
            }
            san.push('x');
        }

        san.push_str(&mv.to().to_string());

        if let Some(promo) = mv.promotion() {
            san.push('=');
            san.push(promo.to_char().to_ascii_uppercase());
        }

        san
    }

    /// Origin marker separating this move from same-type moves onto the
    /// same destination: the file when it is unique, else the rank, else
    /// the whole origin square.
    fn disambiguator(&self, mv: &Move) -> String {
        let mut board = self.clone();
        let moves = board.legal_moves();

        let mut ambiguities = 0;
        let mut same_rank = 0;
        let mut same_file = 0;

        for other in &moves {
            if other.piece() == mv.piece() && other.to() == mv.to() && other.from() != mv.from() {
                ambiguities += 1;
                if other.from().rank() == mv.from().rank() {
                    same_rank += 1;
                }
                if other.from().file() == mv.from().file() {
                    same_file += 1;
                }
            }
        }

        if ambiguities == 0 {
            String::new()
        } else if same_rank > 0 && same_file > 0 {
            mv.from().to_string()
        } else if same_file > 0 {
            // File is shared, so the rank tells them apart.
            ((b'1' + mv.from().rank() as u8) as char).to_string()
        } else {
            ((b'a' + mv.from().file() as u8) as char).to_string()
        }
    }

    /// Parse a move in Standard Algebraic Notation.
    ///
    /// Accepts notation like "e4", "Nf3", "Bxc6", "O-O", "e8=Q", with
    /// trailing check indicators and annotations ignored. The input must
    /// match a currently legal move.
    pub fn parse_san(&mut self, san: &str) -> Result<Move, SanError> {
        let trimmed = san.trim();
        if trimmed.is_empty() {
            return Err(SanError::Empty);
        }
        let cleaned = clean_san(trimmed);

        for mv in self.legal_moves() {
            if self.move_to_san(&mv) == cleaned {
                return Ok(mv);
            }
        }
        Err(SanError::IllegalMove {
            san: san.to_string(),
        })
    }

    /// Parse a SAN move and make it on the board in one call.
    pub fn make_move_san(&mut self, san: &str) -> Result<Move, SanError> {
        let mv = self.parse_san(san)?;
        self.make_move(mv);
        Ok(mv)
    }
}
