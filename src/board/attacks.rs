//! Attack detection.

use super::geometry;
use super::state::Board;
use super::types::{Color, Piece, Square};

impl Board {
    /// Is `target` attacked by any piece of `by`?
    ///
    /// Scans the attacker's occupied squares; the mask table rules out
    /// unreachable offsets in one test, pawns are direction-checked, and
    /// sliders walk their ray looking for a blocker.
    pub(crate) fn attacked(&self, by: Color, target: Square) -> bool {
        for from in Square::all() {
            let (color, piece) = match self.piece_at(from) {
                Some(occupant) => occupant,
                None => continue,
            };
            if color != by || !geometry::piece_can_reach(piece, from, target) {
                continue;
            }

            if piece == Piece::Pawn {
                if geometry::pawn_attack_color(from, target) == by {
                    return true;
                }
                continue;
            }

            // Knights and kings reach in a single step.
            if !piece.is_slider() {
                return true;
            }

            if !self.ray_blocked(from, target) {
                return true;
            }
        }
        false
    }

    /// Walk from `from` toward `to` along their shared line; true when an
    /// occupied square sits strictly between them.
    fn ray_blocked(&self, from: Square, to: Square) -> bool {
        let step = geometry::ray_step(from, to);
        let mut next = from.offset(step);
        while let Some(sq) = next {
            if sq == to {
                return false;
            }
            if !self.is_empty(sq) {
                return true;
            }
            next = sq.offset(step);
        }
        true
    }

    /// Is this color's king attacked by the opponent? False with no king
    /// on the board (setup positions).
    pub(crate) fn king_attacked(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.attacked(color.opponent(), king),
            None => false,
        }
    }

    /// Is the side to move in check?
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.king_attacked(self.turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_rook_attack_along_file() {
        let mut board = Board::empty();
        board.put(Color::White, Piece::Rook, sq("a1")).unwrap();
        assert!(board.attacked(Color::White, sq("a8")));
        assert!(board.attacked(Color::White, sq("h1")));
        assert!(!board.attacked(Color::White, sq("b2")));
    }

    #[test]
    fn test_slider_attack_is_blocked() {
        let mut board = Board::empty();
        board.put(Color::White, Piece::Rook, sq("a1")).unwrap();
        board.put(Color::White, Piece::Pawn, sq("a4")).unwrap();
        assert!(board.attacked(Color::White, sq("a4")));
        assert!(!board.attacked(Color::White, sq("a8")));
    }

    #[test]
    fn test_pawn_attacks_respect_direction() {
        let mut board = Board::empty();
        board.put(Color::White, Piece::Pawn, sq("e4")).unwrap();
        board.put(Color::Black, Piece::Pawn, sq("d6")).unwrap();

        assert!(board.attacked(Color::White, sq("d5")));
        assert!(board.attacked(Color::White, sq("f5")));
        assert!(!board.attacked(Color::White, sq("e5")));
        assert!(!board.attacked(Color::White, sq("d3")));

        assert!(board.attacked(Color::Black, sq("c5")));
        assert!(board.attacked(Color::Black, sq("e5")));
        assert!(!board.attacked(Color::Black, sq("d7")));
    }

    #[test]
    fn test_knight_ignores_blockers() {
        let mut board = Board::empty();
        board.put(Color::White, Piece::Knight, sq("g1")).unwrap();
        board.put(Color::White, Piece::Pawn, sq("f2")).unwrap();
        board.put(Color::White, Piece::Pawn, sq("g2")).unwrap();
        assert!(board.attacked(Color::White, sq("f3")));
        assert!(board.attacked(Color::White, sq("h3")));
        assert!(board.attacked(Color::White, sq("e2")));
    }

    #[test]
    fn test_in_check_via_king_square() {
        let mut board = Board::empty();
        board.put(Color::White, Piece::King, sq("a1")).unwrap();
        board.put(Color::Black, Piece::Queen, sq("a2")).unwrap();
        assert!(board.king_attacked(Color::White));
        assert!(board.is_in_check());
    }
}
