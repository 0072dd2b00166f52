//! Applying and reversing moves.
//!
//! `make_move` trusts its input: moves must come from the generator.
//! Every mutable field is snapshotted into the history stack first, so
//! `undo_move` can restore the position exactly, in strict LIFO order.

use super::history::HistoryEntry;
use super::state::Board;
use super::types::{Color, Move, Piece, Square};

impl Board {
    /// Apply a generator-produced move and push its history entry.
    pub fn make_move(&mut self, m: Move) {
        let us = self.turn;
        let them = us.opponent();

        self.history.push(HistoryEntry {
            mv: m,
            kings: self.kings,
            turn: self.turn,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            hash: self.hash,
        });

        // Relocate the mover; an ordinary capture is overwritten here.
        self.pieces[m.to().index() as usize] = self.pieces[m.from().index() as usize].take();

        // En passant removes the pawn behind the destination instead.
        if m.is_en_passant() {
            if let Some(taken) = m.to().offset(-us.forward()) {
                self.pieces[taken.index() as usize] = None;
            }
        }

        if let Some(promoted) = m.promotion() {
            self.pieces[m.to().index() as usize] = Some((us, promoted));
        }

        if m.piece() == Piece::King {
            self.kings[us.index()] = Some(m.to());
            if m.is_castle_kingside() {
                // Rook hops from the corner to the far side of the king.
                self.relocate(m.to().offset(1), m.to().offset(-1));
            } else if m.is_castle_queenside() {
                self.relocate(m.to().offset(-2), m.to().offset(1));
            }
            self.castling.remove_color(us);
        }

        // Leaving a rook home square drops that right; landing on the
        // opponent's rook home square drops theirs (the rook was just
        // captured, or long gone).
        if !self.castling.is_empty() {
            for kingside in [true, false] {
                if m.from() == Square::rook_home(us, kingside) {
                    self.castling.remove(us, kingside);
                }
                if m.to() == Square::rook_home(them, kingside) {
                    self.castling.remove(them, kingside);
                }
            }
        }

        // Only a fresh double push leaves an en passant target behind.
        self.en_passant = if m.is_double_pawn_push() {
            m.to().offset(-us.forward())
        } else {
            None
        };

        if m.piece() == Piece::Pawn || m.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }

        self.turn = them;

        self.hash = self.position_hash();
        self.repetitions.increment(self.hash);
    }

    /// Undo the most recent move, restoring the snapshotted state and
    /// reversing the board mutation. Returns the move taken back, or
    /// `None` when no move has been made.
    pub fn undo_move(&mut self) -> Option<Move> {
        let entry = self.history.pop()?;
        let m = entry.mv;

        self.repetitions.decrement(self.hash);

        self.kings = entry.kings;
        self.turn = entry.turn;
        self.castling = entry.castling;
        self.en_passant = entry.en_passant;
        self.halfmove_clock = entry.halfmove_clock;
        self.fullmove_number = entry.fullmove_number;
        self.hash = entry.hash;

        let us = self.turn;
        let them = us.opponent();

        // Walk the piece back; a promotion reverts to the recorded mover
        // type (the pawn).
        self.pieces[m.to().index() as usize] = None;
        self.pieces[m.from().index() as usize] = Some((us, m.piece()));

        if m.is_en_passant() {
            // The captured pawn returns behind the destination, which
            // itself stays empty.
            if let Some(taken) = m.to().offset(-us.forward()) {
                self.pieces[taken.index() as usize] = Some((them, Piece::Pawn));
            }
        } else if let Some(captured) = m.captured() {
            self.pieces[m.to().index() as usize] = Some((them, captured));
        }

        if m.is_castle_kingside() {
            self.relocate(m.to().offset(-1), m.to().offset(1));
        } else if m.is_castle_queenside() {
            self.relocate(m.to().offset(1), m.to().offset(-2));
        }

        Some(m)
    }

    /// Move whatever sits on `from` to `to`. Offsets computed from
    /// generator moves are always on the board; `None` endpoints are
    /// ignored rather than trusted further.
    fn relocate(&mut self, from: Option<Square>, to: Option<Square>) {
        if let (Some(from), Some(to)) = (from, to) {
            self.pieces[to.index() as usize] = self.pieces[from.index() as usize].take();
        }
    }
}
