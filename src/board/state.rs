//! Board state: the 0x88 piece array plus positional metadata.

use std::fmt;

use crate::zobrist::ZOBRIST;

use super::history::{HistoryEntry, RepetitionTable};
use super::types::{CastlingRights, Color, Piece, Square};
use super::PlacementError;

/// A chess position with its full game context: piece placement, side to
/// move, castling rights, en passant target, move counters, cached king
/// squares, and the history stack that makes moves reversible.
#[derive(Clone, Debug)]
pub struct Board {
    /// 128-slot 0x88 mailbox; `None` marks a vacant (or off-board) slot.
    pub(crate) pieces: [Option<(Color, Piece)>; 128],
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    /// Cached king squares, indexed by `Color::index()`.
    pub(crate) kings: [Option<Square>; 2],
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) hash: u64,
    pub(crate) repetitions: RepetitionTable,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];

        let mut board = Board::empty();
        for sq in Square::all() {
            let piece = match sq.rank() {
                0 | 7 => back_rank[sq.file()],
                1 | 6 => Piece::Pawn,
                _ => continue,
            };
            let color = if sq.rank() <= 1 {
                Color::White
            } else {
                Color::Black
            };
            board.set_piece(sq, color, piece);
        }

        board.castling = CastlingRights::all();
        board.reset_position_tracking();
        board
    }

    /// An empty board: no pieces, White to move, no rights, fresh counters.
    #[must_use]
    pub fn empty() -> Self {
        let mut board = Board {
            pieces: [None; 128],
            turn: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            kings: [None; 2],
            history: Vec::new(),
            hash: 0,
            repetitions: RepetitionTable::new(),
        };
        board.reset_position_tracking();
        board
    }

    /// Reset to the standard starting position, discarding all history.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Remove every piece and reset all game state, discarding all history.
    pub fn clear(&mut self) {
        *self = Board::empty();
    }

    /// The color whose turn it is.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.turn
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Zobrist key of the current position.
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Number of moves made and not yet undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The cached square of a color's king, if one is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// The piece on a square, with its color.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.pieces[sq.index() as usize]
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.pieces[sq.index() as usize].is_none()
    }

    /// Raw placement: writes the slot and keeps the king cache in sync.
    /// No invariant checks; setup paths go through `place`.
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[sq.index() as usize] = Some((color, piece));
        if piece == Piece::King {
            self.kings[color.index()] = Some(sq);
        }
    }

    /// Invariant-checked placement used by `put`, FEN decoding, and the
    /// builder: at most one king per color, replaced pieces evicted from
    /// the king cache.
    pub(crate) fn place(
        &mut self,
        color: Color,
        piece: Piece,
        sq: Square,
    ) -> Result<(), PlacementError> {
        if piece == Piece::King {
            if let Some(existing) = self.kings[color.index()] {
                if existing != sq {
                    return Err(PlacementError::SecondKing { color });
                }
            }
        }
        if let Some((evicted, Piece::King)) = self.piece_at(sq) {
            self.kings[evicted.index()] = None;
        }
        self.set_piece(sq, color, piece);
        Ok(())
    }

    /// Put a piece on the board during setup. Placing a second king of one
    /// color on a different square is rejected.
    pub fn put(&mut self, color: Color, piece: Piece, sq: Square) -> Result<(), PlacementError> {
        self.place(color, piece, sq)?;
        self.reset_position_tracking();
        Ok(())
    }

    /// Remove and return the piece on a square during setup.
    pub fn remove(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let removed = self.pieces[sq.index() as usize].take();
        if let Some((color, Piece::King)) = removed {
            self.kings[color.index()] = None;
        }
        self.reset_position_tracking();
        removed
    }

    /// Full zobrist key of the current position.
    pub(crate) fn position_hash(&self) -> u64 {
        let mut hash = 0;
        for sq in Square::all() {
            if let Some((color, piece)) = self.piece_at(sq) {
                hash ^= ZOBRIST.piece(color, piece, sq);
            }
        }
        hash ^= ZOBRIST.side(self.turn);
        hash ^= ZOBRIST.castling(self.castling);
        hash ^= ZOBRIST.en_passant(self.en_passant);
        hash
    }

    /// Recompute the hash and restart repetition counting from here.
    /// Called after setup-time mutations; played moves maintain the
    /// counts incrementally.
    pub(crate) fn reset_position_tracking(&mut self) {
        self.hash = self.position_hash();
        self.repetitions.clear();
        self.repetitions.increment(self.hash);
    }

    /// Dead-draw detection by material: bare kings, a lone minor piece
    /// against a bare king, or bishop against bishop on same-colored
    /// squares. Anything else is treated as sufficient.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = [0usize; 2];
        let mut bishops: Vec<(Color, Square)> = Vec::new();

        for sq in Square::all() {
            let Some((color, piece)) = self.piece_at(sq) else {
                continue;
            };
            match piece {
                Piece::King => {}
                Piece::Knight => minors[color.index()] += 1,
                Piece::Bishop => {
                    minors[color.index()] += 1;
                    bishops.push((color, sq));
                }
                // Any pawn, rook, or queen can still force mate.
                Piece::Pawn | Piece::Rook | Piece::Queen => return false,
            }
        }

        match (minors[0], minors[1]) {
            (0, 0) => true,
            (1, 0) | (0, 1) => true,
            (1, 1) => match bishops.as_slice() {
                [(c1, sq1), (c2, sq2)] if c1 != c2 => sq1.is_light() == sq2.is_light(),
                _ => false,
            },
            _ => false,
        }
    }

    /// Threefold repetition of the current position along the played line.
    #[must_use]
    pub fn is_threefold_repetition(&self) -> bool {
        self.repetitions.get(self.hash) >= 3
    }

    /// Draw by the fifty-move rule or threefold repetition.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.halfmove_clock >= 100 || self.is_threefold_repetition()
    }

    /// `is_draw` extended with insufficient material.
    #[must_use]
    pub fn is_theoretical_draw(&self) -> bool {
        self.is_draw() || self.is_insufficient_material()
    }

    /// True when the game cannot continue: checkmate, stalemate, or a
    /// drawn position.
    pub fn is_game_over(&mut self) -> bool {
        self.is_theoretical_draw() || self.legal_moves().is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = Square::new(rank, file)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or(' ', |(color, piece)| piece.to_fen_char(color));
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}
