//! Pseudo-legal and legal move generation.

use super::geometry;
use super::state::Board;
use super::types::{Color, Move, MoveFlags, Piece, Square, PROMOTION_PIECES};

impl Board {
    /// All legal moves for the side to move.
    pub fn legal_moves(&mut self) -> Vec<Move> {
        self.generate_moves(true, None)
    }

    /// Legal moves starting from one square (empty when the square holds
    /// no friendly piece).
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<Move> {
        self.generate_moves(true, Some(from))
    }

    /// Generate moves for the side to move, optionally restricted to one
    /// origin square. With `legal_only`, each candidate is applied,
    /// tested for leaving the own king attacked, and reverted; surviving
    /// moves are legal by definition.
    pub(crate) fn generate_moves(&mut self, legal_only: bool, single: Option<Square>) -> Vec<Move> {
        let us = self.turn;
        let mut moves = Vec::new();

        for from in Square::all() {
            if let Some(only) = single {
                if from != only {
                    continue;
                }
            }
            let Some((color, piece)) = self.piece_at(from) else {
                continue;
            };
            if color != us {
                continue;
            }
            if piece == Piece::Pawn {
                self.pawn_pushes(from, us, &mut moves);
                self.pawn_attacks(from, us, &mut moves);
            } else {
                self.piece_moves(from, piece, us, &mut moves);
            }
        }

        // Castling belongs to the king's square when filtering.
        if single.is_none() || single == self.kings[us.index()] {
            self.castling_moves(us, &mut moves);
        }

        if !legal_only {
            return moves;
        }

        let mut legal = Vec::with_capacity(moves.len());
        for m in moves {
            self.make_move(m);
            if !self.king_attacked(us) {
                legal.push(m);
            }
            self.undo_move();
        }
        legal
    }

    /// Forward pushes: one square onto an empty slot, two from the start
    /// rank when both slots are empty.
    fn pawn_pushes(&self, from: Square, us: Color, moves: &mut Vec<Move>) {
        let offsets = &geometry::PAWN_OFFSETS[us.index()];

        let Some(single) = from.offset(offsets[0]) else {
            return;
        };
        if !self.is_empty(single) {
            return;
        }
        self.push_pawn_move(moves, us, from, single, MoveFlags::NORMAL);

        if from.rank() == us.pawn_start_rank() {
            if let Some(double) = from.offset(offsets[1]) {
                if self.is_empty(double) {
                    moves.push(self.build_move(
                        Piece::Pawn,
                        from,
                        double,
                        MoveFlags::DOUBLE_PAWN_PUSH,
                        None,
                    ));
                }
            }
        }
    }

    /// Diagonal captures, including en passant onto the current target.
    fn pawn_attacks(&self, from: Square, us: Color, moves: &mut Vec<Move>) {
        for &delta in &geometry::PAWN_OFFSETS[us.index()][2..] {
            let Some(to) = from.offset(delta) else {
                continue;
            };
            match self.piece_at(to) {
                Some((color, _)) if color != us => {
                    self.push_pawn_move(moves, us, from, to, MoveFlags::CAPTURE);
                }
                None if self.en_passant == Some(to) => {
                    moves.push(self.build_move(
                        Piece::Pawn,
                        from,
                        to,
                        MoveFlags::EN_PASSANT,
                        None,
                    ));
                }
                _ => {}
            }
        }
    }

    /// Offset-walking generation for knights, sliders, and the king.
    fn piece_moves(&self, from: Square, piece: Piece, us: Color, moves: &mut Vec<Move>) {
        for &delta in geometry::piece_offsets(piece) {
            let mut next = from.offset(delta);
            while let Some(to) = next {
                match self.piece_at(to) {
                    None => moves.push(self.build_move(piece, from, to, MoveFlags::NORMAL, None)),
                    Some((color, _)) => {
                        if color != us {
                            moves.push(self.build_move(piece, from, to, MoveFlags::CAPTURE, None));
                        }
                        break;
                    }
                }
                if !piece.is_slider() {
                    break;
                }
                next = to.offset(delta);
            }
        }
    }

    /// Castling: the right must be held, the king and rook on their home
    /// squares, the squares between them empty, and none of the king's
    /// current, transit, and landing squares attacked. That single rule
    /// forbids castling out of, through, and into check.
    fn castling_moves(&self, us: Color, moves: &mut Vec<Move>) {
        let home = Square::king_home(us);
        if self.kings[us.index()] != Some(home) {
            return;
        }
        let them = us.opponent();

        if self.castling.has(us, true) {
            if let (Some(transit), Some(landing)) = (home.offset(1), home.offset(2)) {
                if self.is_empty(transit)
                    && self.is_empty(landing)
                    && self.piece_at(Square::rook_home(us, true)) == Some((us, Piece::Rook))
                    && !self.attacked(them, home)
                    && !self.attacked(them, transit)
                    && !self.attacked(them, landing)
                {
                    moves.push(self.build_move(
                        Piece::King,
                        home,
                        landing,
                        MoveFlags::KINGSIDE_CASTLE,
                        None,
                    ));
                }
            }
        }

        if self.castling.has(us, false) {
            if let (Some(transit), Some(landing), Some(rook_path)) =
                (home.offset(-1), home.offset(-2), home.offset(-3))
            {
                if self.is_empty(transit)
                    && self.is_empty(landing)
                    && self.is_empty(rook_path)
                    && self.piece_at(Square::rook_home(us, false)) == Some((us, Piece::Rook))
                    && !self.attacked(them, home)
                    && !self.attacked(them, transit)
                    && !self.attacked(them, landing)
                {
                    moves.push(self.build_move(
                        Piece::King,
                        home,
                        landing,
                        MoveFlags::QUEENSIDE_CASTLE,
                        None,
                    ));
                }
            }
        }
    }

    /// A pawn move that lands on the back rank fans out into the four
    /// promotion choices, queen first.
    fn push_pawn_move(
        &self,
        moves: &mut Vec<Move>,
        us: Color,
        from: Square,
        to: Square,
        flags: MoveFlags,
    ) {
        if to.rank() == us.promotion_rank() {
            for promo in PROMOTION_PIECES {
                moves.push(self.build_move(
                    Piece::Pawn,
                    from,
                    to,
                    flags | MoveFlags::PROMOTION,
                    Some(promo),
                ));
            }
        } else {
            moves.push(self.build_move(Piece::Pawn, from, to, flags, None));
        }
    }

    /// Assemble a move, recording the captured piece type so the move can
    /// be reversed later. En passant captures a pawn that is not on the
    /// destination square.
    fn build_move(
        &self,
        piece: Piece,
        from: Square,
        to: Square,
        flags: MoveFlags,
        promotion: Option<Piece>,
    ) -> Move {
        let captured = if flags.contains(MoveFlags::EN_PASSANT) {
            Some(Piece::Pawn)
        } else {
            self.piece_on(to)
        };
        Move::new(from, to, piece, flags, promotion, captured)
    }

    /// Checkmate: in check with no legal reply.
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check() && self.legal_moves().is_empty()
    }

    /// Stalemate: not in check, but no legal reply either.
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check() && self.legal_moves().is_empty()
    }

    /// Count leaf nodes of the legal move tree to the given depth.
    /// The standard way to validate a move generator.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}
