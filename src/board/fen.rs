//! FEN decoding and encoding, plus long-algebraic move lookup.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::state::Board;
use super::types::{Color, Move, Piece, Square};

impl Board {
    /// The standard starting position in FEN.
    pub const STARTING_FEN: &'static str =
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parse a position from FEN notation.
    ///
    /// All six fields are required. The placement field must describe
    /// exactly 8 ranks of exactly 8 squares, with no color fielding more
    /// pieces of a type than the rules allow. Errors leave no board
    /// behind; nothing is partially applied.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::FieldCount { found: parts.len() });
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }

        let mut counts = [[0usize; 6]; 2];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                    if file > 8 {
                        return Err(FenError::RankWidth {
                            rank: rank_idx,
                            width: file,
                        });
                    }
                    continue;
                }

                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { piece: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };

                counts[color.index()][piece.index()] += 1;
                if counts[color.index()][piece.index()] > piece.fen_count_limit() {
                    return Err(FenError::TooManyPieces {
                        piece: c,
                        max: piece.fen_count_limit(),
                    });
                }

                // Ranks are listed top-down, rank 8 first.
                let sq = match Square::new(7 - rank_idx, file) {
                    Some(sq) => sq,
                    None => {
                        return Err(FenError::RankWidth {
                            rank: rank_idx,
                            width: file + 1,
                        })
                    }
                };
                if board.place(color, piece, sq).is_err() {
                    return Err(FenError::TooManyPieces { piece: c, max: 1 });
                }
                file += 1;
            }
            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: rank_idx,
                    width: file,
                });
            }
        }

        board.turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => board.castling.set(Color::White, true),
                'Q' => board.castling.set(Color::White, false),
                'k' => board.castling.set(Color::Black, true),
                'q' => board.castling.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { found: c }),
            }
        }

        board.en_passant = if parts[3] == "-" {
            None
        } else {
            let sq = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            Some(sq)
        };

        board.halfmove_clock = parts[4].parse().map_err(|_| FenError::InvalidCounter {
            field: "half-move clock",
            found: parts[4].to_string(),
        })?;
        board.fullmove_number = parts[5].parse().map_err(|_| FenError::InvalidCounter {
            field: "full-move number",
            found: parts[5].to_string(),
        })?;

        board.reset_position_tracking();

        #[cfg(feature = "logging")]
        log::debug!("loaded position {fen}");

        Ok(board)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for
    /// fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Encode the position as FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let occupant = Square::new(rank, file).and_then(|sq| self.piece_at(sq));
                if let Some((color, piece)) = occupant {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.turn {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.castling.has(Color::White, true) {
            castling.push('K');
        }
        if self.castling.has(Color::White, false) {
            castling.push('Q');
        }
        if self.castling.has(Color::Black, true) {
            castling.push('k');
        }
        if self.castling.has(Color::Black, false) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Returns the matching legal move, or an error describing why
    /// parsing failed.
    ///
    /// # Example
    /// ```
    /// use chess_rules::board::Board;
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = notation.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = chars[..2]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| invalid_square())?;
        let to: Square = chars[2..4]
            .iter()
            .collect::<String>()
            .parse()
            .map_err(|_| invalid_square())?;

        let promotion = if chars.len() == 5 {
            let piece = Piece::from_char(chars[4])
                .ok_or(MoveParseError::InvalidPromotion { piece: chars[4] })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveParseError::InvalidPromotion { piece: chars[4] });
            }
            Some(piece)
        } else {
            None
        };

        self.legal_moves()
            .into_iter()
            .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse a long-algebraic move and make it on the board in one call.
    pub fn make_move_uci(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_fen_round_trip() {
        let board = Board::try_from_fen(Board::STARTING_FEN).unwrap();
        assert_eq!(board.to_fen(), Board::STARTING_FEN);
        assert_eq!(Board::new().to_fen(), Board::STARTING_FEN);
    }

    #[test]
    fn test_fen_black_to_move_with_en_passant() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.en_passant_target(), Some("e3".parse().unwrap()));
    }

    #[test]
    fn test_fen_counters_parsed_and_emitted() {
        let fen = "8/8/8/8/8/8/8/K1k5 w - - 42 17";
        let board = Board::try_from_fen(fen).unwrap();
        assert_eq!(board.halfmove_clock(), 42);
        assert_eq!(board.fullmove_number(), 17);
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn test_fen_error_field_count() {
        let result = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -");
        assert!(matches!(result, Err(FenError::FieldCount { found: 4 })));
    }

    #[test]
    fn test_fen_error_rank_count() {
        let result = Board::try_from_fen("8/8/8/8/8/8/8 w - - 0 1");
        assert!(matches!(result, Err(FenError::RankCount { found: 7 })));
    }

    #[test]
    fn test_fen_error_rank_width() {
        let narrow = Board::try_from_fen("rnbqkbnr/ppppppp1/8/8/8/8/PPP1PPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(narrow, Err(FenError::RankWidth { .. })));

        let wide = Board::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(wide, Err(FenError::RankWidth { .. })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result =
            Board::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { piece: 'x' })));
    }

    #[test]
    fn test_fen_error_too_many_pieces() {
        // Three black rooks.
        let result = Board::try_from_fen("rrr1k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(matches!(
            result,
            Err(FenError::TooManyPieces { piece: 'r', max: 2 })
        ));

        // Two white queens.
        let result = Board::try_from_fen("4k3/8/8/8/8/8/QQ6/4K3 w - - 0 1");
        assert!(matches!(
            result,
            Err(FenError::TooManyPieces { piece: 'Q', max: 1 })
        ));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { .. })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_fen_error_invalid_counters() {
        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1");
        assert!(matches!(
            result,
            Err(FenError::InvalidCounter {
                field: "half-move clock",
                ..
            })
        ));

        let result =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 -1");
        assert!(matches!(
            result,
            Err(FenError::InvalidCounter {
                field: "full-move number",
                ..
            })
        ));
    }

    #[test]
    fn test_fen_partial_castling() {
        let board =
            Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1").unwrap();
        assert!(board.castling_rights().has(Color::White, true));
        assert!(!board.castling_rights().has(Color::White, false));
        assert!(!board.castling_rights().has(Color::Black, true));
        assert!(board.castling_rights().has(Color::Black, false));
    }

    #[test]
    fn test_empty_board_fen() {
        let mut board = Board::new();
        board.clear();
        assert_eq!(board.to_fen(), "8/8/8/8/8/8/8/8 w - - 0 1");
    }

    #[test]
    fn test_parse_move_and_make() {
        let mut board = Board::new();
        let mv = board.parse_move("e2e4").unwrap();
        assert_eq!(mv.from(), "e2".parse().unwrap());
        assert_eq!(mv.to(), "e4".parse().unwrap());

        board.make_move_uci("e2e4").unwrap();
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_parse_move_promotion() {
        let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let mv = board.parse_move("a7a8q").unwrap();
        assert_eq!(mv.promotion(), Some(Piece::Queen));

        let result = board.parse_move("a7a8p");
        assert!(matches!(
            result,
            Err(MoveParseError::InvalidPromotion { .. })
        ));
    }

    #[test]
    fn test_parse_move_errors() {
        let mut board = Board::new();
        assert!(matches!(
            board.parse_move("e2"),
            Err(MoveParseError::InvalidLength { .. })
        ));
        assert!(matches!(
            board.parse_move("z9z9"),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            board.parse_move("e2e5"),
            Err(MoveParseError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_from_str_trait() {
        let board: Board = Board::STARTING_FEN.parse().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
    }
}
