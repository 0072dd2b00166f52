//! Chess board representation and rules.
//!
//! Uses a 0x88 mailbox board: 128 slots where the high nibble is the rank
//! row and the low nibble the file, so `index & 0x88 != 0` means off-board.
//! Supports full chess rules including castling, en passant, and promotion,
//! with a reversible make/unmake move engine.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod geometry;
mod history;
mod make_unmake;
mod movegen;
mod san;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveParseError, PlacementError, SanError, SquareError};
pub use state::Board;
pub use types::{CastlingRights, Color, Move, MoveFlags, Piece, Square};
