//! A chess rules library: board state, legal move generation, reversible
//! make/unmake, and the FEN/SAN boundary notations.
//!
//! This crate deliberately contains no search or evaluation; it answers
//! "what is legal here" and "is this game over", nothing more.

pub mod board;
mod zobrist;

pub use board::{Board, BoardBuilder, CastlingRights, Color, Move, MoveFlags, Piece, Square};
pub use board::{FenError, MoveParseError, PlacementError, SanError, SquareError};
