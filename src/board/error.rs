//! Error types for chess board operations.

use std::fmt;

use super::types::Color;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly 6 whitespace-separated fields
    FieldCount { found: usize },
    /// Piece placement does not split into exactly 8 ranks
    RankCount { found: usize },
    /// A rank describes more or fewer than 8 squares
    RankWidth { rank: usize, width: usize },
    /// Invalid piece character in the placement string
    InvalidPiece { piece: char },
    /// More pieces of one type and color than the rules allow
    TooManyPieces { piece: char, max: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { found: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// A move counter field failed to parse as a non-negative integer
    InvalidCounter { field: &'static str, found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::FieldCount { found } => {
                write!(f, "FEN must have exactly 6 fields, found {found}")
            }
            FenError::RankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::RankWidth { rank, width } => {
                write!(f, "rank {rank} describes {width} squares, expected 8")
            }
            FenError::InvalidPiece { piece } => {
                write!(f, "Invalid piece character '{piece}' in FEN")
            }
            FenError::TooManyPieces { piece, max } => {
                write!(f, "More than {max} '{piece}' pieces in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { found } => {
                write!(f, "Invalid castling character '{found}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { field, found } => {
                write!(f, "Invalid {field} '{found}' in FEN")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for direct piece placement failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A second king of the same color on a different square
    SecondKing { color: Color },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::SecondKing { color } => {
                write!(f, "{color} already has a king on the board")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Error type for long-algebraic move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { piece: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { piece } => {
                write!(f, "Invalid promotion piece '{piece}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for SAN (Standard Algebraic Notation) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SanError {
    /// Empty SAN string
    Empty,
    /// No legal move matches the SAN string
    IllegalMove { san: String },
}

impl fmt::Display for SanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SanError::Empty => write!(f, "Empty SAN string"),
            SanError::IllegalMove { san } => {
                write!(f, "No legal move matches '{san}'")
            }
        }
    }
}

impl std::error::Error for SanError {}
