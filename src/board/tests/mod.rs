//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - move generation node counts on reference positions
//! - `make_unmake.rs` - make/undo correctness and state restoration
//! - `terminal.rs` - checkmate, stalemate, and draw detection
//! - `edge_cases.rs` - castling legality, en passant, placement rules
//! - `notation.rs` - FEN and SAN boundary formats
//! - `proptest.rs` - property-based tests

mod make_unmake;
