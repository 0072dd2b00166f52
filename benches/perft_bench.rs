//! Perft throughput benchmarks for the move generator.

use std::hint::black_box;

use chess_rules::Board;
use criterion::{criterion_group, criterion_main, Criterion};

fn perft_initial(c: &mut Criterion) {
    c.bench_function("perft 3 from the starting position", |b| {
        let mut board = Board::new();
        b.iter(|| black_box(board.perft(3)));
    });
}

fn perft_kiwipete(c: &mut Criterion) {
    c.bench_function("perft 2 from Kiwipete", |b| {
        let mut board =
            Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        b.iter(|| black_box(board.perft(2)));
    });
}

fn legal_move_generation(c: &mut Criterion) {
    c.bench_function("legal moves from the starting position", |b| {
        let mut board = Board::new();
        b.iter(|| black_box(board.legal_moves().len()));
    });
}

criterion_group!(benches, perft_initial, perft_kiwipete, legal_move_generation);
criterion_main!(benches);
