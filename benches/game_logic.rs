use blockfall::core::{Board, GameSnapshot, Session};
use blockfall::types::{Command, PieceKind};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(12345);

    c.bench_function("session_tick", |b| {
        b.iter(|| session.apply(black_box(Command::Tick)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut session = Session::new(12345);

    c.bench_function("move_right", |b| {
        b.iter(|| session.apply(black_box(Command::MoveRight)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = Session::new(12345);

    c.bench_function("rotate_cw", |b| {
        b.iter(|| session.apply(black_box(Command::RotateCw)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = Session::new(12345);
    let mut out = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| session.snapshot_into(black_box(&mut out)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
