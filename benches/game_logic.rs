use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tour_blocks::core::{Grid, PieceSource, Session, TEMPLATES};
use tour_blocks::term::BoardView;
use tour_blocks::types::{Intent, PieceColor, DROP_INTERVAL_MS, TICK_MS};

fn session() -> Session {
    Session::new(DROP_INTERVAL_MS, PieceSource::seeded(12345))
}

fn bench_advance(c: &mut Criterion) {
    let mut s = session();

    c.bench_function("session_advance_16ms", |b| {
        b.iter(|| {
            if s.advance(black_box(TICK_MS)).is_some_and(|st| st.is_spawn_blocked()) {
                s = session();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            for y in 16..20 {
                for x in 0..10 {
                    grid.set(x, y, Some(PieceColor::Cyan));
                }
            }
            grid.clear_full_rows()
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let grid = Grid::new();
    let shape = TEMPLATES[6].shape;

    c.bench_function("collides", |b| {
        b.iter(|| grid.collides(black_box(&shape), black_box(4), black_box(10)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut s = session();

    c.bench_function("apply_rotate", |b| b.iter(|| s.apply(black_box(Intent::Rotate))));
}

fn bench_snapshot(c: &mut Criterion) {
    let s = session();
    let mut frame = s.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            s.snapshot_into(&mut frame);
            black_box(&frame);
        })
    });
}

fn bench_board_view(c: &mut Criterion) {
    let frame = session().snapshot();
    let view = BoardView::default();
    let mut fb = view.render(&frame);

    c.bench_function("board_view_render_into", |b| {
        b.iter(|| view.render_into(black_box(&frame), &mut fb))
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_collides,
    bench_rotate,
    bench_snapshot,
    bench_board_view
);
criterion_main!(benches);
