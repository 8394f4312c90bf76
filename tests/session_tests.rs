//! Session tests - spawn, movement, rotation, locking and the drop clock

use tour_blocks::core::{Piece, PieceSource, Session, Shape, Step, TEMPLATES};
use tour_blocks::types::{Intent, PieceColor, COLS, DROP_INTERVAL_MS, ROWS};

fn session() -> Session {
    Session::new(DROP_INTERVAL_MS, PieceSource::seeded(12345))
}

fn place(session: &mut Session, template: usize, x: i8, y: i8) {
    let mut piece = Piece::spawn(&TEMPLATES[template]);
    piece.x = x;
    piece.y = y;
    session.set_active(piece);
}

#[test]
fn test_spawn_is_centered_for_every_template() {
    let expected = [3, 4, 4, 4, 4, 4, 4];
    for (template, x) in TEMPLATES.iter().zip(expected) {
        let piece = Piece::spawn(template);
        assert_eq!((piece.x, piece.y), (x, 0), "{:?}", template.color);
        assert!(piece.cells().all(|(x, _)| (0..COLS as i8).contains(&x)));
    }
}

#[test]
fn test_new_session_is_empty_with_active_piece() {
    let s = session();
    assert_eq!(s.score(), 0);
    assert_eq!(s.grid().occupied().count(), 0);
    assert_eq!(s.active().y, 0);
    assert!(!s.is_active_blocked());
}

#[test]
fn test_walls_stop_horizontal_moves() {
    let mut s = session();
    let mut lefts = 0;
    while s.move_left() {
        lefts += 1;
        assert!(lefts <= COLS);
    }
    assert_eq!(s.active().cells().map(|(x, _)| x).min(), Some(0));
    assert_eq!(s.apply(Intent::MoveLeft), Step::Blocked);

    while s.move_right() {}
    assert_eq!(
        s.active().cells().map(|(x, _)| x).max(),
        Some(COLS as i8 - 1)
    );
}

#[test]
fn test_rotation_never_leaves_the_piece_colliding() {
    let mut s = session();
    // I piece flat against the floor: vertical rotation would poke out.
    place(&mut s, 0, 0, ROWS as i8 - 1);
    let before = *s.active();
    assert!(!s.rotate());
    assert_eq!(*s.active(), before);

    // Same piece with room to turn.
    place(&mut s, 0, 3, 5);
    assert!(s.rotate());
    assert_eq!((s.active().shape.width(), s.active().shape.height()), (1, 4));
    assert!(!s.is_active_blocked());
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for template in &TEMPLATES {
        let mut shape: Shape = template.shape;
        for _ in 0..4 {
            shape = shape.rotated();
        }
        assert_eq!(shape, template.shape);
    }
}

#[test]
fn test_descent_then_lock_spawns_exactly_one_piece() {
    let mut s = session();
    // O piece with its bottom row on row ROWS-1 after one step.
    place(&mut s, 3, 0, ROWS as i8 - 3);

    assert_eq!(s.move_down(), Step::Moved);
    let step = s.move_down();
    assert_eq!(
        step,
        Step::Settled {
            lines_cleared: 0,
            spawn_blocked: false
        }
    );
    assert_eq!(s.grid().occupied().count(), 4);
    assert_eq!(s.active().y, 0);
    assert_eq!(
        s.grid().get(0, ROWS as i8 - 1),
        Some(Some(PieceColor::Yellow))
    );
}

#[test]
fn test_settle_that_completes_a_row_scores() {
    let mut s = session();
    for x in 4..COLS as i8 {
        s.grid_mut().set(x, ROWS as i8 - 1, Some(PieceColor::Red));
    }
    place(&mut s, 0, 0, ROWS as i8 - 1);

    let step = s.apply(Intent::SoftDrop);
    assert!(matches!(step, Step::Settled { lines_cleared: 1, .. }));
    assert_eq!(s.score(), 100);
    assert_eq!(s.grid().occupied().count(), 0);
}

#[test]
fn test_score_never_decreases() {
    let mut s = session();
    let mut last = 0;
    let intents = [
        Intent::MoveLeft,
        Intent::Rotate,
        Intent::SoftDrop,
        Intent::MoveRight,
        Intent::SoftDrop,
    ];
    for i in 0..2_000 {
        let step = s.apply(intents[i % intents.len()]);
        assert!(s.score() >= last);
        last = s.score();
        if step.is_spawn_blocked() {
            break;
        }
    }
}

#[test]
fn test_drop_clock_fires_only_past_the_interval() {
    let mut s = session();
    let y = s.active().y;

    assert_eq!(s.advance(DROP_INTERVAL_MS), None);
    assert_eq!(s.drop_timer_ms(), DROP_INTERVAL_MS);
    assert_eq!(s.active().y, y);

    assert_eq!(s.advance(1), Some(Step::Moved));
    assert_eq!(s.drop_timer_ms(), 0);
    assert_eq!(s.active().y, y + 1);
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = PieceSource::seeded(99);
    let mut b = PieceSource::seeded(99);
    for _ in 0..50 {
        assert_eq!(a.next_index(), b.next_index());
    }
}
