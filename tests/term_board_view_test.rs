use tour_blocks::core::{Piece, PieceSource, Session, TEMPLATES};
use tour_blocks::term::{encode_diff_into, encode_full_into, BoardView, FrameBuffer};
use tour_blocks::types::{PieceColor, DROP_INTERVAL_MS};

#[test]
fn term_view_renders_border_below_score_line() {
    let snap = Session::new(DROP_INTERVAL_MS, PieceSource::seeded(1)).snapshot();
    let fb = BoardView::default().render(&snap);

    assert_eq!((fb.width(), fb.height()), (22, 23));
    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(21, 22).unwrap().ch, '┘');
    assert!(fb.to_text().starts_with("Score: 0"));
}

#[test]
fn term_view_renders_settled_cell_two_chars_wide() {
    let mut snap = Session::new(DROP_INTERVAL_MS, PieceSource::seeded(1)).snapshot();
    snap.cells[19][0] = Some(PieceColor::Purple);
    snap.active = None;

    let fb = BoardView::default().render(&snap);

    // Inside the border: origin (1, 2), each cell 2 chars wide.
    let y = 2 + 19;
    assert_eq!(fb.get(1, y).unwrap().ch, '█');
    assert_eq!(fb.get(2, y).unwrap().ch, '█');
    assert_eq!(fb.get(1, y).unwrap().style.fg, PieceColor::Purple.rgb());
    assert_eq!(fb.get(3, y).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_at_spawn() {
    let mut session = Session::new(DROP_INTERVAL_MS, PieceSource::seeded(1));
    session.set_active(Piece::spawn(&TEMPLATES[0]));
    let fb = BoardView::default().render(&session.snapshot());

    // I piece spawns at column 3 covering columns 3..=6 of row 0.
    for col in 3..7u16 {
        assert_eq!(fb.get(1 + col * 2, 2).unwrap().ch, '█');
    }
    assert_eq!(fb.get(1 + 7 * 2, 2).unwrap().ch, '·');
}

#[test]
fn term_view_score_line_follows_session() {
    let mut snap = Session::new(DROP_INTERVAL_MS, PieceSource::seeded(1)).snapshot();
    snap.score = 300;
    let fb = BoardView::default().render(&snap);
    assert!(fb.to_text().starts_with("Score: 300"));
}

#[test]
fn renderer_diff_is_smaller_than_full_redraw() {
    let session = Session::new(DROP_INTERVAL_MS, PieceSource::seeded(1));
    let view = BoardView::default();
    let before: FrameBuffer = view.render(&session.snapshot());

    let mut moved = session.clone();
    moved.move_left();
    let after = view.render(&moved.snapshot());

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len());
}
