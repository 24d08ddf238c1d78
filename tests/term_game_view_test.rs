use tetris_grid::core::{GameLoop, GameSnapshot, GameStatus, ScriptedPieces};
use tetris_grid::term::{kind_color, GameView, Viewport};
use tetris_grid::types::PieceKind;

fn screen_text(fb: &tetris_grid::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameSnapshot::default();
    let view = GameView::default();

    // 10 cells * 2 columns + border => 22 wide, 20 rows + border => 22 high.
    assert_eq!(view.frame_size(), (22, 22));
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.status = GameStatus::Running;
    snap.grid[19][0] = Some(PieceKind::Stick);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    let left = fb.get(x0, y0).unwrap();
    let right = fb.get(x0 + 1, y0).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, kind_color(PieceKind::Stick));

    // The neighbouring empty cell is a dot.
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_colors_each_kind_differently() {
    let kinds = [
        PieceKind::Cube,
        PieceKind::Stick,
        PieceKind::TShape,
        PieceKind::LShape,
        PieceKind::LShapeMirror,
        PieceKind::Skew,
        PieceKind::SkewMirror,
    ];
    for (i, a) in kinds.iter().enumerate() {
        for b in &kinds[i + 1..] {
            assert_ne!(kind_color(*a), kind_color(*b), "{:?} vs {:?}", a, b);
        }
    }
}

#[test]
fn term_view_overlays_status_text() {
    let view = GameView::default();
    let vp = Viewport::new(22, 22);

    let mut snap = GameSnapshot::default();
    assert!(screen_text(&view.render(&snap, vp)).contains("PRESS ENTER"));

    snap.status = GameStatus::GameOver;
    assert!(screen_text(&view.render(&snap, vp)).contains("GAME OVER"));

    snap.status = GameStatus::Stopped;
    assert!(screen_text(&view.render(&snap, vp)).contains("STOPPED"));

    snap.status = GameStatus::Running;
    let text = screen_text(&view.render(&snap, vp));
    assert!(!text.contains("GAME OVER"));
    assert!(!text.contains("PRESS ENTER"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameLoop::with_source(ScriptedPieces::new(vec![PieceKind::LShapeMirror]), 300);
    game.start();
    let snap = game.snapshot();
    let view = GameView::default();

    let wide = screen_text(&view.render(&snap, Viewport::new(60, 22)));
    assert!(wide.contains("PIECE"));
    assert!(wide.contains("l_shape_mirror"));
    assert!(wide.contains("KEYS"));

    let narrow = screen_text(&view.render(&snap, Viewport::new(22, 22)));
    assert!(!narrow.contains("PIECE"));
}

#[test]
fn term_view_centers_board_in_large_viewport() {
    let fb = GameView::default().render(&GameSnapshot::default(), Viewport::new(40, 30));

    // (40 - 22) / 2 = 9, (30 - 22) / 2 = 4
    assert_eq!(fb.get(9, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(30, 25).unwrap().ch, '┘');
}

#[test]
fn term_view_with_single_column_cells() {
    let view = GameView::new(1);
    assert_eq!(view.frame_size(), (12, 22));

    let mut snap = GameSnapshot::default();
    snap.status = GameStatus::Running;
    snap.grid[19][0] = Some(PieceKind::Cube);
    let fb = view.render(&snap, Viewport::new(12, 22));

    assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '·');

    // Zero width is clamped to one column.
    assert_eq!(GameView::new(0).frame_size(), (12, 22));
}
