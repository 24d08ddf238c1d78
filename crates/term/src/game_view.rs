//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, GameStatus};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{PieceKind, COLS, ROWS};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Minimum side panel width worth drawing.
const PANEL_MIN_W: u16 = 16;

const KEY_HELP: [&str; 5] = [
    "\u{2190} \u{2192}  move",
    "\u{2193}    down",
    "\u{2191}    rotate",
    "space drop",
    "q    quit",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board centered in the viewport with a side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell compensates for the tall terminal glyph.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (COLS as u16 * self.cell_w + 2, ROWS as u16 + 2)
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, left, top, frame_w, frame_h);

        for (row, cells) in snap.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let x = left + 1 + col as u16 * self.cell_w;
                let y = top + 1 + row as u16;
                match cell {
                    Some(kind) => {
                        fb.fill_rect(x, y, self.cell_w, 1, '█', Style::fg_on(kind_color(*kind), BOARD_BG))
                    }
                    None => {
                        let dot = Style::fg_on(Rgb::new(90, 90, 100), BOARD_BG).dim();
                        fb.fill_rect(x, y, self.cell_w, 1, ' ', dot);
                        fb.put(x, y, '·', dot);
                    }
                }
            }
        }

        if let Some(text) = overlay_text(snap.status) {
            let text_w = text.chars().count() as u16;
            let x = left + frame_w.saturating_sub(text_w) / 2;
            let y = top + frame_h / 2;
            let style = Style::fg_on(Rgb::new(255, 255, 255), PANEL_BG).bold();
            fb.put_str(x, y, text, style);
        }

        self.draw_side_panel(fb, snap, viewport, left + frame_w + 2, top);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        top: u16,
    ) {
        if viewport.width.saturating_sub(x) < PANEL_MIN_W {
            return;
        }

        let label = Style::fg_on(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Style::fg_on(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        fb.put_str(x, y, "PIECE", label);
        y += 1;
        match snap.active {
            Some(active) => fb.put_str(
                x,
                y,
                active.kind.class_name(),
                Style::fg_on(kind_color(active.kind), PANEL_BG),
            ),
            None => fb.put_str(x, y, "-", value),
        }
        y += 2;

        fb.put_str(x, y, "KEYS", label);
        for line in KEY_HELP {
            y += 1;
            fb.put_str(x, y, line, value.dim());
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let style = Style::fg_on(Rgb::new(200, 200, 200), PANEL_BG);
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.put(x, y, '┌', style);
    fb.put(right, y, '┐', style);
    fb.put(x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put(cx, y, '─', style);
        fb.put(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put(x, cy, '│', style);
        fb.put(right, cy, '│', style);
    }
}

fn overlay_text(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Idle => Some("PRESS ENTER"),
        GameStatus::Running => None,
        GameStatus::Stopped => Some("STOPPED"),
        GameStatus::GameOver => Some("GAME OVER"),
    }
}

/// Display color for each piece class.
pub fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::Cube => Rgb::new(240, 220, 80),
        PieceKind::Stick => Rgb::new(80, 220, 220),
        PieceKind::TShape => Rgb::new(200, 120, 220),
        PieceKind::LShape => Rgb::new(255, 165, 0),
        PieceKind::LShapeMirror => Rgb::new(80, 120, 220),
        PieceKind::Skew => Rgb::new(100, 220, 120),
        PieceKind::SkewMirror => Rgb::new(220, 80, 80),
    }
}
