//! BoardView: maps a [`FrameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Layout, top to bottom: a score
//! line, then the bordered board with each grid cell drawn `cell_w x cell_h`
//! characters large.

use crate::core::FrameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceColor, COLS, ROWS};

const BOARD_BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: CellStyle = CellStyle::new(Rgb::WHITE, BOARD_BG).bold();
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BOARD_BG);
const EMPTY: CellStyle = CellStyle::new(Rgb::new(60, 60, 70), BOARD_BG);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 roughly squares a cell in common terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl BoardView {
    /// Characters needed for score line, border and board: (width, height)
    pub fn size(&self) -> (u16, u16) {
        (
            COLS as u16 * self.cell_w + 2,
            ROWS as u16 * self.cell_h + 3,
        )
    }

    /// Draw settled cells, the active piece and the score.
    pub fn render_into(&self, frame: &FrameSnapshot, fb: &mut FrameBuffer) {
        self.prepare(fb);

        fb.put_str(0, 0, &format!("Score: {}", frame.score), TEXT);

        for (y, row) in frame.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(color) => self.draw_block(fb, x as u16, y as u16, *color),
                    None => self.fill_cell(fb, x as u16, y as u16, '·', EMPTY),
                }
            }
        }

        if let Some(active) = frame.active {
            for (x, y) in active.visible_cells() {
                self.draw_block(fb, x as u16, y as u16, active.color);
            }
        }
    }

    /// Blank board with a centered "Game Over".
    pub fn render_game_over_into(&self, fb: &mut FrameBuffer) {
        self.prepare(fb);
        let (w, h) = self.size();
        let text = "Game Over";
        let x = w.saturating_sub(text.len() as u16) / 2;
        fb.put_str(x, 1 + h / 2, text, TEXT);
    }

    pub fn render(&self, frame: &FrameSnapshot) -> FrameBuffer {
        let (w, h) = self.size();
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(frame, &mut fb);
        fb
    }

    fn prepare(&self, fb: &mut FrameBuffer) {
        let (w, h) = self.size();
        fb.resize(w, h);
        fb.clear(CellStyle::new(Rgb::WHITE, BOARD_BG));
        self.draw_border(fb, 0, 1, w, h - 1);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x: u16, y: u16, color: PieceColor) {
        let style = CellStyle::new(color.rgb(), BOARD_BG).bold();
        self.fill_cell(fb, x, y, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, x: u16, y: u16, ch: char, style: CellStyle) {
        // One column for the left border, two rows for score line and top border.
        let px = 1 + x * self.cell_w;
        let py = 2 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}
