//! GridView: maps a `core::Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const TITLE: &str = " grid-walk ";
const HINT: &str = "arrows/WASD move  q quit";

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

/// Top-left corner of the grid frame inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOrigin {
    pub x: u16,
    pub y: u16,
}

/// Paints the grid centered in the viewport, inside a box border.
pub struct GridView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GridView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GridView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Frame size (grid plus border) in terminal cells.
    pub fn frame_size(&self, grid: &Grid) -> (u16, u16) {
        (
            grid.cols().saturating_mul(self.cell_w).saturating_add(2),
            grid.rows().saturating_mul(self.cell_h).saturating_add(2),
        )
    }

    pub fn origin(&self, grid: &Grid, viewport: Viewport) -> FrameOrigin {
        let (frame_w, frame_h) = self.frame_size(grid);
        FrameOrigin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
        }
    }

    /// Render the grid into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, grid: &Grid, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = self.frame_size(grid);
        let origin = self.origin(grid, viewport);

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(fb, origin, frame_w, frame_h, border);

        if frame_w >= TITLE.len() as u16 + 4 {
            let title = CellStyle {
                bold: true,
                ..border
            };
            fb.put_str(origin.x + 2, origin.y, TITLE, title);
        }

        let left = origin.x.saturating_add(1);
        let top = origin.y.saturating_add(1);
        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                if let Some(color) = grid.cell(x as i32, y as i32) {
                    let px = left.saturating_add(x.saturating_mul(self.cell_w));
                    let py = top.saturating_add(y.saturating_mul(self.cell_h));
                    fb.fill_bg(px, py, self.cell_w, self.cell_h, Rgb::from(color));
                }
            }
        }

        let hint_y = origin.y.saturating_add(frame_h);
        if hint_y < viewport.height {
            let hint_w = HINT.chars().count() as u16;
            let hint_x = viewport.width.saturating_sub(hint_w) / 2;
            let dim = CellStyle {
                fg: Rgb::new(140, 140, 140),
                ..CellStyle::default()
            };
            fb.put_str(hint_x, hint_y, HINT, dim);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, viewport, &mut fb);
        fb
    }

    fn draw_border(
        &self,
        fb: &mut FrameBuffer,
        at: FrameOrigin,
        w: u16,
        h: u16,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        let (x, y) = (at.x, at.y);
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }
}
