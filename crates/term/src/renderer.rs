//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a size change or an explicit
//! [`TerminalRenderer::invalidate`]) is a full redraw; every other frame only
//! rewrites the runs of cells that changed since the previous one.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf().context("failed to enter alternate screen")
    }

    /// Undo everything [`TerminalRenderer::enter`] did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf().context("failed to leave alternate screen")?;
        terminal::disable_raw_mode().context("failed to disable raw mode")
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the retained previous frame.
    ///
    /// Callers keep one framebuffer and hand it in every frame; after the call
    /// it holds stale contents that the next `render_into` overwrites.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf().context("failed to write frame")
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in fb.row(y) {
            pen.print(out, cell)?;
        }
    }

    reset_into(out)
}

/// Encode only the changed runs of `next` relative to `prev` into `out`.
///
/// Both framebuffers must have the same size; a size change calls for
/// [`encode_full_into`] instead.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        for (start, end) in changed_runs(prev.row(y), row) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for cell in &row[start..end] {
                pen.print(out, cell)?;
            }
        }
    }

    reset_into(out)
}

/// Half-open `[start, end)` column ranges where `a` and `b` differ.
fn changed_runs<'a>(a: &'a [Cell], b: &'a [Cell]) -> impl Iterator<Item = (usize, usize)> + 'a {
    let len = a.len().min(b.len());
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < len && a[x] == b[x] {
            x += 1;
        }
        if x >= len {
            return None;
        }
        let start = x;
        while x < len && a[x] != b[x] {
            x += 1;
        }
        Some((start, x))
    })
}

/// Tracks the style last sent so runs of equal style emit no extra escapes.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, cell: &Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(rgb_to_color(cell.style.fg)))?;
            out.queue(SetBackgroundColor(rgb_to_color(cell.style.bg)))?;
            if cell.style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            self.style = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

fn reset_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(width: u16, xs: &[u16]) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, 1);
        for &x in xs {
            fb.put_char(x, 0, 'X', CellStyle::default());
        }
        fb
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = marked(8, &[]);
        let b = marked(8, &[1, 2, 3, 6]);
        let runs: Vec<_> = changed_runs(a.row(0), b.row(0)).collect();
        assert_eq!(runs, vec![(1, 4), (6, 7)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = marked(5, &[2]);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();

        let mut reset_only = Vec::new();
        reset_into(&mut reset_only).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn full_redraw_prints_every_cell() {
        let fb = marked(3, &[0, 2]);
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches('X').count(), 2);
    }

    #[test]
    fn style_conversion_keeps_components() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
