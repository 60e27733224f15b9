//! Framebuffer and style types for terminal rendering.

use crate::types::CellColor;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<CellColor> for Rgb {
    fn from(color: CellColor) -> Self {
        let (r, g, b) = color.rgb();
        Self { r, g, b }
    }
}

/// Per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

impl CellStyle {
    /// Default foreground on the given background.
    pub fn on(bg: Rgb) -> Self {
        Self {
            bg,
            ..Self::default()
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
///
/// Writes outside the buffer are clipped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize in place, keeping the allocation when the size is unchanged.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Cells of row `y`, or an empty slice past the last row.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = (y as usize) * (self.width as usize);
        &self.cells[start..start + self.width as usize]
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            let Some(cx) = x.checked_add(i as u16).filter(|&cx| cx < self.width) else {
                break;
            };
            self.put_char(cx, y, ch, style);
        }
    }

    /// Paint a `w` x `h` block of blanks on background `bg`.
    pub fn fill_bg(&mut self, x: u16, y: u16, w: u16, h: u16, bg: Rgb) {
        let style = CellStyle::on(bg);
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ' ', style);
            }
        }
    }

    /// Row `y` as a string of characters (styles dropped). Handy in tests.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_outside_are_clipped() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(1, 0, "abcdef", CellStyle::default());
        fb.put_char(5, 5, 'z', CellStyle::default());
        assert_eq!(fb.row_text(0), " ab");
        assert_eq!(fb.get(5, 5), None);
    }

    #[test]
    fn resize_resets_new_area() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.put_char(0, 0, '#', CellStyle::default());
        fb.resize(2, 2);
        assert_eq!(fb.get(0, 1), Some(Cell::default()));
    }

    #[test]
    fn fill_bg_paints_blanks_and_clips() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(2, 1, '#', CellStyle::default());
        let red = Rgb::from(CellColor::Red);
        fb.fill_bg(1, 1, 4, 4, red);

        assert_eq!(fb.get(0, 1), Some(Cell::default()));
        for x in 1..3 {
            let cell = fb.get(x, 1).unwrap();
            assert_eq!((cell.ch, cell.style.bg), (' ', red));
        }

        fb.clear();
        assert!(fb.row(1).iter().all(|c| *c == Cell::default()));
    }

    #[test]
    fn cell_color_converts_to_rgb() {
        assert_eq!(Rgb::from(CellColor::Black), Rgb::new(0, 0, 0));
        let (r, g, b) = CellColor::Red.rgb();
        assert_eq!(Rgb::from(CellColor::Red), Rgb::new(r, g, b));
    }
}
