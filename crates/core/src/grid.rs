//! Addressable cell matrix recolored on every render.

use crate::types::CellColor;

/// Row-major matrix of colorable cells.
///
/// Cell `(x, y)` lives at index `y * cols + x`. A new grid has no cells until
/// [`Grid::build`] is called.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: u16,
    cols: u16,
    cells: Vec<CellColor>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard any previous cells and lay out `rows * cols` fresh ones.
    pub fn build(&mut self, rows: u16, cols: u16) {
        self.rows = rows;
        self.cols = cols;
        self.cells.clear();
        self.cells
            .resize((rows as usize) * (cols as usize), CellColor::default());
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[CellColor] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.cols as i32 || y >= self.rows as i32 {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    /// Color of the cell at column `x`, row `y`.
    pub fn cell(&self, x: i32, y: i32) -> Option<CellColor> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, color: CellColor) -> bool {
        match self.idx(x, y) {
            Some(i) => {
                self.cells[i] = color;
                true
            }
            None => false,
        }
    }

    /// Paint every cell `empty`, then the player's cell `player`.
    ///
    /// Returns `false` when `(player_x, player_y)` is outside the built grid; in
    /// that case every cell is left `empty`.
    pub fn render(
        &mut self,
        player_x: i32,
        player_y: i32,
        empty: CellColor,
        player: CellColor,
    ) -> bool {
        self.cells.fill(empty);
        self.set(player_x, player_y, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbuilt_grid_has_no_cells() {
        let grid = Grid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.cell(0, 0), None);
    }

    #[test]
    fn build_replaces_previous_layout() {
        let mut grid = Grid::new();
        grid.build(3, 4);
        grid.set(3, 2, CellColor::Red);
        grid.build(2, 2);

        assert_eq!(grid.len(), 4);
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert!(grid.cells().iter().all(|&c| c == CellColor::default()));
    }

    #[test]
    fn index_is_row_major() {
        let mut grid = Grid::new();
        grid.build(3, 4);
        grid.set(1, 2, CellColor::Green);
        assert_eq!(grid.cells()[2 * 4 + 1], CellColor::Green);
    }

    #[test]
    fn render_out_of_range_leaves_only_empty_cells() {
        let mut grid = Grid::new();
        grid.build(2, 2);
        assert!(!grid.render(2, 0, CellColor::Blue, CellColor::Red));
        assert!(grid.cells().iter().all(|&c| c == CellColor::Blue));
        assert!(!grid.render(0, -1, CellColor::Blue, CellColor::Red));
    }
}
