//! Placement of the editor's elements on the terminal.
//!
//! Cells are spaced out so the grid resembles an LCD with gaps between
//! pixels: cell `(r, c)` is drawn at `(ORIGIN_Y + r * DY, ORIGIN_X + c * DX)`.

use crate::glyph::Cell;

/// Screen row of cell row 0.
pub const ORIGIN_Y: u16 = 5;
/// Screen column of cell column 0.
pub const ORIGIN_X: u16 = 3;
/// Screen rows between adjacent cell rows.
pub const DY: u16 = 2;
/// Screen columns between adjacent cell columns.
pub const DX: u16 = 4;

/// Title shown above the legend.
pub const BANNER: &str = "LCD Glyph Generator";
/// Key legend shown above the grid.
pub const LEGEND: &str = "f:fill  d:delete  c:clear  q:exit";

/// A zero-based terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPos {
    pub y: u16,
    pub x: u16,
}

/// Maps glyph cells to terminal positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    origin: ScreenPos,
    dy: u16,
    dx: u16,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            origin: ScreenPos {
                y: ORIGIN_Y,
                x: ORIGIN_X,
            },
            dy: DY,
            dx: DX,
        }
    }
}

impl Projection {
    /// Terminal position of `cell`.
    ///
    /// Grids are at most 10 x 5 cells, so positions stay far below
    /// `u16::MAX`.
    pub fn project(&self, cell: Cell) -> ScreenPos {
        ScreenPos {
            y: self.origin.y + cell.row as u16 * self.dy,
            x: self.origin.x + cell.col as u16 * self.dx,
        }
    }

    /// Inverse of [`Projection::project`]; `None` for positions between or
    /// before cells.
    pub fn cell_at(&self, pos: ScreenPos) -> Option<Cell> {
        let dy = pos.y.checked_sub(self.origin.y)?;
        let dx = pos.x.checked_sub(self.origin.x)?;
        if dy % self.dy != 0 || dx % self.dx != 0 {
            return None;
        }
        Some(Cell::new(usize::from(dy / self.dy), usize::from(dx / self.dx)))
    }

    /// Where the title banner starts.
    pub fn banner(&self) -> ScreenPos {
        ScreenPos {
            y: self.origin.y.saturating_sub(4),
            x: self.origin.x,
        }
    }

    /// Where the key legend starts.
    pub fn legend(&self) -> ScreenPos {
        ScreenPos {
            y: self.origin.y.saturating_sub(2),
            x: self.origin.x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_origin() {
        let p = Projection::default();
        assert_eq!(p.project(Cell::ORIGIN), ScreenPos { y: 5, x: 3 });
    }

    #[test]
    fn test_project_spacing() {
        let p = Projection::default();
        assert_eq!(p.project(Cell::new(1, 0)), ScreenPos { y: 7, x: 3 });
        assert_eq!(p.project(Cell::new(0, 1)), ScreenPos { y: 5, x: 7 });
        assert_eq!(p.project(Cell::new(9, 4)), ScreenPos { y: 23, x: 19 });
    }

    #[test]
    fn test_cell_at_inverts_project() {
        let p = Projection::default();
        for row in 0..10 {
            for col in 0..5 {
                let cell = Cell::new(row, col);
                assert_eq!(p.cell_at(p.project(cell)), Some(cell));
            }
        }
    }

    #[test]
    fn test_cell_at_between_cells() {
        let p = Projection::default();
        assert_eq!(p.cell_at(ScreenPos { y: 6, x: 3 }), None);
        assert_eq!(p.cell_at(ScreenPos { y: 5, x: 4 }), None);
        assert_eq!(p.cell_at(ScreenPos { y: 1, x: 3 }), None);
    }

    #[test]
    fn test_banner_and_legend_above_grid() {
        let p = Projection::default();
        assert_eq!(p.banner(), ScreenPos { y: 1, x: 3 });
        assert_eq!(p.legend(), ScreenPos { y: 3, x: 3 });
    }
}
