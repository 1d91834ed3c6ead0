//! The glyph matrix and its logical cursor.

use super::dimensions::{Dimensions, MAX_COLS, MAX_ROWS};

/// State of a single glyph cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pixel {
    #[default]
    Dark,
    Lit,
}

impl Pixel {
    pub fn is_lit(self) -> bool {
        self == Pixel::Lit
    }
}

/// A cell address, `row` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Cardinal direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

type Cells = [[Pixel; MAX_COLS]; MAX_ROWS];

/// Editable glyph bitmap with a logical cursor.
///
/// The matrix is always allocated at the maximum size; only the top-left
/// `rows x cols` region is addressable. Cells outside it stay dark.
#[derive(Debug, Clone)]
pub struct Glyph {
    dims: Dimensions,
    cells: Cells,
    cursor: Cell,
}

impl Glyph {
    /// Create an all-dark glyph with the cursor at the origin.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: [[Pixel::Dark; MAX_COLS]; MAX_ROWS],
            cursor: Cell::ORIGIN,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// The cell currently under editing focus.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Pixel at `cell`, or `None` if the cell lies outside the grid.
    pub fn get(&self, cell: Cell) -> Option<Pixel> {
        self.contains(cell).then(|| self.cells[cell.row][cell.col])
    }

    /// Move the cursor one cell in `dir`.
    ///
    /// Movement stops at the grid edges: a step that would leave the grid is
    /// a no-op.
    ///
    /// # Returns
    /// `true` if the cursor moved.
    pub fn move_cursor(&mut self, dir: Direction) -> bool {
        let Cell { row, col } = self.cursor;
        let next = match dir {
            Direction::Up if row > 0 => Cell::new(row - 1, col),
            Direction::Down if row + 1 < self.dims.rows() => Cell::new(row + 1, col),
            Direction::Left if col > 0 => Cell::new(row, col - 1),
            Direction::Right if col + 1 < self.dims.cols() => Cell::new(row, col + 1),
            _ => return false,
        };
        self.cursor = next;
        true
    }

    /// Set the pixel under the cursor. The cursor does not move.
    pub fn paint(&mut self, pixel: Pixel) {
        let Cell { row, col } = self.cursor;
        self.cells[row][col] = pixel;
    }

    /// Darken every cell and return the cursor to the origin.
    pub fn clear_all(&mut self) {
        self.cells = [[Pixel::Dark; MAX_COLS]; MAX_ROWS];
        self.cursor = Cell::ORIGIN;
    }

    /// Owned copy of the matrix for encoding.
    pub fn snapshot(&self) -> GlyphSnapshot {
        GlyphSnapshot {
            dims: self.dims,
            cells: self.cells,
        }
    }

    fn contains(&self, cell: Cell) -> bool {
        cell.row < self.dims.rows() && cell.col < self.dims.cols()
    }
}

/// Immutable copy of a glyph's cells, detached from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSnapshot {
    dims: Dimensions,
    cells: Cells,
}

impl GlyphSnapshot {
    /// Build a snapshot directly from row data.
    ///
    /// Rows beyond `dims.rows()` and columns beyond `dims.cols()` are
    /// ignored; missing ones are dark.
    pub fn from_rows(dims: Dimensions, rows: &[Vec<Pixel>]) -> Self {
        let mut cells = [[Pixel::Dark; MAX_COLS]; MAX_ROWS];
        for (r, row) in rows.iter().take(dims.rows()).enumerate() {
            for (c, pixel) in row.iter().take(dims.cols()).enumerate() {
                cells[r][c] = *pixel;
            }
        }
        Self { dims, cells }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Addressable rows, top to bottom, each `cols` pixels wide.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        let cols = self.dims.cols();
        self.cells[..self.dims.rows()].iter().map(move |row| &row[..cols])
    }

    /// Whether any cell is lit.
    pub fn is_blank(&self) -> bool {
        self.rows().all(|row| row.iter().all(|p| !p.is_lit()))
    }
}
