//! Grid dimensions with clamping to the supported glyph sizes.

/// Largest supported number of columns (bits per row).
pub const MAX_COLS: usize = 5;

/// Largest supported number of rows.
pub const MAX_ROWS: usize = 10;

/// Columns used when none are requested.
pub const DEFAULT_COLS: usize = 5;

/// Rows used when none are requested.
pub const DEFAULT_ROWS: usize = 8;

/// Size of a glyph grid. Always within `1..=MAX_COLS` by `1..=MAX_ROWS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    cols: usize,
    rows: usize,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
        }
    }
}

impl Dimensions {
    /// Build dimensions from arbitrary requested values, clamping each axis
    /// into its supported range.
    ///
    /// # Arguments
    /// * `cols` - Requested number of columns (any value, including negative)
    /// * `rows` - Requested number of rows (any value, including negative)
    ///
    /// # Example
    /// ```
    /// use glyphgen::glyph::Dimensions;
    ///
    /// let dims = Dimensions::clamped(0, 99);
    /// assert_eq!(dims.cols(), 1);
    /// assert_eq!(dims.rows(), 10);
    /// ```
    pub fn clamped(cols: i64, rows: i64) -> Self {
        Self {
            cols: clamp_axis(cols, MAX_COLS),
            rows: clamp_axis(rows, MAX_ROWS),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

fn clamp_axis(requested: i64, max: usize) -> usize {
    // max is at most 10, the cast cannot truncate
    requested.clamp(1, max as i64) as usize
}
