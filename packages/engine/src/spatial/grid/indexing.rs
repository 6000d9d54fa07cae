use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn size(&self) -> usize { self.cells.len() }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.cols && y < self.rows,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.cols,
            self.rows
        );
        (y as usize) * (self.cols as usize) + (x as usize)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as i64) < self.cols as i64 && y >= 0 && (y as i64) < self.rows as i64
    }

    /// Index for signed coordinates, `None` when outside the grid.
    #[inline]
    pub fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(self.index(x as u32, y as u32))
        } else {
            None
        }
    }
}
