use super::super::*;

impl Grid {
    /// Material at `(x, y)`, or the boundary material when out of range.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Material {
        match self.checked_index(x, y) {
            Some(idx) => self.cells[idx],
            None => Material::BOUNDARY,
        }
    }

    /// Overwrite `(x, y)`. Out-of-range writes are ignored.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, material: Material) {
        if let Some(idx) = self.checked_index(x, y) {
            self.cells[idx] = material;
        }
    }

    // === Index access (caller guarantees idx < size) ===
    #[inline]
    pub fn get_idx(&self, idx: usize) -> Material {
        self.cells[idx]
    }

    #[inline]
    pub fn set_idx(&mut self, idx: usize, material: Material) {
        self.cells[idx] = material;
    }

    #[inline]
    pub fn swap_idx(&mut self, a: usize, b: usize) {
        self.cells.swap(a, b);
    }

    #[inline]
    pub fn cells(&self) -> &[Material] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_reads_are_boundary() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.get(-1, 0), Material::BOUNDARY);
        assert_eq!(grid.get(0, -1), Material::BOUNDARY);
        assert_eq!(grid.get(4, 0), Material::BOUNDARY);
        assert_eq!(grid.get(0, 3), Material::BOUNDARY);
        assert_eq!(grid.get(i32::MIN, i32::MAX), Material::BOUNDARY);
        assert_eq!(grid.get(3, 2), Material::Empty);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut grid = Grid::new(4, 3);
        grid.set(-1, 0, Material::Sand);
        grid.set(4, 2, Material::Sand);
        grid.set(0, 3, Material::Sand);
        assert!(grid.cells().iter().all(|m| *m == Material::Empty));

        grid.set(3, 2, Material::Water);
        assert_eq!(grid.get(3, 2), Material::Water);
        assert_eq!(grid.get_idx(grid.index(3, 2)), Material::Water);
    }

    #[test]
    fn swap_exchanges_cells() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Material::Sand);
        grid.set(0, 1, Material::Water);
        let (a, b) = (grid.index(0, 0), grid.index(0, 1));
        grid.swap_idx(a, b);
        assert_eq!(grid.get(0, 0), Material::Water);
        assert_eq!(grid.get(0, 1), Material::Sand);
    }
}
