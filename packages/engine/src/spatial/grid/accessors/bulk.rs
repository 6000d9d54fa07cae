use super::super::*;

impl Grid {
    /// Fill `rect` clipped to the grid.
    pub fn fill(&mut self, rect: Rect, material: Material) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let x0 = (rect.x as i64).max(0);
        let y0 = (rect.y as i64).max(0);
        let x1 = (rect.x as i64 + rect.w as i64).min(self.cols as i64);
        let y1 = (rect.y as i64 + rect.h as i64).min(self.rows as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for y in y0..y1 {
            let start = self.index(x0 as u32, y as u32);
            let end = start + (x1 - x0) as usize;
            self.cells[start..end].fill(material);
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Material::Empty);
    }

    /// Visit every cell in row-major order.
    pub fn for_each_cell<F: FnMut(u32, u32, Material)>(&self, mut f: F) {
        let cols = self.cols as usize;
        if cols == 0 {
            return;
        }
        for (idx, m) in self.cells.iter().enumerate() {
            f((idx % cols) as u32, (idx / cols) as u32, *m);
        }
    }

    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|m| **m == material).count()
    }

    pub fn non_empty_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }
}
