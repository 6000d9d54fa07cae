//! MoveMask - per-tick "already resolved" flags
//!
//! Allocated once per grid size and cleared at the start of every tick.
//! A marked cell is never the active cell again in the same tick and never a
//! mutation target; it can still be read as a neighbor.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub struct MoveMask {
    marks: Vec<u8>,
    marked: usize,
}

impl MoveMask {
    pub fn new(size: usize) -> Self {
        Self {
            marks: vec![0; size],
            marked: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    #[inline]
    pub fn is_marked(&self, idx: usize) -> bool {
        self.marks[idx] == 1
    }

    /// Mark `idx` as resolved. Each cell may be marked at most once per tick.
    #[inline]
    pub fn mark(&mut self, idx: usize) {
        debug_assert!(
            self.marks[idx] == 0,
            "MoveMask: cell {} resolved twice in one tick",
            idx
        );
        if self.marks[idx] == 0 {
            self.marks[idx] = 1;
            self.marked += 1;
        }
    }

    /// Number of cells marked since the last `clear`.
    #[inline]
    pub fn marked_count(&self) -> usize {
        self.marked
    }

    /// Reset all flags, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.marks.par_iter_mut().for_each(|v| *v = 0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.marks.fill(0);
        }
        self.marked = 0;
    }

    /// Reallocate for a new grid size. All flags start cleared.
    pub fn resize(&mut self, size: usize) {
        self.marks = vec![0; size];
        self.marked = 0;
    }
}
