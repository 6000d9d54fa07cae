//! Grid - owned, row-major buffer of materials
//!
//! One `Material` per cell, nothing else. Reads outside the grid return
//! `Material::BOUNDARY`, writes outside the grid are dropped, so callers never
//! have to pre-clip coordinates.

use crate::domain::materials::Material;

mod indexing;
mod accessors;
mod move_mask;

pub use move_mask::MoveMask;

/// Axis-aligned cell rectangle. May extend past the grid; bulk writes clip it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle spanning the inclusive corners `(x0, y0)` and `(x1, y1)`.
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (lx, hx) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (ly, hy) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self::new(lx, ly, hx - lx + 1, hy - ly + 1)
    }
}

pub struct Grid {
    cols: u32,
    rows: u32,
    cells: Vec<Material>,
}

impl Grid {
    pub fn new(cols: u32, rows: u32) -> Self {
        let size = (cols as usize) * (rows as usize);
        Self {
            cols,
            rows,
            cells: vec![Material::Empty; size],
        }
    }
}
