use crate::domain::materials::Material;
use crate::grid::{Grid, Rect};
use crate::systems::random::RandomSource;

/// Stone mountain peaking at the centre with a fire vent up its middle.
///
/// Randomized: per-column height jitter (0..5), magma pockets in ~10% of
/// columns, vent height jitter (0..5).
pub(super) fn volcano(grid: &mut Grid, rng: &mut dyn RandomSource) {
    let cols = grid.cols() as i64;
    let rows = grid.rows() as i64;
    let center = cols / 2;
    let half = (cols as f64 / 2.0).max(1.0);
    let max_height = (rows as f64 * 0.4) as i64;
    let vent_height = max_height + rng.below(5) as i64;

    for x in 0..cols {
        let falloff = 1.0 - ((x - center).abs() as f64) / half;
        let height = (rng.below(5) as i64 + (falloff * max_height as f64) as i64).min(rows);
        grid.fill(
            Rect::new(x as i32, (rows - height) as i32, 1, height as i32),
            Material::Stone,
        );

        if rng.chance(0.1) {
            let pockets = 1 + rng.below(3);
            for _ in 0..pockets {
                let depth = rng.below(height.max(1) as u32) as i64;
                grid.set(x as i32, (rows - depth - 1) as i32, Material::Fire);
            }
        }
    }

    let vent_height = vent_height.min(rows);
    grid.fill(
        Rect::new((center - 1) as i32, (rows - vent_height) as i32, 4, vent_height as i32),
        Material::Fire,
    );
}

/// Floating stone cup with a wood bottom, full of acid, above a garden of
/// water and a gunpowder mound on a stone floor.
pub(super) fn hazard(grid: &mut Grid) {
    let cols = grid.cols() as i32;
    let rows = grid.rows() as i32;

    let cup_height = (rows as f64 * 0.2) as i32;
    let cup_width = (cols as f64 * 0.3) as i32;
    let cup_x = (cols - cup_width) / 2;
    let cup_y = (rows as f64 * 0.4) as i32;

    grid.fill(Rect::new(cup_x, cup_y, 1, cup_height), Material::Stone);
    grid.fill(Rect::new(cup_x + cup_width - 1, cup_y, 1, cup_height), Material::Stone);
    grid.fill(Rect::new(cup_x + 1, cup_y + cup_height, cup_width - 2, 1), Material::Wood);
    grid.fill(
        Rect::new(cup_x + 1, cup_y + 1, cup_width - 2, cup_height - 1),
        Material::Acid,
    );

    let floor_y = rows - 5;
    grid.fill(Rect::new(0, floor_y, cols, 1), Material::Stone);

    let pool_start = (cols as f64 * 0.3) as i32;
    let pool_end = (cols as f64 * 0.7) as i32;
    grid.fill(Rect::new(pool_start, floor_y - 1, pool_end - pool_start, 1), Material::Water);

    // Stepped mound, widest at the bottom.
    for y in (floor_y - 6..=floor_y - 2).rev() {
        let width = (floor_y - y) * 2 + 1;
        let start = (cols - width) / 2;
        grid.fill(Rect::new(start, y, width, 1), Material::Gunpowder);
    }
}

/// Deep pool on a stone floor with a block of sand hanging above it.
pub(super) fn splash(grid: &mut Grid) {
    let cols = grid.cols() as i32;
    let rows = grid.rows() as i32;

    let basin_top = rows - 20;
    grid.fill(Rect::new(0, basin_top, cols, rows - basin_top - 1), Material::Water);
    grid.fill(Rect::new(0, rows - 1, cols, 1), Material::Stone);

    let drop = 20;
    let drop_x = (cols - drop) / 2;
    grid.fill(Rect::new(drop_x, 10, drop, drop), Material::Sand);
}

/// Gunpowder charge in a stone box (bottom right) with a fuse running along
/// the floor and up the left wall to a wood cell in the top-left corner.
pub(super) fn fuse(grid: &mut Grid) {
    let cols = grid.cols() as i32;
    let rows = grid.rows() as i32;

    let size = 10;
    let box_x = cols - size;
    let box_y = rows - size;
    grid.fill(Rect::new(box_x, box_y, size, size), Material::Stone);
    grid.fill(Rect::new(box_x + 1, box_y + 1, size - 2, size - 2), Material::Gunpowder);

    grid.fill(Rect::from_corners(0, rows - 1, box_x - 1, rows - 1), Material::Gunpowder);
    grid.fill(Rect::from_corners(0, 0, 0, rows - 2), Material::Gunpowder);
    grid.set(0, 0, Material::Wood);
}
