use crate::behaviors::BehaviorRegistry;
use crate::domain::config::{SimConfig, MAX_CELLS};
use crate::domain::materials::Material;
use crate::domain::rules::{RuleTable, BACKGROUND_COLOR};
use crate::grid::{Grid, MoveMask, Rect};
use crate::systems::random::XorShift32;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Mixed into the seed so the render generator never mirrors the simulation one.
const RENDER_SEED_SALT: u32 = 0x5BD1_E995;

pub(super) fn create_world_core(config: SimConfig) -> WorldCore {
    let grid = new_grid(config.cols, config.rows, config.floor_rows);
    let size = grid.size();

    WorldCore {
        mask: MoveMask::new(size),
        rules: RuleTable::from_config(&config),
        behaviors: BehaviorRegistry::new(),
        rng: Box::new(XorShift32::new(config.seed)),
        render_rng: XorShift32::new(config.seed ^ RENDER_SEED_SALT),
        colors: vec![BACKGROUND_COLOR; size],
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        grid,
        config,
    }
}

/// Default config at the requested size, forced into the valid range.
pub(super) fn clamped_config(cols: u32, rows: u32) -> SimConfig {
    let cols = (cols.max(1) as u64).min(MAX_CELLS);
    let rows = (rows.max(1) as u64).min(MAX_CELLS / cols);
    SimConfig::default().with_dimensions(cols as u32, rows as u32)
}

/// Fresh grid with `floor_rows` of stone along the bottom.
pub(super) fn new_grid(cols: u32, rows: u32, floor_rows: u32) -> Grid {
    let mut grid = Grid::new(cols, rows);
    let floor = floor_rows.min(rows) as i32;
    if floor > 0 {
        let rows = rows as i32;
        grid.fill(Rect::new(0, rows - floor, cols as i32, floor), Material::Stone);
    }
    grid
}
