use tracing::debug;

use crate::domain::config::{validate_dimensions, SimConfig};
use crate::domain::error::SimError;
use crate::domain::rules::{RuleTable, BACKGROUND_COLOR};
use crate::systems::random::XorShift32;

use super::init::new_grid;
use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn resize(world: &mut WorldCore, cols: u32, rows: u32) -> Result<(), SimError> {
    validate_dimensions(cols, rows)?;
    rebuild_grid(world, cols, rows);
    world.config.cols = cols;
    world.config.rows = rows;
    debug!(cols, rows, "grid resized");
    Ok(())
}

pub(super) fn apply_config(world: &mut WorldCore, config: SimConfig) -> Result<(), SimError> {
    config.validate()?;

    if config.cols != world.grid.cols()
        || config.rows != world.grid.rows()
        || config.floor_rows != world.config.floor_rows
    {
        world.config.floor_rows = config.floor_rows;
        rebuild_grid(world, config.cols, config.rows);
    }
    if config.seed != world.config.seed {
        world.rng = Box::new(XorShift32::new(config.seed));
    }

    world.rules = RuleTable::from_config(&config);
    debug!(
        fire_burnout = config.fire_burnout_chance,
        smoke_dissipate = config.smoke_dissipate_chance,
        acid_spread = config.acid_spread_chance,
        acid_corrode = config.acid_corrode_chance,
        "config applied"
    );
    world.config = config;
    Ok(())
}

fn rebuild_grid(world: &mut WorldCore, cols: u32, rows: u32) {
    world.grid = new_grid(cols, rows, world.config.floor_rows);
    let size = world.grid.size();
    world.mask.resize(size);
    world.colors = vec![BACKGROUND_COLOR; size];
    world.frame = 0;
}
