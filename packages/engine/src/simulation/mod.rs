//! World - falling-sand simulation host API
//!
//! `WorldCore` only orchestrates: it owns the grid, the per-tick MoveMask,
//! the rule table and the random source, and delegates each operation to a
//! small module below.
//!
//! Per-material rules live in systems/behaviors/
//! Scenario layouts live in scenarios/
//! The wasm-bindgen wrapper lives in facade.rs

use crate::behaviors::BehaviorRegistry;
use crate::domain::config::SimConfig;
use crate::domain::error::SimError;
use crate::domain::materials::{Material, MaterialId};
use crate::domain::rules::RuleTable;
use crate::grid::{Grid, MoveMask};
use crate::scenarios::Scenario;
use crate::systems::random::{RandomSource, XorShift32};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    grid: Grid,
    mask: MoveMask,
    rules: RuleTable,
    behaviors: BehaviorRegistry,
    config: SimConfig,

    // Simulation draws only; rendering has its own generator.
    rng: Box<dyn RandomSource>,
    render_rng: XorShift32,
    colors: Vec<u32>,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with default tuning. Zero dimensions are bumped to 1
    /// and oversized grids are clamped to `MAX_CELLS`.
    pub fn new(cols: u32, rows: u32) -> Self {
        init::create_world_core(init::clamped_config(cols, rows))
    }

    /// Create a world from a validated config.
    pub fn with_config(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(init::create_world_core(config))
    }

    pub fn cols(&self) -> u32 { self.grid.cols() }

    pub fn rows(&self) -> u32 { self.grid.rows() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn rules(&self) -> &RuleTable { &self.rules }

    pub fn config(&self) -> &SimConfig { &self.config }

    /// Number of non-empty cells
    pub fn particle_count(&self) -> u32 {
        self.grid.non_empty_count() as u32
    }

    pub fn material_count(&self, material: Material) -> u32 {
        self.grid.count(material) as u32
    }

    /// Cell read; outside the grid is boundary material.
    pub fn get_cell(&self, x: i32, y: i32) -> Material {
        self.grid.get(x, y)
    }

    /// Set one cell from a host material id. Out-of-range coordinates are a
    /// silent no-op; unknown ids are rejected.
    pub fn set_cell(&mut self, x: i32, y: i32, id: MaterialId) -> Result<(), SimError> {
        commands::set_cell(self, x, y, id)
    }

    pub fn set_material(&mut self, x: i32, y: i32, material: Material) {
        commands::set_material(self, x, y, material);
    }

    /// Brush: every cell with `dx² + dy² <= radius²`, clipped to the grid.
    pub fn paint_brush(&mut self, cx: i32, cy: i32, radius: i32, id: MaterialId) -> Result<(), SimError> {
        commands::paint_brush(self, cx, cy, radius, id)
    }

    /// Set every cell to `Empty`.
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Replace the grid content with a named layout. Unknown names leave the
    /// grid untouched.
    pub fn load_scenario(&mut self, name: &str) -> Result<Scenario, SimError> {
        commands::load_scenario(self, name)
    }

    pub fn apply_scenario(&mut self, scenario: Scenario) {
        commands::apply_scenario(self, scenario);
    }

    /// Reinitialize the grid at a new size (content is not preserved).
    pub fn resize(&mut self, cols: u32, rows: u32) -> Result<(), SimError> {
        settings::resize(self, cols, rows)
    }

    /// Swap tuning at runtime. Changing `cols`, `rows` or `floor_rows`
    /// rebuilds the grid (content is not preserved); other fields leave it alone.
    pub fn apply_config(&mut self, config: SimConfig) -> Result<(), SimError> {
        settings::apply_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), SimError> {
        let config = SimConfig::from_json(json)?;
        self.apply_config(config)
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    /// Replace the simulation random source (tests use `FixedSequence`).
    pub fn set_random_source(&mut self, rng: Box<dyn RandomSource>) {
        self.rng = rng;
    }

    /// Advance the whole grid by exactly one tick.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Was `(x, y)` marked in the MoveMask during the last tick?
    pub fn moved_last_step(&self, x: i32, y: i32) -> bool {
        match self.grid.checked_index(x, y) {
            Some(idx) => self.mask.is_marked(idx),
            None => false,
        }
    }

    /// Visit every cell in row-major order.
    pub fn for_each_cell<F: FnMut(u32, u32, Material)>(&self, f: F) {
        self.grid.for_each_cell(f);
    }

    /// Refresh and return the ABGR color buffer (one entry per cell).
    pub fn render_colors(&mut self) -> &[u32] {
        render_extract::render_colors(self);
        &self.colors
    }

    pub fn types_ptr(&self) -> *const u8 { self.grid.types_ptr() }

    pub fn types_len(&self) -> usize { self.grid.size() }

    pub fn colors_ptr(&self) -> *const u32 { self.colors.as_ptr() }

    pub fn colors_len(&self) -> usize { self.colors.len() }

    pub fn material_manifest_json(&self) -> String {
        self.rules.manifest_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

impl Default for WorldCore {
    fn default() -> Self {
        init::create_world_core(SimConfig::default())
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
