use wasm_bindgen::prelude::*;

/// Snapshot of the last `step()` (all zeros while metrics are disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) rules_ms: f64,
    pub(super) cells_updated: u32,
    pub(super) moved_cells: u32,
    pub(super) non_empty_cells: u32,
    pub(super) grid_size: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    /// Whole tick, mask clear included
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    /// Rule pass only
    #[wasm_bindgen(getter)]
    pub fn rules_ms(&self) -> f64 { self.rules_ms }
    /// Cells whose rule was dispatched
    #[wasm_bindgen(getter)]
    pub fn cells_updated(&self) -> u32 { self.cells_updated }
    /// Cells marked in the MoveMask
    #[wasm_bindgen(getter)]
    pub fn moved_cells(&self) -> u32 { self.moved_cells }
    #[wasm_bindgen(getter)]
    pub fn non_empty_cells(&self) -> u32 { self.non_empty_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
