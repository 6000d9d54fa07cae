use wasm_bindgen::prelude::*;

use crate::domain::materials::MaterialId;
use crate::scenarios::scenario_names;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

fn to_js(err: crate::domain::error::SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions and a stone floor
    #[wasm_bindgen(constructor)]
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            core: WorldCore::new(cols, rows),
        }
    }

    /// Create a world from a JSON config (missing fields use defaults)
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<World, JsValue> {
        let config = crate::domain::config::SimConfig::from_json(&json).map_err(to_js)?;
        let core = WorldCore::with_config(config).map_err(to_js)?;
        Ok(World { core })
    }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.core.cols() }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.core.rows() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn get_cell(&self, x: i32, y: i32) -> MaterialId {
        self.core.get_cell(x, y).id()
    }

    pub fn set_cell(&mut self, x: i32, y: i32, material: MaterialId) -> Result<(), JsValue> {
        self.core.set_cell(x, y, material).map_err(to_js)
    }

    /// Paint a disk of `material` (0 erases)
    pub fn paint_brush(&mut self, cx: i32, cy: i32, radius: i32, material: MaterialId) -> Result<(), JsValue> {
        self.core.paint_brush(cx, cy, radius, material).map_err(to_js)
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn load_scenario(&mut self, name: &str) -> Result<(), JsValue> {
        self.core.load_scenario(name).map(|_| ()).map_err(to_js)
    }

    pub fn resize(&mut self, cols: u32, rows: u32) -> Result<(), JsValue> {
        self.core.resize(cols, rows).map_err(to_js)
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(to_js)
    }

    pub fn get_config_json(&self) -> String {
        self.core.config_json()
    }

    pub fn get_material_manifest_json(&self) -> String {
        self.core.material_manifest_json()
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn moved_last_step(&self, x: i32, y: i32) -> bool {
        self.core.moved_last_step(x, y)
    }

    /// Calls `f(x, y, material)` for every cell, row by row.
    /// Exceptions thrown by `f` abort the iteration and are returned.
    pub fn for_each_cell(&self, f: &js_sys::Function) -> Result<(), JsValue> {
        let this = JsValue::NULL;
        let mut result = Ok(());
        self.core.for_each_cell(|x, y, m| {
            if result.is_ok() {
                result = f
                    .call3(&this, &JsValue::from(x), &JsValue::from(y), &JsValue::from(m.id()))
                    .map(|_| ());
            }
        });
        result
    }

    /// Refresh the color buffer; read it through `colors_ptr`/`colors_len`.
    pub fn render(&mut self) {
        self.core.render_colors();
    }

    /// Pointer to material ids (one byte per cell) for zero-copy reads
    pub fn types_ptr(&self) -> *const u8 {
        self.core.types_ptr()
    }

    pub fn types_len(&self) -> usize {
        self.core.types_len()
    }

    /// Pointer to ABGR colors filled by `render()`
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn scenario_names(&self) -> js_sys::Array {
        scenario_names().into_iter().map(JsValue::from_str).collect()
    }
}
