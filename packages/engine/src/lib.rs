//! Sandfall Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - domain/     - materials, rule table, config, errors
//! - spatial/    - grid store and per-tick move mask
//! - systems/    - random sources and per-material behaviors
//! - scenarios/  - preset layouts
//! - simulation/ - WorldCore orchestration and the wasm facade

pub mod domain;
pub mod spatial;
pub mod systems;
pub mod scenarios;
pub mod simulation;

pub use spatial::grid;
pub use systems::behaviors;
pub use domain::materials;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Sandfall WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::SimConfig;
pub use domain::error::SimError;
pub use domain::materials::{Material, MaterialId};
pub use scenarios::Scenario;
pub use simulation::{PerfStats, World, WorldCore};
pub use systems::random::{FixedSequence, RandomSource, XorShift32};

// Export material ids for JS
#[wasm_bindgen]
pub fn mat_empty() -> u8 { Material::Empty.id() }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { Material::Sand.id() }
#[wasm_bindgen]
pub fn mat_water() -> u8 { Material::Water.id() }
#[wasm_bindgen]
pub fn mat_stone() -> u8 { Material::Stone.id() }
#[wasm_bindgen]
pub fn mat_wood() -> u8 { Material::Wood.id() }
#[wasm_bindgen]
pub fn mat_fire() -> u8 { Material::Fire.id() }
#[wasm_bindgen]
pub fn mat_smoke() -> u8 { Material::Smoke.id() }
#[wasm_bindgen]
pub fn mat_acid() -> u8 { Material::Acid.id() }
#[wasm_bindgen]
pub fn mat_gunpowder() -> u8 { Material::Gunpowder.id() }
