//! Material Rule Table
//!
//! Data-driven description of every material. The tick engine only looks at
//! `BehaviorKind` to dispatch and at the flag columns when a rule asks
//! "is this neighbor flammable / corrodible?", so adding a material means
//! adding a row here and (if it moves) a behavior.

use serde::Serialize;

use super::config::SimConfig;
use super::materials::{Material, MaterialId, MATERIAL_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BehaviorKind {
    /// No rule runs (empty, stone, gunpowder).
    Inert,
    /// Falls, sinks through water, slides diagonally.
    Powder,
    /// Falls, spreads sideways.
    Liquid,
    /// Static until touched by fire.
    Combustible,
    Fire,
    /// Rises through light materials, dissipates.
    Gas,
    /// Falls like a viscous liquid and eats corrodible neighbors.
    Corrosive,
}

/// Pack an `#RRGGBB` color into ABGR (little-endian canvas byte order).
pub const fn abgr(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

pub const BACKGROUND_COLOR: u32 = abgr(0, 0, 0);

#[derive(Clone, Copy, Debug)]
pub struct MaterialProps {
    pub material: Material,
    pub color: u32,
    /// Second hue a renderer may randomly pick instead of `color`.
    pub flicker_color: Option<u32>,
    pub is_static: bool,
    pub is_flammable: bool,
    pub is_corrodible: bool,
    /// Sets an adjacent combustible alight (spending its own turn).
    pub is_igniter: bool,
    pub behavior: BehaviorKind,
}

const fn props(
    material: Material,
    color: u32,
    is_static: bool,
    is_flammable: bool,
    is_corrodible: bool,
    behavior: BehaviorKind,
) -> MaterialProps {
    MaterialProps {
        material,
        color,
        flicker_color: None,
        is_static,
        is_flammable,
        is_corrodible,
        is_igniter: false,
        behavior,
    }
}

/// Built-in rows, indexed by material id.
pub const MATERIAL_DATA: [MaterialProps; MATERIAL_COUNT] = [
    props(Material::Empty, BACKGROUND_COLOR, true, false, false, BehaviorKind::Inert),
    props(Material::Sand, abgr(0xff, 0xae, 0x00), false, false, true, BehaviorKind::Powder),
    props(Material::Water, abgr(0x00, 0xff, 0xff), false, false, false, BehaviorKind::Liquid),
    props(Material::Stone, abgr(0x80, 0x80, 0x80), true, false, false, BehaviorKind::Inert),
    props(Material::Wood, abgr(0x8b, 0x45, 0x13), true, true, false, BehaviorKind::Combustible),
    MaterialProps {
        flicker_color: Some(abgr(0xff, 0x8c, 0x00)),
        is_igniter: true,
        ..props(Material::Fire, abgr(0xff, 0x45, 0x00), false, false, false, BehaviorKind::Fire)
    },
    props(Material::Smoke, abgr(0x55, 0x55, 0x55), false, false, false, BehaviorKind::Gas),
    props(Material::Acid, abgr(0x32, 0xcd, 0x32), false, false, false, BehaviorKind::Corrosive),
    MaterialProps {
        is_igniter: true,
        ..props(Material::Gunpowder, abgr(0x33, 0x33, 0x33), true, true, true, BehaviorKind::Inert)
    },
];

/// Per-tick probabilities used by the rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RuleTuning {
    pub fire_burnout_chance: f32,
    pub smoke_dissipate_chance: f32,
    pub acid_spread_chance: f32,
    pub acid_corrode_chance: f32,
}

impl From<&SimConfig> for RuleTuning {
    fn from(config: &SimConfig) -> Self {
        Self {
            fire_burnout_chance: config.fire_burnout_chance,
            smoke_dissipate_chance: config.smoke_dissipate_chance,
            acid_spread_chance: config.acid_spread_chance,
            acid_corrode_chance: config.acid_corrode_chance,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RuleTable {
    materials: [MaterialProps; MATERIAL_COUNT],
    tuning: RuleTuning,
}

impl RuleTable {
    pub fn from_config(config: &SimConfig) -> Self {
        let mut materials = MATERIAL_DATA;
        materials[Material::Wood.index()].is_corrodible = config.acid_corrodes_wood;
        materials[Material::Stone.index()].is_corrodible = config.acid_corrodes_stone;
        Self {
            materials,
            tuning: RuleTuning::from(config),
        }
    }

    #[inline]
    pub fn props(&self, m: Material) -> &MaterialProps {
        &self.materials[m.index()]
    }

    #[inline]
    pub fn behavior(&self, m: Material) -> BehaviorKind {
        self.materials[m.index()].behavior
    }

    #[inline]
    pub fn is_flammable(&self, m: Material) -> bool {
        self.materials[m.index()].is_flammable
    }

    #[inline]
    pub fn is_corrodible(&self, m: Material) -> bool {
        self.materials[m.index()].is_corrodible
    }

    #[inline]
    pub fn is_igniter(&self, m: Material) -> bool {
        self.materials[m.index()].is_igniter
    }

    #[inline]
    pub fn is_static(&self, m: Material) -> bool {
        self.materials[m.index()].is_static
    }

    #[inline]
    pub fn tuning(&self) -> &RuleTuning {
        &self.tuning
    }

    pub fn manifest_json(&self) -> String {
        let out = MaterialManifest {
            format_version: 1,
            materials: self
                .materials
                .iter()
                .map(|p| ManifestEntry {
                    id: p.material.id(),
                    name: p.material.name(),
                    color: p.color,
                    is_static: p.is_static,
                    flammable: p.is_flammable,
                    corrodible: p.is_corrodible,
                })
                .collect(),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

#[derive(Serialize)]
struct MaterialManifest {
    format_version: u32,
    materials: Vec<ManifestEntry>,
}

#[derive(Serialize)]
struct ManifestEntry {
    id: MaterialId,
    name: &'static str,
    color: u32,
    is_static: bool,
    flammable: bool,
    corrodible: bool,
}
