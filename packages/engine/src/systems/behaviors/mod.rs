//! Behaviors - per-material update rules
//!
//! Each behavior handles one `BehaviorKind`. Behaviors only touch the grid
//! through `UpdateContext`, which enforces the MoveMask contract: every write
//! marks the written cell, and marked cells are never chosen as targets.

mod powder;
mod liquid;
mod gas;
mod energy;
mod corrosive;

pub use powder::PowderBehavior;
pub use liquid::LiquidBehavior;
pub use gas::GasBehavior;
pub use energy::{CombustibleBehavior, FireBehavior};
pub use corrosive::CorrosiveBehavior;

use crate::domain::materials::Material;
use crate::domain::rules::{BehaviorKind, RuleTable};
use crate::grid::{Grid, MoveMask};
use crate::systems::random::RandomSource;

/// Offset relative to the active cell.
pub type Offset = (i32, i32);

pub const LEFT: Offset = (-1, 0);
pub const RIGHT: Offset = (1, 0);
pub const UP: Offset = (0, -1);
pub const DOWN: Offset = (0, 1);
pub const DOWN_LEFT: Offset = (-1, 1);
pub const DOWN_RIGHT: Offset = (1, 1);

/// 8-neighborhood in clockwise order starting at the top-left.
pub const NEIGHBORS: [Offset; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Everything a rule needs for one active cell
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub mask: &'a mut MoveMask,
    pub rules: &'a RuleTable,
    pub rng: &'a mut dyn RandomSource,
    pub x: i32,
    pub y: i32,
}

impl<'a> UpdateContext<'a> {
    #[inline]
    fn index_of(&self, (dx, dy): Offset) -> Option<usize> {
        self.grid.checked_index(self.x + dx, self.y + dy)
    }

    /// Neighbor read. Marked cells are visible; outside the grid is boundary.
    #[inline]
    pub fn material_at(&self, offset: Offset) -> Material {
        self.grid.get(self.x + offset.0, self.y + offset.1)
    }

    /// In range and not yet resolved this tick.
    #[inline]
    pub fn is_free(&self, offset: Offset) -> bool {
        match self.index_of(offset) {
            Some(idx) => !self.mask.is_marked(idx),
            None => false,
        }
    }

    /// Free target currently holding `material`.
    #[inline]
    pub fn is_free_and(&self, offset: Offset, material: Material) -> bool {
        self.is_free(offset) && self.material_at(offset) == material
    }

    /// Exchange the active cell with `offset` and mark both.
    /// Moving into `Empty` is a swap with `Empty`.
    pub fn swap_with(&mut self, offset: Offset) {
        let (Some(src), Some(dst)) = (self.index_of((0, 0)), self.index_of(offset)) else {
            return;
        };
        debug_assert!(!self.mask.is_marked(dst));
        self.grid.swap_idx(src, dst);
        self.mask.mark(src);
        self.mask.mark(dst);
    }

    /// Overwrite the cell at `offset` (use `(0, 0)` for the active cell) and mark it.
    pub fn transform(&mut self, offset: Offset, material: Material) {
        let Some(idx) = self.index_of(offset) else {
            return;
        };
        debug_assert!(!self.mask.is_marked(idx));
        self.grid.set_idx(idx, material);
        self.mask.mark(idx);
    }

    /// Mark a cell resolved without writing it.
    pub fn consume(&mut self, offset: Offset) {
        if let Some(idx) = self.index_of(offset) {
            self.mask.mark(idx);
        }
    }

    /// One coin flip picks which of `a`/`b` is tried first; the other is the
    /// fallback. Returns the first eligible offset. No draw is made when
    /// neither side is eligible.
    pub fn try_ordered_pair<F>(&mut self, a: Offset, b: Offset, eligible: F) -> Option<Offset>
    where
        F: Fn(&Self, Offset) -> bool,
    {
        let ok_a = eligible(self, a);
        let ok_b = eligible(self, b);
        if !ok_a && !ok_b {
            return None;
        }
        let a_first = self.rng.coin();
        match (a_first, ok_a, ok_b) {
            (true, true, _) => Some(a),
            (true, false, _) => Some(b),
            (false, _, true) => Some(b),
            (false, _, false) => Some(a),
        }
    }

    /// First neighbor matching `pred`, scanning the 8-neighborhood from a
    /// random rotation (one draw).
    pub fn find_neighbor<F>(&mut self, pred: F) -> Option<Offset>
    where
        F: Fn(&Self, Offset) -> bool,
    {
        let start = self.rng.below(NEIGHBORS.len() as u32) as usize;
        let this: &Self = self;
        (0..NEIGHBORS.len())
            .map(|i| NEIGHBORS[(start + i) % NEIGHBORS.len()])
            .find(|&offset| pred(this, offset))
    }
}

/// Behavior trait - one implementation per `BehaviorKind`
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext);
}

/// Behavior registry - dispatch by kind
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    combustible: CombustibleBehavior,
    fire: FireBehavior,
    gas: GasBehavior,
    corrosive: CorrosiveBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior,
            liquid: LiquidBehavior,
            combustible: CombustibleBehavior,
            fire: FireBehavior,
            gas: GasBehavior,
            corrosive: CorrosiveBehavior,
        }
    }

    pub fn update(&self, kind: BehaviorKind, ctx: &mut UpdateContext) {
        match kind {
            BehaviorKind::Powder => self.powder.update(ctx),
            BehaviorKind::Liquid => self.liquid.update(ctx),
            BehaviorKind::Combustible => self.combustible.update(ctx),
            BehaviorKind::Fire => self.fire.update(ctx),
            BehaviorKind::Gas => self.gas.update(ctx),
            BehaviorKind::Corrosive => self.corrosive.update(ctx),
            BehaviorKind::Inert => {}
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::systems::random::FixedSequence;

    /// Small fixture: a grid, a fresh mask and a scripted random source.
    pub struct Bench {
        pub grid: Grid,
        pub mask: MoveMask,
        pub rules: RuleTable,
        pub rng: FixedSequence,
    }

    impl Bench {
        pub fn new(cols: u32, rows: u32, rng: FixedSequence) -> Self {
            let grid = Grid::new(cols, rows);
            let mask = MoveMask::new(grid.size());
            Self { grid, mask, rules: RuleTable::default(), rng }
        }

        /// Run the rule of whatever sits at `(x, y)` once.
        pub fn run(&mut self, x: i32, y: i32) {
            let kind = self.rules.behavior(self.grid.get(x, y));
            let registry = BehaviorRegistry::new();
            let mut ctx = UpdateContext {
                grid: &mut self.grid,
                mask: &mut self.mask,
                rules: &self.rules,
                rng: &mut self.rng,
                x,
                y,
            };
            registry.update(kind, &mut ctx);
        }

        pub fn marked(&self, x: i32, y: i32) -> bool {
            let idx = self.grid.index(x as u32, y as u32);
            self.mask.is_marked(idx)
        }
    }
}
