//! GasBehavior - smoke
//!
//! Occasionally vanishes; otherwise bubbles up one cell by trading places
//! with empty space, sand or water above it.

use super::{Behavior, UpdateContext, UP};
use crate::domain::materials::Material;

pub struct GasBehavior;

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let dissipate = ctx.rules.tuning().smoke_dissipate_chance;
        if ctx.rng.chance(dissipate) {
            ctx.transform((0, 0), Material::Empty);
            return;
        }

        let rises_through = matches!(
            ctx.material_at(UP),
            Material::Empty | Material::Sand | Material::Water
        );
        if rises_through && ctx.is_free(UP) {
            ctx.swap_with(UP);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::materials::Material;
    use crate::systems::behaviors::test_support::Bench;
    use crate::systems::random::FixedSequence;

    #[test]
    fn rises_through_light_materials() {
        for above in [Material::Empty, Material::Sand, Material::Water] {
            let mut bench = Bench::new(1, 2, FixedSequence::always(u32::MAX));
            bench.grid.set(0, 0, above);
            bench.grid.set(0, 1, Material::Smoke);
            bench.run(0, 1);
            assert_eq!(bench.grid.get(0, 0), Material::Smoke);
            assert_eq!(bench.grid.get(0, 1), above);
        }
    }

    #[test]
    fn blocked_by_solids_and_ceiling() {
        let mut bench = Bench::new(1, 2, FixedSequence::always(u32::MAX));
        bench.grid.set(0, 0, Material::Wood);
        bench.grid.set(0, 1, Material::Smoke);
        bench.run(0, 1);
        assert_eq!(bench.grid.get(0, 1), Material::Smoke);

        let mut bench = Bench::new(1, 1, FixedSequence::always(u32::MAX));
        bench.grid.set(0, 0, Material::Smoke);
        bench.run(0, 0);
        assert_eq!(bench.grid.get(0, 0), Material::Smoke);
    }

    #[test]
    fn dissipates_when_gate_passes() {
        let mut bench = Bench::new(1, 2, FixedSequence::always(0));
        bench.grid.set(0, 1, Material::Smoke);
        bench.run(0, 1);
        assert_eq!(bench.grid.non_empty_count(), 0);
        assert!(bench.marked(0, 1));
    }
}
