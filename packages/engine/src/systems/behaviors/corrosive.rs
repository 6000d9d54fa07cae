//! CorrosiveBehavior - acid
//!
//! Falls like sand (into empty space only), creeps sideways now and then,
//! and when it has not moved may dissolve one corrodible neighbor, consuming
//! itself in the process.

use super::{Behavior, UpdateContext, DOWN, DOWN_LEFT, DOWN_RIGHT, LEFT, RIGHT};
use crate::domain::materials::Material;

pub struct CorrosiveBehavior;

impl CorrosiveBehavior {
    #[inline]
    fn open(ctx: &UpdateContext, offset: (i32, i32)) -> bool {
        ctx.is_free_and(offset, Material::Empty)
    }

    fn try_move(ctx: &mut UpdateContext) -> bool {
        if Self::open(ctx, DOWN) {
            ctx.swap_with(DOWN);
            return true;
        }

        if let Some(side) = ctx.try_ordered_pair(DOWN_LEFT, DOWN_RIGHT, |c, o| Self::open(c, o)) {
            ctx.swap_with(side);
            return true;
        }

        let spread = ctx.rules.tuning().acid_spread_chance;
        if ctx.rng.chance(spread) {
            if let Some(side) = ctx.try_ordered_pair(LEFT, RIGHT, |c, o| Self::open(c, o)) {
                ctx.swap_with(side);
                return true;
            }
        }
        false
    }
}

impl Behavior for CorrosiveBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if Self::try_move(ctx) {
            return;
        }

        let corrode = ctx.rules.tuning().acid_corrode_chance;
        if !ctx.rng.chance(corrode) {
            return;
        }

        let target = ctx.find_neighbor(|c, o| c.is_free(o) && c.rules.is_corrodible(c.material_at(o)));
        if let Some(target) = target {
            ctx.transform(target, Material::Empty);
            ctx.transform((0, 0), Material::Empty);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::config::SimConfig;
    use crate::domain::materials::Material;
    use crate::domain::rules::RuleTable;
    use crate::systems::behaviors::test_support::Bench;
    use crate::systems::random::FixedSequence;

    #[test]
    fn falls_straight_then_diagonally() {
        let mut bench = Bench::new(3, 2, FixedSequence::always(0));
        bench.grid.set(1, 0, Material::Acid);
        bench.run(1, 0);
        assert_eq!(bench.grid.get(1, 1), Material::Acid);

        let mut bench = Bench::new(3, 2, FixedSequence::always(1));
        bench.grid.set(1, 0, Material::Acid);
        bench.grid.set(1, 1, Material::Stone);
        bench.run(1, 0);
        assert_eq!(bench.grid.get(2, 1), Material::Acid);
    }

    #[test]
    fn does_not_sink_through_water() {
        let mut bench = Bench::new(1, 2, FixedSequence::always(u32::MAX));
        bench.grid.set(0, 0, Material::Acid);
        bench.grid.set(0, 1, Material::Water);
        bench.run(0, 0);
        assert_eq!(bench.grid.get(0, 0), Material::Acid);
        assert_eq!(bench.grid.get(0, 1), Material::Water);
    }

    #[test]
    fn spreads_only_when_gate_passes() {
        let mut bench = Bench::new(3, 1, FixedSequence::always(u32::MAX));
        bench.grid.set(1, 0, Material::Acid);
        bench.run(1, 0);
        assert_eq!(bench.grid.get(1, 0), Material::Acid);

        let mut bench = Bench::new(3, 1, FixedSequence::always(0));
        bench.grid.set(1, 0, Material::Acid);
        bench.run(1, 0);
        assert_eq!(bench.grid.get(0, 0), Material::Acid);
    }

    #[test]
    fn corrodes_sand_and_is_consumed() {
        let mut bench = Bench::new(2, 1, FixedSequence::always(0));
        bench.grid.set(0, 0, Material::Acid);
        bench.grid.set(1, 0, Material::Sand);
        bench.run(0, 0);
        assert_eq!(bench.grid.non_empty_count(), 0);
        assert!(bench.marked(0, 0) && bench.marked(1, 0));
    }

    #[test]
    fn corrodes_gunpowder() {
        let mut bench = Bench::new(2, 1, FixedSequence::always(0));
        bench.grid.set(0, 0, Material::Acid);
        bench.grid.set(1, 0, Material::Gunpowder);
        bench.run(0, 0);
        assert_eq!(bench.grid.non_empty_count(), 0);
        assert!(bench.marked(0, 0) && bench.marked(1, 0));
    }

    #[test]
    fn corrodes_stone_when_configured() {
        let mut bench = Bench::new(2, 2, FixedSequence::always(0));
        bench.rules = RuleTable::from_config(&SimConfig {
            acid_corrodes_stone: true,
            ..SimConfig::default()
        });
        bench.grid.set(0, 0, Material::Acid);
        bench.grid.set(1, 0, Material::Stone);
        bench.grid.set(0, 1, Material::Stone);
        bench.grid.set(1, 1, Material::Stone);
        bench.run(0, 0);
        // Rotation 0 reaches (1, 0) first.
        assert_eq!(bench.grid.get(0, 0), Material::Empty);
        assert_eq!(bench.grid.get(1, 0), Material::Empty);
        assert_eq!(bench.grid.count(Material::Stone), 2);
    }

    #[test]
    fn leaves_stone_and_wood_by_default() {
        let mut bench = Bench::new(2, 2, FixedSequence::always(0));
        bench.grid.set(0, 0, Material::Acid);
        bench.grid.set(1, 0, Material::Wood);
        bench.grid.set(0, 1, Material::Stone);
        bench.grid.set(1, 1, Material::Stone);
        bench.run(0, 0);
        assert_eq!(bench.grid.get(0, 0), Material::Acid);
        assert_eq!(bench.grid.get(1, 0), Material::Wood);
    }

    #[test]
    fn corrodes_wood_when_configured() {
        let mut bench = Bench::new(2, 2, FixedSequence::always(0));
        bench.rules = RuleTable::from_config(&SimConfig {
            acid_corrodes_wood: true,
            ..SimConfig::default()
        });
        bench.grid.set(0, 0, Material::Acid);
        bench.grid.set(1, 0, Material::Wood);
        bench.grid.set(0, 1, Material::Stone);
        bench.grid.set(1, 1, Material::Stone);
        bench.run(0, 0);
        assert_eq!(bench.grid.get(0, 0), Material::Empty);
        assert_eq!(bench.grid.get(1, 0), Material::Empty);
    }
}
