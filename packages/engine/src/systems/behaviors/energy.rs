//! Combustion: FireBehavior and CombustibleBehavior
//!
//! Fire has no timer. Each tick it either gets doused by adjacent water,
//! passes itself on to one flammable neighbor, or (rarely) burns out to smoke.
//! Wood ignites when an unresolved igniter (fire or gunpowder) touches it;
//! that neighbor's turn is spent.

use super::{Behavior, UpdateContext, NEIGHBORS};
use crate::domain::materials::Material;

const HERE: (i32, i32) = (0, 0);

pub struct FireBehavior;

impl Behavior for FireBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        // Extinguish is never gated by a probability; the draw only picks
        // which water cell when several touch the fire.
        if let Some(water) = ctx.find_neighbor(|c, o| c.is_free_and(o, Material::Water)) {
            ctx.transform(HERE, Material::Smoke);
            ctx.transform(water, Material::Empty);
            return;
        }

        if let Some(fuel) = ctx.find_neighbor(|c, o| c.is_free(o) && c.rules.is_flammable(c.material_at(o))) {
            ctx.transform(fuel, Material::Fire);
            return;
        }

        let burnout = ctx.rules.tuning().fire_burnout_chance;
        if ctx.rng.chance(burnout) {
            ctx.transform(HERE, Material::Smoke);
        }
    }
}

pub struct CombustibleBehavior;

impl Behavior for CombustibleBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        let igniter = NEIGHBORS
            .iter()
            .copied()
            .find(|&o| ctx.is_free(o) && ctx.rules.is_igniter(ctx.material_at(o)));

        if let Some(igniter) = igniter {
            ctx.transform(HERE, Material::Fire);
            ctx.consume(igniter);
        }
    }
}
