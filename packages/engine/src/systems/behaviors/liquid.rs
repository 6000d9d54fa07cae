//! LiquidBehavior - water
//!
//! Falls straight down into empty space, otherwise spreads one cell sideways
//! to a random free side.

use super::{Behavior, UpdateContext, DOWN, LEFT, RIGHT};
use crate::domain::materials::Material;

pub struct LiquidBehavior;

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        if ctx.is_free_and(DOWN, Material::Empty) {
            ctx.swap_with(DOWN);
            return;
        }

        if let Some(side) = ctx.try_ordered_pair(LEFT, RIGHT, |c, o| c.is_free_and(o, Material::Empty)) {
            ctx.swap_with(side);
        }
    }
}
