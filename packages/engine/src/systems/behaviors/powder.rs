//! PowderBehavior - sand
//!
//! Falls one cell per tick, sinks through water by swapping, and when blocked
//! slides to a random free diagonal (angle of repose).

use super::{Behavior, UpdateContext, DOWN, DOWN_LEFT, DOWN_RIGHT};
use crate::domain::materials::Material;

pub struct PowderBehavior;

impl PowderBehavior {
    /// Powder can displace empty space and water, nothing else.
    #[inline]
    fn can_displace(ctx: &UpdateContext, offset: (i32, i32)) -> bool {
        ctx.is_free(offset) && matches!(ctx.material_at(offset), Material::Empty | Material::Water)
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) {
        // Straight down covers both the plain fall and the sink-through-water swap.
        if Self::can_displace(ctx, DOWN) {
            ctx.swap_with(DOWN);
            return;
        }

        if let Some(side) = ctx.try_ordered_pair(DOWN_LEFT, DOWN_RIGHT, |c, o| Self::can_displace(c, o)) {
            ctx.swap_with(side);
        }
    }
}
