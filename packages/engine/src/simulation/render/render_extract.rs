use crate::domain::rules::BACKGROUND_COLOR;
use crate::systems::random::RandomSource;

use super::WorldCore;

/// Fill the color buffer from the rule table. Flickering materials pick one
/// of their two hues per cell per call, from the render generator only.
pub(super) fn render_colors(world: &mut WorldCore) {
    let size = world.grid.size();
    if world.colors.len() != size {
        world.colors.resize(size, BACKGROUND_COLOR);
    }

    let rules = &world.rules;
    let rng = &mut world.render_rng;
    for (dst, material) in world.colors.iter_mut().zip(world.grid.cells()) {
        let props = rules.props(*material);
        *dst = match props.flicker_color {
            Some(alt) if !rng.coin() => alt,
            _ => props.color,
        };
    }
}
