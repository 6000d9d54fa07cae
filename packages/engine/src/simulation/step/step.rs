use crate::behaviors::UpdateContext;
use crate::domain::rules::BehaviorKind;

use super::{PerfTimer, WorldCore};

/// One tick: rows bottom-to-top, columns alternating direction per frame.
/// Empty, inert and already-marked cells are skipped.
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    let step_timer = perf_on.then(PerfTimer::start);

    world.mask.clear();

    let cols = world.grid.cols() as i32;
    let rows = world.grid.rows() as i32;
    let go_right = (world.frame & 1) == 0;

    let rules_timer = perf_on.then(PerfTimer::start);
    let mut cells_updated = 0u32;

    for y in (0..rows).rev() {
        for i in 0..cols {
            let x = if go_right { i } else { cols - 1 - i };
            let idx = world.grid.index(x as u32, y as u32);
            if world.mask.is_marked(idx) {
                continue;
            }
            let material = world.grid.get_idx(idx);
            if material.is_empty() {
                continue;
            }
            let kind = world.rules.behavior(material);
            if kind == BehaviorKind::Inert {
                continue;
            }

            let mut ctx = UpdateContext {
                grid: &mut world.grid,
                mask: &mut world.mask,
                rules: &world.rules,
                rng: world.rng.as_mut(),
                x,
                y,
            };
            world.behaviors.update(kind, &mut ctx);
            cells_updated += 1;
        }
    }

    world.frame += 1;

    if let (Some(step_timer), Some(rules_timer)) = (step_timer, rules_timer) {
        let stats = &mut world.perf_stats;
        stats.rules_ms = rules_timer.elapsed_ms();
        stats.step_ms = step_timer.elapsed_ms();
        stats.cells_updated = cells_updated;
        stats.moved_cells = world.mask.marked_count() as u32;
        stats.non_empty_cells = world.grid.non_empty_count() as u32;
        stats.grid_size = world.grid.size() as u32;
        stats.frame = world.frame;
    }
}
