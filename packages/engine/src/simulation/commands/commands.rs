use tracing::{debug, warn};

use crate::domain::error::SimError;
use crate::domain::materials::{Material, MaterialId};
use crate::scenarios::Scenario;

use super::WorldCore;

fn material_from_host(id: MaterialId) -> Result<Material, SimError> {
    Material::try_from(id).map_err(|e| {
        warn!(id, "rejected unknown material id");
        e
    })
}

pub(super) fn set_cell(world: &mut WorldCore, x: i32, y: i32, id: MaterialId) -> Result<(), SimError> {
    let material = material_from_host(id)?;
    set_material(world, x, y, material);
    Ok(())
}

pub(super) fn set_material(world: &mut WorldCore, x: i32, y: i32, material: Material) {
    world.grid.set(x, y, material);
}

pub(super) fn paint_brush(
    world: &mut WorldCore,
    cx: i32,
    cy: i32,
    radius: i32,
    id: MaterialId,
) -> Result<(), SimError> {
    let material = material_from_host(id)?;
    if radius < 0 {
        return Ok(());
    }

    // Only walk the part of the bounding box that lies inside the grid.
    let (cx, cy, r) = (cx as i64, cy as i64, radius as i64);
    let r2 = r * r;
    let x0 = (cx - r).max(0);
    let y0 = (cy - r).max(0);
    let x1 = (cx + r).min(world.grid.cols() as i64 - 1);
    let y1 = (cy + r).min(world.grid.rows() as i64 - 1);

    for y in y0..=y1 {
        let dy = y - cy;
        for x in x0..=x1 {
            let dx = x - cx;
            if (dx * dx).saturating_add(dy * dy) <= r2 {
                world.grid.set(x as i32, y as i32, material);
            }
        }
    }
    Ok(())
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
}

pub(super) fn load_scenario(world: &mut WorldCore, name: &str) -> Result<Scenario, SimError> {
    let scenario = name.parse::<Scenario>().map_err(|e| {
        warn!(scenario = name, "unknown scenario");
        e
    })?;
    apply_scenario(world, scenario);
    Ok(scenario)
}

pub(super) fn apply_scenario(world: &mut WorldCore, scenario: Scenario) {
    scenario.load(&mut world.grid, world.rng.as_mut());
    debug!(scenario = scenario.name(), cells = world.grid.non_empty_count(), "scenario loaded");
}
