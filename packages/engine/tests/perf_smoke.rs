use sandfall_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(128, 64);
    world.enable_perf_metrics(true);
    for x in 0..128 {
        for y in 0..32 {
            world.set_cell(x, y, 1).unwrap(); // sand
        }
    }
    world.step();
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.rules_ms() <= stats.step_ms());
    assert_eq!(stats.frame(), 1);
    assert_eq!(stats.non_empty_cells(), 128 * 32 + 128 * 5);
}

#[test]
fn perf_smoke_scenarios() {
    let mut world = World::new(120, 80);
    world.enable_perf_metrics(true);
    for name in ["Volcano", "Hazard", "Splash", "Fuse"] {
        world.load_scenario(name).unwrap();
        for _ in 0..30 {
            world.step();
        }
        world.render();
        assert_eq!(world.colors_len(), world.types_len());
        assert!(world.get_perf_stats().cells_updated() > 0);
    }
}
