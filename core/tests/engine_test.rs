use noisefield::{
    Dimension, EngineConfig, FractalBase, NoiseEngine, NoiseKind, Vec3, WorleyConfig, flatten2,
    normalize2, sample_plane, to_gray_image,
};

fn test_config(seed: u64) -> EngineConfig {
    let mut config = EngineConfig::default();
    config.seed = seed;
    config.lattice.shuffle = true;
    config.lattice.size_exponent = 8;
    config.lattice.dimension = Dimension::Two;
    config.value.shuffle = true;
    config.value.size_exponent = 8;
    config.value.dimension = Dimension::Two;
    config.perlin.shuffle = true;
    config.perlin.size_exponent = 8;
    config.perlin.dimension = Dimension::Two;
    config.fractal.base = FractalBase::Perlin;
    config.fractal.octaves = 4;
    config
}

fn init_all(engine: &mut NoiseEngine, resolution: u32) {
    engine.initialize(NoiseKind::Lattice).unwrap();
    engine.initialize(NoiseKind::Value).unwrap();
    engine.initialize(NoiseKind::Perlin).unwrap();
    engine.initialize(NoiseKind::Fractal).unwrap();
    engine.initialize_worley(resolution).unwrap();
}

#[test]
fn same_seed_reproduces_the_same_fields() {
    let mut a = NoiseEngine::new(test_config(2025)).unwrap();
    let mut b = NoiseEngine::new(test_config(2025)).unwrap();
    init_all(&mut a, 64);
    init_all(&mut b, 64);

    for kind in [
        NoiseKind::Lattice,
        NoiseKind::Value,
        NoiseKind::Perlin,
        NoiseKind::Fractal,
        NoiseKind::Worley,
    ] {
        let field_a = sample_plane(&a, kind, 64).unwrap();
        let field_b = sample_plane(&b, kind, 64).unwrap();
        assert_eq!(field_a, field_b, "{kind:?} fields diverged for equal seeds");
    }
}

#[test]
fn different_seeds_give_different_fields() {
    let mut a = NoiseEngine::new(test_config(1)).unwrap();
    let mut b = NoiseEngine::new(test_config(2)).unwrap();
    init_all(&mut a, 64);
    init_all(&mut b, 64);

    let field_a = sample_plane(&a, NoiseKind::Perlin, 64).unwrap();
    let field_b = sample_plane(&b, NoiseKind::Perlin, 64).unwrap();
    assert_ne!(field_a, field_b);
}

#[test]
fn reinitialization_replaces_the_table_in_place() {
    let mut engine = NoiseEngine::new(test_config(7)).unwrap();
    engine.initialize(NoiseKind::Perlin).unwrap();
    let before = sample_plane(&engine, NoiseKind::Perlin, 64).unwrap();

    // The engine's random source has advanced, so the rebuilt table is a
    // different permutation
    engine.initialize(NoiseKind::Perlin).unwrap();
    let after = sample_plane(&engine, NoiseKind::Perlin, 64).unwrap();
    assert_ne!(before, after);
}

#[test]
fn worley_inversion_is_applied_by_the_engine() {
    let mut config = test_config(99);
    config.worley = WorleyConfig {
        dimension: Dimension::Two,
        grid_points: 5,
        invert: false,
        inversion_value: 2.0,
    };
    let mut plain = NoiseEngine::new(config.clone()).unwrap();
    plain.initialize_worley(64).unwrap();

    config.worley.invert = true;
    let mut inverted = NoiseEngine::new(config).unwrap();
    inverted.initialize_worley(64).unwrap();

    let p = Vec3::new(10.0, 20.0, 0.0);
    let d = plain.sample(NoiseKind::Worley, p).unwrap();
    let inv = inverted.sample(NoiseKind::Worley, p).unwrap();
    assert!((inv - (2.0 - d)).abs() < 1e-6);
}

#[test]
fn render_pipeline_smoke() {
    let mut engine = NoiseEngine::new(test_config(2025)).unwrap();
    init_all(&mut engine, 32);

    let mut field = sample_plane(&engine, NoiseKind::Fractal, 32).unwrap();
    normalize2(&mut field);
    let flat = flatten2(&field);
    assert_eq!(flat.len(), 32 * 32);
    assert!(flat.iter().all(|v| (0.0..=1.0).contains(v)));

    let img = to_gray_image(&field);
    assert_eq!(img.dimensions(), (32, 32));
}

#[test]
fn initialized_engine_is_shareable_across_threads() {
    let mut engine = NoiseEngine::new(test_config(5)).unwrap();
    init_all(&mut engine, 64);
    let engine = &engine;

    // Concurrent reads of one initialized engine must agree with a serial
    // scan; re-initialization is impossible while these borrows live
    let serial = sample_plane(engine, NoiseKind::Value, 64).unwrap();
    let rows: Vec<Vec<f32>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..64u32)
            .map(|y| {
                scope.spawn(move || {
                    (0..64u32)
                        .map(|x| {
                            let point = Vec3::new(
                                (x as f32 + 0.5) / 64.0 - 0.5,
                                (y as f32 + 0.5) / 64.0 - 0.5,
                                0.0,
                            );
                            engine.sample(NoiseKind::Value, point).unwrap()
                        })
                        .collect()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(serial, rows);
}
