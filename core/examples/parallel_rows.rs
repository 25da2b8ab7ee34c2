// Row-parallel sampling against a single initialized engine. Tables are
// immutable once built, so rayon workers read them without locking; the
// &mut needed to re-initialize cannot coexist with these borrows.

use noisefield::{Dimension, EngineConfig, NoiseEngine, NoiseKind, Vec3, to_gray_image};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt().init();

    let resolution: u32 = 1024;
    let mut config = EngineConfig::default();
    config.seed = 7;
    config.perlin.dimension = Dimension::Three;
    config.perlin.shuffle = true;
    config.perlin.size_exponent = 8;
    config.perlin.frequency = 12.0;

    let mut engine = NoiseEngine::new(config).expect("config is valid");
    engine.initialize(NoiseKind::Perlin).unwrap();

    let inverse = 1.0 / resolution as f32;
    let start = Instant::now();
    let field: Vec<Vec<f32>> = (0..resolution)
        .into_par_iter()
        .map(|y| {
            (0..resolution)
                .map(|x| {
                    let point = Vec3::new(
                        (x as f32 + 0.5) * inverse - 0.5,
                        (y as f32 + 0.5) * inverse - 0.5,
                        0.25,
                    );
                    engine
                        .sample(NoiseKind::Perlin, point)
                        .expect("perlin was initialized")
                })
                .collect()
        })
        .collect();
    println!(
        "Sampled {resolution}x{resolution} perlin field in {:?} across {} threads",
        start.elapsed(),
        rayon::current_num_threads()
    );

    let img = to_gray_image(&field);
    img.save(Path::new("perlin_parallel.png")).unwrap();
    println!("Saved perlin_parallel.png");
}
