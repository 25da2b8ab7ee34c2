// Renders every noise kind to a grayscale PNG. This is the rendering
// collaborator's job in miniature: scan a pixel grid, ask the engine for
// one scalar per pixel, write it into an image the caller owns.

use noisefield::{
    Dimension, EngineConfig, FractalBase, NoiseEngine, NoiseKind, normalize2, sample_plane,
    to_gray_image,
};
use std::path::Path;

fn save(engine: &NoiseEngine, kind: NoiseKind, resolution: u32, filename: &str) {
    let mut field = sample_plane(engine, kind, resolution).expect("engine is initialized");
    // Lattice/value/normalized-perlin already sit in [0, 1]; worley and
    // fractal benefit from stretching over the full gray ramp
    normalize2(&mut field);
    let img = to_gray_image(&field);
    img.save(Path::new(filename)).expect("png write failed");
    println!("Saved {filename}");
}

fn main() {
    tracing_subscriber::fmt().init();

    let resolution = 256;
    let mut config = EngineConfig::default();
    config.seed = 2025;
    config.lattice.dimension = Dimension::Two;
    config.lattice.shuffle = true;
    config.value.dimension = Dimension::Two;
    config.value.shuffle = true;
    config.perlin.dimension = Dimension::Two;
    config.perlin.shuffle = true;
    config.perlin.size_exponent = 8;
    config.fractal.base = FractalBase::Perlin;
    config.fractal.octaves = 6;

    let mut engine = NoiseEngine::new(config).expect("default-derived config is valid");
    engine.initialize(NoiseKind::Lattice).unwrap();
    engine.initialize(NoiseKind::Value).unwrap();
    engine.initialize(NoiseKind::Perlin).unwrap();
    engine.initialize(NoiseKind::Fractal).unwrap();
    engine.initialize_worley(resolution).unwrap();

    save(&engine, NoiseKind::Lattice, resolution, "lattice.png");
    save(&engine, NoiseKind::Value, resolution, "value.png");
    save(&engine, NoiseKind::Perlin, resolution, "perlin.png");
    save(&engine, NoiseKind::Fractal, resolution, "fractal.png");
    save(&engine, NoiseKind::Worley, resolution, "worley.png");
}
