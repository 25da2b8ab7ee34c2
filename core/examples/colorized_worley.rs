// Colorized render: worley cell distances mapped through a color
// gradient, fractal perlin modulating the brightness.

use image::{Rgb, RgbImage};
use noisefield::{
    Dimension, EngineConfig, FractalBase, NoiseEngine, NoiseKind, normalize2, sample_plane,
};
use palette::{Gradient, LinSrgb};
use std::path::Path;

fn main() {
    let resolution = 512;

    let mut config = EngineConfig::default();
    config.seed = 42;
    config.worley.dimension = Dimension::Two;
    config.worley.grid_points = 40;
    config.perlin.dimension = Dimension::Two;
    config.perlin.shuffle = true;
    config.perlin.size_exponent = 8;
    config.fractal.base = FractalBase::Perlin;
    config.fractal.octaves = 5;
    config.fractal.frequency = 6.0;

    let mut engine = NoiseEngine::new(config).expect("config is valid");
    engine.initialize(NoiseKind::Fractal).unwrap();
    engine.initialize_worley(resolution).unwrap();

    let mut cells = sample_plane(&engine, NoiseKind::Worley, resolution).unwrap();
    let mut light = sample_plane(&engine, NoiseKind::Fractal, resolution).unwrap();
    normalize2(&mut cells);
    normalize2(&mut light);

    // Deep blue cell centers fading out to warm cell walls
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.05, 0.05, 0.35)),
        (0.35, LinSrgb::new(0.1, 0.4, 0.7)),
        (0.70, LinSrgb::new(0.9, 0.7, 0.3)),
        (1.00, LinSrgb::new(1.0, 0.95, 0.8)),
    ]);

    let mut img = RgbImage::new(resolution, resolution);
    for y in 0..resolution as usize {
        for x in 0..resolution as usize {
            let col: LinSrgb = gradient.get(cells[y][x]);
            let rgb = col.into_format::<u8>();
            let shade = 0.6 + 0.4 * light[y][x];
            img.put_pixel(
                x as u32,
                y as u32,
                Rgb([
                    (rgb.red as f32 * shade) as u8,
                    (rgb.green as f32 * shade) as u8,
                    (rgb.blue as f32 * shade) as u8,
                ]),
            );
        }
    }

    let path = Path::new("worley_colorized.png");
    img.save(path).unwrap();
    println!("Saved colorized render to {path:?}");
}
