// noisefield samples scalar noise fields over 1D/2D/3D space for
// procedural texture synthesis: lattice (raw hash) noise, value noise,
// gradient (Perlin) noise, multi-octave fractal composition, and Worley
// cell-distance noise. The rendering side owns the pixel buffer; this
// crate only turns a world-space point into a scalar.
pub mod config;
pub mod engine;
pub mod fractal;
pub mod gradients;
pub mod lattice;
pub mod math;
pub mod permutation;
pub mod perlin;
pub mod utils;
pub mod value;
pub mod worley;

pub use config::{
    Dimension, EngineConfig, FractalBase, FractalConfig, LatticeConfig, NoiseError, NoiseKind,
    PerlinConfig, ValueConfig, WorleyConfig,
};
pub use engine::NoiseEngine;
pub use fractal::FractalComposer;
pub use lattice::LatticeSampler;
pub use math::{Vec2, Vec3};
pub use permutation::PermutationTable;
pub use perlin::PerlinSampler;
pub use utils::{Field2D, flatten2, normalize2, sample_plane, to_gray_image};
pub use value::ValueSampler;
pub use worley::WorleySampler;

// Single-point sampling capability. Once constructed a sampler is pure:
// the same point and frequency always give the same scalar, with no
// locking needed for concurrent reads.
pub trait NoiseSource {
    fn sample(&self, point: Vec3, frequency: f32) -> f32;
}
