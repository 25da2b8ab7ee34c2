// Fractal (multi-octave) composition. The base sampler is bound once at
// construction; every octave raises the frequency by the lacunarity and
// decays the amplitude by the persistence. Dividing by the accumulated
// range keeps the result inside the base sampler's own output range for
// any octave count and persistence.

use crate::NoiseSource;
use crate::config::{FractalConfig, NoiseError};
use crate::math::Vec3;

pub struct FractalComposer {
    base: Box<dyn NoiseSource + Send + Sync>,
    octaves: u32,
    lacunarity: f32,
    persistence: f32,
}

impl FractalComposer {
    // `base` is the single-point capability the composition iterates; the
    // engine resolves it from the configured FractalBase, tests may pass
    // any stub
    pub fn new(
        config: &FractalConfig,
        base: Box<dyn NoiseSource + Send + Sync>,
    ) -> Result<Self, NoiseError> {
        config.validate()?;
        Ok(Self {
            base,
            octaves: config.octaves,
            lacunarity: config.lacunarity,
            persistence: config.persistence,
        })
    }
}

impl NoiseSource for FractalComposer {
    fn sample(&self, point: Vec3, frequency: f32) -> f32 {
        let mut frequency = frequency;
        let mut sum = self.base.sample(point, frequency);
        let mut amplitude = 1.0;
        let mut range = 1.0;

        for _ in 1..self.octaves {
            frequency *= self.lacunarity;
            amplitude *= self.persistence;
            range += amplitude;
            sum += self.base.sample(point, frequency) * amplitude;
        }

        sum / range
    }
}
