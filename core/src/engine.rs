// The facade the rendering side talks to. Holds one validated config per
// algorithm plus the seeded random source, builds sampler state on
// demand, and dispatches per-pixel sample calls by noise kind.
//
// Sampling takes &self and is pure once a kind is initialized, so any
// number of threads may read concurrently; rebuilding takes &mut self,
// which serializes re-initialization against in-flight reads.

use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::NoiseSource;
use crate::config::{EngineConfig, FractalBase, NoiseError, NoiseKind};
use crate::fractal::FractalComposer;
use crate::lattice::LatticeSampler;
use crate::math::{Vec2, Vec3};
use crate::perlin::PerlinSampler;
use crate::value::ValueSampler;
use crate::worley::WorleySampler;

pub struct NoiseEngine {
    config: EngineConfig,
    rng: StdRng,
    lattice: Option<LatticeSampler>,
    value: Option<ValueSampler>,
    perlin: Option<PerlinSampler>,
    fractal: Option<FractalComposer>,
    worley: Option<WorleySampler>,
}

impl NoiseEngine {
    // Validates every per-algorithm config up front; nothing fails later
    // than initialization
    pub fn new(config: EngineConfig) -> Result<Self, NoiseError> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            rng,
            lattice: None,
            value: None,
            perlin: None,
            fractal: None,
            worley: None,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // Build (or rebuild, replacing the previous state in place) the
    // backing table for one noise kind. Worley goes through
    // initialize_worley because its point placement needs the output
    // resolution.
    pub fn initialize(&mut self, kind: NoiseKind) -> Result<(), NoiseError> {
        match kind {
            NoiseKind::Lattice => {
                self.lattice = Some(LatticeSampler::new(&self.config.lattice, &mut self.rng)?);
            }
            NoiseKind::Value => {
                self.value = Some(ValueSampler::new(&self.config.value, &mut self.rng)?);
            }
            NoiseKind::Perlin => {
                self.perlin = Some(PerlinSampler::new(&self.config.perlin, &mut self.rng)?);
            }
            NoiseKind::Fractal => {
                let composer = self.build_fractal()?;
                self.fractal = Some(composer);
            }
            NoiseKind::Worley => {
                return Err(NoiseError::InvalidConfig {
                    reason: "worley initialization needs a resolution; use initialize_worley"
                        .into(),
                });
            }
        }
        debug!(?kind, "initialized noise state");
        Ok(())
    }

    pub fn initialize_worley(&mut self, resolution: u32) -> Result<(), NoiseError> {
        self.worley = Some(WorleySampler::new(
            &self.config.worley,
            resolution,
            &mut self.rng,
        )?);
        debug!(resolution, "initialized noise state for worley");
        Ok(())
    }

    // The fractal owns a private base sampler with its own table; tables
    // are never shared between sampler instances
    fn build_fractal(&mut self) -> Result<FractalComposer, NoiseError> {
        let base: Box<dyn NoiseSource + Send + Sync> = match self.config.fractal.base {
            FractalBase::Lattice => {
                Box::new(LatticeSampler::new(&self.config.lattice, &mut self.rng)?)
            }
            FractalBase::Value => Box::new(ValueSampler::new(&self.config.value, &mut self.rng)?),
            FractalBase::Perlin => {
                Box::new(PerlinSampler::new(&self.config.perlin, &mut self.rng)?)
            }
        };
        FractalComposer::new(&self.config.fractal, base)
    }

    // The per-pixel entry point. The frequency comes from the sampled
    // kind's own config; worley reads the x/y components of `point` as
    // pixel coordinates and applies the configured inversion.
    pub fn sample(&self, kind: NoiseKind, point: Vec3) -> Result<f32, NoiseError> {
        match kind {
            NoiseKind::Lattice => {
                let sampler = self.lattice.as_ref().ok_or(NoiseError::NotInitialized { kind })?;
                Ok(sampler.sample(point, self.config.lattice.frequency))
            }
            NoiseKind::Value => {
                let sampler = self.value.as_ref().ok_or(NoiseError::NotInitialized { kind })?;
                Ok(sampler.sample(point, self.config.value.frequency))
            }
            NoiseKind::Perlin => {
                let sampler = self.perlin.as_ref().ok_or(NoiseError::NotInitialized { kind })?;
                Ok(sampler.sample(point, self.config.perlin.frequency))
            }
            NoiseKind::Fractal => {
                let sampler = self.fractal.as_ref().ok_or(NoiseError::NotInitialized { kind })?;
                Ok(sampler.sample(point, self.config.fractal.frequency))
            }
            NoiseKind::Worley => {
                let sampler = self.worley.as_ref().ok_or(NoiseError::NotInitialized { kind })?;
                let distance = sampler.sample(Vec2::new(point.x, point.y));
                Ok(if self.config.worley.invert {
                    self.config.worley.inversion_value - distance
                } else {
                    distance
                })
            }
        }
    }
}
