// Per-algorithm configuration values and the shared error taxonomy.
// Every config is validated eagerly, before any table or point set is
// built; errors never surface mid-sample.

use thiserror::Error;

// Frequency is clamped to the same bounded positive range the samplers
// were tuned for
pub const MAX_FREQUENCY: f32 = 10_000.0;
// Hash table size is 2^exponent; exponent 0 would give a single-entry
// table, which cannot hash anything
pub const MAX_SIZE_EXPONENT: i32 = 10;
pub const MAX_OCTAVES: u32 = 14;
pub const MAX_GRID_POINTS: u32 = 100;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NoiseError {
    // Malformed parameters, raised at configuration/initialization time
    #[error("invalid noise configuration: {reason}")]
    InvalidConfig { reason: String },
    // Sampling was requested before the backing table/point set was built
    #[error("{kind:?} noise sampled before initialization")]
    NotInitialized { kind: NoiseKind },
}

// The noise algorithms the engine can dispatch to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseKind {
    Lattice,
    Value,
    Perlin,
    Fractal,
    Worley,
}

// Dimensionality is picked once per configuration, not per call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Dimension {
    #[default]
    One,
    Two,
    Three,
}

fn check_frequency(frequency: f32) -> Result<(), NoiseError> {
    if !(0.0..=MAX_FREQUENCY).contains(&frequency) {
        return Err(NoiseError::InvalidConfig {
            reason: format!("frequency {frequency} outside 0..={MAX_FREQUENCY}"),
        });
    }
    Ok(())
}

fn check_size_exponent(exponent: i32) -> Result<(), NoiseError> {
    if !(1..=MAX_SIZE_EXPONENT).contains(&exponent) {
        return Err(NoiseError::InvalidConfig {
            reason: format!("hash table size exponent {exponent} outside 1..={MAX_SIZE_EXPONENT}"),
        });
    }
    Ok(())
}

// Raw lattice/hash noise settings
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeConfig {
    pub frequency: f32,
    pub dimension: Dimension,
    pub size_exponent: i32,
    pub shuffle: bool,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            frequency: 4.0,
            dimension: Dimension::default(),
            size_exponent: 3,
            shuffle: false,
        }
    }
}

impl LatticeConfig {
    pub fn validate(&self) -> Result<(), NoiseError> {
        check_frequency(self.frequency)?;
        check_size_exponent(self.size_exponent)
    }
}

// Interpolated value noise settings
#[derive(Clone, Debug, PartialEq)]
pub struct ValueConfig {
    pub frequency: f32,
    pub dimension: Dimension,
    pub size_exponent: i32,
    pub shuffle: bool,
}

impl Default for ValueConfig {
    fn default() -> Self {
        Self {
            frequency: 4.0,
            dimension: Dimension::default(),
            size_exponent: 3,
            shuffle: false,
        }
    }
}

impl ValueConfig {
    pub fn validate(&self) -> Result<(), NoiseError> {
        check_frequency(self.frequency)?;
        check_size_exponent(self.size_exponent)
    }
}

// Gradient (Perlin) noise settings
#[derive(Clone, Debug, PartialEq)]
pub struct PerlinConfig {
    pub frequency: f32,
    pub dimension: Dimension,
    pub size_exponent: i32,
    pub shuffle: bool,
    // Remap the signed [-1, 1] sample into [0, 1]
    pub normalized: bool,
}

impl Default for PerlinConfig {
    fn default() -> Self {
        Self {
            frequency: 4.0,
            dimension: Dimension::default(),
            size_exponent: 3,
            shuffle: false,
            normalized: true,
        }
    }
}

impl PerlinConfig {
    pub fn validate(&self) -> Result<(), NoiseError> {
        check_frequency(self.frequency)?;
        check_size_exponent(self.size_exponent)
    }
}

// Which single-point sampler a fractal composition iterates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FractalBase {
    Lattice,
    Value,
    #[default]
    Perlin,
}

// Multi-octave composition settings. The base sampler keeps its own
// dimension/table settings; only the frequency is driven by the fractal.
#[derive(Clone, Debug, PartialEq)]
pub struct FractalConfig {
    pub frequency: f32,
    pub base: FractalBase,
    pub octaves: u32,
    // Per-octave frequency multiplier
    pub lacunarity: f32,
    // Per-octave amplitude multiplier
    pub persistence: f32,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            frequency: 4.0,
            base: FractalBase::default(),
            octaves: 8,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

impl FractalConfig {
    pub fn validate(&self) -> Result<(), NoiseError> {
        check_frequency(self.frequency)?;
        if self.octaves == 0 || self.octaves > MAX_OCTAVES {
            return Err(NoiseError::InvalidConfig {
                reason: format!("octave count {} outside 1..={MAX_OCTAVES}", self.octaves),
            });
        }
        Ok(())
    }
}

// Cell-distance (Worley) noise settings
#[derive(Clone, Debug, PartialEq)]
pub struct WorleyConfig {
    // 1D fixes every feature point at the vertical midline; 2D scatters
    // freely. There is no 3D mode.
    pub dimension: Dimension,
    pub grid_points: u32,
    pub invert: bool,
    pub inversion_value: f32,
}

impl Default for WorleyConfig {
    fn default() -> Self {
        Self {
            dimension: Dimension::Two,
            grid_points: 10,
            invert: false,
            inversion_value: 2.0,
        }
    }
}

impl WorleyConfig {
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.grid_points == 0 || self.grid_points > MAX_GRID_POINTS {
            return Err(NoiseError::InvalidConfig {
                reason: format!(
                    "worley grid point count {} outside 1..={MAX_GRID_POINTS}",
                    self.grid_points
                ),
            });
        }
        if self.dimension == Dimension::Three {
            return Err(NoiseError::InvalidConfig {
                reason: "worley noise supports 1D and 2D only".into(),
            });
        }
        Ok(())
    }
}

// One configuration bag per engine. Multiple engines with different seeds
// and settings can run side by side without interfering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineConfig {
    // Seed for the shared pseudorandom source used by table shuffling and
    // feature point placement
    pub seed: u64,
    pub lattice: LatticeConfig,
    pub value: ValueConfig,
    pub perlin: PerlinConfig,
    pub fractal: FractalConfig,
    pub worley: WorleyConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), NoiseError> {
        self.lattice.validate()?;
        self.value.validate()?;
        self.perlin.validate()?;
        self.fractal.validate()?;
        self.worley.validate()
    }
}
