// Raw lattice noise: hash the containing cell, no interpolation. The hard
// steps at cell boundaries are the point; this is the building block and
// diagnostic baseline for the smoother samplers.

use rand::Rng;

use crate::NoiseSource;
use crate::config::{Dimension, LatticeConfig, NoiseError};
use crate::math::Vec3;
use crate::permutation::PermutationTable;

pub struct LatticeSampler {
    table: PermutationTable,
    dimension: Dimension,
}

impl LatticeSampler {
    // Validates the config and builds the sampler's own permutation table
    pub fn new(config: &LatticeConfig, rng: &mut impl Rng) -> Result<Self, NoiseError> {
        config.validate()?;
        let table = PermutationTable::build(config.size_exponent, config.shuffle, rng)?;
        Ok(Self {
            table,
            dimension: config.dimension,
        })
    }
}

impl NoiseSource for LatticeSampler {
    // Output lies in [0, 1): the dimension-selected hash over (size - 1)
    fn sample(&self, point: Vec3, frequency: f32) -> f32 {
        let point = point.scale(frequency);
        let table = &self.table;
        let mask = table.mask();

        let x = (point.x.floor() as i32) & mask;
        let y = (point.y.floor() as i32) & mask;
        let z = (point.z.floor() as i32) & mask;

        let scale = 1.0 / mask as f32;
        let h_x = table.get(x);
        match self.dimension {
            Dimension::One => h_x as f32 * scale,
            Dimension::Two => table.get(h_x + y) as f32 * scale,
            Dimension::Three => {
                let h_xy = table.get(h_x + y);
                table.get(h_xy + z) as f32 * scale
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LatticeSampler;
    use crate::NoiseSource;
    use crate::config::{Dimension, LatticeConfig};
    use crate::math::Vec3;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn sampler(dimension: Dimension, shuffle: bool) -> LatticeSampler {
        let config = LatticeConfig {
            frequency: 1.0,
            dimension,
            size_exponent: 3,
            shuffle,
        };
        let mut rng = StdRng::seed_from_u64(4);
        LatticeSampler::new(&config, &mut rng).unwrap()
    }

    #[test]
    fn identity_table_at_origin_is_zero() {
        // Unshuffled exponent-3 table is [0..8]; the origin hashes to
        // table[0] / 7 = 0
        let s = sampler(Dimension::One, false);
        assert_eq!(s.sample(Vec3::new(0.0, 0.0, 0.0), 1.0), 0.0);
    }

    #[test]
    fn constant_within_a_cell() {
        let s = sampler(Dimension::Three, true);
        let a = s.sample(Vec3::new(2.1, 3.2, 4.3), 1.0);
        let b = s.sample(Vec3::new(2.9, 3.8, 4.9), 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn steps_across_cell_boundaries() {
        // With the identity table adjacent 1D cells hash to consecutive
        // values, so the step is exactly 1/7
        let s = sampler(Dimension::One, false);
        let a = s.sample(Vec3::new(1.5, 0.0, 0.0), 1.0);
        let b = s.sample(Vec3::new(2.5, 0.0, 0.0), 1.0);
        assert!((b - a - 1.0 / 7.0).abs() < 1e-6);
    }

    #[test]
    fn output_range() {
        for dimension in [Dimension::One, Dimension::Two, Dimension::Three] {
            let s = sampler(dimension, true);
            let mut rng = StdRng::seed_from_u64(11);
            for _ in 0..1_000 {
                let p = Vec3::new(
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                    rng.random_range(-100.0..100.0),
                );
                let v = s.sample(p, 3.7);
                assert!((0.0..=1.0).contains(&v), "{v} out of range at {p:?}");
            }
        }
    }
}
