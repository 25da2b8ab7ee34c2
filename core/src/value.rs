// Value noise: the lattice hash evaluated at both cells on every used
// axis, blended with quintic-smoothed nested lerps into a continuous
// field in [0, 1).

use rand::Rng;

use crate::NoiseSource;
use crate::config::{Dimension, NoiseError, ValueConfig};
use crate::math::{Vec3, lerp, smooth};
use crate::permutation::PermutationTable;

pub struct ValueSampler {
    table: PermutationTable,
    dimension: Dimension,
}

impl ValueSampler {
    pub fn new(config: &ValueConfig, rng: &mut impl Rng) -> Result<Self, NoiseError> {
        config.validate()?;
        let table = PermutationTable::build(config.size_exponent, config.shuffle, rng)?;
        Ok(Self {
            table,
            dimension: config.dimension,
        })
    }
}

impl NoiseSource for ValueSampler {
    fn sample(&self, point: Vec3, frequency: f32) -> f32 {
        let point = point.scale(frequency);
        let table = &self.table;
        let mask = table.mask();

        let xf = point.x.floor();
        let yf = point.y.floor();
        let zf = point.z.floor();

        // Smoothed fractional offsets inside the cell
        let sx = smooth(point.x - xf);
        let sy = smooth(point.y - yf);
        let sz = smooth(point.z - zf);

        let x0 = (xf as i32) & mask;
        let y0 = (yf as i32) & mask;
        let z0 = (zf as i32) & mask;

        let scale = 1.0 / mask as f32;
        let h_x0 = table.get(x0);
        let h_x1 = table.get(x0 + 1);

        match self.dimension {
            Dimension::One => lerp(h_x0 as f32, h_x1 as f32, sx) * scale,
            Dimension::Two => {
                let h00 = table.get(h_x0 + y0);
                let h10 = table.get(h_x1 + y0);
                let h01 = table.get(h_x0 + y0 + 1);
                let h11 = table.get(h_x1 + y0 + 1);
                lerp(
                    lerp(h00 as f32, h10 as f32, sx),
                    lerp(h01 as f32, h11 as f32, sx),
                    sy,
                ) * scale
            }
            Dimension::Three => {
                let h00 = table.get(h_x0 + y0);
                let h10 = table.get(h_x1 + y0);
                let h01 = table.get(h_x0 + y0 + 1);
                let h11 = table.get(h_x1 + y0 + 1);

                let h000 = table.get(h00 + z0);
                let h100 = table.get(h10 + z0);
                let h010 = table.get(h01 + z0);
                let h110 = table.get(h11 + z0);
                let h001 = table.get(h00 + z0 + 1);
                let h101 = table.get(h10 + z0 + 1);
                let h011 = table.get(h01 + z0 + 1);
                let h111 = table.get(h11 + z0 + 1);

                lerp(
                    lerp(
                        lerp(h000 as f32, h100 as f32, sx),
                        lerp(h010 as f32, h110 as f32, sx),
                        sy,
                    ),
                    lerp(
                        lerp(h001 as f32, h101 as f32, sx),
                        lerp(h011 as f32, h111 as f32, sx),
                        sy,
                    ),
                    sz,
                ) * scale
            }
        }
    }
}
