// Gradient (Perlin) noise. Each lattice corner contributes the dot
// product of a hashed gradient direction with the offset from that
// corner; contributions blend through the same quintic-smoothed lerps as
// value noise. Raw blends span [-0.5, 0.5] in 1D and [-1/sqrt2, 1/sqrt2]
// in 2D, so those dimensions scale up to land on [-1, 1]; the 3D blend
// already fills [-1, 1] on its own.

use rand::Rng;

use crate::NoiseSource;
use crate::config::{Dimension, NoiseError, PerlinConfig};
use crate::gradients::{
    GRADIENT_MASK_1D, GRADIENT_MASK_2D, GRADIENT_MASK_3D, GRADIENTS_1D, GRADIENTS_2D, GRADIENTS_3D,
};
use crate::math::{Vec2, Vec3, lerp, smooth};
use crate::permutation::PermutationTable;

pub struct PerlinSampler {
    table: PermutationTable,
    dimension: Dimension,
    normalized: bool,
}

impl PerlinSampler {
    pub fn new(config: &PerlinConfig, rng: &mut impl Rng) -> Result<Self, NoiseError> {
        config.validate()?;
        let table = PermutationTable::build(config.size_exponent, config.shuffle, rng)?;
        Ok(Self {
            table,
            dimension: config.dimension,
            normalized: config.normalized,
        })
    }
}

impl NoiseSource for PerlinSampler {
    fn sample(&self, point: Vec3, frequency: f32) -> f32 {
        let point = point.scale(frequency);
        let table = &self.table;
        let mask = table.mask();

        let xf = point.x.floor();
        let yf = point.y.floor();
        let zf = point.z.floor();

        // Offsets toward the lower corner, and toward the upper corner
        // (one less on each axis)
        let tx0 = point.x - xf;
        let ty0 = point.y - yf;
        let tz0 = point.z - zf;
        let tx1 = tx0 - 1.0;
        let ty1 = ty0 - 1.0;
        let tz1 = tz0 - 1.0;

        let sx = smooth(tx0);
        let sy = smooth(ty0);
        let sz = smooth(tz0);

        let x0 = (xf as i32) & mask;
        let y0 = (yf as i32) & mask;
        let z0 = (zf as i32) & mask;

        let h_x0 = table.get(x0);
        let h_x1 = table.get(x0 + 1);

        let sample = match self.dimension {
            Dimension::One => {
                let g0 = GRADIENTS_1D[(h_x0 & GRADIENT_MASK_1D) as usize];
                let g1 = GRADIENTS_1D[(h_x1 & GRADIENT_MASK_1D) as usize];
                // Two opposing gradients peak at 0.5, hence the doubling
                lerp(g0 * tx0, g1 * tx1, sx) * 2.0
            }
            Dimension::Two => {
                let h00 = table.get(h_x0 + y0);
                let h10 = table.get(h_x1 + y0);
                let h01 = table.get(h_x0 + y0 + 1);
                let h11 = table.get(h_x1 + y0 + 1);

                let g00 = GRADIENTS_2D[(h00 & GRADIENT_MASK_2D) as usize];
                let g10 = GRADIENTS_2D[(h10 & GRADIENT_MASK_2D) as usize];
                let g01 = GRADIENTS_2D[(h01 & GRADIENT_MASK_2D) as usize];
                let g11 = GRADIENTS_2D[(h11 & GRADIENT_MASK_2D) as usize];

                let v00 = g00.dot(Vec2::new(tx0, ty0));
                let v10 = g10.dot(Vec2::new(tx1, ty0));
                let v01 = g01.dot(Vec2::new(tx0, ty1));
                let v11 = g11.dot(Vec2::new(tx1, ty1));

                // Peak magnitude with four opposing unit gradients is
                // 1/sqrt2, so scale by sqrt2
                lerp(lerp(v00, v10, sx), lerp(v01, v11, sx), sy) * std::f32::consts::SQRT_2
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

                let v000 = GRADIENTS_3D[(h000 & GRADIENT_MASK_3D) as usize]
                    .dot(Vec3::new(tx0, ty0, tz0));
                let v100 = GRADIENTS_3D[(h100 & GRADIENT_MASK_3D) as usize]
                    .dot(Vec3::new(tx1, ty0, tz0));
                let v010 = GRADIENTS_3D[(h010 & GRADIENT_MASK_3D) as usize]
                    .dot(Vec3::new(tx0, ty1, tz0));
                let v110 = GRADIENTS_3D[(h110 & GRADIENT_MASK_3D) as usize]
                    .dot(Vec3::new(tx1, ty1, tz0));
                let v001 = GRADIENTS_3D[(h001 & GRADIENT_MASK_3D) as usize]
                    .dot(Vec3::new(tx0, ty0, tz1));
                let v101 = GRADIENTS_3D[(h101 & GRADIENT_MASK_3D) as usize]
                    .dot(Vec3::new(tx1, ty0, tz1));
                let v011 = GRADIENTS_3D[(h011 & GRADIENT_MASK_3D) as usize]
                    .dot(Vec3::new(tx0, ty1, tz1));
                let v111 = GRADIENTS_3D[(h111 & GRADIENT_MASK_3D) as usize]
                    .dot(Vec3::new(tx1, ty1, tz1));

                // No extra scale: the cube-edge gradients have length
                // sqrt2, which already stretches the blend across [-1, 1]
                lerp(
                    lerp(lerp(v000, v100, sx), lerp(v010, v110, sx), sy),
                    lerp(lerp(v001, v101, sx), lerp(v011, v111, sx), sy),
                    sz,
                )
            }
        };

        if self.normalized {
            sample * 0.5 + 0.5
        } else {
            sample
        }
    }
}
