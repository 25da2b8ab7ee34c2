// Fixed gradient direction tables for 1D/2D/3D Perlin noise. Built once
// into the binary, never mutated. The tables are intentionally not the
// same length as the hash table; each has its own lookup mask.

use std::f32::consts::FRAC_1_SQRT_2;

use crate::math::{Vec2, Vec3};

pub const GRADIENTS_1D: [f32; 2] = [-1.0, 1.0];

// Four axis directions plus the four unit-length diagonals
pub const GRADIENTS_2D: [Vec2; 8] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Vec2::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    Vec2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
    Vec2::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
];

// The twelve cube-edge directions padded to sixteen entries with four
// repeats. The repeats skew the distribution slightly; that skew is a
// known characteristic of this classic Perlin variant and is kept for
// numerical compatibility.
pub const GRADIENTS_3D: [Vec3; 16] = [
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(-1.0, 1.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
    Vec3::new(-1.0, -1.0, 0.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(-1.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, -1.0),
    Vec3::new(-1.0, 0.0, -1.0),
    Vec3::new(0.0, 1.0, 1.0),
    Vec3::new(0.0, -1.0, 1.0),
    Vec3::new(0.0, 1.0, -1.0),
    Vec3::new(0.0, -1.0, -1.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(-1.0, 1.0, 0.0),
    Vec3::new(0.0, -1.0, 1.0),
    Vec3::new(0.0, -1.0, -1.0),
];

pub const GRADIENT_MASK_1D: i32 = GRADIENTS_1D.len() as i32 - 1;
pub const GRADIENT_MASK_2D: i32 = GRADIENTS_2D.len() as i32 - 1;
pub const GRADIENT_MASK_3D: i32 = GRADIENTS_3D.len() as i32 - 1;
