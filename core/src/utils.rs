use image::{GrayImage, Luma};

use crate::config::{NoiseError, NoiseKind};
use crate::engine::NoiseEngine;
use crate::math::Vec3;

// 2D sample field: row-major Vec<Vec<f32>> of size N×N
// access as `map[y][x]`.
pub type Field2D = Vec<Vec<f32>>;

// Scan a unit quad centered at the origin, one world-space point per
// pixel center, through the engine facade. Worley works in raw pixel
// coordinates instead, the way its feature points were placed.
pub fn sample_plane(
    engine: &NoiseEngine,
    kind: NoiseKind,
    resolution: u32,
) -> Result<Field2D, NoiseError> {
    let inverse_resolution = 1.0 / resolution as f32;
    let mut map = Vec::with_capacity(resolution as usize);
    for y in 0..resolution {
        let mut row = Vec::with_capacity(resolution as usize);
        for x in 0..resolution {
            let point = if kind == NoiseKind::Worley {
                Vec3::new(x as f32, y as f32, 0.0)
            } else {
                Vec3::new(
                    (x as f32 + 0.5) * inverse_resolution - 0.5,
                    (y as f32 + 0.5) * inverse_resolution - 0.5,
                    0.0,
                )
            };
            row.push(engine.sample(kind, point)?);
        }
        map.push(row);
    }
    Ok(map)
}

// flatten a 2D field (row-major) into a single Vec<f32>
// for handing off to a caller-owned image buffer
pub fn flatten2(map: &Field2D) -> Vec<f32> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Remap a field to [0, 1] by its own min/max
pub fn normalize2(map: &mut Field2D) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;

    for row in map.iter() {
        for &val in row.iter() {
            min = min.min(val);
            max = max.max(val);
        }
    }

    let range = (max - min).max(0.001); // prevent zero-division
    for row in map.iter_mut() {
        for val in row.iter_mut() {
            *val = (*val - min) / range;
        }
    }
}

// Convert a field with values in [0, 1] into a grayscale image
// (values outside the range are clamped)
pub fn to_gray_image(map: &Field2D) -> GrayImage {
    let height = map.len() as u32;
    let width = map.first().map_or(0, |row| row.len()) as u32;
    let mut img = GrayImage::new(width, height);
    for (y, row) in map.iter().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let gray = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img
}
