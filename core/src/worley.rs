// Worley (cell) noise: the distance from a sample point to the nearest of
// a set of randomly scattered feature points, normalized by the output
// resolution. Independent of the permutation/gradient machinery.

use rand::Rng;
use tracing::debug;

use crate::config::{Dimension, NoiseError, WorleyConfig};
use crate::math::Vec2;

pub struct WorleySampler {
    points: Vec<Vec2>,
    resolution: u32,
}

impl WorleySampler {
    // Scatters the configured number of feature points over the pixel
    // grid. In 1D mode every point sits on the horizontal midline, so the
    // distance field collapses to a band; in 2D both axes are drawn
    // uniformly. Points live until the sampler is rebuilt.
    pub fn new(
        config: &WorleyConfig,
        resolution: u32,
        rng: &mut impl Rng,
    ) -> Result<Self, NoiseError> {
        config.validate()?;
        if resolution == 0 {
            return Err(NoiseError::InvalidConfig {
                reason: "worley noise needs a non-zero output resolution".into(),
            });
        }

        let midline = (resolution / 2) as f32;
        let mut points = Vec::with_capacity(config.grid_points as usize);
        for _ in 0..config.grid_points {
            let x = rng.random_range(0..resolution) as f32;
            let y = match config.dimension {
                Dimension::One => midline,
                _ => rng.random_range(0..resolution) as f32,
            };
            points.push(Vec2::new(x, y));
        }

        debug!(count = points.len(), resolution, "placed worley feature points");
        Ok(Self { points, resolution })
    }

    // Nearest feature-point distance over the resolution. Roughly [0, 1],
    // though the realizable maximum depends on point count and placement.
    // The point set is never empty: construction rejects a zero count.
    pub fn sample(&self, point: Vec2) -> f32 {
        let mut min_distance = f32::INFINITY;
        for feature in &self.points {
            min_distance = min_distance.min(feature.distance(point));
        }
        min_distance / self.resolution as f32
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::WorleySampler;
    use crate::config::{Dimension, WorleyConfig};
    use crate::math::Vec2;
    use rand::{SeedableRng, rngs::StdRng};

    fn sampler(dimension: Dimension, grid_points: u32) -> WorleySampler {
        let config = WorleyConfig {
            dimension,
            grid_points,
            ..WorleyConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(31);
        WorleySampler::new(&config, 256, &mut rng).unwrap()
    }

    #[test]
    fn zero_at_a_feature_point() {
        let s = sampler(Dimension::Two, 10);
        let feature = s.points()[3];
        assert_eq!(s.sample(feature), 0.0);
    }

    #[test]
    fn pure_function() {
        let s = sampler(Dimension::Two, 10);
        let p = Vec2::new(17.5, 201.0);
        assert_eq!(s.sample(p), s.sample(p));
    }

    #[test]
    fn one_dimensional_points_sit_on_the_midline() {
        let s = sampler(Dimension::One, 25);
        for p in s.points() {
            assert_eq!(p.y, 128.0);
        }
    }

    #[test]
    fn point_count_matches_config() {
        assert_eq!(sampler(Dimension::Two, 42).points().len(), 42);
    }

    #[test]
    fn rejects_zero_resolution() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(WorleySampler::new(&WorleyConfig::default(), 0, &mut rng).is_err());
    }

    #[test]
    fn rejects_empty_point_set() {
        let config = WorleyConfig {
            grid_points: 0,
            ..WorleyConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(WorleySampler::new(&config, 256, &mut rng).is_err());
    }

    #[test]
    fn distances_scale_with_resolution() {
        // A single point at a known spot: normalized distance is the
        // euclidean distance over the resolution
        let config = WorleyConfig {
            dimension: Dimension::Two,
            grid_points: 1,
            ..WorleyConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(8);
        let s = WorleySampler::new(&config, 100, &mut rng).unwrap();
        let feature = s.points()[0];
        let probe = Vec2::new(feature.x, feature.y + 50.0);
        assert!((s.sample(probe) - 0.5).abs() < 1e-6);
    }
}
