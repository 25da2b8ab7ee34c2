// Small geometry and interpolation helpers shared by the samplers

// 2D point/vector, used for Worley feature points and gradient directions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    // Euclidean distance between two points
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

// 3D sample point in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn scale(self, factor: f32) -> Vec3 {
        Vec3::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

// Quintic smoothing curve 6t^5 - 15t^4 + 10t^3
// First and second derivatives are zero at t=0 and t=1, so interpolated
// noise carries no visible seam or gradient break across cell boundaries
#[inline]
pub fn smooth(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[cfg(test)]
mod tests {
    use super::{Vec2, Vec3, lerp, smooth};

    #[test]
    fn smooth_endpoints() {
        assert_eq!(smooth(0.0), 0.0);
        assert_eq!(smooth(1.0), 1.0);
        // Symmetric around the midpoint
        assert!((smooth(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smooth_flat_at_endpoints() {
        // Zero slope at both ends: values right next to the endpoints
        // barely move
        assert!(smooth(0.001).abs() < 1e-7);
        assert!((smooth(0.999) - 1.0).abs() < 1e-7);
    }

    #[test]
    fn lerp_basics() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }

    #[test]
    fn vector_ops() {
        assert_eq!(Vec2::new(3.0, 0.0).distance(Vec2::new(0.0, 4.0)), 5.0);
        assert_eq!(Vec2::new(1.0, 2.0).dot(Vec2::new(3.0, 4.0)), 11.0);
        assert_eq!(
            Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, 5.0, 6.0)),
            32.0
        );
        assert_eq!(
            Vec3::new(1.0, -2.0, 0.5).scale(2.0),
            Vec3::new(2.0, -4.0, 1.0)
        );
    }
}
