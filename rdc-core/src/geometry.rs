use nalgebra::Vector3;

/// Direction in the camera's right-handed local frame
///
/// Components are (forward, right, down). Unit magnitude is a caller
/// precondition where a query is documented to expect it; projection
/// functions do not normalize their input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub forward: f64,
    pub right: f64,
    pub down: f64,
}

impl Ray {
    pub const fn new(forward: f64, right: f64, down: f64) -> Self {
        Self {
            forward,
            right,
            down,
        }
    }

    /// The all-NaN sentinel marking a direction with no geometric meaning
    pub const fn invalid() -> Self {
        Self {
            forward: f64::NAN,
            right: f64::NAN,
            down: f64::NAN,
        }
    }

    /// True when all three components are finite
    pub fn is_valid(&self) -> bool {
        self.forward.is_finite() && self.right.is_finite() && self.down.is_finite()
    }

    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Unit-magnitude copy, or the invalid sentinel for zero or non-finite input
    pub fn normalized(&self) -> Self {
        if !self.is_valid() {
            return Self::invalid();
        }
        let n = self.norm();
        if n <= 0.0 {
            return Self::invalid();
        }
        Self::new(self.forward / n, self.right / n, self.down / n)
    }

    /// View as a nalgebra vector with (x, y, z) = (forward, right, down)
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.forward, self.right, self.down)
    }

    pub fn from_vector(v: &Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Sub-pixel image coordinate
///
/// `stride` indexes the non-contiguous (outer) image axis and `step` the
/// contiguous (inner) axis. Pixel i spans [i - 0.5, i + 0.5], so an axis of
/// n pixels covers the continuous extent [-0.5, n - 0.5].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePoint {
    pub stride: f64,
    pub step: f64,
}

impl ImagePoint {
    pub const fn new(stride: f64, step: f64) -> Self {
        Self { stride, step }
    }

    /// The all-NaN sentinel marking a coordinate with no geometric meaning
    pub const fn invalid() -> Self {
        Self {
            stride: f64::NAN,
            step: f64::NAN,
        }
    }

    /// True when both coordinates are finite
    pub fn is_valid(&self) -> bool {
        self.stride.is_finite() && self.step.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_invalid_is_all_nan() {
        let ray = Ray::invalid();
        assert!(ray.forward.is_nan());
        assert!(ray.right.is_nan());
        assert!(ray.down.is_nan());
        assert!(!ray.is_valid());
    }

    #[test]
    fn test_ray_validity_requires_all_components_finite() {
        assert!(Ray::new(1.0, 0.0, 0.0).is_valid());
        assert!(!Ray::new(f64::NAN, 0.0, 0.0).is_valid());
        assert!(!Ray::new(1.0, f64::INFINITY, 0.0).is_valid());
        assert!(!Ray::new(1.0, 0.0, f64::NEG_INFINITY).is_valid());
    }

    #[test]
    fn test_ray_normalized() {
        let ray = Ray::new(3.0, 0.0, 4.0).normalized();
        assert!((ray.norm() - 1.0).abs() < 1e-12);
        assert!((ray.forward - 0.6).abs() < 1e-12);
        assert!((ray.down - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_ray_normalized_degenerate_input() {
        assert!(!Ray::new(0.0, 0.0, 0.0).normalized().is_valid());
        assert!(!Ray::new(f64::NAN, 1.0, 0.0).normalized().is_valid());
    }

    #[test]
    fn test_ray_vector_round_trip() {
        let ray = Ray::new(0.2, -0.4, 0.6);
        let back = Ray::from_vector(&ray.to_vector());
        assert_eq!(ray, back);
    }

    #[test]
    fn test_image_point_invalid_is_all_nan() {
        let point = ImagePoint::invalid();
        assert!(point.stride.is_nan());
        assert!(point.step.is_nan());
        assert!(!point.is_valid());
    }

    #[test]
    fn test_image_point_validity_requires_both_finite() {
        assert!(ImagePoint::new(12.5, 40.0).is_valid());
        assert!(!ImagePoint::new(f64::NAN, 40.0).is_valid());
        assert!(!ImagePoint::new(12.5, f64::INFINITY).is_valid());
    }
}
