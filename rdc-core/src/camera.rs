//! Camera-independent depth camera contract

use crate::depth::DepthImage;
use crate::error::Result;
use crate::geometry::{ImagePoint, Ray};

/// Inclusive bounding box of one node of the valid image footprint
///
/// Descriptive metadata only: a model reports its node boxes, it does not
/// hand out node objects. Constructors of concrete models are expected to
/// guarantee min <= max on both axes and containment in the image, so an
/// empty box is never observable through the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeBounds {
    pub stride_min: u32,
    pub stride_max: u32,
    pub step_min: u32,
    pub step_max: u32,
}

impl NodeBounds {
    pub const fn new(stride_min: u32, stride_max: u32, step_min: u32, step_max: u32) -> Self {
        Self {
            stride_min,
            stride_max,
            step_min,
            step_max,
        }
    }

    /// True when the integer pixel (stride, step) lies inside the box
    pub fn contains(&self, stride: u32, step: u32) -> bool {
        stride >= self.stride_min
            && stride <= self.stride_max
            && step >= self.step_min
            && step <= self.step_max
    }

    /// True when a sub-pixel coordinate falls within the pixel extents of
    /// the box (each pixel i spans [i - 0.5, i + 0.5])
    pub fn contains_point(&self, point: &ImagePoint) -> bool {
        point.is_valid()
            && point.stride >= self.stride_min as f64 - 0.5
            && point.stride <= self.stride_max as f64 + 0.5
            && point.step >= self.step_min as f64 - 0.5
            && point.step <= self.step_max as f64 + 0.5
    }

    pub fn overlaps(&self, other: &NodeBounds) -> bool {
        self.stride_min <= other.stride_max
            && other.stride_min <= self.stride_max
            && self.step_min <= other.step_max
            && other.step_min <= self.step_max
    }

    /// Number of pixels covered by the box
    pub fn pixel_count(&self) -> usize {
        let strides = (self.stride_max - self.stride_min + 1) as usize;
        let steps = (self.step_max - self.step_min + 1) as usize;
        strides * steps
    }
}

/// Generic depth camera
///
/// Converts between ray directions in the camera's local (forward, right,
/// down) frame and (stride, step) image coordinates, and extracts depth
/// images over a partitioned validity region.
///
/// Invalid geometry is signaled with NaN outputs, never an error: rays
/// outside the field of view and coordinates outside the valid footprint are
/// routine per-pixel outcomes and must stay off the error path. Errors are
/// reserved for node-index violations.
///
/// Resolution and node partition are fixed at construction. No method
/// mutates instance state, so one instance may be queried from any number of
/// threads concurrently.
pub trait DepthCamera: Send + Sync {
    /// Number of pixels in the non-contiguous dimension of each image
    fn num_strides(&self) -> u32;

    /// Number of pixels in the contiguous dimension of each image
    fn num_steps(&self) -> u32;

    /// Number of nodes in the valid-data partition; valid node indices are
    /// the contiguous range [0, num_nodes())
    fn num_nodes(&self) -> u32;

    /// Project a unit magnitude ray in the camera frame to an image point
    ///
    /// Total over all inputs: the result is either finite in both
    /// coordinates or the invalid sentinel in both, never a mix. Zero and
    /// non-finite rays yield the sentinel; non-unit rays are projected by
    /// direction.
    fn projection(&self, ray: &Ray) -> ImagePoint;

    /// Project an image point to a unit magnitude ray in the camera frame
    ///
    /// Total over all inputs: the result is either finite in all three
    /// components or the invalid sentinel in all three. Coordinates outside
    /// every valid node yield the sentinel.
    fn inverse_projection(&self, point: &ImagePoint) -> Ray;

    /// First stride within the bounding box of node `n`
    fn stride_min(&self, n: u32) -> Result<u32>;

    /// Last stride within the bounding box of node `n`
    fn stride_max(&self, n: u32) -> Result<u32>;

    /// First step within the bounding box of node `n`
    fn step_min(&self, n: u32) -> Result<u32>;

    /// Last step within the bounding box of node `n`
    fn step_max(&self, n: u32) -> Result<u32>;

    /// Bounding box of node `n` as one value
    fn node_bounds(&self, n: u32) -> Result<NodeBounds> {
        Ok(NodeBounds::new(
            self.stride_min(n)?,
            self.stride_max(n)?,
            self.step_min(n)?,
            self.step_max(n)?,
        ))
    }

    /// Extract the depth image over node `n`'s bounding box
    ///
    /// Resizes `depth` to num_strides() x num_steps(). Pixels outside the
    /// box, and pixels inside it with no valid range measurement, are set to
    /// NaN.
    fn get_depth(&self, n: u32, depth: &mut DepthImage) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DepthCameraError;

    #[test]
    fn test_bounds_contains_pixel() {
        let bounds = NodeBounds::new(2, 5, 10, 20);
        assert!(bounds.contains(2, 10));
        assert!(bounds.contains(5, 20));
        assert!(bounds.contains(3, 15));
        assert!(!bounds.contains(1, 15));
        assert!(!bounds.contains(6, 15));
        assert!(!bounds.contains(3, 9));
        assert!(!bounds.contains(3, 21));
    }

    #[test]
    fn test_bounds_contains_point_half_pixel_extents() {
        let bounds = NodeBounds::new(0, 9, 0, 9);
        assert!(bounds.contains_point(&ImagePoint::new(-0.5, 0.0)));
        assert!(bounds.contains_point(&ImagePoint::new(9.5, 9.5)));
        assert!(!bounds.contains_point(&ImagePoint::new(-0.6, 0.0)));
        assert!(!bounds.contains_point(&ImagePoint::new(0.0, 9.6)));
        assert!(!bounds.contains_point(&ImagePoint::invalid()));
    }

    #[test]
    fn test_bounds_overlap() {
        let a = NodeBounds::new(0, 4, 0, 4);
        let b = NodeBounds::new(4, 8, 4, 8);
        let c = NodeBounds::new(5, 8, 0, 4);
        assert!(a.overlaps(&b)); // shared corner pixel
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_bounds_pixel_count() {
        assert_eq!(NodeBounds::new(0, 0, 0, 0).pixel_count(), 1);
        assert_eq!(NodeBounds::new(2, 5, 10, 20).pixel_count(), 4 * 11);
    }

    // Minimal model exercising the provided node_bounds default
    struct FlatModel;

    impl DepthCamera for FlatModel {
        fn num_strides(&self) -> u32 {
            4
        }
        fn num_steps(&self) -> u32 {
            8
        }
        fn num_nodes(&self) -> u32 {
            1
        }
        fn projection(&self, _ray: &Ray) -> ImagePoint {
            ImagePoint::invalid()
        }
        fn inverse_projection(&self, _point: &ImagePoint) -> Ray {
            Ray::invalid()
        }
        fn stride_min(&self, n: u32) -> Result<u32> {
            self.check(n)?;
            Ok(0)
        }
        fn stride_max(&self, n: u32) -> Result<u32> {
            self.check(n)?;
            Ok(3)
        }
        fn step_min(&self, n: u32) -> Result<u32> {
            self.check(n)?;
            Ok(0)
        }
        fn step_max(&self, n: u32) -> Result<u32> {
            self.check(n)?;
            Ok(7)
        }
        fn get_depth(&self, n: u32, depth: &mut DepthImage) -> Result<()> {
            self.check(n)?;
            depth.reset(self.num_strides(), self.num_steps());
            Ok(())
        }
    }

    impl FlatModel {
        fn check(&self, n: u32) -> Result<()> {
            if n >= self.num_nodes() {
                return Err(DepthCameraError::OutOfRange {
                    node: n,
                    count: self.num_nodes(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_node_bounds_default_method() {
        let model = FlatModel;
        let bounds = model.node_bounds(0).unwrap();
        assert_eq!(bounds, NodeBounds::new(0, 3, 0, 7));
    }

    #[test]
    fn test_node_bounds_propagates_out_of_range() {
        let model = FlatModel;
        let err = model.node_bounds(1).unwrap_err();
        assert_eq!(err, DepthCameraError::OutOfRange { node: 1, count: 1 });
    }

    #[test]
    fn test_trait_object_safe() {
        let model: Box<dyn DepthCamera> = Box::new(FlatModel);
        assert_eq!(model.num_strides(), 4);
        assert!(!model.projection(&Ray::new(1.0, 0.0, 0.0)).is_valid());
    }
}
