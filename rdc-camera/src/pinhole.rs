use ndarray::Array2;

use rdc_core::{DepthCamera, DepthImage, ImagePoint, NodeBounds, Ray};

use crate::error::Result;
use crate::intrinsics::PinholeIntrinsics;
use crate::sampling::{check_node, check_range_shape, fill_bounded};

/// Single-node pinhole depth camera
///
/// One node spans the full image. Depth is sourced from a backing range
/// buffer supplied at construction, with NaN marking pixels that returned no
/// measurement.
#[derive(Debug)]
pub struct PinholeDepthCamera {
    intrinsics: PinholeIntrinsics,
    bounds: NodeBounds,
    range: Array2<f64>,
}

impl PinholeDepthCamera {
    /// Create a model from calibration and a range buffer of shape
    /// (num_strides, num_steps)
    pub fn new(intrinsics: PinholeIntrinsics, range: Array2<f64>) -> Result<Self> {
        intrinsics.validate()?;
        check_range_shape(&range, intrinsics.num_strides, intrinsics.num_steps)?;
        let bounds = NodeBounds::new(
            0,
            intrinsics.num_strides - 1,
            0,
            intrinsics.num_steps - 1,
        );
        Ok(Self {
            intrinsics,
            bounds,
            range,
        })
    }

    pub fn intrinsics(&self) -> &PinholeIntrinsics {
        &self.intrinsics
    }
}

/// Pinhole projection onto the extent described by `intrinsics`
///
/// Shared with the composite rig, which applies it per section. Rays with a
/// non-positive forward component, degenerate rays, and rays falling outside
/// the image extent all map to the invalid sentinel.
pub(crate) fn project(intrinsics: &PinholeIntrinsics, ray: &Ray) -> ImagePoint {
    if !ray.is_valid() || ray.forward <= 0.0 {
        return ImagePoint::invalid();
    }
    let point = ImagePoint::new(
        intrinsics.center_stride + intrinsics.focal_stride * ray.down / ray.forward,
        intrinsics.center_step + intrinsics.focal_step * ray.right / ray.forward,
    );
    let bounds = NodeBounds::new(
        0,
        intrinsics.num_strides - 1,
        0,
        intrinsics.num_steps - 1,
    );
    if !bounds.contains_point(&point) {
        return ImagePoint::invalid();
    }
    point
}

/// Inverse pinhole projection; the returned ray is unit magnitude
pub(crate) fn unproject(intrinsics: &PinholeIntrinsics, point: &ImagePoint) -> Ray {
    let bounds = NodeBounds::new(
        0,
        intrinsics.num_strides - 1,
        0,
        intrinsics.num_steps - 1,
    );
    if !bounds.contains_point(point) {
        return Ray::invalid();
    }
    Ray::new(
        1.0,
        (point.step - intrinsics.center_step) / intrinsics.focal_step,
        (point.stride - intrinsics.center_stride) / intrinsics.focal_stride,
    )
    .normalized()
}

impl DepthCamera for PinholeDepthCamera {
    fn num_strides(&self) -> u32 {
        self.intrinsics.num_strides
    }

    fn num_steps(&self) -> u32 {
        self.intrinsics.num_steps
    }

    fn num_nodes(&self) -> u32 {
        1
    }

    fn projection(&self, ray: &Ray) -> ImagePoint {
        project(&self.intrinsics, ray)
    }

    fn inverse_projection(&self, point: &ImagePoint) -> Ray {
        unproject(&self.intrinsics, point)
    }

    fn stride_min(&self, n: u32) -> rdc_core::Result<u32> {
        check_node(n, 1)?;
        Ok(self.bounds.stride_min)
    }

    fn stride_max(&self, n: u32) -> rdc_core::Result<u32> {
        check_node(n, 1)?;
        Ok(self.bounds.stride_max)
    }

    fn step_min(&self, n: u32) -> rdc_core::Result<u32> {
        check_node(n, 1)?;
        Ok(self.bounds.step_min)
    }

    fn step_max(&self, n: u32) -> rdc_core::Result<u32> {
        check_node(n, 1)?;
        Ok(self.bounds.step_max)
    }

    fn get_depth(&self, n: u32, depth: &mut DepthImage) -> rdc_core::Result<()> {
        check_node(n, 1)?;
        depth.reset(self.num_strides(), self.num_steps());
        fill_bounded(&self.range, &self.bounds, depth);
        Ok(())
    }
}
