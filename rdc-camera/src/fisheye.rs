use ndarray::Array2;

use rdc_core::{DepthCamera, DepthImage, ImagePoint, NodeBounds, Ray};

use crate::error::Result;
use crate::intrinsics::FisheyeIntrinsics;
use crate::sampling::{check_node, check_range_shape, fill_bounded};

// Below this lateral magnitude the azimuth is numerically meaningless and
// the ray is treated as lying on the boresight axis.
const AXIAL_EPS: f64 = 1e-12;

/// Single-node equidistant fisheye depth camera
///
/// A ray at angle theta from the boresight lands at radius focal * theta
/// from the principal point; rays beyond `max_theta` have no image
/// representation.
#[derive(Debug)]
pub struct FisheyeDepthCamera {
    intrinsics: FisheyeIntrinsics,
    bounds: NodeBounds,
    range: Array2<f64>,
}

impl FisheyeDepthCamera {
    /// Create a model from calibration and a range buffer of shape
    /// (num_strides, num_steps)
    pub fn new(intrinsics: FisheyeIntrinsics, range: Array2<f64>) -> Result<Self> {
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

    pub fn intrinsics(&self) -> &FisheyeIntrinsics {
        &self.intrinsics
    }
}

impl DepthCamera for FisheyeDepthCamera {
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
        if !ray.is_valid() {
            return ImagePoint::invalid();
        }
        let lateral = ray.right.hypot(ray.down);
        if lateral <= AXIAL_EPS {
            if ray.forward > 0.0 {
                // On the boresight axis
                let point =
                    ImagePoint::new(self.intrinsics.center_stride, self.intrinsics.center_step);
                if self.bounds.contains_point(&point) {
                    return point;
                }
            }
            // Zero ray, or straight back where the azimuth is undefined
            return ImagePoint::invalid();
        }
        let theta = lateral.atan2(ray.forward);
        if theta > self.intrinsics.max_theta {
            return ImagePoint::invalid();
        }
        let radius = self.intrinsics.focal * theta;
        let point = ImagePoint::new(
            self.intrinsics.center_stride + radius * ray.down / lateral,
            self.intrinsics.center_step + radius * ray.right / lateral,
        );
        if !self.bounds.contains_point(&point) {
            return ImagePoint::invalid();
        }
        point
    }

    fn inverse_projection(&self, point: &ImagePoint) -> Ray {
        if !self.bounds.contains_point(point) {
            return Ray::invalid();
        }
        let d_stride = point.stride - self.intrinsics.center_stride;
        let d_step = point.step - self.intrinsics.center_step;
        let radius = d_stride.hypot(d_step);
        let theta = radius / self.intrinsics.focal;
        if theta > self.intrinsics.max_theta {
            return Ray::invalid();
        }
        if radius <= AXIAL_EPS {
            return Ray::new(1.0, 0.0, 0.0);
        }
        let lateral = theta.sin();
        Ray::new(
            theta.cos(),
            lateral * d_step / radius,
            lateral * d_stride / radius,
        )
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
