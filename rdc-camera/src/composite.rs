use nalgebra::{Rotation3, Vector3};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use rdc_core::{DepthCamera, DepthImage, ImagePoint, NodeBounds, Ray};

use crate::error::{ModelError, Result};
use crate::intrinsics::PinholeIntrinsics;
use crate::pinhole;
use crate::sampling::{check_node, check_range_shape, fill_bounded};

/// One section of a composite rig
///
/// `yaw` rotates the section boresight about the down axis, in radians,
/// positive toward the right of the rig frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeSection {
    pub yaw: f64,
    pub intrinsics: PinholeIntrinsics,
}

/// Multi-node composite depth camera
///
/// Several yaw-rotated pinhole sections share one image: section k occupies
/// its own block of step columns and owns node k, so node boxes are disjoint
/// by construction. All sections must agree on the stride count. Where two
/// sections' angular fields overlap, `projection` resolves to the lowest
/// section index.
#[derive(Debug)]
pub struct CompositeDepthCamera {
    sections: Vec<CompositeSection>,
    rotations: Vec<Rotation3<f64>>,
    bounds: Vec<NodeBounds>,
    step_offsets: Vec<u32>,
    num_strides: u32,
    num_steps: u32,
    range: Array2<f64>,
}

impl CompositeDepthCamera {
    /// Create a rig from its sections and a range buffer covering the full
    /// mosaic, shape (stride count, sum of section step counts)
    pub fn new(sections: Vec<CompositeSection>, range: Array2<f64>) -> Result<Self> {
        let first = sections.first().ok_or(ModelError::NoSections)?;
        let num_strides = first.intrinsics.num_strides;

        let mut rotations = Vec::with_capacity(sections.len());
        let mut bounds = Vec::with_capacity(sections.len());
        let mut step_offsets = Vec::with_capacity(sections.len());
        let mut num_steps = 0u32;
        for section in &sections {
            section.intrinsics.validate()?;
            if !section.yaw.is_finite() {
                return Err(ModelError::InvalidYaw(section.yaw));
            }
            if section.intrinsics.num_strides != num_strides {
                return Err(ModelError::StrideCountMismatch {
                    expected: num_strides,
                    actual: section.intrinsics.num_strides,
                });
            }
            rotations.push(Rotation3::from_axis_angle(
                &Vector3::z_axis(),
                section.yaw,
            ));
            step_offsets.push(num_steps);
            bounds.push(NodeBounds::new(
                0,
                num_strides - 1,
                num_steps,
                num_steps + section.intrinsics.num_steps - 1,
            ));
            num_steps += section.intrinsics.num_steps;
        }
        check_range_shape(&range, num_strides, num_steps)?;

        Ok(Self {
            sections,
            rotations,
            bounds,
            step_offsets,
            num_strides,
            num_steps,
            range,
        })
    }

    pub fn sections(&self) -> &[CompositeSection] {
        &self.sections
    }
}

impl DepthCamera for CompositeDepthCamera {
    fn num_strides(&self) -> u32 {
        self.num_strides
    }

    fn num_steps(&self) -> u32 {
        self.num_steps
    }

    fn num_nodes(&self) -> u32 {
        self.sections.len() as u32
    }

    fn projection(&self, ray: &Ray) -> ImagePoint {
        if !ray.is_valid() {
            return ImagePoint::invalid();
        }
        let v = ray.to_vector();
        for (k, section) in self.sections.iter().enumerate() {
            // Rig frame to section frame
            let local = Ray::from_vector(&self.rotations[k].inverse_transform_vector(&v));
            let point = pinhole::project(&section.intrinsics, &local);
            if point.is_valid() {
                return ImagePoint::new(point.stride, point.step + self.step_offsets[k] as f64);
            }
        }
        ImagePoint::invalid()
    }

    fn inverse_projection(&self, point: &ImagePoint) -> Ray {
        if !point.is_valid() {
            return Ray::invalid();
        }
        for (k, section) in self.sections.iter().enumerate() {
            if !self.bounds[k].contains_point(point) {
                continue;
            }
            let local_point =
                ImagePoint::new(point.stride, point.step - self.step_offsets[k] as f64);
            let local = pinhole::unproject(&section.intrinsics, &local_point);
            if !local.is_valid() {
                return Ray::invalid();
            }
            return Ray::from_vector(&(self.rotations[k] * local.to_vector()));
        }
        Ray::invalid()
    }

    fn stride_min(&self, n: u32) -> rdc_core::Result<u32> {
        check_node(n, self.num_nodes())?;
        Ok(self.bounds[n as usize].stride_min)
    }

    fn stride_max(&self, n: u32) -> rdc_core::Result<u32> {
        check_node(n, self.num_nodes())?;
        Ok(self.bounds[n as usize].stride_max)
    }

    fn step_min(&self, n: u32) -> rdc_core::Result<u32> {
        check_node(n, self.num_nodes())?;
        Ok(self.bounds[n as usize].step_min)
    }

    fn step_max(&self, n: u32) -> rdc_core::Result<u32> {
        check_node(n, self.num_nodes())?;
        Ok(self.bounds[n as usize].step_max)
    }

    fn get_depth(&self, n: u32, depth: &mut DepthImage) -> rdc_core::Result<()> {
        check_node(n, self.num_nodes())?;
        depth.reset(self.num_strides, self.num_steps);
        fill_bounded(&self.range, &self.bounds[n as usize], depth);
        Ok(())
    }
}
