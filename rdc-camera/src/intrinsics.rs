use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Pinhole calibration parameters
///
/// Focal lengths and the principal point are expressed in pixels of the
/// (stride, step) layout; pixel centers sit at integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinholeIntrinsics {
    pub num_strides: u32,
    pub num_steps: u32,
    pub focal_stride: f64,
    pub focal_step: f64,
    pub center_stride: f64,
    pub center_step: f64,
}

impl PinholeIntrinsics {
    /// Derive intrinsics from a horizontal field of view in degrees
    ///
    /// Focal length is shared by both axes and the principal point is placed
    /// at the image center.
    pub fn from_fov(num_strides: u32, num_steps: u32, fov_deg: f64) -> Result<Self> {
        if !(fov_deg.is_finite() && fov_deg > 0.0 && fov_deg < 180.0) {
            return Err(ModelError::InvalidFieldOfView(fov_deg));
        }
        let focal = (num_steps as f64 / 2.0) / (fov_deg.to_radians() / 2.0).tan();
        let intrinsics = Self {
            num_strides,
            num_steps,
            focal_stride: focal,
            focal_step: focal,
            center_stride: (num_strides as f64 - 1.0) / 2.0,
            center_step: (num_steps as f64 - 1.0) / 2.0,
        };
        intrinsics.validate()?;
        Ok(intrinsics)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_strides == 0 || self.num_steps == 0 {
            return Err(ModelError::InvalidDimensions {
                num_strides: self.num_strides,
                num_steps: self.num_steps,
            });
        }
        for focal in [self.focal_stride, self.focal_step] {
            if !(focal.is_finite() && focal > 0.0) {
                return Err(ModelError::InvalidFocal(focal));
            }
        }
        if !(self.center_stride.is_finite() && self.center_step.is_finite()) {
            return Err(ModelError::InvalidCenter {
                stride: self.center_stride,
                step: self.center_step,
            });
        }
        Ok(())
    }
}

/// Equidistant fisheye calibration parameters
///
/// The lens maps a ray at angle theta from the boresight to a point at
/// radius focal * theta from the principal point. `max_theta` caps the field
/// of view in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FisheyeIntrinsics {
    pub num_strides: u32,
    pub num_steps: u32,
    pub focal: f64,
    pub center_stride: f64,
    pub center_step: f64,
    pub max_theta: f64,
}

impl FisheyeIntrinsics {
    pub fn validate(&self) -> Result<()> {
        if self.num_strides == 0 || self.num_steps == 0 {
            return Err(ModelError::InvalidDimensions {
                num_strides: self.num_strides,
                num_steps: self.num_steps,
            });
        }
        if !(self.focal.is_finite() && self.focal > 0.0) {
            return Err(ModelError::InvalidFocal(self.focal));
        }
        if !(self.center_stride.is_finite() && self.center_step.is_finite()) {
            return Err(ModelError::InvalidCenter {
                stride: self.center_stride,
                step: self.center_step,
            });
        }
        if !(self.max_theta.is_finite()
            && self.max_theta > 0.0
            && self.max_theta <= std::f64::consts::PI)
        {
            return Err(ModelError::InvalidFieldOfView(self.max_theta));
        }
        Ok(())
    }
}
