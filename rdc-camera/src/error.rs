use thiserror::Error;

/// Construction-time calibration errors
///
/// These cover the validation a model performs before it exists; none of
/// them can occur on the query path. Empty or overlapping node boxes are
/// rejected here, so the depth camera contract never observes either.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("image dimensions {num_strides}x{num_steps} must be positive")]
    InvalidDimensions { num_strides: u32, num_steps: u32 },

    #[error("focal length {0} must be positive and finite")]
    InvalidFocal(f64),

    #[error("principal point ({stride}, {step}) must be finite")]
    InvalidCenter { stride: f64, step: f64 },

    #[error("field of view {0} out of range")]
    InvalidFieldOfView(f64),

    #[error("section yaw {0} must be finite")]
    InvalidYaw(f64),

    #[error(
        "range buffer shape {actual_strides}x{actual_steps} does not match model extent {num_strides}x{num_steps}"
    )]
    RangeShapeMismatch {
        num_strides: u32,
        num_steps: u32,
        actual_strides: usize,
        actual_steps: usize,
    },

    #[error("composite model needs at least one section")]
    NoSections,

    #[error("section stride count {actual} does not match rig stride count {expected}")]
    StrideCountMismatch { expected: u32, actual: u32 },
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_error_display() {
        let err = ModelError::InvalidDimensions {
            num_strides: 0,
            num_steps: 640,
        };
        assert_eq!(err.to_string(), "image dimensions 0x640 must be positive");

        let err = ModelError::RangeShapeMismatch {
            num_strides: 480,
            num_steps: 640,
            actual_strides: 480,
            actual_steps: 320,
        };
        assert_eq!(
            err.to_string(),
            "range buffer shape 480x320 does not match model extent 480x640"
        );

        let err = ModelError::StrideCountMismatch {
            expected: 100,
            actual: 80,
        };
        assert_eq!(
            err.to_string(),
            "section stride count 80 does not match rig stride count 100"
        );
    }
}
