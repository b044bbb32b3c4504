use ndarray::Array2;

use rdc_core::{DepthCameraError, DepthImage, NodeBounds};

use crate::error::{ModelError, Result};

/// Copy the bounded region of a backing range buffer into a depth image
///
/// The image must already be reset to the model's full extent; pixels
/// outside the box are left at NaN. Invalid measurements inside the box are
/// NaN in the range buffer and copy through unchanged.
pub(crate) fn fill_bounded(range: &Array2<f64>, bounds: &NodeBounds, depth: &mut DepthImage) {
    for stride in bounds.stride_min..=bounds.stride_max {
        for step in bounds.step_min..=bounds.step_max {
            depth.set(stride, step, range[[stride as usize, step as usize]]);
        }
    }
}

pub(crate) fn check_node(n: u32, count: u32) -> rdc_core::Result<()> {
    if n >= count {
        return Err(DepthCameraError::OutOfRange { node: n, count });
    }
    Ok(())
}

/// Reject a range buffer whose shape differs from the model extent
pub(crate) fn check_range_shape(
    range: &Array2<f64>,
    num_strides: u32,
    num_steps: u32,
) -> Result<()> {
    let (actual_strides, actual_steps) = range.dim();
    if actual_strides != num_strides as usize || actual_steps != num_steps as usize {
        return Err(ModelError::RangeShapeMismatch {
            num_strides,
            num_steps,
            actual_strides,
            actual_steps,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_bounded_leaves_outside_nan() {
        let range = Array2::from_elem((4, 4), 2.0);
        let bounds = NodeBounds::new(1, 2, 1, 2);
        let mut depth = DepthImage::new();
        depth.reset(4, 4);

        fill_bounded(&range, &bounds, &mut depth);

        assert_eq!(depth.valid_count(), 4);
        assert!((depth.get(1, 1) - 2.0).abs() < 1e-12);
        assert!(depth.get(0, 0).is_nan());
        assert!(depth.get(3, 3).is_nan());
    }

    #[test]
    fn test_fill_bounded_propagates_invalid_measurements() {
        let mut range = Array2::from_elem((2, 2), 1.0);
        range[[0, 1]] = f64::NAN;
        let bounds = NodeBounds::new(0, 1, 0, 1);
        let mut depth = DepthImage::new();
        depth.reset(2, 2);

        fill_bounded(&range, &bounds, &mut depth);

        assert!(depth.get(0, 1).is_nan());
        assert_eq!(depth.valid_count(), 3);
    }

    #[test]
    fn test_check_node() {
        assert!(check_node(0, 1).is_ok());
        assert_eq!(
            check_node(1, 1),
            Err(DepthCameraError::OutOfRange { node: 1, count: 1 })
        );
    }

    #[test]
    fn test_check_range_shape() {
        let range = Array2::from_elem((4, 8), 0.0);
        assert!(check_range_shape(&range, 4, 8).is_ok());
        assert!(matches!(
            check_range_shape(&range, 4, 6),
            Err(ModelError::RangeShapeMismatch { .. })
        ));
    }
}
