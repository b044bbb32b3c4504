use ndarray::Array2;

/// Caller-owned dense depth raster
///
/// Holds distance-from-origin values in an array of shape
/// (num_strides, num_steps), stride-major, with NaN marking pixels that carry
/// no measurement. [`DepthCamera::get_depth`](crate::DepthCamera::get_depth)
/// resizes the buffer to the model's full extent before filling it.
#[derive(Debug, Clone, Default)]
pub struct DepthImage {
    data: Array2<f64>,
}

impl DepthImage {
    /// Create an empty image; `get_depth` will size it
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize to (num_strides, num_steps) and flood with NaN
    pub fn reset(&mut self, num_strides: u32, num_steps: u32) {
        let shape = (num_strides as usize, num_steps as usize);
        if self.data.dim() == shape {
            self.data.fill(f64::NAN);
        } else {
            self.data = Array2::from_elem(shape, f64::NAN);
        }
    }

    pub fn num_strides(&self) -> u32 {
        self.data.nrows() as u32
    }

    pub fn num_steps(&self) -> u32 {
        self.data.ncols() as u32
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, stride: u32, step: u32) -> f64 {
        self.data[[stride as usize, step as usize]]
    }

    pub fn set(&mut self, stride: u32, step: u32, depth: f64) {
        self.data[[stride as usize, step as usize]] = depth;
    }

    /// Stride-major view of the underlying buffer
    pub fn as_slice(&self) -> &[f64] {
        self.data.as_slice().unwrap_or(&[])
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Number of pixels holding a finite measurement
    pub fn valid_count(&self) -> usize {
        self.data.iter().filter(|d| d.is_finite()).count()
    }
}
