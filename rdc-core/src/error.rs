use thiserror::Error;

/// Errors raised by the depth camera contract
///
/// Node-index violations are the only error condition in the query-time
/// contract. Rays and coordinates with no geometric counterpart are signaled
/// with NaN outputs instead, so per-pixel invalidity never touches the error
/// path.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthCameraError {
    #[error("node index {node} out of range (model has {count} nodes)")]
    OutOfRange { node: u32, count: u32 },
}

pub type Result<T> = std::result::Result<T, DepthCameraError>;
