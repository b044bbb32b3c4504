//! Concrete depth camera geometries

mod composite;
mod error;
mod fisheye;
mod intrinsics;
mod pinhole;
mod sampling;

pub use composite::{CompositeDepthCamera, CompositeSection};
pub use error::{ModelError, Result};
pub use fisheye::FisheyeDepthCamera;
pub use intrinsics::{FisheyeIntrinsics, PinholeIntrinsics};
pub use pinhole::PinholeDepthCamera;
