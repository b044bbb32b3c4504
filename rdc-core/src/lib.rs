pub mod camera;
pub mod depth;
pub mod error;
pub mod geometry;
pub mod time;

pub use camera::{DepthCamera, NodeBounds};
pub use depth::DepthImage;
pub use error::{DepthCameraError, Result};
pub use geometry::{ImagePoint, Ray};
pub use time::WorldTime;
