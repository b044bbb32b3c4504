//! Trajectory optimizer collaborator interface

pub mod optimizer;
pub mod trajectory;

pub use optimizer::{Optimizer, OptimizerFactory, OptimizerRegistry};
pub use trajectory::{Trajectory, TrajectorySample};
