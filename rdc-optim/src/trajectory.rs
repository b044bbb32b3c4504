use nalgebra::Vector3;

use rdc_core::WorldTime;

/// One time-stamped position along a trajectory
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectorySample {
    pub time: WorldTime,
    pub position: Vector3<f64>,
}

/// A trajectory estimate held by an optimizer
///
/// Opaque to the depth camera core: storage and transport formats are the
/// responsibility of surrounding components.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_samples(samples: Vec<TrajectorySample>) -> Self {
        Self { samples }
    }

    pub fn push(&mut self, time: WorldTime, position: Vector3<f64>) {
        self.samples.push(TrajectorySample { time, position });
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start_time(&self) -> Option<WorldTime> {
        self.samples.first().map(|s| s.time)
    }

    pub fn end_time(&self) -> Option<WorldTime> {
        self.samples.last().map(|s| s.time)
    }
}
