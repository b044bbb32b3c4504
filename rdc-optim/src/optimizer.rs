use std::collections::HashMap;

use crate::trajectory::Trajectory;

/// Iterative trajectory refinement
///
/// An optimizer holds a set of trajectory candidates, each with a scalar
/// cost, and advances them one iteration per `step` call. Candidate indices
/// out of range yield `None`.
pub trait Optimizer {
    /// Number of currently held trajectory candidates
    fn num_results(&self) -> u32;

    /// Borrowed trajectory of candidate `i`
    fn get_trajectory(&self, i: u32) -> Option<&Trajectory>;

    /// Scalar cost of candidate `i`
    fn get_cost(&self, i: u32) -> Option<f64>;

    /// Advance the optimization by one iteration
    fn step(&mut self);
}

/// Constructor signature for registered optimizers
///
/// Arguments are the dynamic model name, the measurement source names, and
/// a resource locator.
pub type OptimizerFactory = fn(&str, &[String], &str) -> Box<dyn Optimizer>;

/// Named registry of optimizer constructors
///
/// Populated once at process start by the embedding application; `create`
/// looks up a name and returns `None` when it is unrecognized.
#[derive(Debug, Default)]
pub struct OptimizerRegistry {
    factories: HashMap<String, OptimizerFactory>,
}

impl OptimizerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor under `name`, replacing any previous entry
    pub fn register(&mut self, name: &str, factory: OptimizerFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered optimizer names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Construct the optimizer registered under `name`
    pub fn create(
        &self,
        name: &str,
        dynamic_model: &str,
        measures: &[String],
        uri: &str,
    ) -> Option<Box<dyn Optimizer>> {
        let factory = self.factories.get(name)?;
        Some(factory(dynamic_model, measures, uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    // Toy optimizer holding one candidate whose cost halves per step
    struct HalvingOptimizer {
        trajectory: Trajectory,
        cost: f64,
    }

    impl HalvingOptimizer {
        fn boxed(_dynamic_model: &str, _measures: &[String], _uri: &str) -> Box<dyn Optimizer> {
            let mut trajectory = Trajectory::new();
            trajectory.push(0.0, Vector3::zeros());
            Box::new(Self {
                trajectory,
                cost: 8.0,
            })
        }
    }

    impl Optimizer for HalvingOptimizer {
        fn num_results(&self) -> u32 {
            1
        }

        fn get_trajectory(&self, i: u32) -> Option<&Trajectory> {
            (i == 0).then_some(&self.trajectory)
        }

        fn get_cost(&self, i: u32) -> Option<f64> {
            (i == 0).then_some(self.cost)
        }

        fn step(&mut self) {
            self.cost /= 2.0;
        }
    }

    fn registry() -> OptimizerRegistry {
        let mut registry = OptimizerRegistry::new();
        registry.register("halving", HalvingOptimizer::boxed);
        registry
    }

    #[test]
    fn test_create_known_optimizer() {
        let registry = registry();
        assert!(registry.contains("halving"));

        let measures = vec!["depth".to_string()];
        let optimizer = registry
            .create("halving", "rigid-body", &measures, "file://dataset")
            .unwrap();
        assert_eq!(optimizer.num_results(), 1);
        assert_eq!(optimizer.get_cost(0), Some(8.0));
        assert_eq!(optimizer.get_trajectory(0).unwrap().len(), 1);
    }

    #[test]
    fn test_unrecognized_name_yields_none() {
        let registry = registry();
        assert!(registry
            .create("does-not-exist", "rigid-body", &[], "")
            .is_none());
    }

    #[test]
    fn test_step_refines_cost() {
        let registry = registry();
        let mut optimizer = registry.create("halving", "rigid-body", &[], "").unwrap();
        optimizer.step();
        optimizer.step();
        assert_eq!(optimizer.get_cost(0), Some(2.0));
    }

    #[test]
    fn test_candidate_index_out_of_range_yields_none() {
        let registry = registry();
        let optimizer = registry.create("halving", "rigid-body", &[], "").unwrap();
        assert!(optimizer.get_trajectory(1).is_none());
        assert!(optimizer.get_cost(1).is_none());
    }

    #[test]
    fn test_register_replaces_previous_entry() {
        let mut registry = registry();
        registry.register("halving", HalvingOptimizer::boxed);
        assert_eq!(registry.names().count(), 1);
    }
}
