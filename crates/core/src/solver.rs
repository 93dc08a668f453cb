//! Solver traits and configuration.

use crate::catalog::{BoxDefinition, TruckType};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scoring policy used to pick trucks and rank multi-truck solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Load as few trucks as possible.
    TruckCount,
    /// Fill each truck's floor as densely as possible.
    SpaceUtilization,
    /// Trade off box fit against floor usage.
    #[default]
    Balanced,
}

impl Strategy {
    /// All strategies, in the order the ranker runs them.
    pub const ALL: [Strategy; 3] = [
        Strategy::TruckCount,
        Strategy::SpaceUtilization,
        Strategy::Balanced,
    ];

    /// Display name of the strategy.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::TruckCount => "Minimum Trucks",
            Strategy::SpaceUtilization => "Space Efficient",
            Strategy::Balanced => "Optimal Balance",
        }
    }

    /// Machine-readable priority key.
    pub fn priority(&self) -> &'static str {
        match self {
            Strategy::TruckCount => "truck_count",
            Strategy::SpaceUtilization => "space_utilization",
            Strategy::Balanced => "balanced",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Packing parameters shared by every search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Minimum clearance between boxes (mm).
    pub min_spacing: f64,

    /// Nominal upper clearance between boxes (mm). Not enforced.
    pub max_spacing: f64,

    /// Allowed overhang beyond each truck edge (mm).
    pub max_overhang: f64,

    /// Step of the candidate position grid (mm).
    pub grid_step: f64,

    /// Maximum number of trucks in one multi-truck solution.
    pub max_trucks: usize,

    /// Cost charged per truck used.
    pub truck_unit_cost: f64,

    /// Maximum computation time in milliseconds (0 = unlimited).
    pub time_limit_ms: u64,

    /// Evaluate candidate trucks and strategies on the rayon pool.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_spacing: 50.0,
            max_spacing: 100.0,
            max_overhang: 100.0,
            grid_step: 100.0,
            max_trucks: 15,
            truck_unit_cost: 1000.0,
            time_limit_ms: 0,
            parallel: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum spacing between boxes.
    pub fn with_min_spacing(mut self, spacing: f64) -> Self {
        self.min_spacing = spacing;
        self
    }

    /// Sets the nominal maximum spacing.
    pub fn with_max_spacing(mut self, spacing: f64) -> Self {
        self.max_spacing = spacing;
        self
    }

    /// Sets the allowed overhang.
    pub fn with_max_overhang(mut self, overhang: f64) -> Self {
        self.max_overhang = overhang;
        self
    }

    /// Sets the position grid step.
    pub fn with_grid_step(mut self, step: f64) -> Self {
        self.grid_step = step;
        self
    }

    /// Sets the truck cap.
    pub fn with_max_trucks(mut self, max_trucks: usize) -> Self {
        self.max_trucks = max_trucks;
        self
    }

    /// Sets the cost per truck.
    pub fn with_truck_unit_cost(mut self, cost: f64) -> Self {
        self.truck_unit_cost = cost;
        self
    }

    /// Sets the time limit in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks that the parameters describe a searchable grid.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_spacing >= 0.0) {
            return Err(Error::ConfigError(
                "min_spacing must be non-negative".into(),
            ));
        }
        if !(self.max_spacing >= self.min_spacing) {
            return Err(Error::ConfigError(
                "max_spacing must not be below min_spacing".into(),
            ));
        }
        if !(self.max_overhang >= 0.0) {
            return Err(Error::ConfigError(
                "max_overhang must be non-negative".into(),
            ));
        }
        if !(self.grid_step.is_finite() && self.grid_step > 0.0) {
            return Err(Error::ConfigError("grid_step must be positive".into()));
        }
        if self.max_trucks == 0 {
            return Err(Error::ConfigError("max_trucks must be at least 1".into()));
        }
        Ok(())
    }
}

/// Progress callback for long-running operations.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information during solving.
#[derive(Debug, Clone)]
pub struct ProgressInfo {
    /// Strategy being solved.
    pub strategy: Strategy,
    /// Trucks loaded so far.
    pub trucks_used: usize,
    /// Boxes placed so far.
    pub boxes_placed: usize,
    /// Boxes requested in total.
    pub total_boxes: usize,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// Whether the solver is still running.
    pub running: bool,
}

/// Trait for load planners working from a truck and a box catalog.
pub trait Solver {
    /// What a solve produces.
    type Output;

    /// Plans the load.
    fn solve(&self, trucks: &[TruckType], boxes: &[BoxDefinition]) -> Result<Self::Output>;

    /// Plans the load, reporting progress after each truck.
    fn solve_with_progress(
        &self,
        trucks: &[TruckType],
        boxes: &[BoxDefinition],
        callback: ProgressCallback,
    ) -> Result<Self::Output>;

    /// Cancels an ongoing solve operation.
    fn cancel(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.min_spacing, 50.0);
        assert_eq!(config.max_spacing, 100.0);
        assert_eq!(config.max_overhang, 100.0);
        assert_eq!(config.grid_step, 100.0);
        assert_eq!(config.max_trucks, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::new().with_grid_step(0.0).validate().is_err());
        assert!(Config::new().with_min_spacing(-1.0).validate().is_err());
        assert!(Config::new().with_max_spacing(10.0).validate().is_err());
        assert!(Config::new().with_max_trucks(0).validate().is_err());
        assert!(Config::new().with_max_overhang(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_strategy_labels() {
        let labels: Vec<&str> = Strategy::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["Minimum Trucks", "Space Efficient", "Optimal Balance"]
        );
        assert_eq!(Strategy::SpaceUtilization.priority(), "space_utilization");
        assert_eq!(Strategy::TruckCount.to_string(), "Minimum Trucks");
    }
}
