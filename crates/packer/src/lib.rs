//! # Truckload Packer
//!
//! Greedy floor packing for the truckload engine.
//!
//! Boxes are placed one at a time on a grid of candidate positions, largest
//! first, keeping a minimum clearance between neighbours and allowing a small
//! overhang past the truck edges.
//!
//! ## Components
//!
//! - [`TruckPacker`]: packs a single truck
//! - [`TruckSelector`]: trial-packs every truck type and picks the next one to load
//! - [`MultiTruckOptimizer`]: loads trucks until the boxes run out, under one strategy
//! - [`SolutionRanker`]: runs every strategy and ranks the results
//!
//! ## Example
//!
//! ```rust,ignore
//! use truckload_packer::{SolutionRanker, Solver};
//! use truckload_core::{BoxDefinition, Config, TruckType};
//!
//! let trucks = TruckType::default_catalog();
//! let boxes = vec![BoxDefinition::new("1", "Pallet", 1200.0, 800.0).with_quantity(8)];
//!
//! let ranked = SolutionRanker::new(Config::default()).solve(&trucks, &boxes)?;
//! ```

pub mod interrupt;
pub mod optimizer;
pub mod packer;
pub mod ranker;
pub mod search;
pub mod selector;

// Re-exports
pub use interrupt::Interrupt;
pub use optimizer::{solution_score, MultiTruckOptimizer};
pub use packer::TruckPacker;
pub use ranker::SolutionRanker;
pub use search::{find_best_position, Candidate};
pub use selector::{truck_score, TruckChoice, TruckSelector};
pub use truckload_core::{
    BoxDefinition, Config, Error, LayoutStats, MultiTruckSolution, Placement, Result, Solver,
    Strategy, TruckType,
};
