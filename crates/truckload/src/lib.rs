//! # Truckload
//!
//! Truck floor loading planner.
//!
//! This crate provides:
//! - **Single-truck layouts**: greedy placement of a box catalog on one truck floor
//! - **Multi-truck plans**: boxes split across trucks picked from a catalog,
//!   ranked under several strategies
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use truckload::core::{BoxDefinition, TruckType};
//! use truckload::{Config, SolutionRanker, Solver};
//!
//! let trucks = TruckType::default_catalog();
//! let boxes = vec![
//!     BoxDefinition::new("1", "Pallet", 1200.0, 800.0).with_quantity(6),
//!     BoxDefinition::new("2", "Carton", 600.0, 400.0).with_quantity(10),
//! ];
//!
//! let ranked = SolutionRanker::new(Config::default()).solve(&trucks, &boxes)?;
//! if let Some(best) = ranked.first() {
//!     println!("{}: {} trucks", best.strategy_name(), best.total_trucks);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types and abstractions.
pub use truckload_core as core;

/// Packing algorithms.
pub use truckload_packer as packer;

// Re-export commonly used types at root level
pub use truckload_core::{
    BoxDefinition, BoxInstance, Config, Error, LayoutStats, MultiTruckSolution, Placement,
    Result, Solver, Strategy, TruckSolution, TruckType,
};
pub use truckload_packer::{MultiTruckOptimizer, SolutionRanker, TruckPacker};
