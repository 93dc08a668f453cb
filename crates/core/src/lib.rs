//! # Truckload Core
//!
//! Core types and abstractions for the truckload floor-packing engine.
//!
//! This crate provides the data model shared by the packer and its front ends.
//!
//! ## Core Components
//!
//! - **Catalog**: `TruckType`, `BoxDefinition` and the expanded `BoxInstance`
//! - **Geometry**: `Rect`, clearance between rectangles, position scoring
//! - **Solver trait**: common interface for load planners, plus `Config` and `Strategy`
//! - **Results**: `TruckLayout`, `TruckSolution`, `MultiTruckSolution`, `LayoutStats`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod catalog;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use catalog::{
    expand_instances, BoxDefinition, BoxInstance, InstanceNaming, TruckCategory, TruckType,
};
pub use error::{Error, Result};
pub use geometry::{position_score, spacing, Footprint, Rect};
pub use placement::Placement;
pub use result::{LayoutStats, MultiTruckSolution, TruckLayout, TruckSolution};
pub use solver::{Config, ProgressCallback, ProgressInfo, Solver, Strategy};
