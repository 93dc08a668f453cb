//! Layout and solution representation.

use crate::catalog::{BoxInstance, TruckType};
use crate::geometry::Footprint;
use crate::placement::{used_area, Placement};
use crate::solver::Strategy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Square millimetres per square metre.
pub const MM2_PER_M2: f64 = 1_000_000.0;

/// `part / whole × 100`, or 0 when `whole` is not positive.
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Layout of one truck produced by a single pack.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TruckLayout {
    /// Placed boxes, in placement order.
    pub placements: Vec<Placement>,
    /// Number of boxes offered to the truck.
    pub requested: usize,
    /// Occupied floor area (mm²).
    pub used_area: f64,
    /// Truck floor area (mm²).
    pub truck_area: f64,
    /// Occupied share of the floor, capped at 100 (%).
    pub utilization: f64,
    /// Placed share of the offered boxes (%).
    pub efficiency: f64,
    /// Whether packing stopped early because of cancellation.
    pub cancelled: bool,
}

impl TruckLayout {
    /// Computes layout metrics for `placements` on `truck`.
    pub fn new(truck: &TruckType, placements: Vec<Placement>, requested: usize) -> Self {
        let used = used_area(&placements);
        let truck_area = truck.area();
        Self {
            utilization: percent(used, truck_area).min(100.0),
            efficiency: percent(placements.len() as f64, requested as f64),
            placements,
            requested,
            used_area: used,
            truck_area,
            cancelled: false,
        }
    }

    /// Number of placed boxes.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Number of offered boxes that did not fit.
    pub fn unplaced_count(&self) -> usize {
        self.requested.saturating_sub(self.placements.len())
    }

    /// Unused floor area (mm²).
    ///
    /// Clamped at 0 when overhanging boxes cover more than the floor area.
    pub fn wasted_area(&self) -> f64 {
        (self.truck_area - self.used_area).max(0.0)
    }
}

/// One loaded truck within a multi-truck solution.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TruckSolution {
    /// `"{truckId}-{ordinal}"`.
    pub truck_id: String,
    /// The catalog entry used.
    pub truck_type: TruckType,
    /// `"{truckName} #{ordinal}"`.
    pub truck_name: String,
    /// Placed boxes.
    pub placements: Vec<Placement>,
    /// Occupied share of the floor (%).
    pub utilization: f64,
    /// Number of placed boxes.
    pub box_count: usize,
    /// Placed share of the boxes still open when this truck was loaded (%).
    pub efficiency: f64,
    /// Unused floor area (m²).
    pub wasted_space: f64,
}

impl TruckSolution {
    /// Records `layout` as truck number `ordinal` (1-based) of type `truck`.
    pub fn new(truck: &TruckType, ordinal: usize, layout: TruckLayout) -> Self {
        Self {
            truck_id: format!("{}-{}", truck.id(), ordinal),
            truck_name: format!("{} #{}", truck.name(), ordinal),
            truck_type: truck.clone(),
            box_count: layout.placements.len(),
            utilization: layout.utilization,
            efficiency: layout.efficiency,
            // overhang can push used area past the floor; waste bottoms out at 0
            wasted_space: layout.wasted_area() / MM2_PER_M2,
            placements: layout.placements,
        }
    }

    /// Occupied floor area (mm²).
    pub fn used_area(&self) -> f64 {
        used_area(&self.placements)
    }
}

/// A complete assignment of boxes to trucks under one strategy.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiTruckSolution {
    /// Loaded trucks, in loading order.
    pub trucks: Vec<TruckSolution>,
    /// Strategy that produced the solution.
    pub strategy: Strategy,
    /// Number of trucks used.
    pub total_trucks: usize,
    /// Boxes placed across all trucks.
    pub total_boxes_placed: usize,
    /// Boxes requested (sum of quantities).
    pub total_boxes: usize,
    /// Occupied share of all used floor area (%).
    pub overall_utilization: f64,
    /// Strategy score; higher is better.
    pub overall_score: f64,
    /// Instances left over.
    pub unplaced_boxes: Vec<BoxInstance>,
    /// Flat cost of the trucks used.
    pub total_cost: f64,
    /// Unused floor area across all trucks (m²).
    pub space_wastage: f64,
    /// Whether the solve was cancelled early.
    pub cancelled: bool,
    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl MultiTruckSolution {
    /// Creates an empty solution for `total_boxes` requested boxes.
    pub fn new(strategy: Strategy, total_boxes: usize) -> Self {
        Self {
            trucks: Vec::new(),
            strategy,
            total_trucks: 0,
            total_boxes_placed: 0,
            total_boxes,
            overall_utilization: 0.0,
            overall_score: 0.0,
            unplaced_boxes: Vec::new(),
            total_cost: 0.0,
            space_wastage: 0.0,
            cancelled: false,
            computation_time_ms: 0,
        }
    }

    /// Display name of the strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.label()
    }

    /// Returns true if every requested box was placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced_boxes.is_empty()
    }

    /// Placed share of requested boxes (%).
    pub fn efficiency(&self) -> f64 {
        percent(self.total_boxes_placed as f64, self.total_boxes as f64)
    }

    /// Total floor area of the trucks used (mm²).
    pub fn total_truck_area(&self) -> f64 {
        self.trucks.iter().map(|t| t.truck_type.area()).sum()
    }

    /// Total occupied floor area (mm²).
    pub fn total_used_area(&self) -> f64 {
        self.trucks.iter().map(TruckSolution::used_area).sum()
    }
}

/// Summary figures shown next to a layout.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutStats {
    /// Boxes requested.
    pub total_boxes: usize,
    /// Boxes placed.
    pub placed_boxes: usize,
    /// Floor utilization (%).
    pub utilization: f64,
    /// Placement rate (%).
    pub efficiency: f64,
    /// Boxes left over.
    pub unplaced_boxes: usize,
    /// Trucks used (multi-truck only).
    pub total_trucks: Option<usize>,
    /// Truck floor area in m² (single-truck only).
    pub truck_area_m2: Option<f64>,
    /// Occupied floor area in m² (single-truck only).
    pub used_area_m2: Option<f64>,
}

impl LayoutStats {
    /// Stats of a single-truck layout.
    pub fn from_layout(layout: &TruckLayout) -> Self {
        Self {
            total_boxes: layout.requested,
            placed_boxes: layout.placed_count(),
            utilization: layout.utilization,
            efficiency: layout.efficiency,
            unplaced_boxes: layout.unplaced_count(),
            total_trucks: None,
            truck_area_m2: Some(layout.truck_area / MM2_PER_M2),
            used_area_m2: Some(layout.used_area / MM2_PER_M2),
        }
    }

    /// Stats of a selected multi-truck solution.
    pub fn from_solution(solution: &MultiTruckSolution) -> Self {
        Self {
            total_boxes: solution.total_boxes,
            placed_boxes: solution.total_boxes_placed,
            utilization: solution.overall_utilization,
            efficiency: solution.efficiency(),
            unplaced_boxes: solution.unplaced_boxes.len(),
            total_trucks: Some(solution.total_trucks),
            truck_area_m2: None,
            used_area_m2: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BoxDefinition, InstanceNaming};
    use crate::geometry::Rect;
    use approx::assert_relative_eq;

    fn layout_with_one_box() -> (TruckType, TruckLayout) {
        let truck = TruckType::new("1", "Compact Truck", 2000.0, 2000.0);
        let def = BoxDefinition::new("b", "Crate", 1900.0, 1900.0).with_quantity(2);
        let p = Placement::new(
            &def.instance(1, InstanceNaming::Indexed),
            Rect::new(0.0, 0.0, 1900.0, 1900.0),
            false,
        );
        let layout = TruckLayout::new(&truck, vec![p], 2);
        (truck, layout)
    }

    #[test]
    fn test_layout_metrics() {
        let (_, layout) = layout_with_one_box();
        assert_relative_eq!(layout.utilization, 90.25, epsilon = 1e-9);
        assert_relative_eq!(layout.efficiency, 50.0);
        assert_eq!(layout.unplaced_count(), 1);
        assert_relative_eq!(layout.wasted_area(), 390_000.0);
    }

    #[test]
    fn test_layout_empty_request() {
        let truck = TruckType::new("1", "T", 1000.0, 1000.0);
        let layout = TruckLayout::new(&truck, Vec::new(), 0);
        assert_eq!(layout.utilization, 0.0);
        assert_eq!(layout.efficiency, 0.0);
        assert!(!layout.utilization.is_nan());
    }

    #[test]
    fn test_overhang_waste_is_zero() {
        let truck = TruckType::new("1", "T", 1000.0, 1000.0);
        let def = BoxDefinition::new("b", "Crate", 1050.0, 1050.0);
        let p = Placement::new(
            &def.instance(1, InstanceNaming::Indexed),
            Rect::new(-25.0, -25.0, 1050.0, 1050.0),
            false,
        );
        let layout = TruckLayout::new(&truck, vec![p], 1);
        assert!(layout.used_area > layout.truck_area);
        assert_eq!(layout.utilization, 100.0);
        assert_eq!(layout.wasted_area(), 0.0);

        let solution = TruckSolution::new(&truck, 1, layout);
        assert_eq!(solution.wasted_space, 0.0);
    }

    #[test]
    fn test_truck_solution_naming() {
        let (truck, layout) = layout_with_one_box();
        let solution = TruckSolution::new(&truck, 3, layout);
        assert_eq!(solution.truck_id, "1-3");
        assert_eq!(solution.truck_name, "Compact Truck #3");
        assert_eq!(solution.box_count, 1);
        assert_relative_eq!(solution.wasted_space, 0.39, epsilon = 1e-12);
    }

    #[test]
    fn test_stats_from_layout() {
        let (_, layout) = layout_with_one_box();
        let stats = LayoutStats::from_layout(&layout);
        assert_eq!(stats.total_boxes, 2);
        assert_eq!(stats.placed_boxes, 1);
        assert_eq!(stats.unplaced_boxes, 1);
        assert_eq!(stats.truck_area_m2, Some(4.0));
        assert_eq!(stats.total_trucks, None);
    }

    #[test]
    fn test_stats_from_empty_solution() {
        let solution = MultiTruckSolution::new(Strategy::Balanced, 0);
        let stats = LayoutStats::from_solution(&solution);
        assert_eq!(stats.efficiency, 0.0);
        assert_eq!(stats.total_trucks, Some(0));
        assert!(solution.all_placed());
        assert_eq!(solution.strategy_name(), "Optimal Balance");
    }
}
