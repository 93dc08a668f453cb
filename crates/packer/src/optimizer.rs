//! Multi-truck optimizer.
//!
//! Expands the box catalog into instances and loads trucks one at a time,
//! letting the [`TruckSelector`] pick each truck, until every box is placed,
//! no truck makes progress, or the truck cap is reached.

use crate::interrupt::Interrupt;
use crate::packer::TruckPacker;
use crate::selector::TruckSelector;
use std::collections::HashSet;
use std::time::Instant;
use truckload_core::catalog::{
    expand_instances, sort_by_area_desc, validate_boxes, validate_trucks, InstanceNaming,
};
use truckload_core::geometry::Footprint;
use truckload_core::result::{percent, MM2_PER_M2};
use truckload_core::solver::{ProgressCallback, ProgressInfo, Solver};
use truckload_core::{
    BoxDefinition, Config, MultiTruckSolution, Result, Strategy, TruckSolution, TruckType,
};

/// Scores a finished solution under its strategy.
///
/// Returns 0 for a solution without trucks.
pub fn solution_score(solution: &MultiTruckSolution) -> f64 {
    if solution.total_trucks == 0 {
        return 0.0;
    }

    let truck_penalty = (solution.total_trucks - 1) as f64 * 20.0;
    let waste_penalty = solution.space_wastage * 5.0;
    let placed_ratio = if solution.total_boxes > 0 {
        solution.total_boxes_placed as f64 / solution.total_boxes as f64
    } else {
        0.0
    };

    match solution.strategy {
        Strategy::TruckCount => placed_ratio * 100.0 - truck_penalty - waste_penalty,
        Strategy::SpaceUtilization => solution.overall_utilization - truck_penalty * 0.5,
        Strategy::Balanced => {
            solution.overall_utilization * 0.6 + placed_ratio * 40.0 - truck_penalty * 0.3
        }
    }
}

/// Loads boxes across as many trucks as needed under one strategy.
pub struct MultiTruckOptimizer {
    config: Config,
    strategy: Strategy,
    interrupt: Interrupt,
}

impl MultiTruckOptimizer {
    /// Creates a new optimizer.
    pub fn new(config: Config, strategy: Strategy) -> Self {
        Self {
            config,
            strategy,
            interrupt: Interrupt::new(),
        }
    }

    /// Creates an optimizer that polls an existing interrupt.
    pub(crate) fn with_interrupt(config: Config, strategy: Strategy, interrupt: Interrupt) -> Self {
        Self {
            config,
            strategy,
            interrupt,
        }
    }

    /// The strategy this optimizer scores with.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Clears a previous [`Solver::cancel`].
    pub fn reset(&self) {
        self.interrupt.reset();
    }

    pub(crate) fn run(
        &self,
        trucks: &[TruckType],
        boxes: &[BoxDefinition],
        callback: Option<&ProgressCallback>,
    ) -> Result<MultiTruckSolution> {
        let start = Instant::now();
        self.config.validate()?;
        validate_trucks(trucks)?;
        validate_boxes(boxes)?;

        let interrupt = self.interrupt.with_time_limit(self.config.time_limit_ms);
        let packer = TruckPacker::with_interrupt(self.config.clone(), interrupt.clone());
        let selector = TruckSelector::new(packer, self.strategy);

        let mut remaining = expand_instances(boxes, InstanceNaming::Indexed);
        sort_by_area_desc(&mut remaining);

        let mut candidates = trucks.to_vec();
        candidates.sort_by(|a, b| a.area().total_cmp(&b.area()));

        let mut solution = MultiTruckSolution::new(self.strategy, remaining.len());
        let mut wasted_area = 0.0;

        while !remaining.is_empty() {
            if interrupt.is_triggered() {
                log::warn!("{}: cancelled after {} trucks", self.strategy, solution.trucks.len());
                solution.cancelled = true;
                break;
            }

            if solution.trucks.len() >= self.config.max_trucks {
                log::warn!(
                    "{}: truck cap of {} reached with {} boxes left",
                    self.strategy,
                    self.config.max_trucks,
                    remaining.len()
                );
                break;
            }

            let Some(choice) = selector.select(&candidates, &remaining) else {
                solution.cancelled = interrupt.is_triggered();
                log::debug!(
                    "{}: no truck takes any of the {} remaining boxes",
                    self.strategy,
                    remaining.len()
                );
                break;
            };

            let layout = choice.layout;
            if layout.cancelled || interrupt.is_triggered() {
                // the comparison may have seen partial trials
                log::warn!("{}: cancelled after {} trucks", self.strategy, solution.trucks.len());
                solution.cancelled = true;
                break;
            }
            if layout.placements.is_empty() {
                break;
            }

            let ordinal = solution.trucks.len() + 1;
            log::debug!(
                "{}: truck #{} is '{}' (score {:.2}, {} boxes, {:.1}% used)",
                self.strategy,
                ordinal,
                choice.truck.name(),
                choice.score,
                layout.placed_count(),
                layout.utilization
            );

            let placed: HashSet<&str> = layout
                .placements
                .iter()
                .map(|p| p.instance_id.as_str())
                .collect();
            let mut kept = Vec::with_capacity(remaining.len());
            for instance in remaining.drain(..) {
                if !placed.contains(instance.id()) {
                    kept.push(instance);
                }
            }
            remaining = kept;

            wasted_area += layout.wasted_area();
            solution.total_boxes_placed += layout.placed_count();
            solution
                .trucks
                .push(TruckSolution::new(choice.truck, ordinal, layout));

            if let Some(cb) = callback {
                cb(ProgressInfo {
                    strategy: self.strategy,
                    trucks_used: solution.trucks.len(),
                    boxes_placed: solution.total_boxes_placed,
                    total_boxes: solution.total_boxes,
                    elapsed_ms: start.elapsed().as_millis() as u64,
                    running: !remaining.is_empty(),
                });
            }
        }

        solution.total_trucks = solution.trucks.len();
        solution.unplaced_boxes = remaining;

        if solution.total_trucks > 0 {
            let truck_area = solution.total_truck_area();
            solution.overall_utilization =
                percent(solution.total_used_area(), truck_area).min(100.0);
            solution.total_cost = solution.total_trucks as f64 * self.config.truck_unit_cost;
            solution.space_wastage = wasted_area / MM2_PER_M2;
            solution.overall_score = solution_score(&solution);
        }

        solution.computation_time_ms = start.elapsed().as_millis() as u64;

        log::info!(
            "{}: {} trucks, {}/{} boxes placed, {:.1}% used, score {:.2}",
            self.strategy,
            solution.total_trucks,
            solution.total_boxes_placed,
            solution.total_boxes,
            solution.overall_utilization,
            solution.overall_score
        );

        Ok(solution)
    }
}

impl Solver for MultiTruckOptimizer {
    type Output = MultiTruckSolution;

    fn solve(&self, trucks: &[TruckType], boxes: &[BoxDefinition]) -> Result<MultiTruckSolution> {
        self.run(trucks, boxes, None)
    }

    fn solve_with_progress(
        &self,
        trucks: &[TruckType],
        boxes: &[BoxDefinition],
        callback: ProgressCallback,
    ) -> Result<MultiTruckSolution> {
        self.run(trucks, boxes, Some(&callback))
    }

    fn cancel(&self) {
        self.interrupt.cancel();
    }
}
