//! Truck selection.
//!
//! Every candidate truck gets a trial pack of the whole remaining pool; the
//! trial is scored under the active strategy and the best truck is loaded next.

use crate::packer::TruckPacker;
use rayon::prelude::*;
use truckload_core::geometry::Footprint;
use truckload_core::{BoxInstance, Strategy, TruckLayout, TruckType};

/// The truck picked for the next load, with the trial that justified it.
#[derive(Debug, Clone)]
pub struct TruckChoice<'a> {
    /// The selected truck type.
    pub truck: &'a TruckType,
    /// Strategy score of the trial pack.
    pub score: f64,
    /// Share of the floor left empty by the trial (0-1).
    pub waste_ratio: f64,
    /// Share of the remaining pool the trial placed (0-1).
    pub box_fit_ratio: f64,
    /// The trial layout itself.
    pub layout: TruckLayout,
}

/// Scores a trial pack.
///
/// `utilization` is in percent; `waste_ratio` and `box_fit_ratio` are 0-1.
pub fn truck_score(
    strategy: Strategy,
    placed: usize,
    utilization: f64,
    waste_ratio: f64,
    box_fit_ratio: f64,
) -> f64 {
    let base_score = box_fit_ratio * 100.0 + utilization;
    let size_bonus = placed as f64 * 10.0;
    let waste_deduction = waste_ratio * 50.0;

    match strategy {
        Strategy::TruckCount => base_score + size_bonus - waste_deduction,
        Strategy::SpaceUtilization => utilization - waste_ratio * 30.0,
        Strategy::Balanced => base_score + size_bonus * 0.5 - waste_deduction * 0.7,
    }
}

/// Picks the truck to load next.
#[derive(Debug, Clone)]
pub struct TruckSelector {
    packer: TruckPacker,
    strategy: Strategy,
}

impl TruckSelector {
    /// Creates a selector that trial-packs with `packer`.
    pub fn new(packer: TruckPacker, strategy: Strategy) -> Self {
        Self { packer, strategy }
    }

    /// Trial-packs `remaining` into one truck and scores the result.
    ///
    /// Returns `None` if the truck takes no box at all. A trial cut short by
    /// cancellation is always returned, with `layout.cancelled` set.
    pub fn evaluate<'a>(
        &self,
        truck: &'a TruckType,
        remaining: &[BoxInstance],
    ) -> Option<TruckChoice<'a>> {
        let layout = self.packer.pack(truck, remaining);
        if layout.placements.is_empty() && !layout.cancelled {
            return None;
        }

        let truck_area = truck.area();
        let waste_ratio = if truck_area > 0.0 {
            (truck_area - layout.used_area) / truck_area
        } else {
            0.0
        };
        let box_fit_ratio = layout.placed_count() as f64 / remaining.len().max(1) as f64;
        let score = truck_score(
            self.strategy,
            layout.placed_count(),
            layout.utilization,
            waste_ratio,
            box_fit_ratio,
        );

        Some(TruckChoice {
            truck,
            score,
            waste_ratio,
            box_fit_ratio,
            layout,
        })
    }

    /// Selects the best truck among `candidates` for `remaining`.
    ///
    /// Candidates are expected smallest area first. On equal scores the
    /// earlier candidate wins. Returns `None` if no truck takes any box, or
    /// if any trial was cut short by cancellation.
    pub fn select<'a>(
        &self,
        candidates: &'a [TruckType],
        remaining: &[BoxInstance],
    ) -> Option<TruckChoice<'a>> {
        if remaining.is_empty() {
            return None;
        }

        let trials: Vec<Option<TruckChoice<'a>>> = if self.packer.config().parallel {
            candidates
                .par_iter()
                .map(|truck| self.evaluate(truck, remaining))
                .collect()
        } else {
            candidates
                .iter()
                .map(|truck| self.evaluate(truck, remaining))
                .collect()
        };

        best_choice(trials)
    }
}

/// Picks the highest-scoring trial, keeping the earlier one on ties.
///
/// Every trial must have run to completion; one cancelled trial voids the
/// whole comparison.
fn best_choice<'a>(trials: Vec<Option<TruckChoice<'a>>>) -> Option<TruckChoice<'a>> {
    let mut best: Option<TruckChoice<'a>> = None;
    for choice in trials.into_iter().flatten() {
        if choice.layout.cancelled {
            log::debug!("trial on '{}' was cut short", choice.truck.name());
            return None;
        }
        log::trace!(
            "candidate '{}': score {:.2}, {} placed",
            choice.truck.name(),
            choice.score,
            choice.layout.placed_count()
        );
        if best.as_ref().map_or(true, |b| choice.score > b.score) {
            best = Some(choice);
        }
    }

    best
}
