//! Solution ranker.
//!
//! Runs the multi-truck optimizer once per strategy and orders the results
//! by score, best first.

use crate::interrupt::Interrupt;
use crate::optimizer::MultiTruckOptimizer;
use rayon::prelude::*;
use truckload_core::solver::{ProgressCallback, Solver};
use truckload_core::{BoxDefinition, Config, MultiTruckSolution, Result, Strategy, TruckType};

/// Ranks one solution per [`Strategy`].
#[derive(Debug, Clone, Default)]
pub struct SolutionRanker {
    config: Config,
    interrupt: Interrupt,
}

impl SolutionRanker {
    /// Creates a new ranker.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            interrupt: Interrupt::new(),
        }
    }

    /// Clears a previous [`Solver::cancel`].
    pub fn reset(&self) {
        self.interrupt.reset();
    }

    /// Solves and returns only the best solution, if any truck was used.
    pub fn recommended(
        &self,
        trucks: &[TruckType],
        boxes: &[BoxDefinition],
    ) -> Result<Option<MultiTruckSolution>> {
        Ok(self.solve(trucks, boxes)?.into_iter().next())
    }

    fn run(
        &self,
        trucks: &[TruckType],
        boxes: &[BoxDefinition],
        callback: Option<&ProgressCallback>,
    ) -> Result<Vec<MultiTruckSolution>> {
        let solve_one = |strategy: &Strategy| {
            MultiTruckOptimizer::with_interrupt(
                self.config.clone(),
                *strategy,
                self.interrupt.clone(),
            )
            .run(trucks, boxes, callback)
        };

        let solutions: Vec<MultiTruckSolution> = if self.config.parallel {
            Strategy::ALL
                .par_iter()
                .map(solve_one)
                .collect::<Result<Vec<_>>>()?
        } else {
            Strategy::ALL
                .iter()
                .map(solve_one)
                .collect::<Result<Vec<_>>>()?
        };

        let mut ranked: Vec<MultiTruckSolution> = solutions
            .into_iter()
            .filter(|s| s.total_trucks > 0)
            .collect();
        ranked.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));

        if let Some(best) = ranked.first() {
            log::info!(
                "recommended: {} ({} trucks, score {:.2})",
                best.strategy_name(),
                best.total_trucks,
                best.overall_score
            );
        } else {
            log::warn!("no strategy produced a loaded truck");
        }

        Ok(ranked)
    }
}

impl Solver for SolutionRanker {
    type Output = Vec<MultiTruckSolution>;

    fn solve(
        &self,
        trucks: &[TruckType],
        boxes: &[BoxDefinition],
    ) -> Result<Vec<MultiTruckSolution>> {
        self.run(trucks, boxes, None)
    }

    fn solve_with_progress(
        &self,
        trucks: &[TruckType],
        boxes: &[BoxDefinition],
        callback: ProgressCallback,
    ) -> Result<Vec<MultiTruckSolution>> {
        self.run(trucks, boxes, Some(&callback))
    }

    fn cancel(&self) {
        self.interrupt.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_boxes() -> Vec<BoxDefinition> {
        vec![
            BoxDefinition::new("1", "Pallet A", 1200.0, 800.0).with_quantity(4),
            BoxDefinition::new("2", "Crate B", 600.0, 400.0).with_quantity(6),
        ]
    }

    #[test]
    fn test_sorted_by_score() {
        let ranked = SolutionRanker::default()
            .solve(&TruckType::default_catalog(), &mixed_boxes())
            .unwrap();

        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].overall_score >= pair[1].overall_score);
        }
    }

    #[test]
    fn test_tiny_truck_yields_nothing() {
        let trucks = vec![TruckType::new("1", "Tiny", 100.0, 100.0)];
        let ranker = SolutionRanker::default();

        assert!(ranker.solve(&trucks, &mixed_boxes()).unwrap().is_empty());
        assert!(ranker
            .recommended(&trucks, &mixed_boxes())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_cancel_stops_every_strategy() {
        let ranker = SolutionRanker::default();
        ranker.cancel();
        assert!(ranker
            .solve(&TruckType::default_catalog(), &mixed_boxes())
            .unwrap()
            .is_empty());

        ranker.reset();
        assert!(ranker
            .recommended(&TruckType::default_catalog(), &mixed_boxes())
            .unwrap()
            .is_some());
    }
}
