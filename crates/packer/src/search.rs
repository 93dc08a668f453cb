//! Single-placement search.
//!
//! Scans a fixed grid of top-left corners for both orientations of a box and
//! keeps the valid candidate with the best [`position_score`].

use truckload_core::geometry::{position_score, Footprint, Rect};
use truckload_core::{Config, TruckType};

/// A valid position for a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Occupied rectangle after orientation.
    pub rect: Rect,
    /// Whether the box is turned by 90°.
    pub rotated: bool,
    /// Position score of `rect`.
    pub score: f64,
}

/// Grid coordinates from `min` to `max` inclusive, `step` apart.
///
/// Empty when `max < min`. Coordinates are computed from the start value
/// rather than accumulated, so integral inputs stay exact.
pub fn grid_positions(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if max >= min {
        ((max - min) / step).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| min + i as f64 * step)
}

/// Returns true if `rect` keeps at least `min_spacing` from every placed rectangle.
pub fn is_valid_position(rect: &Rect, placed: &[Rect], min_spacing: f64) -> bool {
    placed.iter().all(|other| rect.spacing_to(other) >= min_spacing)
}

/// Finds the best position for a `length × width` box on `truck`.
///
/// The unrotated orientation is scanned first, then the rotated one; within
/// an orientation x is the outer loop. A later candidate only wins on a
/// strictly higher score, so ties keep the first candidate found.
pub fn find_best_position(
    truck: &TruckType,
    length: f64,
    width: f64,
    placed: &[Rect],
    config: &Config,
) -> Option<Candidate> {
    let overhang = config.max_overhang;
    let orientations = [(length, width, false), (width, length, true)];

    let mut best: Option<Candidate> = None;

    for (w, h, rotated) in orientations {
        let max_x = truck.length() + overhang - w;
        let max_y = truck.width() + overhang - h;

        for x in grid_positions(-overhang, max_x, config.grid_step) {
            for y in grid_positions(-overhang, max_y, config.grid_step) {
                let rect = Rect::new(x, y, w, h);
                if !is_valid_position(&rect, placed, config.min_spacing) {
                    continue;
                }

                let score = position_score(&rect, truck);
                if best.map_or(true, |b| score > b.score) {
                    best = Some(Candidate {
                        rect,
                        rotated,
                        score,
                    });
                }
            }
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_positions() {
        let xs: Vec<f64> = grid_positions(-100.0, 200.0, 100.0).collect();
        assert_eq!(xs, vec![-100.0, 0.0, 100.0, 200.0]);

        let partial: Vec<f64> = grid_positions(-100.0, 150.0, 100.0).collect();
        assert_eq!(partial, vec![-100.0, 0.0, 100.0]);

        assert_eq!(grid_positions(0.0, -1.0, 100.0).count(), 0);
    }

    #[test]
    fn test_empty_truck_prefers_origin() {
        let truck = TruckType::new("t", "T", 2000.0, 2000.0);
        let best = find_best_position(&truck, 1900.0, 1900.0, &[], &Config::default()).unwrap();

        assert_eq!(best.rect, Rect::new(0.0, 0.0, 1900.0, 1900.0));
        assert!(!best.rotated);
        assert_eq!(best.score, 1000.0);
    }

    #[test]
    fn test_rotation_when_only_rotated_fits() {
        // 2500 mm does not fit across a 1000 mm truck even with overhang
        let truck = TruckType::new("t", "T", 3000.0, 1000.0);
        let best = find_best_position(&truck, 800.0, 2500.0, &[], &Config::default()).unwrap();

        assert!(best.rotated);
        assert_eq!(best.rect.width, 2500.0);
        assert_eq!(best.rect.height, 800.0);
    }

    #[test]
    fn test_respects_spacing() {
        let truck = TruckType::new("t", "T", 3000.0, 1000.0);
        let placed = vec![Rect::new(0.0, 0.0, 1000.0, 1000.0)];
        let config = Config::default();

        let best = find_best_position(&truck, 500.0, 500.0, &placed, &config).unwrap();
        assert!(best.rect.spacing_to(&placed[0]) >= config.min_spacing);
        // Next free grid column is x = 1100
        assert_eq!(best.rect.x, 1100.0);
        assert_eq!(best.rect.y, 0.0);
    }

    #[test]
    fn test_no_position_for_oversized_box() {
        let truck = TruckType::new("t", "T", 1000.0, 1000.0);
        assert!(find_best_position(&truck, 1300.0, 1300.0, &[], &Config::default()).is_none());
    }

    #[test]
    fn test_overhang_used_when_needed() {
        let truck = TruckType::new("t", "T", 1000.0, 1000.0);
        let best = find_best_position(&truck, 1150.0, 500.0, &[], &Config::default()).unwrap();

        assert!(best.score < 0.0);
        assert!(best.rect.within_margin(1000.0, 1000.0, 100.0));
    }
}
