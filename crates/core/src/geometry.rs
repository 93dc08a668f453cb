//! Floor-plan geometry: axis-aligned rectangles, clearance and position scoring.
//!
//! All coordinates are millimetres on the truck floor. The origin is the
//! truck's loading corner, `x` runs along the truck length and `y` along
//! its width.

use crate::catalog::TruckType;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bonus awarded to positions whose rectangle needs no overhang.
pub const CONTAINMENT_BONUS: f64 = 1000.0;

/// Anything with a rectangular footprint on the truck floor.
pub trait Footprint {
    /// Identifier of the catalog entry or instance.
    fn id(&self) -> &str;

    /// Extent along the truck's long axis (mm).
    fn length(&self) -> f64;

    /// Extent across the truck (mm).
    fn width(&self) -> f64;

    /// Floor area in mm².
    fn area(&self) -> f64 {
        self.length() * self.width()
    }

    /// Validates the footprint.
    fn validate(&self) -> Result<()>;
}

impl<T: Footprint + ?Sized> Footprint for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn length(&self) -> f64 {
        (**self).length()
    }

    fn width(&self) -> f64 {
        (**self).width()
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

/// An axis-aligned rectangle given by its top-left corner and extent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Area in mm².
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Returns true if the interiors of the two rectangles intersect.
    ///
    /// Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Clearance to another rectangle. See [`spacing`].
    pub fn spacing_to(&self, other: &Rect) -> f64 {
        spacing(self, other)
    }

    /// Returns true if the rectangle lies inside `[0, length] × [0, width]`.
    pub fn contained_in(&self, length: f64, width: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= length && self.bottom() <= width
    }

    /// Returns true if the rectangle lies inside the bounds grown by `margin` on every side.
    pub fn within_margin(&self, length: f64, width: f64, margin: f64) -> bool {
        self.x >= -margin
            && self.y >= -margin
            && self.right() <= length + margin
            && self.bottom() <= width + margin
    }
}

/// Computes the clearance between two rectangles.
///
/// Returns 0 when they overlap. Otherwise the per-axis gaps are combined
/// into a Euclidean distance, so diagonal neighbours measure corner to corner.
pub fn spacing(a: &Rect, b: &Rect) -> f64 {
    if a.overlaps(b) {
        return 0.0;
    }

    let dx = (a.x - b.right()).max(b.x - a.right()).max(0.0);
    let dy = (a.y - b.bottom()).max(b.y - a.bottom()).max(0.0);

    (dx * dx + dy * dy).sqrt()
}

/// Scores a candidate position; higher is better.
///
/// Positions near the loading corner are preferred, and any position that
/// keeps the box fully on the floor beats every position that needs overhang.
pub fn position_score(rect: &Rect, truck: &TruckType) -> f64 {
    let distance = (rect.x * rect.x + rect.y * rect.y).sqrt();
    if rect.contained_in(truck.length(), truck.width()) {
        CONTAINMENT_BONUS - distance
    } else {
        -distance
    }
}
