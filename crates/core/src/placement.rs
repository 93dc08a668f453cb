//! Placement representation for positioned boxes.

use crate::catalog::BoxInstance;
use crate::geometry::{Footprint, Rect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box instance positioned on a truck floor.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Identifier of the source box definition.
    pub box_id: String,

    /// Identifier of the placed instance.
    pub instance_id: String,

    /// Definition name, exactly as entered.
    pub name: String,

    /// Name of the placed instance.
    pub instance_name: String,

    /// Left edge (mm). Negative values use overhang.
    pub x: f64,

    /// Top edge (mm). Negative values use overhang.
    pub y: f64,

    /// Extent along the truck length after rotation (mm).
    pub width: f64,

    /// Extent across the truck after rotation (mm).
    pub height: f64,

    /// Whether the box was turned by 90°.
    pub rotated: bool,

    /// Display color of the source definition.
    pub color: String,
}

impl Placement {
    /// Places `instance` at the given rectangle.
    pub fn new(instance: &BoxInstance, rect: Rect, rotated: bool) -> Self {
        Self {
            box_id: instance.box_id().to_string(),
            instance_id: instance.id().to_string(),
            name: instance.name().to_string(),
            instance_name: instance.instance_name().to_string(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            rotated,
            color: instance.color().to_string(),
        }
    }

    /// The occupied rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Occupied floor area (mm²).
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Sum of occupied floor area (mm²).
pub fn used_area(placements: &[Placement]) -> f64 {
    placements.iter().map(Placement::area).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BoxDefinition, InstanceNaming};

    #[test]
    fn test_placement_from_instance() {
        let def = BoxDefinition::new("4", "Large Equipment D", 1500.0, 1000.0)
            .with_color("#F59E0B");
        let instance = def.instance(1, InstanceNaming::Indexed);

        let p = Placement::new(&instance, Rect::new(0.0, 100.0, 1000.0, 1500.0), true);
        assert_eq!(p.box_id, "4");
        assert_eq!(p.instance_id, "4-1");
        assert_eq!(p.name, "Large Equipment D");
        assert_eq!(p.instance_name, "Large Equipment D-1");
        assert_eq!(p.color, "#F59E0B");
        assert!(p.rotated);
        assert_eq!(p.rect(), Rect::new(0.0, 100.0, 1000.0, 1500.0));
        assert_eq!(p.area(), 1_500_000.0);
    }

    #[test]
    fn test_used_area() {
        let def = BoxDefinition::new("1", "A", 100.0, 50.0).with_quantity(2);
        let placements = vec![
            Placement::new(
                &def.instance(1, InstanceNaming::Indexed),
                Rect::new(0.0, 0.0, 100.0, 50.0),
                false,
            ),
            Placement::new(
                &def.instance(2, InstanceNaming::Indexed),
                Rect::new(200.0, 0.0, 50.0, 100.0),
                true,
            ),
        ];
        assert_eq!(used_area(&placements), 10_000.0);
        assert_eq!(used_area(&[]), 0.0);
    }
}
