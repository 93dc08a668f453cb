//! Catalog entries: truck types, box definitions and expanded box instances.

use crate::geometry::Footprint;
use crate::{Error, Result};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Size class of a truck, by floor length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TruckCategory {
    /// Up to 4 m.
    Small,
    /// 4-8 m.
    Medium,
    /// 8-12 m.
    Large,
    /// 12 m and longer.
    ExtraLarge,
}

impl TruckCategory {
    /// Classifies a floor length in millimetres.
    pub fn from_length(length: f64) -> Self {
        if length < 4000.0 {
            Self::Small
        } else if length < 8000.0 {
            Self::Medium
        } else if length < 12000.0 {
            Self::Large
        } else {
            Self::ExtraLarge
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small (up to 4m)",
            Self::Medium => "Medium (4-8m)",
            Self::Large => "Large (8-12m)",
            Self::ExtraLarge => "Extra Large (12m+)",
        }
    }
}

/// A truck type from the catalog. The floor is `length × width` millimetres.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TruckType {
    id: String,
    name: String,
    length: f64,
    width: f64,
}

impl TruckType {
    /// Creates a new truck type.
    pub fn new(id: impl Into<String>, name: impl Into<String>, length: f64, width: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            length,
            width,
        }
    }

    /// The stock truck catalog.
    pub fn default_catalog() -> Vec<TruckType> {
        vec![
            Self::new("1", "Compact Truck", 3000.0, 1800.0),
            Self::new("2", "Standard Truck", 6000.0, 2400.0),
            Self::new("3", "Large Truck", 9000.0, 2500.0),
            Self::new("4", "Extra Large Truck", 12000.0, 2500.0),
            Self::new("5", "Small Truck", 4500.0, 2000.0),
        ]
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Floor area in m².
    pub fn area_m2(&self) -> f64 {
        self.area() / crate::result::MM2_PER_M2
    }

    /// Size class of this truck.
    pub fn category(&self) -> TruckCategory {
        TruckCategory::from_length(self.length)
    }
}

impl Footprint for TruckType {
    fn id(&self) -> &str {
        &self.id
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn validate(&self) -> Result<()> {
        if !positive(self.length) || !positive(self.width) {
            return Err(Error::InvalidTruck(format!(
                "Dimensions for '{}' must be positive",
                self.id
            )));
        }
        Ok(())
    }
}

/// A box type with the number of units to load.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxDefinition {
    id: String,
    name: String,
    length: f64,
    width: f64,
    quantity: usize,
    color: String,
}

impl BoxDefinition {
    /// Creates a definition with quantity 1 and the default color.
    pub fn new(id: impl Into<String>, name: impl Into<String>, length: f64, width: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            length,
            width,
            quantity: 1,
            color: Self::DEFAULT_COLOR.to_string(),
        }
    }

    /// Color used when none is given.
    pub const DEFAULT_COLOR: &'static str = "#3B82F6";

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Display name, exactly as entered.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of units.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    /// Display color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Area of all units together (mm²).
    pub fn total_area(&self) -> f64 {
        self.area() * self.quantity as f64
    }

    /// Creates instance number `index` (1-based) of this definition.
    pub fn instance(&self, index: usize, naming: InstanceNaming) -> BoxInstance {
        let instance_name = match naming {
            InstanceNaming::Indexed => format!("{}-{}", self.name, index),
            InstanceNaming::DefinitionName => self.name.clone(),
        };
        BoxInstance {
            box_id: self.id.clone(),
            instance_id: format!("{}-{}", self.id, index),
            name: self.name.clone(),
            instance_name,
            length: self.length,
            width: self.width,
            color: self.color.clone(),
        }
    }
}

impl Footprint for BoxDefinition {
    fn id(&self) -> &str {
        &self.id
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn validate(&self) -> Result<()> {
        if !positive(self.length) || !positive(self.width) {
            return Err(Error::InvalidBox(format!(
                "Dimensions for '{}' must be positive",
                self.id
            )));
        }

        if self.quantity == 0 {
            return Err(Error::InvalidBox(format!(
                "Quantity for '{}' must be at least 1",
                self.id
            )));
        }

        Ok(())
    }
}

/// How expanded instances are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstanceNaming {
    /// `"{name}-{index}"`.
    #[default]
    Indexed,
    /// The definition name unchanged (single-truck layouts).
    DefinitionName,
}

/// One physical box, expanded from a [`BoxDefinition`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxInstance {
    box_id: String,
    instance_id: String,
    name: String,
    instance_name: String,
    length: f64,
    width: f64,
    color: String,
}

impl BoxInstance {
    /// Identifier of the source definition.
    pub fn box_id(&self) -> &str {
        &self.box_id
    }

    /// Name of the source definition.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of this unit.
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    /// Display color.
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl Footprint for BoxInstance {
    /// The instance id, `"{definitionId}-{index}"`.
    fn id(&self) -> &str {
        &self.instance_id
    }

    fn length(&self) -> f64 {
        self.length
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn validate(&self) -> Result<()> {
        if !positive(self.length) || !positive(self.width) {
            return Err(Error::InvalidBox(format!(
                "Dimensions for '{}' must be positive",
                self.instance_id
            )));
        }
        Ok(())
    }
}

/// Expands every definition into `quantity` instances, in catalog order.
pub fn expand_instances(boxes: &[BoxDefinition], naming: InstanceNaming) -> Vec<BoxInstance> {
    boxes
        .iter()
        .flat_map(|def| (1..=def.quantity).map(move |i| def.instance(i, naming)))
        .collect()
}

/// Stable sort by footprint area, largest first.
pub fn sort_by_area_desc<T: Footprint>(items: &mut [T]) {
    items.sort_by(|a, b| b.area().total_cmp(&a.area()));
}

/// Validates a truck catalog.
pub fn validate_trucks(trucks: &[TruckType]) -> Result<()> {
    trucks.iter().try_for_each(Footprint::validate)
}

/// Validates a box catalog.
///
/// Definition ids must be unique, since instance ids are derived from them.
pub fn validate_boxes(boxes: &[BoxDefinition]) -> Result<()> {
    let mut seen = HashSet::with_capacity(boxes.len());
    for def in boxes {
        def.validate()?;
        if !seen.insert(def.id()) {
            return Err(Error::InvalidBox(format!(
                "Duplicate box id '{}'",
                def.id()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_expand_indexed() {
        let boxes = vec![
            BoxDefinition::new("1", "Electronics Box A", 600.0, 400.0).with_quantity(3),
            BoxDefinition::new("2", "Furniture Package B", 1200.0, 800.0).with_quantity(2),
        ];
        let instances = expand_instances(&boxes, InstanceNaming::Indexed);

        assert_eq!(instances.len(), 5);
        assert_eq!(instances[0].id(), "1-1");
        assert_eq!(instances[2].id(), "1-3");
        assert_eq!(instances[2].instance_name(), "Electronics Box A-3");
        assert_eq!(instances[3].id(), "2-1");
        assert_eq!(instances[3].name(), "Furniture Package B");
    }

    #[test]
    fn test_expand_definition_name() {
        let boxes = vec![BoxDefinition::new("7", "Small Parts C", 300.0, 200.0).with_quantity(2)];
        let instances = expand_instances(&boxes, InstanceNaming::DefinitionName);

        assert_eq!(instances[1].id(), "7-2");
        assert_eq!(instances[1].instance_name(), "Small Parts C");
    }

    #[test]
    fn test_sort_by_area_is_stable() {
        let boxes = vec![
            BoxDefinition::new("a", "A", 100.0, 200.0),
            BoxDefinition::new("b", "B", 300.0, 300.0),
            BoxDefinition::new("c", "C", 200.0, 100.0),
        ];
        let mut instances = expand_instances(&boxes, InstanceNaming::Indexed);
        sort_by_area_desc(&mut instances);

        let ids: Vec<&str> = instances.iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec!["b-1", "a-1", "c-1"]);
    }

    #[test]
    fn test_validation() {
        assert!(TruckType::new("t", "T", 3000.0, 1800.0).validate().is_ok());
        assert!(TruckType::new("t", "T", 0.0, 1800.0).validate().is_err());
        assert!(TruckType::new("t", "T", f64::NAN, 1800.0).validate().is_err());

        assert!(BoxDefinition::new("b", "B", 10.0, 10.0).validate().is_ok());
        assert!(BoxDefinition::new("b", "B", -10.0, 10.0).validate().is_err());
        assert!(BoxDefinition::new("b", "B", 10.0, 10.0)
            .with_quantity(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_duplicate_box_ids_rejected() {
        let boxes = vec![
            BoxDefinition::new("1", "Crate", 1900.0, 1900.0),
            BoxDefinition::new("2", "Drum", 600.0, 600.0),
            BoxDefinition::new("1", "Other Crate", 1900.0, 1900.0),
        ];
        assert!(matches!(validate_boxes(&boxes), Err(Error::InvalidBox(_))));
        assert!(validate_boxes(&boxes[..2]).is_ok());
    }

    #[test]
    fn test_truck_category() {
        let catalog = TruckType::default_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[0].category(), TruckCategory::Small);
        assert_eq!(catalog[1].category(), TruckCategory::Medium);
        assert_eq!(catalog[2].category(), TruckCategory::Large);
        assert_eq!(catalog[3].category(), TruckCategory::ExtraLarge);
        assert_relative_eq!(catalog[0].area_m2(), 5.4);
    }
}
