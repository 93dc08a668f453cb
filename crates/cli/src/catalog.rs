//! Truck and box catalog parser.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use truckload::core::catalog::{validate_boxes, validate_trucks};
use truckload::{BoxDefinition, TruckType};

/// Errors that can occur when loading catalogs.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid catalog entry: {0}")]
    InvalidEntry(#[from] truckload::Error),

    #[error("Invalid catalog format: {0}")]
    InvalidFormat(String),
}

/// Trucks and boxes to plan with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub trucks: Vec<TruckType>,
    pub boxes: Vec<BoxDefinition>,
}

impl Catalog {
    /// Looks up a truck by id.
    pub fn truck(&self, id: &str) -> Option<&TruckType> {
        use truckload::core::Footprint;
        self.trucks.iter().find(|t| t.id() == id)
    }

    /// Sum of box quantities.
    pub fn total_boxes(&self) -> usize {
        self.boxes.iter().map(BoxDefinition::quantity).sum()
    }
}

/// Parser for catalog JSON files.
///
/// A combined file holds `{"trucks": [...], "boxes": [...]}` (either list may
/// be missing). Separate truck and box files may also be bare arrays.
#[derive(Debug, Default)]
pub struct CatalogParser;

impl CatalogParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a combined catalog from a JSON file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Catalog, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_json(&content)
    }

    /// Parses a combined catalog from a JSON string.
    pub fn parse_json(&self, json: &str) -> Result<Catalog, ParseError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let catalog = Catalog {
            trucks: raw.trucks.into_iter().map(RawTruck::into_truck).collect(),
            boxes: raw.boxes.into_iter().map(RawBox::into_box).collect(),
        };
        validate_trucks(&catalog.trucks)?;
        validate_boxes(&catalog.boxes)?;
        Ok(catalog)
    }

    /// Parses a truck list (bare array or `{"trucks": [...]}`) from a JSON string.
    pub fn parse_trucks_json(&self, json: &str) -> Result<Vec<TruckType>, ParseError> {
        let raw: Listed<RawTruck> = serde_json::from_str(json)?;
        let trucks: Vec<TruckType> = raw
            .into_items("trucks")?
            .into_iter()
            .map(RawTruck::into_truck)
            .collect();
        validate_trucks(&trucks)?;
        Ok(trucks)
    }

    /// Parses a box list (bare array or `{"boxes": [...]}`) from a JSON string.
    pub fn parse_boxes_json(&self, json: &str) -> Result<Vec<BoxDefinition>, ParseError> {
        let raw: Listed<RawBox> = serde_json::from_str(json)?;
        let boxes: Vec<BoxDefinition> = raw
            .into_items("boxes")?
            .into_iter()
            .map(RawBox::into_box)
            .collect();
        validate_boxes(&boxes)?;
        Ok(boxes)
    }

    /// Loads the planning inputs.
    ///
    /// Separate truck and box files replace the matching list of the combined
    /// catalog. Without any trucks the stock catalog is used.
    pub fn load(
        &self,
        catalog: Option<&Path>,
        trucks: Option<&Path>,
        boxes: Option<&Path>,
    ) -> Result<Catalog, ParseError> {
        let mut loaded = match catalog {
            Some(path) => self.parse_file(path)?,
            None => Catalog::default(),
        };

        if let Some(path) = trucks {
            loaded.trucks = self.parse_trucks_json(&fs::read_to_string(path)?)?;
        }
        if let Some(path) = boxes {
            loaded.boxes = self.parse_boxes_json(&fs::read_to_string(path)?)?;
        }

        if loaded.trucks.is_empty() {
            log::info!("no trucks given, using the stock catalog");
            loaded.trucks = TruckType::default_catalog();
        }

        log::debug!(
            "loaded {} truck types and {} box types ({} boxes)",
            loaded.trucks.len(),
            loaded.boxes.len(),
            loaded.total_boxes()
        );

        Ok(loaded)
    }
}

/// Raw catalog as parsed from JSON.
#[derive(Debug, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    trucks: Vec<RawTruck>,
    #[serde(default)]
    boxes: Vec<RawBox>,
}

/// A list given bare or wrapped in a single-key object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Listed<T> {
    Bare(Vec<T>),
    Wrapped(serde_json::Map<String, serde_json::Value>),
}

impl<T: serde::de::DeserializeOwned> Listed<T> {
    fn into_items(self, key: &str) -> Result<Vec<T>, ParseError> {
        match self {
            Listed::Bare(items) => Ok(items),
            Listed::Wrapped(mut map) => {
                let value = map
                    .remove(key)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("missing '{}' list", key)))?;
                Ok(serde_json::from_value(value)?)
            }
        }
    }
}

/// Identifiers may be written as strings or numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl From<RawId> for String {
    fn from(id: RawId) -> Self {
        match id {
            RawId::Text(text) => text,
            RawId::Number(n) => n.to_string(),
        }
    }
}

/// Raw truck as parsed from JSON.
#[derive(Debug, Deserialize)]
struct RawTruck {
    id: RawId,
    name: String,
    #[serde(alias = "length_mm")]
    length: f64,
    #[serde(alias = "width_mm")]
    width: f64,
}

impl RawTruck {
    fn into_truck(self) -> TruckType {
        TruckType::new(self.id, self.name, self.length, self.width)
    }
}

fn default_quantity() -> usize {
    1
}

fn default_color() -> String {
    BoxDefinition::DEFAULT_COLOR.to_string()
}

/// Raw box as parsed from JSON.
#[derive(Debug, Deserialize)]
struct RawBox {
    id: RawId,
    name: String,
    #[serde(alias = "length_mm")]
    length: f64,
    #[serde(alias = "width_mm")]
    width: f64,
    #[serde(default = "default_quantity")]
    quantity: usize,
    #[serde(default = "default_color")]
    color: String,
}

impl RawBox {
    fn into_box(self) -> BoxDefinition {
        BoxDefinition::new(self.id, self.name, self.length, self.width)
            .with_quantity(self.quantity)
            .with_color(self.color)
    }
}
