//! Export documents for finished layouts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use truckload::{BoxDefinition, LayoutStats, MultiTruckSolution, Placement, TruckType};

/// Errors that can occur when writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// The active result plus its inputs, stamped with the export time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ExportDocument {
    /// One truck, laid out directly.
    Single {
        truck: TruckType,
        boxes: Vec<BoxDefinition>,
        arrangement: Vec<Placement>,
        stats: LayoutStats,
        export_date: DateTime<Utc>,
    },
    /// Ranked multi-truck plans with the selected one called out.
    Multi {
        solution: MultiTruckSolution,
        all_solutions: Vec<MultiTruckSolution>,
        boxes: Vec<BoxDefinition>,
        stats: LayoutStats,
        export_date: DateTime<Utc>,
    },
}

impl ExportDocument {
    /// Builds a single-truck export stamped now.
    pub fn single(
        truck: TruckType,
        boxes: Vec<BoxDefinition>,
        arrangement: Vec<Placement>,
        stats: LayoutStats,
    ) -> Self {
        Self::Single {
            truck,
            boxes,
            arrangement,
            stats,
            export_date: Utc::now(),
        }
    }

    /// Builds a multi-truck export stamped now.
    ///
    /// Returns `None` if `selected` is out of range.
    pub fn multi(
        all_solutions: Vec<MultiTruckSolution>,
        selected: usize,
        boxes: Vec<BoxDefinition>,
    ) -> Option<Self> {
        let solution = all_solutions.get(selected)?.clone();
        let stats = LayoutStats::from_solution(&solution);
        Some(Self::Multi {
            solution,
            all_solutions,
            boxes,
            stats,
            export_date: Utc::now(),
        })
    }

    /// `"single"` or `"multi"`.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Single { .. } => "single",
            Self::Multi { .. } => "multi",
        }
    }

    /// When the document was created.
    pub fn export_date(&self) -> DateTime<Utc> {
        match self {
            Self::Single { export_date, .. } | Self::Multi { export_date, .. } => *export_date,
        }
    }

    /// Stats of the active result.
    pub fn stats(&self) -> &LayoutStats {
        match self {
            Self::Single { stats, .. } | Self::Multi { stats, .. } => stats,
        }
    }

    /// `truck-loading-{mode}-{YYYY-MM-DD}.json`.
    pub fn default_filename(&self) -> String {
        format!(
            "truck-loading-{}-{}.json",
            self.mode(),
            self.export_date().format("%Y-%m-%d")
        )
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the document to `path`.
    ///
    /// A directory gets the default file name appended. Returns the path written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = path.as_ref();
        let target = if path.is_dir() {
            path.join(self.default_filename())
        } else {
            path.to_path_buf()
        };

        fs::write(&target, self.to_json()?)?;
        log::info!("exported {} layout to {}", self.mode(), target.display());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use truckload::core::Strategy;

    #[test]
    fn test_single_document_shape() {
        let doc = ExportDocument::single(
            TruckType::new("1", "Compact Truck", 3000.0, 1800.0),
            vec![BoxDefinition::new("1", "A", 600.0, 400.0)],
            Vec::new(),
            LayoutStats::default(),
        );

        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(value["mode"], "single");
        assert_eq!(value["truck"]["name"], "Compact Truck");
        assert!(value["export_date"].is_string());
        assert!(doc.default_filename().starts_with("truck-loading-single-"));
        assert!(doc.default_filename().ends_with(".json"));
    }

    #[test]
    fn test_multi_selection() {
        let solutions = vec![
            MultiTruckSolution::new(Strategy::Balanced, 4),
            MultiTruckSolution::new(Strategy::TruckCount, 4),
        ];

        assert!(ExportDocument::multi(solutions.clone(), 2, Vec::new()).is_none());

        let doc = ExportDocument::multi(solutions, 1, Vec::new()).unwrap();
        assert_eq!(doc.mode(), "multi");
        assert_eq!(doc.stats().total_boxes, 4);
        match doc {
            ExportDocument::Multi { solution, .. } => {
                assert_eq!(solution.strategy, Strategy::TruckCount)
            }
            ExportDocument::Single { .. } => panic!("expected a multi-truck document"),
        }
    }

    #[test]
    fn test_filename_uses_export_day() {
        let doc = ExportDocument::single(
            TruckType::new("1", "T", 1000.0, 1000.0),
            Vec::new(),
            Vec::new(),
            LayoutStats::default(),
        );
        let day = doc.export_date().format("%Y-%m-%d").to_string();
        assert_eq!(
            doc.default_filename(),
            format!("truck-loading-single-{}.json", day)
        );
    }
}
