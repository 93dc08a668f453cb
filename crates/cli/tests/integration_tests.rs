//! Integration tests for truckload-cli.

use std::fs;
use truckload::{LayoutStats, SolutionRanker, Solver, TruckPacker};
use truckload_cli::{CatalogParser, ExportDocument, ParseError};

const CATALOG: &str = r##"{
    "trucks": [
        {"id": "1", "name": "Compact Truck", "length_mm": 3000, "width_mm": 1800},
        {"id": "2", "name": "Standard Truck", "length_mm": 6000, "width_mm": 2400}
    ],
    "boxes": [
        {"id": "1", "name": "Electronics Box A", "length_mm": 600, "width_mm": 400, "quantity": 3, "color": "#3B82F6"},
        {"id": "2", "name": "Furniture Package B", "length_mm": 1200, "width_mm": 800, "quantity": 2, "color": "#EF4444"},
        {"id": "3", "name": "Small Parts C", "length_mm": 300, "width_mm": 200, "quantity": 5, "color": "#10B981"},
        {"id": "4", "name": "Large Equipment D", "length_mm": 1500, "width_mm": 1000, "quantity": 1, "color": "#F59E0B"}
    ]
}"##;

#[test]
fn test_load_combined_then_override_boxes() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    let boxes_path = dir.path().join("boxes.json");
    fs::write(&catalog_path, CATALOG).unwrap();
    fs::write(
        &boxes_path,
        r#"[{"id": "x", "name": "Crate", "length": 500, "width": 500, "quantity": 2}]"#,
    )
    .unwrap();

    let parser = CatalogParser::new();

    let catalog = parser.load(Some(catalog_path.as_path()), None, None).unwrap();
    assert_eq!(catalog.trucks.len(), 2);
    assert_eq!(catalog.total_boxes(), 11);

    let overridden = parser
        .load(Some(catalog_path.as_path()), None, Some(boxes_path.as_path()))
        .unwrap();
    assert_eq!(overridden.trucks.len(), 2);
    assert_eq!(overridden.total_boxes(), 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let result = CatalogParser::new().load(Some(missing.as_path()), None, None);
    assert!(matches!(result, Err(ParseError::IoError(_))));
}

#[test]
fn test_single_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = CatalogParser::new().parse_json(CATALOG).unwrap();
    let truck = catalog.truck("1").unwrap().clone();

    let (placements, stats) = TruckPacker::default_config()
        .arrange(Some(&truck), &catalog.boxes)
        .unwrap();
    let placed = placements.len();

    let doc = ExportDocument::single(truck, catalog.boxes, placements, stats);
    let written = doc.save(dir.path()).unwrap();

    assert_eq!(
        written.file_name().unwrap().to_str().unwrap(),
        doc.default_filename()
    );

    let back: ExportDocument = serde_json::from_str(&fs::read_to_string(&written).unwrap()).unwrap();
    assert_eq!(back.mode(), "single");
    assert_eq!(back.export_date(), doc.export_date());
    match back {
        ExportDocument::Single {
            arrangement, stats, ..
        } => {
            assert_eq!(arrangement.len(), placed);
            assert_eq!(stats.placed_boxes + stats.unplaced_boxes, 11);
        }
        ExportDocument::Multi { .. } => panic!("expected a single-truck document"),
    }
}

#[test]
fn test_multi_export_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    let catalog = CatalogParser::new().parse_json(CATALOG).unwrap();

    let ranked = SolutionRanker::default()
        .solve(&catalog.trucks, &catalog.boxes)
        .unwrap();
    let best_stats = LayoutStats::from_solution(&ranked[0]);

    let doc = ExportDocument::multi(ranked, 0, catalog.boxes).unwrap();
    let written = doc.save(&path).unwrap();
    assert_eq!(written, path);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["mode"], "multi");
    assert_eq!(value["all_solutions"].as_array().unwrap().len(), 3);
    assert_eq!(
        value["stats"]["placed_boxes"].as_u64().unwrap() as usize,
        best_stats.placed_boxes
    );
}
