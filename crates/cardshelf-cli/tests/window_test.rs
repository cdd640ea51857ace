//! Window Tests
//!
//! Verifies the visible-window computation end to end: geometry flags,
//! config footprints, filtering before layout and stale scroll offsets.

use anyhow::Result;
use cardshelf_testing::{TestWorld, fixtures};
use serde_json::Value;

fn window_json(world: &TestWorld, extra: &[&str]) -> Result<Value> {
    let mut args = vec![
        "window", "--source", "catalog.csv", "--width", "800", "--height", "600", "--format",
        "json",
    ];
    args.extend_from_slice(extra);
    let result = world.run(&args)?;
    assert!(result.success(), "window failed: {}", result.stderr());
    result.json()
}

fn item_indices(json: &Value) -> Vec<u64> {
    json["content"]["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["placement"]["index"].as_u64())
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn test_window_top_of_large_catalog() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", &fixtures::generated_catalog(100));

    let json = window_json(&world, &[])?;
    let window = &json["content"]["window"];

    assert_eq!(window["column_count"], 3);
    assert_eq!(window["start_index"], 0);
    assert_eq!(window["end_index"], 15);
    assert_eq!(window["row_count"], 34);
    assert_eq!(item_indices(&json), (0..15).collect::<Vec<_>>());
    assert_eq!(json["badge"]["label"], "Materializing 15 of 100 records");
    Ok(())
}

#[test]
fn test_window_scrolled_keeps_row_above() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", &fixtures::generated_catalog(100));

    let json = window_json(&world, &["--scroll", "2720"])?;
    let window = &json["content"]["window"];

    assert_eq!(window["start_index"], 27);
    assert_eq!(window["end_index"], 42);

    let items = json["content"]["items"].as_array().expect("items array");
    assert_eq!(items.len(), 15);
    assert_eq!(items[0]["record"]["name"], "Card 28");
    assert_eq!(items[0]["placement"]["top"], 9.0 * 272.0);
    Ok(())
}

#[test]
fn test_window_end_is_clamped_to_items() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", &fixtures::generated_catalog(100));

    let offset = (272.0_f64 * 32.0).to_string();
    let json = window_json(&world, &["--scroll", offset.as_str()])?;

    assert_eq!(json["content"]["window"]["end_index"], 102);
    assert_eq!(item_indices(&json), (93..100).collect::<Vec<_>>());
    Ok(())
}

#[test]
fn test_window_applies_filters_before_layout() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", fixtures::SAMPLE_CATALOG);

    let json = window_json(&world, &["--status", "AVAILABLE"])?;

    assert_eq!(json["content"]["matched_count"], 5);
    assert_eq!(json["content"]["window"]["row_count"], 2);
    assert_eq!(item_indices(&json), vec![0, 1, 2, 3, 4]);
    assert_eq!(json["content"]["items"][1]["record"]["name"], "Booster Box");
    Ok(())
}

#[test]
fn test_window_stale_scroll_is_empty_not_an_error() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", fixtures::SAMPLE_CATALOG);

    let json = window_json(&world, &["--scroll", "1000000"])?;

    assert!(item_indices(&json).is_empty());
    assert_eq!(json["badge"]["level"], "warning");
    Ok(())
}

#[test]
fn test_window_degenerate_geometry() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", fixtures::SAMPLE_CATALOG);

    let result = world.run(&[
        "window",
        "--source",
        "catalog.csv",
        "--width",
        "0",
        "--height",
        "600",
        "--item-width",
        "0",
        "--item-height",
        "0",
        "--gap",
        "0",
        "--format",
        "json",
    ])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;

    assert_eq!(json["content"]["window"]["column_count"], 1);
    assert_eq!(json["content"]["window"]["row_stride"], 1.0);
    Ok(())
}

#[test]
fn test_window_zero_items() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", fixtures::EMPTY_CATALOG);

    let json = window_json(&world, &[])?;

    assert_eq!(json["content"]["window"]["start_index"], 0);
    assert_eq!(json["content"]["window"]["end_index"], 0);
    assert_eq!(json["content"]["window"]["total_extent"], 0.0);
    Ok(())
}

#[test]
fn test_window_footprint_from_config() -> Result<()> {
    let world = TestWorld::new()
        .with_catalog("catalog.csv", &fixtures::generated_catalog(20))
        .with_config("[layout]\nwidth = 100.0\nheight = 100.0\ngap = 0.0\n");

    let json = window_json(&world, &[])?;

    assert_eq!(json["content"]["window"]["column_count"], 8);
    assert_eq!(json["content"]["footprint"]["width"], 100.0);

    // Flags override the configured footprint
    let json = window_json(&world, &["--item-width", "400"])?;
    assert_eq!(json["content"]["window"]["column_count"], 2);
    Ok(())
}
