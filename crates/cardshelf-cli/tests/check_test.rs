//! Check Tests
//!
//! Verifies load diagnostics: warnings with row numbers, header mapping,
//! and the fatal missing-header case.

use anyhow::Result;
use cardshelf_testing::{TestWorld, fixtures};

#[test]
fn test_check_reports_warnings_and_header() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", fixtures::SAMPLE_CATALOG);

    let result = world.run(&["check", "--source", "catalog.csv", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    let content = &json["content"];
    assert_eq!(content["record_count"], 8);
    assert_eq!(content["header"]["ignored"], serde_json::json!(["grader"]));
    assert_eq!(content["records_without_image"], 6);
    assert_eq!(content["unknown_statuses"], serde_json::json!([]));

    assert_eq!(
        content["warnings"],
        serde_json::json!([
            { "kind": "invalid_number", "row": 7, "field": "price", "value": "ask" },
            { "kind": "ragged_row", "row": 10, "expected": 13, "found": 8 }
        ])
    );
    assert_eq!(json["badge"]["level"], "warning");
    Ok(())
}

#[test]
fn test_check_plain_output() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", fixtures::SAMPLE_CATALOG);

    let result = world.run(&["check", "--source", "catalog.csv"])?;
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.contains("Records: 8"), "stdout: {}", stdout);
    assert!(stdout.contains("Ignored: grader"));
    assert!(stdout.contains("row 7: 'ask' is not a number in column price_bnd, using 0"));
    assert!(stdout.contains("row 10: expected 13 cells, found 8"));
    Ok(())
}

#[test]
fn test_check_quiet_prints_only_warnings() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", fixtures::SAMPLE_CATALOG);

    let result = world.run(&["check", "--source", "catalog.csv", "--quiet"])?;

    assert!(result.success());
    assert_eq!(result.stdout().lines().count(), 2);
    Ok(())
}

#[test]
fn test_check_clean_catalog() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", &fixtures::generated_catalog(3));

    let result = world.run(&["check", "--source", "catalog.csv", "--format", "json"])?;

    let json = result.json()?;
    assert_eq!(json["badge"]["level"], "success");
    assert_eq!(json["content"]["warnings"], serde_json::json!([]));
    Ok(())
}

#[test]
fn test_check_header_only_is_not_an_error() -> Result<()> {
    let world = TestWorld::new().with_catalog("catalog.csv", fixtures::EMPTY_CATALOG);

    let result = world.run(&["check", "--source", "catalog.csv", "--format", "json"])?;

    assert!(result.success());
    assert_eq!(result.json()?["content"]["record_count"], 0);
    Ok(())
}

#[test]
fn test_check_without_header_fails() -> Result<()> {
    let world = TestWorld::new()
        .with_catalog("empty.csv", "")
        .with_catalog("blank.csv", fixtures::HEADERLESS_CATALOG);

    for name in ["empty.csv", "blank.csv"] {
        let result = world.run(&["check", "--source", name])?;
        assert_eq!(result.code(), Some(1), "{} should fail", name);
        assert!(
            result.stderr().contains("header"),
            "stderr for {}: {}",
            name,
            result.stderr()
        );
    }
    Ok(())
}

#[test]
fn test_check_spreadsheet_encodings() -> Result<()> {
    let world = TestWorld::new()
        .with_catalog("excel.csv", "\u{feff}set,name,price_bnd\nBase,Pikachu,2\n");
    std::fs::write(
        world.path("latin1.csv"),
        b"set,name,price_bnd\nBase,Pok\xe9mon Card,2\n",
    )?;

    let result = world.run(&["list", "--source", "excel.csv", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert_eq!(result.json()?["content"]["records"][0]["set"], "Base");

    let result = world.run(&["check", "--source", "latin1.csv", "--format", "json"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["content"]["record_count"], 1);
    assert_eq!(
        json["content"]["warnings"],
        serde_json::json!([{ "kind": "invalid_encoding", "row": 2 }])
    );
    assert_eq!(json["badge"]["level"], "warning");
    Ok(())
}
