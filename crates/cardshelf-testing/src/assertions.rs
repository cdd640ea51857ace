//! Assertions over the JSON output of catalog commands.

use anyhow::{Context, Result};
use serde_json::Value;

fn records(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["records"]
        .as_array()
        .context("Expected 'content.records' array in JSON")
}

/// Assert that JSON output contains the expected number of records.
pub fn assert_record_count(json: &Value, expected: usize) -> Result<()> {
    let records = records(json)?;
    if records.len() != expected {
        anyhow::bail!("Expected {} records, got {}", expected, records.len());
    }
    Ok(())
}

/// Names of the listed records, in output order.
pub fn record_names(json: &Value) -> Result<Vec<String>> {
    records(json)?
        .iter()
        .enumerate()
        .map(|(i, record)| {
            record["name"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Record {} missing name", i))
        })
        .collect()
}

/// Assert that every listed record has the given status.
pub fn assert_all_status(json: &Value, status: &str) -> Result<()> {
    for (i, record) in records(json)?.iter().enumerate() {
        let actual = record["status"]
            .as_str()
            .with_context(|| format!("Record {} missing status", i))?;
        if actual != status {
            anyhow::bail!("Record {} has status {:?}, expected {:?}", i, actual, status);
        }
    }
    Ok(())
}

/// Assert that every listed record falls in the given price band.
pub fn assert_all_in_band(json: &Value, band: &str) -> Result<()> {
    for (i, record) in records(json)?.iter().enumerate() {
        if record["price_band"].as_str() != Some(band) {
            anyhow::bail!(
                "Record {} is in band {}, expected {}",
                i,
                record["price_band"],
                band
            );
        }
    }
    Ok(())
}

/// Assert that listed prices never decrease.
pub fn assert_sorted_by_price(json: &Value) -> Result<()> {
    let prices: Vec<f64> = records(json)?
        .iter()
        .enumerate()
        .map(|(i, record)| {
            record["price"]
                .as_f64()
                .with_context(|| format!("Record {} missing price", i))
        })
        .collect::<Result<_>>()?;

    if let Some(pair) = prices.windows(2).find(|pair| pair[0] > pair[1]) {
        anyhow::bail!("Prices out of order: {} before {}", pair[0], pair[1]);
    }
    Ok(())
}
