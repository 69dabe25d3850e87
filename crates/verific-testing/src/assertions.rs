//! Assertions over the CLI's `{"content": ...}` JSON envelope.

use anyhow::{Context, Result};
use serde_json::Value;

/// Bucket labels in display order
pub fn bucket_order(json: &Value) -> Result<Vec<String>> {
    let order = json["content"]["order"]
        .as_array()
        .context("Expected 'content.order' array in JSON")?;

    order
        .iter()
        .map(|label| {
            label
                .as_str()
                .map(str::to_string)
                .context("Bucket label is not a string")
        })
        .collect()
}

/// Assert the display order of buckets.
pub fn assert_bucket_order(json: &Value, expected: &[&str]) -> Result<()> {
    let order = bucket_order(json)?;
    if order != expected {
        anyhow::bail!("Expected bucket order {:?}, got {:?}", expected, order);
    }
    Ok(())
}

/// The `field` value of every record in bucket `label`, in order.
pub fn bucket_field(json: &Value, label: &str, field: &str) -> Result<Vec<String>> {
    let items = json["content"]["buckets"][label]
        .as_array()
        .with_context(|| format!("Expected bucket '{}' in JSON", label))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item[field]
                .as_str()
                .map(str::to_string)
                .with_context(|| format!("Item {} of '{}' has no string '{}'", i, label, field))
        })
        .collect()
}

/// Assert that bucket `label` holds exactly the given ids, in order.
pub fn assert_bucket_ids(json: &Value, label: &str, expected: &[&str]) -> Result<()> {
    let ids = bucket_field(json, label, "id")?;
    if ids != expected {
        anyhow::bail!("Bucket '{}': expected {:?}, got {:?}", label, expected, ids);
    }
    Ok(())
}
