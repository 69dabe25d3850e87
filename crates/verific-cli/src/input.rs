use anyhow::{Context, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use verific_types::Activity;

/// Read records from a JSON array or JSON Lines file; `-` reads stdin
pub fn read_records(path: &Path) -> Result<Vec<Value>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    let records = parse_records(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

pub fn parse_records(content: &str) -> Result<Vec<Value>> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("Invalid JSON array");
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid JSON on line {}", i + 1))
        })
        .collect()
}

pub fn read_activities(path: &Path) -> Result<Vec<Activity>> {
    read_records(path)?
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            serde_json::from_value(record).with_context(|| format!("Invalid activity at index {}", i))
        })
        .collect()
}
