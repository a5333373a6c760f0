// 📥 Item List Parser - CSV → InputRow
// Header-driven: columns located by name, extra columns ignored, missing columns read as empty

use anyhow::{Context, Result};
use std::path::Path;

/// Default input file name
pub const DEFAULT_INPUT: &str = "List of Items.csv";

/// InputRow - one line of the item list, exactly as read
///
/// Fields are NOT trimmed here; the cleaner owns normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    pub description: String,
    pub code: String,
    pub uom: String,
    pub resource_type: String,
}

impl InputRow {
    pub fn new(description: &str, code: &str, uom: &str, resource_type: &str) -> Self {
        InputRow {
            description: description.to_string(),
            code: code.to_string(),
            uom: uom.to_string(),
            resource_type: resource_type.to_string(),
        }
    }
}

/// Column positions resolved from the header line
#[derive(Debug, Clone, Copy, Default)]
struct ColumnMap {
    description: Option<usize>,
    code: Option<usize>,
    uom: Option<usize>,
    resource_type: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        // Duplicate header names: the last one wins
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, header)| *header == name)
                .map(|(idx, _)| idx)
                .last()
        };

        ColumnMap {
            description: find("Description"),
            code: find("Code"),
            uom: find("UOM"),
            resource_type: find("Resource Type"),
        }
    }

    fn read(&self, record: &csv::StringRecord) -> InputRow {
        let cell = |column: Option<usize>| {
            column
                .and_then(|idx| record.get(idx))
                .unwrap_or("")
                .to_string()
        };

        InputRow {
            description: cell(self.description),
            code: cell(self.code),
            uom: cell(self.uom),
            resource_type: cell(self.resource_type),
        }
    }
}

/// Load every row of the item list into memory
///
/// Ragged lines are accepted: a short line leaves its trailing columns empty,
/// a long line has its extra cells dropped. Invalid UTF-8 or an unreadable
/// file is fatal.
pub fn load_rows(csv_path: &Path) -> Result<Vec<InputRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open file: {}", csv_path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header line of {}", csv_path.display()))?
        .clone();
    let columns = ColumnMap::from_headers(&headers);

    if columns.description.is_none() {
        tracing::warn!(path = %csv_path.display(), "no 'Description' column, every row will be skipped");
    }

    let mut rows = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        let record = result.with_context(|| {
            format!(
                "Failed to parse CSV line {} in {}",
                line_num + 2, // +2 because: 1-indexed + header row
                csv_path.display()
            )
        })?;
        rows.push(columns.read(&record));
    }

    tracing::debug!(rows = rows.len(), path = %csv_path.display(), "loaded item list");

    Ok(rows)
}

// ============================================================================
// TESTS
// ============================================================================
