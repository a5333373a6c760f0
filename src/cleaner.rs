// 🧹 Row Classifier & Normalizer
// One pass over the item list: skip empties, collect category headers,
// drop services, map units for everything else

use crate::parser::InputRow;
use crate::units::{UnitResolution, UnitTable};
use serde::Serialize;
use std::collections::HashMap;

/// Category assigned to every cleaned item
pub const DEFAULT_CATEGORY: &str = "Others";

/// Resource type that marks a billable service line
pub const SERVICE_RESOURCE_TYPE: &str = "service";

// ============================================================================
// CORE TYPES
// ============================================================================

/// CleanedItem - one row of the cleaned output file
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanedItem {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub base_unit: String,
    pub description: String,
}

impl CleanedItem {
    pub fn new(name: &str, sku: &str, base_unit: &str) -> Self {
        CleanedItem {
            name: name.to_string(),
            sku: sku.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            base_unit: base_unit.to_string(),
            description: String::new(),
        }
    }
}

/// What a single input row turned into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome<'a> {
    /// No description
    Empty,

    /// Description present, but code or resource type missing
    CategoryHeader(String),

    /// Resource type is "service"
    Service,

    /// Valid item, with how its unit was resolved
    Item {
        item: CleanedItem,
        unit: UnitResolution<'a>,
    },
}

/// Per-run counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub category_headers: usize,
    pub skipped_service: usize,
    pub skipped_empty: usize,
}

impl RunStats {
    /// Every row lands in exactly one bucket
    pub fn is_balanced(&self) -> bool {
        self.total_rows
            == self.valid_rows + self.category_headers + self.skipped_service + self.skipped_empty
    }

    fn record(&mut self, outcome: &RowOutcome<'_>) {
        self.total_rows += 1;
        match outcome {
            RowOutcome::Empty => self.skipped_empty += 1,
            RowOutcome::CategoryHeader(_) => self.category_headers += 1,
            RowOutcome::Service => self.skipped_service += 1,
            RowOutcome::Item { .. } => self.valid_rows += 1,
        }
    }
}

/// Frequency of UOM strings that matched nothing in the unit table
///
/// Keyed by the trimmed, lower-cased UOM. First-seen order is kept so that
/// equal counts rank in the order they were met.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnmappedUnits {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
}

impl UnmappedUnits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, uom: &str) {
        let key = uom.trim().to_lowercase();
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.clone(), 1);
                self.first_seen.push(key);
            }
        }
    }

    pub fn count(&self, uom: &str) -> usize {
        self.counts.get(uom).copied().unwrap_or(0)
    }

    /// Number of distinct unmapped UOM strings
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// Up to `limit` entries, most frequent first
    pub fn top(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .first_seen
            .iter()
            .map(|uom| (uom.as_str(), self.counts[uom]))
            .collect();

        // Stable sort keeps first-seen order on ties
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

/// Everything one cleanup pass produces
#[derive(Debug, Clone, Default)]
pub struct CleanupResult {
    /// Valid items, in input order
    pub items: Vec<CleanedItem>,

    /// Descriptions of category header rows, in input order.
    /// Not written to the cleaned file.
    pub category_headers: Vec<String>,

    pub stats: RunStats,
    pub unmapped: UnmappedUnits,
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Classify a single row. Rules are checked in order, first match wins:
/// empty description, missing code/resource type, service, valid item.
pub fn classify_row<'a>(row: &InputRow, units: &'a UnitTable) -> RowOutcome<'a> {
    let description = row.description.trim();
    let code = row.code.trim();
    let resource_type = row.resource_type.trim();

    if description.is_empty() {
        return RowOutcome::Empty;
    }

    if code.is_empty() || resource_type.is_empty() {
        return RowOutcome::CategoryHeader(description.to_string());
    }

    if resource_type.to_lowercase() == SERVICE_RESOURCE_TYPE {
        return RowOutcome::Service;
    }

    let unit = units.resolve(&row.uom);
    RowOutcome::Item {
        item: CleanedItem::new(description, code, unit.unit()),
        unit,
    }
}

/// Run the whole pass. Pure: all bookkeeping comes back in the result.
pub fn clean_rows(rows: &[InputRow], units: &UnitTable) -> CleanupResult {
    let mut result = CleanupResult::default();

    for (idx, row) in rows.iter().enumerate() {
        let outcome = classify_row(row, units);
        result.stats.record(&outcome);

        match outcome {
            RowOutcome::Empty => {
                tracing::trace!(row = idx + 1, "skipped: empty description");
            }
            RowOutcome::CategoryHeader(description) => {
                tracing::debug!(row = idx + 1, header = %description, "category header");
                result.category_headers.push(description);
            }
            RowOutcome::Service => {
                tracing::trace!(row = idx + 1, sku = %row.code.trim(), "skipped: service");
            }
            RowOutcome::Item { item, unit } => {
                match &unit {
                    UnitResolution::Unmapped => {
                        tracing::debug!(row = idx + 1, uom = %row.uom.trim(), "unmapped UOM, defaulted");
                        result.unmapped.record(&row.uom);
                    }
                    UnitResolution::Substring { alias, unit } => {
                        tracing::trace!(row = idx + 1, uom = %row.uom.trim(), alias, unit, "UOM matched by substring");
                    }
                    UnitResolution::Blank | UnitResolution::Exact(_) => {}
                }
                result.items.push(item);
            }
        }
    }

    debug_assert!(result.stats.is_balanced());
    result
}

// ============================================================================
// TESTS
// ============================================================================
