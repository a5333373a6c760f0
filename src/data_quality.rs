// ✅ Import Readiness - checks cleaned items against the resource importer's rules
//
// The importer rejects rows whose name, sku or base_unit are missing or too
// long, and any sku already taken. Findings are warnings only: the cleaned
// file is never altered.

use crate::cleaner::CleanedItem;
use std::collections::HashMap;

/// Importer column limits (characters)
pub const NAME_MAX_CHARS: usize = 255;
pub const SKU_MAX_CHARS: usize = 50;
pub const BASE_UNIT_MAX_CHARS: usize = 20;

// ============================================================================
// QUALITY ISSUE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    Missing,
    TooLong { max: usize, actual: usize },
    DuplicateSku { first_row: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityIssue {
    /// Line in the cleaned file (header is line 1)
    pub row: usize,
    pub field: String,
    pub kind: IssueKind,
}

impl QualityIssue {
    fn new(row: usize, field: &str, kind: IssueKind) -> Self {
        QualityIssue {
            row,
            field: field.to_string(),
            kind,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            IssueKind::Missing => format!("row {}: {} is empty", self.row, self.field),
            IssueKind::TooLong { max, actual } => format!(
                "row {}: {} is {} chars (max {})",
                self.row, self.field, actual, max
            ),
            IssueKind::DuplicateSku { first_row } => format!(
                "row {}: {} duplicates row {}",
                self.row, self.field, first_row
            ),
        }
    }
}

// ============================================================================
// CHECKS
// ============================================================================

fn check_length(row: usize, field: &str, value: &str, max: usize, issues: &mut Vec<QualityIssue>) {
    let actual = value.chars().count();
    if actual == 0 {
        issues.push(QualityIssue::new(row, field, IssueKind::Missing));
    } else if actual > max {
        issues.push(QualityIssue::new(row, field, IssueKind::TooLong { max, actual }));
    }
}

/// Check every item, in file order
pub fn check_import_readiness(items: &[CleanedItem]) -> Vec<QualityIssue> {
    let mut issues = Vec::new();
    let mut seen_skus: HashMap<&str, usize> = HashMap::new();

    for (idx, item) in items.iter().enumerate() {
        let row = idx + 2; // +2 because: 1-indexed + header row

        check_length(row, "name", &item.name, NAME_MAX_CHARS, &mut issues);
        check_length(row, "sku", &item.sku, SKU_MAX_CHARS, &mut issues);
        check_length(row, "base_unit", &item.base_unit, BASE_UNIT_MAX_CHARS, &mut issues);

        match seen_skus.get(item.sku.as_str()) {
            Some(&first_row) => {
                issues.push(QualityIssue::new(row, "sku", IssueKind::DuplicateSku { first_row }));
            }
            None => {
                seen_skus.insert(&item.sku, row);
            }
        }
    }

    issues
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_items_pass() {
        let items = vec![
            CleanedItem::new("Steel Rod", "SR-01", "piece"),
            CleanedItem::new("Cement", "CM-01", "kg"),
        ];

        assert!(check_import_readiness(&items).is_empty());
    }

    #[test]
    fn test_duplicate_sku() {
        let items = vec![
            CleanedItem::new("Steel Rod", "SR-01", "piece"),
            CleanedItem::new("Cement", "CM-01", "kg"),
            CleanedItem::new("Steel Rod 12mm", "SR-01", "piece"),
        ];

        let issues = check_import_readiness(&items);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].row, 4);
        assert_eq!(issues[0].kind, IssueKind::DuplicateSku { first_row: 2 });
        assert_eq!(issues[0].message(), "row 4: sku duplicates row 2");
    }

    #[test]
    fn test_too_long_fields() {
        let items = vec![CleanedItem::new(&"n".repeat(256), &"S".repeat(51), "piece")];

        let issues = check_import_readiness(&items);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "name");
        assert_eq!(issues[0].kind, IssueKind::TooLong { max: 255, actual: 256 });
        assert_eq!(issues[1].field, "sku");
        assert_eq!(issues[1].message(), "row 2: sku is 51 chars (max 50)");
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 255 two-byte characters is still within the limit
        let items = vec![CleanedItem::new(&"é".repeat(255), "X-1", "piece")];

        assert!(check_import_readiness(&items).is_empty());
    }

    #[test]
    fn test_missing_value() {
        let mut item = CleanedItem::new("Bolt", "B-1", "piece");
        item.base_unit.clear();

        let issues = check_import_readiness(&[item]);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Missing);
        assert_eq!(issues[0].message(), "row 2: base_unit is empty");
    }
}
