// 📊 Console Report
// Summary printed after a cleanup run: counters, top unmapped UOMs, import warnings

use crate::cleaner::CleanupResult;
use crate::data_quality::QualityIssue;
use std::path::Path;

/// How many unmapped UOMs / warnings are listed by default
pub const DEFAULT_TOP: usize = 15;

const BANNER_WIDTH: usize = 60;

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// First line, printed before processing starts
pub fn render_total_rows(total: usize) -> String {
    format!("Total rows: {}", total)
}

/// Summary block printed after the cleaned file is written
pub fn render_summary(
    result: &CleanupResult,
    issues: &[QualityIssue],
    output_path: &Path,
    top: usize,
) -> String {
    let stats = &result.stats;
    let mut lines: Vec<String> = vec![
        String::new(),
        banner(),
        "✅ CSV CLEANUP COMPLETE".to_string(),
        banner(),
        format!("Valid items:            {}", stats.valid_rows),
        format!("Category headers:       {}", stats.category_headers),
        format!("Service items skipped:  {}", stats.skipped_service),
        format!("Empty rows skipped:     {}", stats.skipped_empty),
        String::new(),
    ];

    if !result.unmapped.is_empty() {
        lines.push("Unmapped UOMs (defaulted to 'piece'):".to_string());
        for (uom, count) in result.unmapped.top(top) {
            lines.push(format!("  '{}': {}", uom, count));
        }
        lines.push(String::new());
    }

    if !issues.is_empty() {
        lines.push(format!("⚠️  Import warnings: {}", issues.len()));
        for issue in issues.iter().take(top) {
            lines.push(format!("  {}", issue.message()));
        }
        if issues.len() > top {
            lines.push(format!("  ... and {} more", issues.len() - top));
        }
        lines.push(String::new());
    }

    lines.push(format!("📁 Output: {}", output_path.display()));
    lines.push(banner());

    lines.join("\n")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::clean_rows;
    use crate::data_quality::check_import_readiness;
    use crate::parser::InputRow;
    use crate::units::UnitTable;

    fn sample() -> CleanupResult {
        clean_rows(
            &[
                InputRow::new("Steel Rod", "SR-01", "Pcs.", "Material"),
                InputRow::new("Cement", "", "kg", ""),
                InputRow::new("Site Survey", "SV-1", "", "Service"),
                InputRow::new("", "", "", ""),
                InputRow::new("Widget", "W-1", "XYZ", "Material"),
                InputRow::new("Gadget", "W-2", "xyz", "Material"),
                InputRow::new("Thing", "W-3", "qq", "Material"),
            ],
            &UnitTable::builtin(),
        )
    }

    #[test]
    fn test_total_rows_line() {
        assert_eq!(render_total_rows(42), "Total rows: 42");
    }

    #[test]
    fn test_summary_counters_and_unmapped() {
        let result = sample();
        let text = render_summary(&result, &[], Path::new("out.csv"), DEFAULT_TOP);

        assert!(text.contains("Valid items:            4\n"));
        assert!(text.contains("Category headers:       1\n"));
        assert!(text.contains("Service items skipped:  1\n"));
        assert!(text.contains("Empty rows skipped:     1\n"));
        assert!(text.contains("Unmapped UOMs (defaulted to 'piece'):\n  'xyz': 2\n  'qq': 1\n"));
        assert!(text.contains("📁 Output: out.csv\n"));
        assert!(text.ends_with(&"=".repeat(60)));
        assert!(!text.contains("Import warnings"));
    }

    #[test]
    fn test_unmapped_list_is_capped() {
        let result = sample();
        let text = render_summary(&result, &[], Path::new("out.csv"), 1);

        assert!(text.contains("  'xyz': 2\n"));
        assert!(!text.contains("'qq'"));
    }

    #[test]
    fn test_no_unmapped_section_when_all_mapped() {
        let result = clean_rows(
            &[InputRow::new("Bolt", "B-1", "nos", "Material")],
            &UnitTable::builtin(),
        );
        let text = render_summary(&result, &[], Path::new("out.csv"), DEFAULT_TOP);

        assert!(!text.contains("Unmapped UOMs"));
    }

    #[test]
    fn test_import_warnings_section() {
        let result = clean_rows(
            &[
                InputRow::new("Bolt", "B-1", "nos", "Material"),
                InputRow::new("Bolt M8", "B-1", "nos", "Material"),
            ],
            &UnitTable::builtin(),
        );
        let issues = check_import_readiness(&result.items);
        let text = render_summary(&result, &issues, Path::new("out.csv"), DEFAULT_TOP);

        assert!(text.contains("⚠️  Import warnings: 1\n  row 3: sku duplicates row 2\n"));
    }
}
