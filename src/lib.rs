// Inventory Cleanup - Core Library
// Exposes the cleanup pipeline for the CLI and tests

pub mod units;        // Unit mapping table + resolution
pub mod parser;       // Item list → InputRow
pub mod cleaner;      // Row classification + normalization
pub mod output;       // CleanedItem → CSV
pub mod data_quality; // Import readiness warnings
pub mod report;       // Console summary
pub mod cli;          // Command-line options

use anyhow::Result;
use std::path::Path;

// Re-export commonly used types
pub use units::{UnitResolution, UnitTable, BUILTIN_UNITS, DEFAULT_UNIT};
pub use parser::{load_rows, InputRow, DEFAULT_INPUT};
pub use cleaner::{
    classify_row, clean_rows, CleanedItem, CleanupResult, RowOutcome, RunStats, UnmappedUnits,
    DEFAULT_CATEGORY,
};
pub use output::{write_cleaned_items, write_items, DEFAULT_OUTPUT, OUTPUT_HEADER};
pub use data_quality::{check_import_readiness, IssueKind, QualityIssue};
pub use report::{render_summary, render_total_rows, DEFAULT_TOP};
pub use cli::Cli;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result of a full file-to-file run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub result: CleanupResult,
    pub issues: Vec<QualityIssue>,
}

/// Load → clean → write. `on_loaded` sees the row count before any row is processed.
pub fn run_file<F>(input: &Path, output: &Path, units: &UnitTable, on_loaded: F) -> Result<RunOutcome>
where
    F: FnOnce(usize),
{
    let rows = load_rows(input)?;
    on_loaded(rows.len());

    let result = clean_rows(&rows, units);
    write_cleaned_items(output, &result.items)?;

    let issues = check_import_readiness(&result.items);
    if !issues.is_empty() {
        tracing::warn!(count = issues.len(), "cleaned items would be rejected by the importer");
    }

    Ok(RunOutcome { result, issues })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_run_file_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join(DEFAULT_INPUT);
        let output = dir.path().join(DEFAULT_OUTPUT);

        std::fs::write(
            &input,
            "No.,Description,Code,UOM,Resource Type,Rate\n\
             1,Steel Rod,SR-01,Pcs.,Material,12.5\n\
             2,Cement,,kg,,\n\
             3,Site Survey,SV-1,,Service,100\n\
             4,,,,,\n\
             5,Widget,W-1,XYZ,Material,1\n\
             6,\" Copper Wire \",CW-1,mtrs,Material,3\n",
        )
        .unwrap();

        let seen = Cell::new(0);
        let outcome = run_file(&input, &output, &UnitTable::builtin(), |n| seen.set(n)).unwrap();

        assert_eq!(seen.get(), 6);

        let stats = &outcome.result.stats;
        assert_eq!(stats.total_rows, 6);
        assert_eq!(stats.valid_rows, 3);
        assert_eq!(stats.category_headers, 1);
        assert_eq!(stats.skipped_service, 1);
        assert_eq!(stats.skipped_empty, 1);
        assert!(stats.is_balanced());
        assert_eq!(outcome.result.category_headers, vec!["Cement"]);
        assert_eq!(outcome.result.unmapped.count("xyz"), 1);
        assert!(outcome.issues.is_empty());

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            written,
            "name,sku,category,base_unit,description\r\n\
             Steel Rod,SR-01,Others,piece,\r\n\
             Widget,W-1,Others,piece,\r\n\
             Copper Wire,CW-1,Others,m,\r\n"
        );
    }

    #[test]
    fn test_run_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join(DEFAULT_OUTPUT);

        let result = run_file(
            &dir.path().join("absent.csv"),
            &output,
            &UnitTable::builtin(),
            |_| {},
        );

        assert!(result.is_err());
        assert!(!output.exists());
    }
}
