// 📤 Cleaned Output - CleanedItem → CSV
// Header is always written, even when no item survived cleaning

use crate::cleaner::CleanedItem;
use anyhow::{Context, Result};
use std::io;
use std::path::Path;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "List of Items - CLEANED.csv";

/// Output columns, in order
pub const OUTPUT_HEADER: [&str; 5] = ["name", "sku", "category", "base_unit", "description"];

/// Write cleaned items to any writer (CRLF terminated, minimal quoting)
pub fn write_items<W: io::Write>(writer: W, items: &[CleanedItem]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(OUTPUT_HEADER)
        .context("Failed to write header row")?;

    for (idx, item) in items.iter().enumerate() {
        wtr.serialize(item)
            .with_context(|| format!("Failed to write item {} ({})", idx + 1, item.sku))?;
    }

    wtr.flush().context("Failed to flush cleaned output")?;
    Ok(())
}

/// Write the cleaned file, replacing any existing one
pub fn write_cleaned_items(path: &Path, items: &[CleanedItem]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    write_items(file, items)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;

    tracing::debug!(items = items.len(), path = %path.display(), "wrote cleaned items");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
