// 📏 Unit Mapping - UOM alias → canonical unit
// Ordered lookup table: exact match first, then first substring match in table order

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Unit used whenever the UOM is blank or nothing in the table matches
pub const DEFAULT_UNIT: &str = "piece";

/// Built-in alias table. Order matters: the substring scan takes the FIRST hit.
///
/// "lot" and "drum" collapse to piece, and liter/liters, piece/pieces stay
/// distinct canonical units.
pub const BUILTIN_UNITS: &[(&str, &str)] = &[
    ("nos.", "piece"),
    ("nos", "piece"),
    ("no.", "piece"),
    ("no", "piece"),
    ("pcs", "piece"),
    ("pcs.", "piece"),
    ("pkt", "piece"),
    ("pkt.", "piece"),
    ("sheet", "sheet"),
    ("sheets", "sheet"),
    ("gallon", "gallon"),
    ("gal", "gallon"),
    ("pair", "pair"),
    ("roll", "roll"),
    ("ctn", "carton"),
    ("carton", "carton"),
    ("box", "box"),
    ("kg", "kg"),
    ("g", "g"),
    ("mg", "mg"),
    ("ton", "ton"),
    ("ltr", "liter"),
    ("liter", "liter"),
    ("liters", "liters"),
    ("ml", "ml"),
    ("piece", "piece"),
    ("pieces", "pieces"),
    ("unit", "unit"),
    ("dozen", "dozen"),
    ("pallet", "pallet"),
    ("bag", "bag"),
    ("sack", "sack"),
    ("bundle", "bundle"),
    ("set", "set"),
    ("lot", "piece"),
    ("lm", "m"),
    ("mtrs", "m"),
    ("mtr", "m"),
    ("m", "m"),
    ("cm", "cm"),
    ("mm", "mm"),
    ("ft", "ft"),
    ("inch", "inch"),
    ("in", "inch"),
    ("sqm", "sqm"),
    ("sqft", "sqft"),
    ("drum", "piece"),
    ("panel", "panel"),
    ("tile", "tile"),
];

// ============================================================================
// RESOLUTION RESULT
// ============================================================================

/// How a UOM string was resolved against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitResolution<'a> {
    /// Empty UOM, defaulted
    Blank,

    /// Alias matched exactly
    Exact(&'a str),

    /// First alias (in table order) contained in the UOM
    Substring { alias: &'a str, unit: &'a str },

    /// Nothing matched, defaulted
    Unmapped,
}

impl<'a> UnitResolution<'a> {
    /// Canonical unit to write to `base_unit`
    pub fn unit(&self) -> &'a str {
        match self {
            UnitResolution::Blank | UnitResolution::Unmapped => DEFAULT_UNIT,
            UnitResolution::Exact(unit) => *unit,
            UnitResolution::Substring { unit, .. } => *unit,
        }
    }

    pub fn is_unmapped(&self) -> bool {
        matches!(self, UnitResolution::Unmapped)
    }
}

// ============================================================================
// UNIT TABLE
// ============================================================================

#[derive(Debug, Clone)]
pub struct UnitTable {
    /// (alias, canonical) in scan order; aliases are lowercase
    entries: Vec<(String, String)>,

    /// alias → position in `entries`
    exact: HashMap<String, usize>,
}

impl UnitTable {
    /// The built-in table
    pub fn builtin() -> Self {
        let pairs = BUILTIN_UNITS
            .iter()
            .map(|(alias, unit)| (alias.to_string(), unit.to_string()))
            .collect();

        // Built-in aliases are lowercase, non-empty and unique
        UnitTable::build(pairs)
    }

    /// Build a table from (alias, canonical) pairs, keeping their order.
    ///
    /// Aliases are trimmed and lower-cased. An empty alias would be a substring
    /// of every UOM, so it is rejected, as are duplicates.
    pub fn from_pairs<I, A, U>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, U)>,
        A: AsRef<str>,
        U: AsRef<str>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();

        for (position, (alias, unit)) in pairs.into_iter().enumerate() {
            let alias = alias.as_ref().trim().to_lowercase();
            let unit = unit.as_ref().trim().to_string();

            if alias.is_empty() {
                bail!("Unit alias #{} is empty", position + 1);
            }
            if unit.is_empty() {
                bail!("Unit alias '{}' maps to an empty unit", alias);
            }
            if entries.iter().any(|(existing, _)| *existing == alias) {
                bail!("Unit alias '{}' is defined more than once", alias);
            }

            entries.push((alias, unit));
        }

        if entries.is_empty() {
            bail!("Unit table has no entries");
        }

        Ok(UnitTable::build(entries))
    }

    /// Load a replacement table from a JSON file: `[["alias", "unit"], ...]`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read unit table: {:?}", path.as_ref()))?;

        let pairs: Vec<(String, String)> =
            serde_json::from_str(&content).context("Failed to parse unit table JSON")?;

        UnitTable::from_pairs(pairs)
            .with_context(|| format!("Invalid unit table: {:?}", path.as_ref()))
    }

    fn build(entries: Vec<(String, String)>) -> Self {
        let exact = entries
            .iter()
            .enumerate()
            .map(|(idx, (alias, _))| (alias.clone(), idx))
            .collect();

        UnitTable { entries, exact }
    }

    /// Resolve a UOM string. Input is trimmed and lower-cased here, so callers
    /// may pass the raw cell value.
    pub fn resolve(&self, uom: &str) -> UnitResolution<'_> {
        let uom = uom.trim().to_lowercase();

        if uom.is_empty() {
            return UnitResolution::Blank;
        }

        if let Some(&idx) = self.exact.get(&uom) {
            return UnitResolution::Exact(&self.entries[idx].1);
        }

        // First hit wins, not the longest
        self.entries
            .iter()
            .find(|(alias, _)| uom.contains(alias.as_str()))
            .map(|(alias, unit)| UnitResolution::Substring { alias, unit })
            .unwrap_or(UnitResolution::Unmapped)
    }

    /// Number of aliases
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct canonical units, in first-appearance order
    pub fn canonical_units(&self) -> Vec<&str> {
        let mut units: Vec<&str> = Vec::new();
        for (_, unit) in &self.entries {
            if !units.contains(&unit.as_str()) {
                units.push(unit);
            }
        }
        units
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, u)| (a.as_str(), u.as_str()))
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// TESTS
// ============================================================================
