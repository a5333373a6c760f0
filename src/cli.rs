// ⚙️ Command-line configuration
// Every option defaults to the fixed file names, so a bare run needs no arguments

use crate::output::DEFAULT_OUTPUT;
use crate::parser::DEFAULT_INPUT;
use crate::report::DEFAULT_TOP;
use crate::units::UnitTable;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Normalize an inventory item list into an importable CSV
#[derive(Debug, Parser)]
#[command(name = "inventory-cleanup")]
#[command(about = "Clean an inventory item list: classify rows and normalize units", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Item list to read
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Cleaned file to write
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// JSON unit table replacing the built-in one: [["alias", "unit"], ...]
    #[arg(long)]
    pub units: Option<PathBuf>,

    /// How many unmapped UOMs / import warnings to list
    #[arg(long, default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Unit table selected by `--units`, or the built-in one
    pub fn unit_table(&self) -> Result<UnitTable> {
        match &self.units {
            Some(path) => UnitTable::from_file(path),
            None => Ok(UnitTable::builtin()),
        }
    }

    /// Log filter used when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
