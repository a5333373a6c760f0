use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use inventory_cleanup::{render_summary, render_total_rows, run_file, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let units = cli.unit_table()?;
    tracing::debug!(aliases = units.len(), "unit table ready");

    let outcome = run_file(&cli.input, &cli.output, &units, |total| {
        println!("{}", render_total_rows(total));
    })?;

    println!(
        "{}",
        render_summary(&outcome.result, &outcome.issues, &cli.output, cli.top)
    );

    Ok(())
}
