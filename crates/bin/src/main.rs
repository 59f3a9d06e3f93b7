//! Shelf CLI binary.
//!
//! Thin front-end over the feature pipeline: validates arguments up
//! front, loads the reference CSVs, and writes the two output tables.

use clap::Parser;
use shelf::{DateRange, SalesFeaturePipeline};
use shelf_data::{CsvLoader, dates};
use shelf_metrics::wmape;
use shelf_output::{ExportFormat, Exporter, feature_exports, wmape_exports};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Hierarchical sales features and WMAPE scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Start of the date range (inclusive), YYYY-MM-DD
    #[arg(long, default_value = "2021-01-08")]
    min_date: String,

    /// End of the date range (inclusive), YYYY-MM-DD
    #[arg(long, default_value = "2021-05-30")]
    max_date: String,

    /// Row limit for both output tables
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Directory holding brand.csv, product.csv, store.csv, sales.csv
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory the output tables are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Output format: csv or json
    #[arg(long, default_value = "csv")]
    format: String,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Every argument is validated before any table is loaded or any
    // aggregate computed.
    let min_date = dates::parse_date(&cli.min_date)?;
    let max_date = dates::parse_date(&cli.max_date)?;
    let range = DateRange::new(min_date, max_date)?;
    let format = parse_format(&cli.format)?;

    let tables = CsvLoader::new(&cli.data_dir).load_tables()?;
    let mut pipeline = SalesFeaturePipeline::new(tables);

    let dropped = pipeline.features()?.dropped_sales;
    if dropped > 0 {
        eprintln!("Warning: {} sales rows dropped (no resolvable brand)", dropped);
    }

    let features = pipeline.filtered(&range)?.head(Some(cli.top));
    let feature_rows = feature_exports(&features)?;
    let features_path = cli
        .out_dir
        .join(format!("features.{}", format.extension()));
    feature_rows.export_to_file(&features_path, format)?;
    println!(
        "Wrote {} feature rows ({}) to {}",
        feature_rows.len(),
        range,
        features_path.display()
    );

    let scored = pipeline.wmape(&range)?;
    let worst = wmape::top(scored, cli.top)?;
    let wmape_rows = wmape_exports(&worst)?;
    let wmape_path = cli.out_dir.join(format!("wmapes.{}", format.extension()));
    wmape_rows.export_to_file(&wmape_path, format)?;
    println!(
        "Wrote {} WMAPE rows to {}",
        wmape_rows.len(),
        wmape_path.display()
    );

    Ok(())
}

fn parse_format(s: &str) -> Result<ExportFormat, String> {
    match s {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        other => Err(format!(
            "unsupported format '{}', expected csv or json",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing() {
        assert_eq!(parse_format("csv").unwrap(), ExportFormat::Csv);
        assert_eq!(parse_format("json").unwrap(), ExportFormat::Json);
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn defaults_match_the_documented_range() {
        use clap::CommandFactory;
        Cli::command().debug_assert();

        let cli = Cli::parse_from(["shelf"]);
        assert_eq!(cli.min_date, "2021-01-08");
        assert_eq!(cli.max_date, "2021-05-30");
        assert_eq!(cli.top, 5);
    }

    #[test]
    fn non_integer_top_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from(["shelf", "--top", "five"]);
        assert!(result.is_err());
    }
}
