//! # peaktable-cli
//!
//! Command-line interface for peaktable: collects per-compound instrument
//! sheets into one aggregates sheet plus a sheet of ratio formulas.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use logging::{LogArgs, LogSettings};
use peaktable_core::{Pipeline, RtNaming, TransposeConfig};
use peaktable_sheet::{Book, XlsxWriteOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// peaktable - transpose per-compound instrument spreadsheets
#[derive(Debug, Parser)]
#[command(name = "peaktable")]
#[command(author, version, about = "Aggregate per-compound instrument sheets", long_about = None)]
struct Cli {
    /// The input spreadsheet to parse
    #[arg(short = 'f', long = "filename", value_name = "FILE", value_parser = existing_file)]
    filename: PathBuf,

    /// The spreadsheet to write results into; without it the derived tables are logged
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Name of the sheet holding the normalization compound [default: Nor]
    #[arg(short = 'l', long = "normalization-key", visible_alias = "nor-leucine-key")]
    normalization_key: Option<String>,

    /// Qualify retention-time columns per sample (`<sample>_RT`)
    #[arg(long = "per-sample-rt")]
    per_sample_rt: bool,

    /// JSON file with transposition settings
    #[arg(short = 'c', long = "config", value_name = "FILE", value_parser = existing_file)]
    config: Option<PathBuf>,

    #[command(flatten)]
    logging: LogArgs,
}

/// Accept only paths to existing files.
fn existing_file(value: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("File {value} does not exist or is not a file"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    LogSettings::from_args(&cli.logging).init()?;
    debug!("Args: {:?}", cli);

    run(&cli)
}

/// Build the run configuration: config file first, flags on top.
fn build_config(cli: &Cli) -> Result<TransposeConfig> {
    let mut config = match &cli.config {
        Some(path) => TransposeConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => TransposeConfig::default(),
    };
    if let Some(key) = &cli.normalization_key {
        config = config.with_normalization_key(key);
    }
    if cli.per_sample_rt {
        config = config.with_rt_naming(RtNaming::PerSample);
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let pipeline = Pipeline::new(build_config(cli)?)?;
    debug!("Config: {:?}", pipeline.config());

    let input = Book::from_spreadsheet(&cli.filename)
        .with_context(|| format!("Failed to read spreadsheet: {}", cli.filename.display()))?;
    debug!("Read {} sheets from {}", input.sheet_count(), cli.filename.display());

    let transposition = pipeline.transpose(&input)?;

    match &cli.output {
        Some(path) => save(&pipeline, &input, transposition, path),
        None => {
            info!(
                "{}:\n{}",
                pipeline.config().aggregates_sheet,
                transposition.aggregates.to_csv_string()?
            );
            info!(
                "{}:\n{}",
                pipeline.config().formulas_sheet,
                transposition.formulas.to_csv_string()?
            );
            Ok(())
        }
    }
}

fn save(
    pipeline: &Pipeline,
    input: &Book,
    transposition: peaktable_core::Transposition,
    path: &Path,
) -> Result<()> {
    let output = pipeline.output_book(input, transposition)?;
    info!("Saving new workbook to {}", path.display());
    let options = XlsxWriteOptions::default().with_number_format(&pipeline.config().number_format);
    output
        .save_as_xlsx(path, &options)
        .with_context(|| format!("Failed to write spreadsheet: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use peaktable_sheet::{CellValue, Sheet};
    use tempfile::tempdir;

    fn compound_sheet(area: f64) -> Sheet {
        Sheet::from_rows(vec![
            vec![CellValue::from("Compound")],
            vec!["Filename".into(), "Area".into(), "RT".into()],
            vec!["S1".into(), CellValue::Float(area), CellValue::Float(2.5)],
        ])
    }

    fn write_input(dir: &Path) -> PathBuf {
        let path = dir.join("input.xlsx");
        let mut book = Book::new();
        book.add_sheet("Gly", compound_sheet(40.0)).unwrap();
        book.add_sheet("Nor", compound_sheet(8.0)).unwrap();
        book.save_as_xlsx(&path, &XlsxWriteOptions::default()).unwrap();
        path
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("peaktable").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_missing_input_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["peaktable", "-f", "/no/such/file.xlsx"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_nor_leucine_alias() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let cli = parse(&["-f", input.to_str().unwrap(), "--nor-leucine-key", "Gly"]);
        assert_eq!(build_config(&cli).unwrap().normalization_key, "Gly");
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"normalization_key": "IS", "aggregates_sheet": "Areas"}"#)
            .unwrap();

        let cli = parse(&[
            "-f",
            input.to_str().unwrap(),
            "-c",
            config_path.to_str().unwrap(),
            "-l",
            "Nor",
            "--per-sample-rt",
        ]);
        let config = build_config(&cli).unwrap();
        assert_eq!(config.normalization_key, "Nor");
        assert_eq!(config.aggregates_sheet, "Areas");
        assert_eq!(config.rt_naming, RtNaming::PerSample);
    }

    #[test]
    fn test_run_writes_output_workbook() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let output = dir.path().join("out.xlsx");

        let cli = parse(&["-f", input.to_str().unwrap(), "-o", output.to_str().unwrap()]);
        run(&cli).unwrap();

        let written = Book::from_spreadsheet(&output).unwrap();
        assert_eq!(
            written.sheet_names(),
            vec!["Aggregates", "Aggregates_formulas", "Gly", "Nor"]
        );
    }

    #[test]
    fn test_run_without_output_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());

        let cli = parse(&["-f", input.to_str().unwrap()]);
        run(&cli).unwrap();

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_run_fails_on_unknown_normalization_key() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path());
        let output = dir.path().join("out.xlsx");

        let cli = parse(&[
            "-f",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-l",
            "Leu",
        ]);
        assert!(run(&cli).is_err());
        assert!(!output.exists());
    }
}
