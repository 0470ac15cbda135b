//! Command-line argument parsing for the scanner
//!
//! Supports:
//! - Scanning a file and printing the findings menu
//! - Report mode (print the flagged source rows)
//! - Interactive mode (stdin-driven menu selection)
//! - Delimiter/quote overrides and a YAML config file

use clap::Parser;
use std::path::PathBuf;

use crate::config::ScanConfig;

/// Scan CSV files for structural anomalies
#[derive(Parser, Debug)]
#[command(name = "rowscan", version, about = "Scan CSV files for structural anomalies")]
pub struct CliArgs {
    /// CSV file to scan
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Field delimiter (overrides the config file)
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Quote character (overrides the config file)
    #[arg(short, long, value_name = "CHAR")]
    pub quote: Option<char>,

    /// Print the flagged source rows instead of the findings menu
    #[arg(short, long)]
    pub report: bool,

    /// Browse findings interactively (reads menu selections from stdin)
    #[arg(short, long, conflicts_with = "report")]
    pub interactive: bool,

    /// Do not copy finding messages to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Configuration file (YAML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the effective scan configuration: config file first, then
    /// command-line overrides
    pub fn scan_config(&self) -> ScanConfig {
        let mut config = match &self.config {
            Some(path) => ScanConfig::load(path),
            None => ScanConfig::default(),
        };

        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(quote) = self.quote {
            config.quote = quote;
        }
        if self.no_clipboard {
            config.copy_to_clipboard = false;
        }

        config
    }
}
