//! rowscan - CSV structural anomaly scanner
//!
//! This crate scans CSV-formatted text for structural anomalies (embedded
//! newlines parsed as field content, rows whose field count disagrees with
//! the header) and drives a navigable findings menu: jump to a flagged
//! line, export the flagged rows to a report, or clear and rescan.
//!
//! The scan/session core is host-agnostic; anything that can supply buffer
//! text and act on jumps implements [`Host`]. A terminal host backs the
//! bundled `rowscan` binary.

pub mod cli;
pub mod config;
pub mod host;
pub mod scan;
pub mod session;
pub mod terminal;
pub mod trace;

// Re-export commonly used types
pub use config::ScanConfig;
pub use host::Host;
pub use scan::{scan, Finding, FindingKind, ScanError, ScanResult};
pub use session::{MenuEntry, Session};
