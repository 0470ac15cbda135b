//! CSV structural scanning
//!
//! Scans a buffer for structural anomalies without validating cell
//! contents:
//! - Quoted fields containing raw newlines (the row renders as several
//!   physical lines)
//! - Rows whose field count disagrees with the header
//!
//! # Architecture
//!
//! ```text
//! scan(text, config) -> ScanResult
//!                           ├── column_count (derived from the header)
//!                           ├── sample_count (data rows processed)
//!                           └── findings: Vec<Finding> (detection order)
//! ```
//!
//! The scanner is a pure pass over in-memory text; it performs no I/O and
//! holds no state between calls. Session state lives in [`crate::session`].

mod model;
mod scanner;

pub use model::{Finding, FindingKind, ScanResult, VISITED_MARKER};
pub use scanner::{scan, split_lines_with_terminators, ScanError};
