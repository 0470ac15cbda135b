//! CSV scanning using the csv crate
//!
//! RFC 4180 compliant parsing with support for quoted fields, escaped
//! quotes, and custom delimiters. The first record is the header and fixes
//! the expected column count; every later record is checked against it.
//!
//! Physical line tracking follows the line-oriented convention of the
//! buffer: a record occupies `1 + n` lines, where `n` is the number of raw
//! line terminators embedded in its field values. The csv crate silently
//! drops physical lines that are entirely empty, so the scanner keeps its
//! own line cursor against the split buffer and surfaces each dropped line
//! as an empty data record (zero fields).

use std::io::Cursor;

use super::model::{Finding, ScanResult};
use crate::config::ScanConfig;

/// Error type for a failed scan
#[derive(Debug)]
pub enum ScanError {
    /// The buffer has no lines at all, so no header/column count exists
    EmptyInput,
    /// The underlying CSV reader rejected the input
    Parse(csv::Error),
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::EmptyInput => write!(f, "buffer is empty, no header row to scan"),
            ScanError::Parse(e) => write!(f, "CSV parse error: {}", e),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::EmptyInput => None,
            ScanError::Parse(e) => Some(e),
        }
    }
}

impl From<csv::Error> for ScanError {
    fn from(e: csv::Error) -> Self {
        ScanError::Parse(e)
    }
}

/// Split text into physical lines, each retaining its terminator
///
/// A trailing terminator does not produce an extra empty line, so the
/// result length equals the buffer's own line count. Hosts that resolve
/// line numbers back to text should split the same way.
pub fn split_lines_with_terminators(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (i, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            lines.push(&text[start..=i]);
            start = i + 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Scan buffer text for structural anomalies
///
/// The parse is permissive: an unterminated quoted field at end of input
/// absorbs the remainder of the buffer as field content rather than
/// failing the scan. Fails only when the buffer has no lines at all.
pub fn scan(text: &str, config: &ScanConfig) -> Result<ScanResult, ScanError> {
    let lines = split_lines_with_terminators(text);
    if lines.is_empty() {
        return Err(ScanError::EmptyInput);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte())
        .quote(config.quote_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(Cursor::new(text.as_bytes()));
    let mut records = reader.records();

    // The header always claims line 1. A blank first line never reaches the
    // reader, but in the line-oriented convention it is an empty header with
    // zero columns.
    let (column_count, mut line_num) = if is_blank(lines[0]) {
        (0, 1)
    } else {
        let header = match records.next() {
            Some(record) => record?,
            None => return Err(ScanError::EmptyInput),
        };
        (header.len(), 1 + embedded_newlines(&header))
    };

    let mut findings = Vec::new();
    let mut sample_count = 0;

    for record in records {
        let record = record?;

        // Blank lines the reader dropped before this record count as empty
        // data records.
        while line_num < lines.len() && is_blank(lines[line_num]) {
            line_num += 1;
            sample_count += 1;
            check_field_count(&mut findings, 0, column_count, line_num);
        }

        let n_newlines = embedded_newlines(&record);
        // An unterminated quote at end of input absorbs the final
        // terminator into the field, so the cursor is capped at the last
        // physical line.
        line_num = (line_num + 1 + n_newlines).min(lines.len());
        sample_count += 1;

        if n_newlines > 0 {
            findings.push(Finding::newline_in_field(line_num - n_newlines, line_num));
        }
        check_field_count(&mut findings, record.len(), column_count, line_num);
    }

    // Trailing blank lines never surface as records either.
    while line_num < lines.len() {
        line_num += 1;
        sample_count += 1;
        check_field_count(&mut findings, 0, column_count, line_num);
    }

    tracing::debug!(
        columns = column_count,
        samples = sample_count,
        findings = findings.len(),
        "scan complete"
    );

    Ok(ScanResult {
        column_count,
        sample_count,
        findings,
    })
}

fn is_blank(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']).is_empty()
}

fn embedded_newlines(record: &csv::StringRecord) -> usize {
    record.iter().map(|field| field.matches('\n').count()).sum()
}

fn check_field_count(findings: &mut Vec<Finding>, fields: usize, columns: usize, line: usize) {
    if fields != columns {
        findings.push(Finding::field_count_mismatch(line, fields, columns));
    }
}
