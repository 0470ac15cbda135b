//! Scan result types
//!
//! Findings carry 1-based physical line numbers so that jumps and reports
//! line up with the buffer's own numbering, independent of how many CSV
//! records those lines encode.

/// Suffix appended to a finding's menu label once the user has jumped to it.
pub const VISITED_MARKER: &str = " [seen]";

/// The kind of structural anomaly a finding describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    /// A quoted field contained raw line terminators, so one record spans
    /// several physical lines
    NewlineInField,
    /// A row's field count disagrees with the header's column count
    FieldCountMismatch { fields: usize, columns: usize },
}

/// One structural anomaly detected during a scan
///
/// `line_start..=line_end` is the inclusive physical line span the anomaly
/// occupies. Field-count mismatches are single-line (`line_start ==
/// line_end`); newline findings span every line the multi-line field
/// occupied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub kind: FindingKind,
    /// First physical line of the anomaly (1-based, inclusive)
    pub line_start: usize,
    /// Last physical line of the anomaly (1-based, inclusive)
    pub line_end: usize,
    /// Whether the user has navigated to this finding via the menu
    pub visited: bool,
}

impl Finding {
    /// Create a newline-in-field finding spanning the given lines
    pub fn newline_in_field(line_start: usize, line_end: usize) -> Self {
        Self {
            kind: FindingKind::NewlineInField,
            line_start,
            line_end,
            visited: false,
        }
    }

    /// Create a field-count mismatch finding on a single line
    pub fn field_count_mismatch(line: usize, fields: usize, columns: usize) -> Self {
        Self {
            kind: FindingKind::FieldCountMismatch { fields, columns },
            line_start: line,
            line_end: line,
            visited: false,
        }
    }

    /// Human-readable message for this finding
    ///
    /// The templates are a compatibility surface: external tooling greps
    /// for these exact strings, so they must not drift.
    pub fn display_text(&self) -> String {
        match self.kind {
            FindingKind::NewlineInField => format!(
                "[Line {}-{}] Warning: newline was parsed as text on lines",
                self.line_start, self.line_end
            ),
            FindingKind::FieldCountMismatch { fields, columns } => format!(
                "[Line {}] Error: Number of fields ({}) don't match columns ({})",
                self.line_start, fields, columns
            ),
        }
    }

    /// Menu label: the display text, plus the visited marker once the user
    /// has jumped to this finding
    pub fn menu_label(&self) -> String {
        if self.visited {
            format!("{}{}", self.display_text(), VISITED_MARKER)
        } else {
            self.display_text()
        }
    }
}

/// The outcome of one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Number of fields in the header row
    pub column_count: usize,
    /// Number of data rows processed (header excluded), flagged or not
    pub sample_count: usize,
    /// Findings in detection order, top of buffer first; never reordered
    pub findings: Vec<Finding>,
}

impl ScanResult {
    /// Check whether the scan flagged anything
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_format() {
        let f = Finding::field_count_mismatch(3, 2, 3);
        assert_eq!(
            f.display_text(),
            "[Line 3] Error: Number of fields (2) don't match columns (3)"
        );
    }

    #[test]
    fn test_newline_message_format() {
        let f = Finding::newline_in_field(2, 3);
        assert_eq!(
            f.display_text(),
            "[Line 2-3] Warning: newline was parsed as text on lines"
        );
    }

    #[test]
    fn test_menu_label_reflects_visited() {
        let mut f = Finding::newline_in_field(2, 3);
        assert_eq!(f.menu_label(), f.display_text());

        f.visited = true;
        assert_eq!(f.menu_label(), format!("{} [seen]", f.display_text()));
    }
}
