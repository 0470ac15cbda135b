//! Terminal host for standalone use
//!
//! Implements [`Host`] over a file's text so the scanner runs without an
//! editor: jumps print the target line, reports go to stdout, and the
//! clipboard uses the system clipboard when one is available.

use crate::host::Host;
use crate::scan::split_lines_with_terminators;

/// A report document emitted by the export action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub text: String,
}

/// Host implementation backed by an in-memory copy of a file
pub struct FileHost {
    text: String,
    reports: Vec<Report>,
}

impl FileHost {
    pub fn new(text: String) -> Self {
        Self {
            text,
            reports: Vec::new(),
        }
    }

    /// Reports emitted so far, oldest first
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }
}

impl Host for FileHost {
    fn buffer_text(&self) -> String {
        self.text.clone()
    }

    fn goto_line(&mut self, line: usize) {
        let lines = split_lines_with_terminators(&self.text);
        match lines.get(line.wrapping_sub(1)) {
            Some(content) => {
                println!("{:>6} | {}", line, content.trim_end_matches(['\r', '\n']))
            }
            None => tracing::warn!(line, "goto target past end of buffer"),
        }
    }

    fn line_range_text(&self, line_start: usize, line_end: usize) -> String {
        let lines = split_lines_with_terminators(&self.text);
        let from = line_start.saturating_sub(1).min(lines.len());
        let to = line_end.min(lines.len());

        let mut text: String = lines[from..to].concat();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        text
    }

    fn create_report(&mut self, name: &str, text: &str) {
        println!("=== {} ===", name);
        print!("{}", text);
        self.reports.push(Report {
            name: name.to_string(),
            text: text.to_string(),
        });
    }

    fn set_clipboard(&mut self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(text.to_string()) {
                    tracing::warn!("Failed to set clipboard: {}", e);
                }
            }
            Err(e) => tracing::warn!("Clipboard unavailable: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_range_single_line() {
        let host = FileHost::new("a,b,c\n1,2,3\n4,5\n".to_string());
        assert_eq!(host.line_range_text(3, 3), "4,5");
    }

    #[test]
    fn test_line_range_spanning_lines() {
        let host = FileHost::new("a,b\n1,\"x\ny\"\n".to_string());
        assert_eq!(host.line_range_text(2, 3), "1,\"x\ny\"");
    }

    #[test]
    fn test_line_range_clamps_past_end() {
        let host = FileHost::new("a,b\n1,2\n".to_string());
        assert_eq!(host.line_range_text(2, 9), "1,2");
    }

    #[test]
    fn test_report_is_recorded() {
        let mut host = FileHost::new(String::new());
        host.create_report("CSV Findings", "4,5\n");
        assert_eq!(
            host.reports(),
            &[Report {
                name: "CSV Findings".to_string(),
                text: "4,5\n".to_string()
            }]
        );
    }
}
