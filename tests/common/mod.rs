//! Shared test helpers
//!
//! `RecordingHost` is a scripted host: it serves a fixed buffer and records
//! every effect the session asks for, so tests assert on outputs instead of
//! UI behavior.

use rowscan::scan::split_lines_with_terminators;
use rowscan::Host;

pub struct RecordingHost {
    pub text: String,
    pub goto_calls: Vec<usize>,
    pub reports: Vec<(String, String)>,
    pub clipboard: Vec<String>,
}

impl RecordingHost {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            goto_calls: Vec::new(),
            reports: Vec::new(),
            clipboard: Vec::new(),
        }
    }
}

impl Host for RecordingHost {
    fn buffer_text(&self) -> String {
        self.text.clone()
    }

    fn goto_line(&mut self, line: usize) {
        self.goto_calls.push(line);
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
        self.reports.push((name.to_string(), text.to_string()));
    }

    fn set_clipboard(&mut self, text: &str) {
        self.clipboard.push(text.to_string());
    }
}
