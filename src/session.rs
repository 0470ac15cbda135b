//! Findings-navigation session
//!
//! Owns the lifecycle of one scan result for one document/view:
//!
//! ```text
//! Idle ──invoke──> Ready ──select(Clear)──> Idle
//!                  │  ▲
//!                  └──┘ invoke / select(Export) / select(Finding)
//! ```
//!
//! While `Ready`, repeated `invoke` calls return the cached menu unchanged
//! (no rescan), so visited marks survive until the user clears the search.
//! Menu indices are stable for the lifetime of one `Ready` state; only an
//! entry's text changes in place when its finding is first visited.

use crate::config::ScanConfig;
use crate::host::Host;
use crate::scan::{scan, ScanError, ScanResult};

/// Label for the export action at menu index 0
const EXPORT_LABEL: &str = "[Export Findings]";

/// What a raw menu index means
///
/// Indices 0 and 1 are fixed actions; every later index maps to a finding.
/// Call sites match on this instead of doing offset arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// Export the flagged source rows to a report document
    Export,
    /// Discard the cached scan; the next invocation rescans
    Clear,
    /// Jump to `findings[i]`
    Finding(usize),
}

struct CachedScan {
    result: ScanResult,
    menu: Vec<String>,
}

/// Per-document scan session
///
/// Holds at most one [`ScanResult`] at a time. One session is bound to one
/// document/view and is driven serially by it; nothing else owns or shares
/// this state.
pub struct Session {
    config: ScanConfig,
    cached: Option<CachedScan>,
}

impl Session {
    /// Create an idle session with the given scan configuration
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            cached: None,
        }
    }

    /// Whether a scan result is cached (`Ready` state)
    pub fn is_ready(&self) -> bool {
        self.cached.is_some()
    }

    /// The cached scan result, if any
    pub fn result(&self) -> Option<&ScanResult> {
        self.cached.as_ref().map(|state| &state.result)
    }

    /// Current menu items; empty while idle
    pub fn menu_items(&self) -> &[String] {
        match &self.cached {
            Some(state) => &state.menu,
            None => &[],
        }
    }

    /// Trigger a scan (or reuse the cached one) and return the menu
    ///
    /// Idle: scans the host's buffer, caches the result, builds the menu,
    /// and optionally copies the finding messages to the clipboard. Ready:
    /// returns the existing menu untouched. The host displays the items and
    /// feeds the chosen index back through [`Session::select`].
    pub fn invoke(&mut self, host: &mut impl Host) -> Result<&[String], ScanError> {
        if self.cached.is_none() {
            let text = host.buffer_text();
            let result = scan(&text, &self.config)?;
            tracing::info!(
                findings = result.findings.len(),
                samples = result.sample_count,
                "fresh scan cached"
            );

            if self.config.copy_to_clipboard && result.has_findings() {
                let messages: Vec<String> = result
                    .findings
                    .iter()
                    .map(|f| f.display_text())
                    .collect();
                host.set_clipboard(&messages.join("\n"));
            }

            let menu = build_menu(&result);
            self.cached = Some(CachedScan { result, menu });
        }

        Ok(self.menu_items())
    }

    /// Map a raw menu index to its meaning
    ///
    /// Returns `None` while idle or when the index is past the menu.
    pub fn entry_at(&self, index: usize) -> Option<MenuEntry> {
        let state = self.cached.as_ref()?;
        match index {
            0 => Some(MenuEntry::Export),
            1 => Some(MenuEntry::Clear),
            _ => {
                let i = index - 2;
                (i < state.result.findings.len()).then_some(MenuEntry::Finding(i))
            }
        }
    }

    /// Act on the user's menu choice
    ///
    /// `None` is the host's cancellation signal and changes nothing.
    /// Selecting a finding jumps to its first line every time but appends
    /// the visited marker to its menu entry at most once.
    pub fn select(&mut self, choice: Option<usize>, host: &mut impl Host) {
        let Some(index) = choice else {
            return;
        };
        let Some(entry) = self.entry_at(index) else {
            tracing::warn!(index, "menu selection out of range, ignoring");
            return;
        };

        match entry {
            MenuEntry::Export => self.export(host),
            MenuEntry::Clear => {
                tracing::debug!("scan cache cleared");
                self.cached = None;
            }
            MenuEntry::Finding(i) => {
                if let Some(state) = self.cached.as_mut() {
                    let finding = &mut state.result.findings[i];
                    host.goto_line(finding.line_start);
                    if !finding.visited {
                        finding.visited = true;
                        state.menu[index] = finding.menu_label();
                    }
                }
            }
        }
    }

    /// Resolve every finding's line range back to buffer text and hand the
    /// concatenation to the host as a report document
    fn export(&self, host: &mut impl Host) {
        let Some(state) = self.cached.as_ref() else {
            return;
        };

        let mut text = String::new();
        for finding in &state.result.findings {
            text.push_str(&host.line_range_text(finding.line_start, finding.line_end));
            text.push('\n');
        }

        tracing::info!(rows = state.result.findings.len(), "exporting flagged rows");
        host.create_report("CSV Findings", &text);
    }
}

fn build_menu(result: &ScanResult) -> Vec<String> {
    let mut menu = Vec::with_capacity(result.findings.len() + 2);
    menu.push(EXPORT_LABEL.to_string());
    menu.push(format!(
        "[Clear Search] ({} samples were parsed)",
        result.sample_count
    ));
    menu.extend(result.findings.iter().map(|f| f.menu_label()));
    menu
}
