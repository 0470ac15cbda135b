//! Host capabilities the scanner session depends on
//!
//! The session core never talks to a UI, the filesystem, or the system
//! clipboard directly. Whatever embeds it (an editor view, the bundled
//! terminal host, a test recorder) implements [`Host`] and drives the
//! session serially: one `invoke` or `select` call at a time, each running
//! to completion.
//!
//! Menu display is deliberately not part of the trait: [`crate::Session::invoke`]
//! returns the menu items and the host shows them however it likes, feeding
//! the chosen index back through [`crate::Session::select`].

/// Capabilities a host must provide to the scan session
pub trait Host {
    /// Full current contents of the document being scanned
    fn buffer_text(&self) -> String;

    /// Move the user's cursor/viewport to the given 1-based line
    fn goto_line(&mut self, line: usize);

    /// Literal text of physical lines `line_start..=line_end` (1-based,
    /// inclusive), without the final line's terminator
    ///
    /// Line numbering must match [`crate::scan::split_lines_with_terminators`]
    /// over the same buffer, or exported rows will drift from the findings.
    fn line_range_text(&self, line_start: usize, line_end: usize) -> String;

    /// Create a scratch report document with the given name and contents
    fn create_report(&mut self, name: &str, text: &str);

    /// Place text on the system clipboard
    ///
    /// Optional legacy behavior; hosts without a clipboard keep the no-op
    /// default.
    fn set_clipboard(&mut self, _text: &str) {}
}
