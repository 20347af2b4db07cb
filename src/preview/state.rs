//! Shared types for the preview loop.

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Leave the preview
    Quit,
}

/// Command-line options for `folio preview`.
#[derive(Debug, Clone, Default)]
pub struct PreviewOptions {
    /// Seed for typing rhythm and typos
    pub seed: Option<u64>,
    /// Disable simulated typos
    pub no_typos: bool,
}
