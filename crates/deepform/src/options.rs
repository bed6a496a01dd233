#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Drop entries whose value is exactly the empty string before any key
    /// processing, so they occupy no array slot either (default: false).
    /// Blob values are never dropped.
    pub omit_empty_strings: bool,
}
