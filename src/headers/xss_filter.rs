//! X-Xss-Protection builder.

use std::fmt;

use super::Header;

/// Builder for the legacy X-Xss-Protection header
///
/// Defaults to `0`: the filter-and-continue mode browsers used to fall back
/// to has been exploited to leak page content, so the filter stays off unless
/// block mode is requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XssFilter {
    block_mode: bool,
}

impl XssFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blocking(&self) -> bool {
        self.block_mode
    }

    /// Enable the filter and block the whole page when an attack is detected
    #[must_use]
    pub fn with_filter_and_block(&self) -> Self {
        Self { block_mode: true }
    }
}

impl Header for XssFilter {
    fn name(&self) -> &'static str {
        "X-Xss-Protection"
    }

    fn compile(&self) -> String {
        if self.block_mode {
            "1; mode=block".to_string()
        } else {
            "0".to_string()
        }
    }
}

impl fmt::Display for XssFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compile())
    }
}
