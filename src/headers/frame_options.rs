//! X-Frame-Options builder.

use std::fmt;

use super::Header;

/// Who may embed the page in a frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FrameMode {
    /// DENY - no framing at all
    #[default]
    Deny,
    /// SAMEORIGIN - framing from the page's own origin
    SameOrigin,
    /// ALLOW-FROM - framing from one normalized origin
    AllowFrom(String),
}

impl fmt::Display for FrameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameMode::Deny => f.write_str("DENY"),
            FrameMode::SameOrigin => f.write_str("SAMEORIGIN"),
            FrameMode::AllowFrom(origin) => write!(f, "ALLOW-FROM {origin}"),
        }
    }
}

/// Builder for the X-Frame-Options header, denying framing by default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameOptions {
    mode: FrameMode,
}

impl FrameOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FrameMode {
        &self.mode
    }

    #[must_use]
    pub fn with_allow_from_self(&self) -> Self {
        Self {
            mode: FrameMode::SameOrigin,
        }
    }

    /// Allow framing from a single origin.
    ///
    /// The origin is stored with a scheme and a trailing slash, so
    /// `example.com`, `example.com/` and `http://example.com` all yield
    /// `ALLOW-FROM http://example.com/`.
    #[must_use]
    pub fn with_allow_from(&self, domain: &str) -> Self {
        Self {
            mode: FrameMode::AllowFrom(normalize_origin(domain)),
        }
    }
}

/// Append a trailing slash, then prepend `http://` when no scheme is present.
fn normalize_origin(domain: &str) -> String {
    if !domain.ends_with('/') {
        return normalize_origin(&format!("{domain}/"));
    }

    if !domain.starts_with("http") {
        return normalize_origin(&format!("http://{domain}"));
    }

    domain.to_string()
}

impl Header for FrameOptions {
    fn name(&self) -> &'static str {
        "X-Frame-Options"
    }

    fn compile(&self) -> String {
        self.mode.to_string()
    }
}

impl fmt::Display for FrameOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mode, f)
    }
}
