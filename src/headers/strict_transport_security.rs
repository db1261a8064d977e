//! Strict-Transport-Security (HSTS) builder.

use std::fmt;

use super::Header;
use crate::error::{HeaderError, Result};

/// Builder for the Strict-Transport-Security header
///
/// Defaults to a six month lifetime for the current host only. Preload
/// requires subdomain inclusion, so call `with_subdomains()` before
/// `with_preload()`:
///
/// ```
/// use secure_headers::{Header, StrictTransportSecurity};
///
/// let hsts = StrictTransportSecurity::new()
///     .with_timeout(StrictTransportSecurity::ONE_YEAR)?
///     .with_subdomains()
///     .with_preload()?;
/// assert_eq!(hsts.compile(), "max-age=31557600; includeSubDomains; preload");
/// # Ok::<(), secure_headers::HeaderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrictTransportSecurity {
    max_age: u64,
    include_subdomains: bool,
    preload: bool,
}

impl StrictTransportSecurity {
    /// Six months in seconds, the shortest lifetime `with_timeout` accepts
    pub const SIX_MONTHS: u64 = 15_778_800;

    /// One year in seconds
    pub const ONE_YEAR: u64 = 31_557_600;

    pub fn new() -> Self {
        Self {
            max_age: Self::SIX_MONTHS,
            include_subdomains: false,
            preload: false,
        }
    }

    /// Current max-age in seconds
    pub fn timeout(&self) -> u64 {
        self.max_age
    }

    pub fn includes_subdomains(&self) -> bool {
        self.include_subdomains
    }

    pub fn is_preloaded(&self) -> bool {
        self.preload
    }

    /// Set max-age, rejecting anything shorter than six months
    pub fn with_timeout(&self, seconds: u64) -> Result<Self> {
        if seconds < Self::SIX_MONTHS {
            return Err(HeaderError::ValueTooSmall {
                given: seconds,
                minimum: Self::SIX_MONTHS,
            });
        }

        Ok(self.with_max_age(seconds))
    }

    /// Set max-age without the six month floor.
    ///
    /// Meant for trying HSTS out with a short lifetime; avoid it in
    /// production.
    #[must_use]
    pub fn with_timeout_unsafe(&self, seconds: u64) -> Self {
        if seconds < Self::SIX_MONTHS {
            tracing::warn!(
                max_age = seconds,
                minimum = Self::SIX_MONTHS,
                "HSTS max-age set below six months"
            );
        }

        self.with_max_age(seconds)
    }

    #[must_use]
    pub fn with_subdomains(&self) -> Self {
        Self {
            include_subdomains: true,
            ..self.clone()
        }
    }

    /// Request inclusion in browser preload lists.
    ///
    /// Fails unless subdomains are already included; a later
    /// `with_subdomains()` does not revive a rejected preload.
    pub fn with_preload(&self) -> Result<Self> {
        if !self.include_subdomains {
            return Err(HeaderError::SupportingDirectiveNotActivated {
                directive: "preload",
                requires: "includeSubDomains",
            });
        }

        Ok(Self {
            preload: true,
            ..self.clone()
        })
    }

    fn with_max_age(&self, seconds: u64) -> Self {
        Self {
            max_age: seconds,
            ..self.clone()
        }
    }
}

impl Default for StrictTransportSecurity {
    fn default() -> Self {
        Self::new()
    }
}

impl Header for StrictTransportSecurity {
    fn name(&self) -> &'static str {
        "Strict-Transport-Security"
    }

    fn compile(&self) -> String {
        let mut value = format!("max-age={}", self.max_age);
        if self.include_subdomains {
            value.push_str("; includeSubDomains");
        }
        if self.preload {
            value.push_str("; preload");
        }
        value
    }
}

impl fmt::Display for StrictTransportSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compile())
    }
}
