//! Content-Security-Policy builder.
//!
//! Everything defaults to denied. Use the `with_*` methods to whitelist where
//! scripts, stylesheets and images may be loaded from and whether connections
//! (XMLHttpRequest, WebSocket) may go back to the page's own origin:
//!
//! ```
//! use secure_headers::{ContentSecurityPolicy, Header};
//!
//! let csp = ContentSecurityPolicy::new()
//!     .with_scripts_from_domain("example.com")
//!     .with_stylesheets_from_self();
//! assert!(csp.compile().starts_with("default-src 'none'; script-src example.com 'nonce-"));
//! ```

use std::fmt;

use super::Header;
use crate::utils::nonce::{NonceSource, OsNonceSource, RECOMMENDED_NONCE_LEN};

/// Sources allowed for one resource type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SourceList {
    self_allowed: bool,
    domains: Vec<String>,
}

impl SourceList {
    fn allow_domain(&mut self, domain: String) {
        if !self.domains.contains(&domain) {
            self.domains.push(domain);
        }
    }

    /// Render `<directive> ['self'] <domains...> 'nonce-<nonce>'`
    fn directive(&self, name: &str, nonce: &str) -> String {
        let mut tokens = vec![name.to_string()];
        if self.self_allowed {
            tokens.push("'self'".to_string());
        }
        tokens.extend(self.domains.iter().cloned());
        tokens.push(format!("'nonce-{nonce}'"));
        tokens.join(" ")
    }
}

/// Builder for a restrictive Content-Security-Policy header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSecurityPolicy {
    scripts: SourceList,
    stylesheets: SourceList,
    images: SourceList,
    connect_self: bool,
    nonce: String,
}

impl ContentSecurityPolicy {
    /// Create a deny-everything policy with a freshly generated random nonce
    pub fn new() -> Self {
        Self::from_nonce_source(&OsNonceSource)
    }

    /// Create a deny-everything policy taking its nonce from `source`
    pub fn from_nonce_source<S>(source: &S) -> Self
    where
        S: NonceSource + ?Sized,
    {
        Self {
            scripts: SourceList::default(),
            stylesheets: SourceList::default(),
            images: SourceList::default(),
            connect_self: false,
            nonce: source.generate(),
        }
    }

    /// The nonce inline `<script>` and `<style>` tags must carry
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Replace the nonce.
    ///
    /// Nonces shorter than 32 characters are accepted but make guessing
    /// easier; keeping them long and unpredictable is the caller's job.
    #[must_use]
    pub fn with_nonce(&self, nonce: impl Into<String>) -> Self {
        let nonce = nonce.into();
        if nonce.len() < RECOMMENDED_NONCE_LEN {
            tracing::warn!(
                length = nonce.len(),
                recommended = RECOMMENDED_NONCE_LEN,
                "CSP nonce is shorter than recommended"
            );
        }

        let mut next = self.clone();
        next.nonce = nonce;
        next
    }

    #[must_use]
    pub fn with_scripts_from_domain(&self, domain: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.scripts.allow_domain(domain.into());
        next
    }

    #[must_use]
    pub fn with_scripts_from_self(&self) -> Self {
        let mut next = self.clone();
        next.scripts.self_allowed = true;
        next
    }

    #[must_use]
    pub fn with_stylesheets_from_domain(&self, domain: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.stylesheets.allow_domain(domain.into());
        next
    }

    #[must_use]
    pub fn with_stylesheets_from_self(&self) -> Self {
        let mut next = self.clone();
        next.stylesheets.self_allowed = true;
        next
    }

    #[must_use]
    pub fn with_images_from_domain(&self, domain: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.images.allow_domain(domain.into());
        next
    }

    #[must_use]
    pub fn with_images_from_self(&self) -> Self {
        let mut next = self.clone();
        next.images.self_allowed = true;
        next
    }

    /// Allow XMLHttpRequest, fetch and WebSocket connections to the page's own origin
    #[must_use]
    pub fn with_connect_to_self(&self) -> Self {
        let mut next = self.clone();
        next.connect_self = true;
        next
    }
}

impl Default for ContentSecurityPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl Header for ContentSecurityPolicy {
    fn name(&self) -> &'static str {
        "Content-Security-Policy"
    }

    fn compile(&self) -> String {
        let mut clauses = vec![
            "default-src 'none'".to_string(),
            self.scripts.directive("script-src", &self.nonce),
            self.stylesheets.directive("style-src", &self.nonce),
        ];

        // No connect-src at all falls back to default-src 'none'
        if self.connect_self {
            clauses.push("connect-src 'self'".to_string());
        }

        clauses.push(self.images.directive("img-src", &self.nonce));
        clauses.join("; ")
    }
}

impl fmt::Display for ContentSecurityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compile())
    }
}
