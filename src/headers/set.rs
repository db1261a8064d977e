//! The full set of headers an application sends on every response.

use super::{ContentSecurityPolicy, FrameOptions, Header, StrictTransportSecurity, XssFilter};

/// Compiled-on-demand collection of the four security headers
///
/// CSP and HSTS may be switched off; X-Frame-Options and X-Xss-Protection are
/// always sent because their defaults are the safe choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityHeaderSet {
    pub content_security_policy: Option<ContentSecurityPolicy>,
    pub strict_transport_security: Option<StrictTransportSecurity>,
    pub frame_options: FrameOptions,
    pub xss_filter: XssFilter,
}

impl SecurityHeaderSet {
    /// Every enabled header, in the order they should be attached
    pub fn headers(&self) -> Vec<&dyn Header> {
        let mut headers: Vec<&dyn Header> = Vec::with_capacity(4);
        if let Some(csp) = &self.content_security_policy {
            headers.push(csp);
        }
        if let Some(hsts) = &self.strict_transport_security {
            headers.push(hsts);
        }
        headers.push(&self.frame_options);
        headers.push(&self.xss_filter);
        headers
    }

    /// `(name, value)` pairs ready to attach to a response
    pub fn compile_all(&self) -> Vec<(&'static str, String)> {
        self.headers()
            .into_iter()
            .map(|header| (header.name(), header.compile()))
            .collect()
    }
}

impl Default for SecurityHeaderSet {
    fn default() -> Self {
        Self {
            content_security_policy: Some(ContentSecurityPolicy::new()),
            strict_transport_security: Some(StrictTransportSecurity::new()),
            frame_options: FrameOptions::new(),
            xss_filter: XssFilter::new(),
        }
    }
}
