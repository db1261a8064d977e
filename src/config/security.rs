//! Security headers configuration.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::headers::{
    ContentSecurityPolicy, FrameOptions, SecurityHeaderSet, StrictTransportSecurity, XssFilter,
};
use crate::utils::nonce::{NonceSource, OsNonceSource};

/// Configuration for the security headers an application sends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityHeadersConfig {
    pub csp_enabled: bool,
    pub csp_scripts_from_self: bool,
    pub csp_script_domains: Vec<String>,
    pub csp_styles_from_self: bool,
    pub csp_style_domains: Vec<String>,
    pub csp_images_from_self: bool,
    pub csp_image_domains: Vec<String>,
    pub csp_connect_to_self: bool,
    pub hsts_enabled: bool,
    pub hsts_max_age: u64,
    pub hsts_include_subdomains: bool,
    pub hsts_preload: bool,
    /// `DENY`, `SAMEORIGIN` or `ALLOW-FROM <origin>`
    pub frame_options: String,
    pub xss_filter_and_block: bool,
}

impl Default for SecurityHeadersConfig {
    fn default() -> Self {
        Self {
            csp_enabled: true,
            csp_scripts_from_self: false,
            csp_script_domains: Vec::new(),
            csp_styles_from_self: false,
            csp_style_domains: Vec::new(),
            csp_images_from_self: false,
            csp_image_domains: Vec::new(),
            csp_connect_to_self: false,
            hsts_enabled: true,
            hsts_max_age: StrictTransportSecurity::SIX_MONTHS,
            hsts_include_subdomains: false,
            hsts_preload: false,
            frame_options: "DENY".to_string(),
            xss_filter_and_block: false,
        }
    }
}

impl SecurityHeadersConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(default)
        };

        let domains = |key: &str| {
            lookup(key)
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|d| !d.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<String>>()
                })
                .unwrap_or_default()
        };

        let hsts_max_age = match lookup("HSTS_MAX_AGE") {
            Some(v) => v.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %v, "Invalid HSTS_MAX_AGE, using default");
                defaults.hsts_max_age
            }),
            None => defaults.hsts_max_age,
        };

        Self {
            csp_enabled: flag("SECURITY_CSP_ENABLED", defaults.csp_enabled),
            csp_scripts_from_self: flag("CSP_SCRIPTS_FROM_SELF", defaults.csp_scripts_from_self),
            csp_script_domains: domains("CSP_SCRIPT_DOMAINS"),
            csp_styles_from_self: flag("CSP_STYLES_FROM_SELF", defaults.csp_styles_from_self),
            csp_style_domains: domains("CSP_STYLE_DOMAINS"),
            csp_images_from_self: flag("CSP_IMAGES_FROM_SELF", defaults.csp_images_from_self),
            csp_image_domains: domains("CSP_IMAGE_DOMAINS"),
            csp_connect_to_self: flag("CSP_CONNECT_TO_SELF", defaults.csp_connect_to_self),
            hsts_enabled: flag("HSTS_ENABLED", defaults.hsts_enabled),
            hsts_max_age,
            hsts_include_subdomains: flag(
                "HSTS_INCLUDE_SUBDOMAINS",
                defaults.hsts_include_subdomains,
            ),
            hsts_preload: flag("HSTS_PRELOAD", defaults.hsts_preload),
            frame_options: lookup("X_FRAME_OPTIONS").unwrap_or(defaults.frame_options),
            xss_filter_and_block: flag("X_XSS_PROTECTION", defaults.xss_filter_and_block),
        }
    }

    /// Build the configured headers, generating the CSP nonce from the OS CSPRNG
    pub fn build(&self) -> Result<SecurityHeaderSet> {
        self.build_with_nonce_source(&OsNonceSource)
    }

    /// Build the configured headers, taking the CSP nonce from `source`
    ///
    /// Fails when the HSTS settings break the builder rules: a max-age below
    /// six months, or preload without subdomains.
    pub fn build_with_nonce_source<S>(&self, source: &S) -> Result<SecurityHeaderSet>
    where
        S: NonceSource + ?Sized,
    {
        let content_security_policy = self
            .csp_enabled
            .then(|| self.build_csp(source));

        let strict_transport_security = if self.hsts_enabled {
            Some(self.build_hsts().inspect_err(|e| {
                tracing::warn!(error = %e, "Rejected HSTS configuration");
            })?)
        } else {
            None
        };

        let set = SecurityHeaderSet {
            content_security_policy,
            strict_transport_security,
            frame_options: self.build_frame_options(),
            xss_filter: self.build_xss_filter(),
        };

        tracing::debug!(
            csp = set.content_security_policy.is_some(),
            hsts = set.strict_transport_security.is_some(),
            "Built security headers"
        );

        Ok(set)
    }

    fn build_csp<S>(&self, source: &S) -> ContentSecurityPolicy
    where
        S: NonceSource + ?Sized,
    {
        let mut csp = ContentSecurityPolicy::from_nonce_source(source);

        if self.csp_scripts_from_self {
            csp = csp.with_scripts_from_self();
        }
        for domain in &self.csp_script_domains {
            csp = csp.with_scripts_from_domain(domain.as_str());
        }

        if self.csp_styles_from_self {
            csp = csp.with_stylesheets_from_self();
        }
        for domain in &self.csp_style_domains {
            csp = csp.with_stylesheets_from_domain(domain.as_str());
        }

        if self.csp_images_from_self {
            csp = csp.with_images_from_self();
        }
        for domain in &self.csp_image_domains {
            csp = csp.with_images_from_domain(domain.as_str());
        }

        if self.csp_connect_to_self {
            csp = csp.with_connect_to_self();
        }

        csp
    }

    fn build_hsts(&self) -> Result<StrictTransportSecurity> {
        let mut hsts = StrictTransportSecurity::new().with_timeout(self.hsts_max_age)?;

        if self.hsts_include_subdomains {
            hsts = hsts.with_subdomains();
        }
        if self.hsts_preload {
            hsts = hsts.with_preload()?;
        }

        Ok(hsts)
    }

    fn build_frame_options(&self) -> FrameOptions {
        const ALLOW_FROM: &str = "ALLOW-FROM ";

        let value = self.frame_options.trim();
        let xfo = FrameOptions::new();

        if value.eq_ignore_ascii_case("DENY") {
            return xfo;
        }
        if value.eq_ignore_ascii_case("SAMEORIGIN") {
            return xfo.with_allow_from_self();
        }

        match value.get(..ALLOW_FROM.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(ALLOW_FROM) => {
                xfo.with_allow_from(value[ALLOW_FROM.len()..].trim())
            }
            _ => {
                tracing::warn!(value = %value, "Unknown X_FRAME_OPTIONS value, using DENY");
                xfo
            }
        }
    }

    fn build_xss_filter(&self) -> XssFilter {
        if self.xss_filter_and_block {
            XssFilter::new().with_filter_and_block()
        } else {
            XssFilter::new()
        }
    }
}
