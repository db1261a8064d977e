//! Secure Headers - builders for HTTP security response headers
//!
//! Each builder renders the value of one header:
//! - `ContentSecurityPolicy` - deny-by-default CSP with per-resource allow-lists and a nonce
//! - `FrameOptions` - X-Frame-Options (`DENY`, `SAMEORIGIN`, `ALLOW-FROM`)
//! - `StrictTransportSecurity` - HSTS with a six month minimum lifetime
//! - `XssFilter` - legacy X-Xss-Protection, disabled unless block mode is requested
//!
//! Builders are immutable values. Every `with_*` call returns a new builder
//! and leaves the receiver untouched, so a configured builder can be shared
//! between threads and used as a template. Attaching `(name(), compile())` to
//! a response is left to the caller's framework.
//!
//! ## Architecture
//!
//! - `headers/` - the `Header` trait, the four builders and `SecurityHeaderSet`
//! - `config/` - configuration structures and environment loading
//! - `utils/` - nonce generation
//! - `error` - configuration errors
//!
//! ## Quick Start
//!
//! ```
//! use secure_headers::{ContentSecurityPolicy, FrameOptions, Header, StrictTransportSecurity};
//!
//! let csp = ContentSecurityPolicy::new()
//!     .with_scripts_from_self()
//!     .with_stylesheets_from_domain("cdn.example.com");
//! let hsts = StrictTransportSecurity::new().with_subdomains().with_preload()?;
//! let xfo = FrameOptions::new().with_allow_from_self();
//!
//! let headers: [&dyn Header; 3] = [&csp, &hsts, &xfo];
//! for header in headers {
//!     println!("{}: {}", header.name(), header.compile());
//! }
//! # Ok::<(), secure_headers::HeaderError>(())
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod headers;
pub mod utils;

// Re-export commonly used types and functions for convenience
pub use config::SecurityHeadersConfig;
pub use error::{HeaderError, Result};
pub use headers::{
    ContentSecurityPolicy, FrameMode, FrameOptions, Header, SecurityHeaderSet,
    StrictTransportSecurity, XssFilter,
};
pub use utils::{NonceSource, OsNonceSource, generate_nonce};
