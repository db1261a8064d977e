//! Header value builders.
//!
//! Each builder is an immutable value: configuration methods return a new
//! builder and leave the receiver untouched. `compile()` renders the value to
//! send and never fails.

pub mod content_security_policy;
pub mod frame_options;
pub mod set;
pub mod strict_transport_security;
pub mod xss_filter;

pub use content_security_policy::*;
pub use frame_options::*;
pub use set::*;
pub use strict_transport_security::*;
pub use xss_filter::*;

/// A response header the caller can attach as `(name(), compile())`
pub trait Header {
    /// Name of the header on the wire
    fn name(&self) -> &'static str;

    /// Final header value
    fn compile(&self) -> String;
}
