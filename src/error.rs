//! Errors raised while configuring a header.
//!
//! Rendering a header never fails; every invalid combination is rejected by
//! the configuration method that would have produced it.

/// Configuration errors returned by the fallible builder methods
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// A numeric directive was set below its enforced minimum
    #[error(
        "The max-age directive should be at least six months ({minimum}). \
         The value you have given ({given}) is too small. \
         If you are testing HSTS and need to bypass this value, you can use with_timeout_unsafe()"
    )]
    ValueTooSmall { given: u64, minimum: u64 },

    /// A directive was requested before the directive it depends on
    #[error(
        "{directive} cannot be applied because {requires} is not activated. \
         You need to enable {requires} before requesting {directive}"
    )]
    SupportingDirectiveNotActivated {
        directive: &'static str,
        requires: &'static str,
    },
}

/// Result type for header configuration
pub type Result<T> = std::result::Result<T, HeaderError>;
