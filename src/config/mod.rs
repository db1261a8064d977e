//! Configuration structures and loading utilities.
//!
//! This module contains the configuration used to assemble an application's
//! security headers, including environment variable loading and default values.

pub mod security;

pub use security::*;
