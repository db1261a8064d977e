//! Utility functions and helper modules.
//!
//! This module contains helpers shared by the header builders, currently
//! CSP nonce generation.

pub mod nonce;

pub use nonce::*;
