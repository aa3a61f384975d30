//! Configuration constants
//!
//! Compile-time defaults and well-known registration server URLs.

pub mod defaults;
pub mod urls;
