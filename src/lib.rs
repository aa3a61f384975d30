//! suseconnect - register a system and manage its zypper configuration
//!
//! This library drives `zypper` on behalf of a registration client: it
//! lists installed products, repositories and services, adds and removes
//! the services a registration provides, and keeps the matching credential
//! files in place.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - The zypper adapter, records and parsing
//! - [`infra`] - Infrastructure layer (filesystem, processes)
//! - [`config`] - Constants and well-known URLs
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```no_run
//! use suseconnect::core::{Zypper, ZypperConfig};
//!
//! let zypper = Zypper::new(ZypperConfig::default());
//! let base = zypper.base_product()?;
//! println!("{base}");
//! # Ok::<(), suseconnect::error::ConnectError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
