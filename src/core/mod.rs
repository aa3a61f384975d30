//! Core business logic module
//!
//! This module contains the registration-side view of zypper: records,
//! command construction, output parsing and the adapter tying them
//! together. Process execution and file access go through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`zypper`] - The package-manager adapter
//! - [`command`] - zypper command-line construction and shell quoting
//! - [`xml`] - Parsing of zypper's XML listings
//! - [`product`], [`repository`], [`service`] - Parsed records
//! - [`credentials`] - Credential files
//! - [`endpoints`] - Known registration servers
//! - [`setup`] - The ordered steps of adding a service
//! - [`settings`] - Configuration file handling

pub mod command;
pub mod credentials;
pub mod endpoints;
pub mod product;
pub mod repository;
pub mod service;
pub mod settings;
pub mod setup;
pub mod xml;
pub mod zypper;

pub use credentials::{Credentials, CredentialsLocation, CredentialsStore};
pub use product::Product;
pub use repository::Repository;
pub use service::Service;
pub use zypper::{Zypper, ZypperConfig};
