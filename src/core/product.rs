//! Installed products
//!
//! A [`Product`] is one entry of `zypper products -i`.

use serde::Serialize;

/// An installed product as reported by zypper
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    identifier: String,
    version: String,
    arch: String,
    is_base: bool,
    productline: String,
    register_release: String,
    release: String,
    summary: String,
}

impl Product {
    /// Create a non-base product
    pub fn new(
        identifier: impl Into<String>,
        version: impl Into<String>,
        arch: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            version: version.into(),
            arch: arch.into(),
            is_base: false,
            productline: String::new(),
            register_release: String::new(),
            release: String::new(),
            summary: String::new(),
        }
    }

    /// Set the base-product flag
    #[must_use]
    pub fn with_base(mut self, is_base: bool) -> Self {
        self.is_base = is_base;
        self
    }

    /// Set the product line
    #[must_use]
    pub fn with_productline(mut self, productline: impl Into<String>) -> Self {
        self.productline = productline.into();
        self
    }

    /// Set the register-release tag
    #[must_use]
    pub fn with_register_release(mut self, register_release: impl Into<String>) -> Self {
        self.register_release = register_release.into();
        self
    }

    /// Set the release
    #[must_use]
    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = release.into();
        self
    }

    /// Set the summary
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Product identifier, e.g. `SLES`
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// Whether this is the base product of the system
    pub fn is_base(&self) -> bool {
        self.is_base
    }

    pub fn productline(&self) -> &str {
        &self.productline
    }

    pub fn register_release(&self) -> &str {
        &self.register_release
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.identifier, self.version, self.arch)
    }
}
