//! Configured repositories

use serde::Serialize;

use crate::config::defaults::DEFAULT_REPO_PRIORITY;

/// A repository from `zypper repos -d`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    alias: String,
    name: String,
    #[serde(rename = "type")]
    repo_type: String,
    priority: u32,
    enabled: bool,
    autorefresh: bool,
    gpgcheck: bool,
    url: String,
}

impl Repository {
    /// Create an enabled repository with default priority
    pub fn new(alias: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            name: name.into(),
            repo_type: String::new(),
            priority: DEFAULT_REPO_PRIORITY,
            enabled: true,
            autorefresh: false,
            gpgcheck: true,
            url: url.into(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, repo_type: impl Into<String>) -> Self {
        self.repo_type = repo_type.into();
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_flags(mut self, enabled: bool, autorefresh: bool, gpgcheck: bool) -> Self {
        self.enabled = enabled;
        self.autorefresh = autorefresh;
        self.gpgcheck = gpgcheck;
        self
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Repository type, e.g. `rpm-md`
    pub fn repo_type(&self) -> &str {
        &self.repo_type
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn autorefresh(&self) -> bool {
        self.autorefresh
    }

    pub fn gpgcheck(&self) -> bool {
        self.gpgcheck
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
