//! Configured services

use serde::Serialize;

/// A service from `zypper services -d`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    alias: String,
    name: String,
    #[serde(rename = "type")]
    service_type: String,
    url: String,
    enabled: bool,
    autorefresh: bool,
}

impl Service {
    /// Create an enabled `ris` service
    pub fn new(alias: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            name: name.into(),
            service_type: "ris".to_string(),
            url: url.into(),
            enabled: true,
            autorefresh: false,
        }
    }

    #[must_use]
    pub fn with_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = service_type.into();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, enabled: bool, autorefresh: bool) -> Self {
        self.enabled = enabled;
        self.autorefresh = autorefresh;
        self
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Service type, e.g. `ris`
    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn autorefresh(&self) -> bool {
        self.autorefresh
    }
}
