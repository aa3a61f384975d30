//! Known registration endpoints
//!
//! Services whose URL points at one of these servers were installed by a
//! registration client and may be removed wholesale on de-registration.

use serde::{Deserialize, Serialize};

use crate::config::urls;

/// Which known server a service URL belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKind {
    Canonical,
    Secondary,
    Legacy,
}

impl std::fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canonical => write!(f, "canonical"),
            Self::Secondary => write!(f, "secondary"),
            Self::Legacy => write!(f, "legacy"),
        }
    }
}

/// The three registration server URLs services are matched against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationEndpoints {
    /// Canonical registration server
    pub canonical: String,
    /// Secondary mirror server
    pub secondary: String,
    /// Legacy server
    pub legacy: String,
}

impl Default for RegistrationEndpoints {
    fn default() -> Self {
        Self {
            canonical: urls::CANONICAL_REGISTRATION_SERVER.to_string(),
            secondary: urls::SECONDARY_REGISTRATION_SERVER.to_string(),
            legacy: urls::LEGACY_REGISTRATION_SERVER.to_string(),
        }
    }
}

impl RegistrationEndpoints {
    /// Classify a service URL
    pub fn classify(&self, url: &str) -> Option<EndpointKind> {
        [
            (EndpointKind::Canonical, &self.canonical),
            (EndpointKind::Secondary, &self.secondary),
            (EndpointKind::Legacy, &self.legacy),
        ]
        .into_iter()
        .find(|(_, endpoint)| matches_endpoint(endpoint, url))
        .map(|(kind, _)| kind)
    }

    /// Whether `url` points at any known registration server
    pub fn is_known(&self, url: &str) -> bool {
        self.classify(url).is_some()
    }
}

/// `url` equals `endpoint` or continues it with a path or query
///
/// The endpoint part is compared case-insensitively. Empty endpoints never
/// match.
fn matches_endpoint(endpoint: &str, url: &str) -> bool {
    let endpoint = endpoint.trim().trim_end_matches('/');
    if endpoint.is_empty() {
        return false;
    }

    let (Some(head), Some(rest)) = (url.get(..endpoint.len()), url.get(endpoint.len()..)) else {
        return false;
    };
    head.eq_ignore_ascii_case(endpoint)
        && (rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
}
