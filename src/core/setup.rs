//! Service setup sequence
//!
//! Adding a service is an ordered list of independent zypper and filesystem
//! steps. They run strictly in order and stop at the first failure. Steps
//! that already completed are NOT rolled back: a failure after `Add` leaves
//! the service installed without autorefresh, credentials, or a refresh.
//! The returned [`ServiceSetupError`](crate::error::ServiceSetupError)
//! records exactly which steps completed so the caller can report or repair
//! the partial state.

use serde::Serialize;

/// One step of adding a service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SetupStep {
    /// Remove a service of the same name, if one is configured
    RemoveExisting,
    /// `zypper addservice`
    Add,
    /// `zypper modifyservice -r`
    EnableAutorefresh,
    /// Copy the system credentials to the service credentials file
    WriteCredentials,
    /// `zypper refresh-services -r`
    RefreshServices,
}

impl SetupStep {
    /// All steps in execution order
    pub const SEQUENCE: [Self; 5] = [
        Self::RemoveExisting,
        Self::Add,
        Self::EnableAutorefresh,
        Self::WriteCredentials,
        Self::RefreshServices,
    ];

    pub fn description(self) -> &'static str {
        match self {
            Self::RemoveExisting => "remove existing service",
            Self::Add => "add service",
            Self::EnableAutorefresh => "enable autorefresh",
            Self::WriteCredentials => "write service credentials",
            Self::RefreshServices => "refresh services",
        }
    }
}

impl std::fmt::Display for SetupStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of a completed service setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetupReport {
    /// Service name
    pub service: String,
    /// Whether a previously configured service of the same name was removed
    pub replaced_existing: bool,
    /// Steps that ran, in order
    pub completed: Vec<SetupStep>,
}
