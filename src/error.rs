//! Error types for suseconnect
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::setup::SetupStep;

/// Failures reported by zypper itself (the process ran, but did not succeed)
#[derive(Error, Debug)]
pub enum ZypperError {
    /// Repository alias unknown to zypper
    #[error("Repository {alias} not found.")]
    RepositoryNotFound { alias: String },

    /// Another process holds the zypp lock
    #[error("{message}")]
    Locked { pid: Option<u32>, message: String },

    /// Any other non-successful exit status
    #[error("{message}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        message: String,
    },
}

/// Credential file errors
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// Credential file does not exist
    #[error("Credentials file not found: {path}")]
    NotFound { path: PathBuf },

    /// Credential file lacks a username or password
    #[error("Malformed credentials file '{path}': missing {field}")]
    Malformed { path: PathBuf, field: String },

    /// Service name cannot be used as a file name
    #[error("Invalid credentials file name '{name}'")]
    InvalidName { name: String },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to remove file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },
}

impl From<FilesystemError> for CredentialsError {
    fn from(err: FilesystemError) -> Self {
        let path = match &err {
            FilesystemError::CreateDir { path, .. }
            | FilesystemError::WriteFile { path, .. }
            | FilesystemError::ReadFile { path, .. }
            | FilesystemError::RemoveFile { path, .. } => path.clone(),
        };
        Self::Io {
            path,
            error: err.to_string(),
        }
    }
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },

    /// Filesystem root that cannot be passed to zypper unchanged
    #[error("Filesystem root '{}' is not valid UTF-8", path.display())]
    NonUtf8Root { path: PathBuf },
}

/// Top-level suseconnect error type
#[derive(Error, Debug)]
pub enum ConnectError {
    /// The external command could not be run at all
    #[error("Failed to run '{command}': {error}")]
    ToolInvocation { command: String, error: String },

    /// zypper ran and reported a failure
    #[error(transparent)]
    Zypper(#[from] ZypperError),

    /// No installed product carries the base flag
    #[error("Unable to detect base product")]
    CannotDetectBaseProduct,

    /// zypper output could not be parsed
    #[error("Failed to parse output of '{command}': {error}")]
    Parse { command: String, error: String },

    /// Credentials error
    #[error(transparent)]
    Credentials(#[from] CredentialsError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A step of the service setup sequence failed
///
/// Steps that completed before the failure are not undone. The underlying
/// error is available as the source.
#[derive(Error, Debug)]
#[error("Failed to {step} for service '{service}'")]
pub struct ServiceSetupError {
    /// Service being set up
    pub service: String,
    /// Step that failed
    pub step: SetupStep,
    /// Steps that completed before the failure, in order
    pub completed: Vec<SetupStep>,
    /// Underlying error
    pub source: ConnectError,
}
