//! zypper credential files
//!
//! Credentials are stored as small `key=value` files:
//!
//! ```text
//! username=SCC_0123456789
//! password=secret
//! ```
//!
//! The system (base registration) credentials live in `SCCcredentials`;
//! every service added by suseconnect gets a file named after the service.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::config::defaults::{CREDENTIALS_DIR, CREDENTIALS_FILE_MODE, GLOBAL_CREDENTIALS_FILE};
use crate::error::CredentialsError;
use crate::infra::filesystem;

/// Where a set of credentials is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsLocation {
    /// The system credentials file
    Global,
    /// Per-service file, keyed by service name
    Service(String),
}

impl CredentialsLocation {
    /// File name inside the credentials directory
    pub fn file_name(&self) -> Result<&str, CredentialsError> {
        match self {
            Self::Global => Ok(GLOBAL_CREDENTIALS_FILE),
            Self::Service(name) => {
                validate_file_name(name)?;
                Ok(name)
            }
        }
    }
}

/// A single path component that stays inside the credentials directory
fn validate_file_name(name: &str) -> Result<(), CredentialsError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains('/') => Ok(()),
        _ => Err(CredentialsError::InvalidName {
            name: name.to_string(),
        }),
    }
}

/// Resolves credential file paths below an optional filesystem root
#[derive(Debug, Clone)]
pub struct CredentialsStore {
    dir: PathBuf,
}

impl CredentialsStore {
    /// Store in the default credentials directory below `root`
    pub fn new(root: Option<&Path>) -> Self {
        Self::with_dir(root, Path::new(CREDENTIALS_DIR))
    }

    /// Store in a custom credentials directory below `root`
    pub fn with_dir(root: Option<&Path>, dir: &Path) -> Self {
        Self {
            dir: filesystem::under_root(root, dir),
        }
    }

    /// Path of the file for `location`
    pub fn path(&self, location: &CredentialsLocation) -> Result<PathBuf, CredentialsError> {
        Ok(self.dir.join(location.file_name()?))
    }

    /// Read the credentials stored at `location`
    pub fn read(&self, location: &CredentialsLocation) -> Result<Credentials, CredentialsError> {
        let path = self.path(location)?;
        if !path.exists() {
            return Err(CredentialsError::NotFound { path });
        }

        let content = filesystem::read_file(&path)?;
        Credentials::parse(&content, location.clone()).map_err(|field| {
            CredentialsError::Malformed {
                path: path.clone(),
                field: field.to_string(),
            }
        })
    }

    /// Write `credentials`, replacing any existing file
    pub fn write(&self, credentials: &Credentials) -> Result<PathBuf, CredentialsError> {
        let path = self.path(&credentials.location)?;
        filesystem::write_private_file(&path, &credentials.to_file_content(), CREDENTIALS_FILE_MODE)?;
        tracing::info!("Wrote credentials to {}", path.display());
        Ok(path)
    }

    /// Delete the file for `location`; returns whether a file was removed
    pub fn remove(&self, location: &CredentialsLocation) -> Result<bool, CredentialsError> {
        let path = self.path(location)?;
        let removed = filesystem::remove_file_if_exists(&path)?;
        if removed {
            tracing::info!("Removed credentials file {}", path.display());
        } else {
            tracing::debug!("No credentials file at {}", path.display());
        }
        Ok(removed)
    }
}

/// Username and password for a registration or service
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    location: CredentialsLocation,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        location: CredentialsLocation,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            location,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn location(&self) -> &CredentialsLocation {
        &self.location
    }

    /// Same username and password, stored elsewhere
    #[must_use]
    pub fn relocate(&self, location: CredentialsLocation) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }

    /// Parse file content; on failure returns the name of the missing field
    fn parse(content: &str, location: CredentialsLocation) -> Result<Self, &'static str> {
        let mut username = None;
        let mut password = None;

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                match key.trim() {
                    "username" => username = Some(value.trim().to_string()),
                    "password" => password = Some(value.trim().to_string()),
                    _ => {}
                }
            }
        }

        Ok(Self {
            username: username.ok_or("username")?,
            password: password.ok_or("password")?,
            location,
        })
    }

    fn to_file_content(&self) -> String {
        format!("username={}\npassword={}\n", self.username, self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[hidden]")
            .field("location", &self.location)
            .finish()
    }
}
