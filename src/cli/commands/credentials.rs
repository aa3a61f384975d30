//! CLI implementation for credential commands
//!
//! Passwords are accepted but never printed.

use anyhow::{Context, Result};

use crate::cli::output::{is_json, print_detail, print_json, print_success};
use crate::core::{CredentialsLocation, Zypper};
use crate::infra::process::CommandRunner;

/// `suseconnect write-credentials --username <u> --password <p>`
pub fn execute_write<R: CommandRunner>(
    zypper: &Zypper<R>,
    username: &str,
    password: &str,
) -> Result<()> {
    if username.is_empty() || password.is_empty() {
        anyhow::bail!("Username and password must not be empty");
    }

    let path = zypper
        .write_base_credentials(username, password)
        .context("Failed to write system credentials")?;
    print_success(&format!("Wrote credentials to {}", path.display()));
    Ok(())
}

/// `suseconnect show-credentials [service]`
pub fn execute_show<R: CommandRunner>(zypper: &Zypper<R>, service: Option<&str>) -> Result<()> {
    let location = service.map_or(CredentialsLocation::Global, |name| {
        CredentialsLocation::Service(name.to_string())
    });
    let store = zypper.credentials_store();
    let path = store.path(&location)?;
    let credentials = store
        .read(&location)
        .with_context(|| format!("Failed to read credentials from {}", path.display()))?;

    if is_json() {
        return print_json(&serde_json::json!({
            "username": credentials.username(),
            "path": path,
        }));
    }
    println!("{}", credentials.username());
    print_detail(&format!("stored in {}", path.display()));
    Ok(())
}
