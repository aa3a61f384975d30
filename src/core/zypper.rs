//! zypper adapter
//!
//! Translates registration operations into zypper invocations, parses the
//! XML they print and maintains the matching credential files. Every
//! operation runs at most one zypper process at a time and blocks until it
//! exits; nothing is cached between calls.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::config::defaults::{
    CREDENTIALS_DIR, ZYPPER_BINARY, ZYPPER_EXIT_ZYPP_LOCKED, ZYPPER_INFO_EXIT_CODES,
};
use crate::core::command::ZypperOperation;
use crate::core::credentials::{Credentials, CredentialsLocation, CredentialsStore};
use crate::core::endpoints::RegistrationEndpoints;
use crate::core::product::Product;
use crate::core::repository::Repository;
use crate::core::service::Service;
use crate::core::setup::{SetupReport, SetupStep};
use crate::core::xml;
use crate::error::{ConnectError, ServiceSetupError, ZypperError};
use crate::infra::process::{CommandOutput, CommandRunner, ShellRunner};

/// Adapter configuration, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZypperConfig {
    /// Alternate filesystem root passed to zypper as `--root`
    pub root: Option<PathBuf>,
    /// Credentials directory, relative to `root`
    pub credentials_dir: PathBuf,
    /// Servers whose services count as installed by a registration client
    pub endpoints: RegistrationEndpoints,
}

impl Default for ZypperConfig {
    fn default() -> Self {
        Self {
            root: None,
            credentials_dir: PathBuf::from(CREDENTIALS_DIR),
            endpoints: RegistrationEndpoints::default(),
        }
    }
}

impl ZypperConfig {
    /// Default configuration targeting `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }
}

/// The package-manager adapter
#[derive(Debug)]
pub struct Zypper<R = ShellRunner> {
    runner: R,
    config: ZypperConfig,
    credentials: CredentialsStore,
}

impl Zypper<ShellRunner> {
    /// Adapter running the real zypper binary
    pub fn new(config: ZypperConfig) -> Self {
        Self::with_runner(config, ShellRunner::new().requiring(ZYPPER_BINARY))
    }
}

impl<R: CommandRunner> Zypper<R> {
    /// Adapter using a custom command runner
    pub fn with_runner(config: ZypperConfig, runner: R) -> Self {
        let credentials = CredentialsStore::with_dir(config.root.as_deref(), &config.credentials_dir);
        Self {
            runner,
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &ZypperConfig {
        &self.config
    }

    pub fn credentials_store(&self) -> &CredentialsStore {
        &self.credentials
    }

    /// Command line for `op` under this adapter's configuration
    pub fn command_line(&self, op: ZypperOperation<'_>) -> String {
        op.render(self.root())
    }

    fn root(&self) -> Option<&Path> {
        self.config.root.as_deref()
    }

    /// Run `op` and map its exit status
    fn execute(&self, op: ZypperOperation<'_>) -> Result<CommandOutput, ConnectError> {
        let command = self.command_line(op);
        tracing::debug!("Running {command}");

        let output = self.runner.capture(&command)?;
        check_exit_status(&command, &output)?;
        Ok(output)
    }

    fn execute_xml<T>(
        &self,
        op: ZypperOperation<'_>,
        parse: fn(&str) -> Result<Vec<T>, roxmltree::Error>,
    ) -> Result<Vec<T>, ConnectError> {
        let output = self.execute(op)?;
        parse(&output.stdout).map_err(|e| ConnectError::Parse {
            command: self.command_line(op),
            error: e.to_string(),
        })
    }

    // ============================================
    // Products
    // ============================================

    /// Installed products, in zypper's output order
    pub fn installed_products(&self) -> Result<Vec<Product>, ConnectError> {
        self.execute_xml(ZypperOperation::InstalledProducts, xml::parse_products)
    }

    /// First installed product flagged as base product
    pub fn base_product(&self) -> Result<Product, ConnectError> {
        first_base_product(self.installed_products()?)
    }

    /// Raw `zypper targetos` output, trimmed
    pub fn distro_target(&self) -> Result<String, ConnectError> {
        let output = self.execute(ZypperOperation::DistroTarget)?;
        Ok(output.stdout.trim().to_string())
    }

    // ============================================
    // Repositories
    // ============================================

    pub fn repositories(&self) -> Result<Vec<Repository>, ConnectError> {
        self.execute_xml(ZypperOperation::Repositories, xml::parse_repositories)
    }

    pub fn enable_repository(&self, alias: &str) -> Result<(), ConnectError> {
        self.modify_repository(ZypperOperation::EnableRepository(alias), alias)?;
        tracing::info!("Enabled repository {alias}");
        Ok(())
    }

    pub fn disable_repository(&self, alias: &str) -> Result<(), ConnectError> {
        self.modify_repository(ZypperOperation::DisableRepository(alias), alias)?;
        tracing::info!("Disabled repository {alias}");
        Ok(())
    }

    /// Any failure of `modifyrepo` means the alias is unknown to zypper
    fn modify_repository(&self, op: ZypperOperation<'_>, alias: &str) -> Result<(), ConnectError> {
        self.execute(op).map(drop).map_err(|e| {
            tracing::debug!("modifyrepo failed for {alias}: {e}");
            ZypperError::RepositoryNotFound {
                alias: alias.to_string(),
            }
            .into()
        })
    }

    pub fn refresh(&self) -> Result<(), ConnectError> {
        self.execute(ZypperOperation::Refresh)?;
        Ok(())
    }

    // ============================================
    // Services
    // ============================================

    pub fn services(&self) -> Result<Vec<Service>, ConnectError> {
        self.execute_xml(ZypperOperation::Services, xml::parse_services)
    }

    /// Add a `ris` service and make it usable
    ///
    /// Runs the steps of [`SetupStep::SEQUENCE`] in order. On failure the
    /// error names the failing step and the steps already done; those are
    /// not undone.
    pub fn add_service(&self, url: &str, name: &str) -> Result<SetupReport, ServiceSetupError> {
        let mut completed = Vec::with_capacity(SetupStep::SEQUENCE.len());
        let mut replaced_existing = false;

        for step in SetupStep::SEQUENCE {
            let result = match step {
                SetupStep::RemoveExisting => self
                    .remove_existing_service(name)
                    .map(|removed| replaced_existing = removed),
                SetupStep::Add => self.execute(ZypperOperation::AddService { url, name }).map(drop),
                SetupStep::EnableAutorefresh => self.enable_service_autorefresh(name),
                SetupStep::WriteCredentials => self.write_service_credentials(name).map(drop),
                SetupStep::RefreshServices => self.refresh_services(),
            };

            if let Err(source) = result {
                tracing::warn!(
                    "Setting up service {name} stopped at '{step}' after {} completed step(s)",
                    completed.len()
                );
                return Err(ServiceSetupError {
                    service: name.to_string(),
                    step,
                    completed,
                    source,
                });
            }
            completed.push(step);
        }

        tracing::info!("Added service {name} ({url})");
        Ok(SetupReport {
            service: name.to_string(),
            replaced_existing,
            completed,
        })
    }

    /// Remove a configured service named `name`; returns whether one existed
    fn remove_existing_service(&self, name: &str) -> Result<bool, ConnectError> {
        let exists = self
            .services()?
            .iter()
            .any(|service| service.alias() == name || service.name() == name);
        if exists {
            tracing::info!("Replacing existing service {name}");
            self.remove_service(name)?;
        }
        Ok(exists)
    }

    /// Remove a service and its credentials file
    pub fn remove_service(&self, name: &str) -> Result<(), ConnectError> {
        self.execute(ZypperOperation::RemoveService(name))?;
        tracing::info!("Removed service {name}");
        self.remove_service_credentials(name)?;
        Ok(())
    }

    /// Remove every service pointing at a known registration server
    ///
    /// Returns the removed services; others are left untouched.
    pub fn remove_all_suse_services(&self) -> Result<Vec<Service>, ConnectError> {
        let endpoints = &self.config.endpoints;
        let (registered, foreign): (Vec<Service>, Vec<Service>) = self
            .services()?
            .into_iter()
            .partition(|service| endpoints.is_known(service.url()));

        for service in &foreign {
            tracing::debug!("Keeping foreign service {} ({})", service.alias(), service.url());
        }
        for service in &registered {
            self.remove_service(service.alias())?;
        }
        Ok(registered)
    }

    pub fn enable_service_autorefresh(&self, name: &str) -> Result<(), ConnectError> {
        self.execute(ZypperOperation::EnableServiceAutorefresh(name))?;
        Ok(())
    }

    pub fn refresh_services(&self) -> Result<(), ConnectError> {
        self.execute(ZypperOperation::RefreshServices)?;
        Ok(())
    }

    // ============================================
    // Credentials
    // ============================================

    /// Delete the service's credential file; no-op when absent
    pub fn remove_service_credentials(&self, name: &str) -> Result<(), ConnectError> {
        self.credentials
            .remove(&CredentialsLocation::Service(name.to_string()))?;
        Ok(())
    }

    /// Credentials of the base registration
    pub fn system_credentials(&self) -> Result<Credentials, ConnectError> {
        Ok(self.credentials.read(&CredentialsLocation::Global)?)
    }

    /// Store the base registration credentials
    pub fn write_base_credentials(&self, username: &str, password: &str) -> Result<PathBuf, ConnectError> {
        let credentials = Credentials::new(username, password, CredentialsLocation::Global);
        Ok(self.credentials.write(&credentials)?)
    }

    /// Copy the system credentials to the file of service `name`
    pub fn write_service_credentials(&self, name: &str) -> Result<PathBuf, ConnectError> {
        let credentials = self
            .system_credentials()?
            .relocate(CredentialsLocation::Service(name.to_string()));
        Ok(self.credentials.write(&credentials)?)
    }
}

/// First product flagged as base product
pub fn first_base_product(products: Vec<Product>) -> Result<Product, ConnectError> {
    products
        .into_iter()
        .find(Product::is_base)
        .ok_or(ConnectError::CannotDetectBaseProduct)
}

/// Map zypper's exit status to an error
///
/// Informational exit codes count as success.
fn check_exit_status(command: &str, output: &CommandOutput) -> Result<(), ZypperError> {
    let code = output.exit_code;
    if code == 0 || ZYPPER_INFO_EXIT_CODES.contains(&code) {
        return Ok(());
    }

    let message = failure_message(output);
    if code == ZYPPER_EXIT_ZYPP_LOCKED {
        return Err(ZypperError::Locked {
            pid: lock_holder_pid(&message),
            message,
        });
    }

    Err(ZypperError::CommandFailed {
        command: command.to_string(),
        exit_code: code,
        message,
    })
}

fn failure_message(output: &CommandOutput) -> String {
    let stderr = output.stderr.trim();
    let message = if stderr.is_empty() {
        output.stdout.trim()
    } else {
        stderr
    };
    if message.is_empty() {
        format!("zypper exited with status {}", output.exit_code)
    } else {
        message.to_string()
    }
}

/// Extract the pid from "... locked by the application with pid 1234 (zypper)."
fn lock_holder_pid(message: &str) -> Option<u32> {
    let pid_regex = Regex::new(r"\bpid (\d+)").ok()?;
    pid_regex
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
