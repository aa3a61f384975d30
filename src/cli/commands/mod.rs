//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod credentials;
pub mod products;
pub mod refresh;
pub mod repos;
pub mod services;
pub mod target;

use anyhow::Result;
use clap::Subcommand;

use crate::core::Zypper;
use crate::infra::process::CommandRunner;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List installed products
    Products {
        /// Show only the base product
        #[arg(long)]
        base: bool,
    },

    /// List configured repositories
    Repos,

    /// Enable a repository
    EnableRepo {
        /// Repository alias
        alias: String,
    },

    /// Disable a repository
    DisableRepo {
        /// Repository alias
        alias: String,
    },

    /// List configured services
    Services,

    /// Add a service and write its credentials
    AddService {
        /// Service URL
        url: String,

        /// Service name
        name: String,
    },

    /// Remove a service and its credentials
    RemoveService {
        /// Service name
        name: String,
    },

    /// Remove all services installed from a registration server
    Cleanup,

    /// Refresh repository metadata
    Refresh {
        /// Refresh services instead of repositories
        #[arg(long)]
        services: bool,
    },

    /// Print the distribution target
    Target,

    /// Store the system registration credentials
    WriteCredentials {
        /// Registration username
        #[arg(long)]
        username: String,

        /// Registration password
        #[arg(long, env = "SUSECONNECT_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Show where credentials are stored (never the password)
    ShowCredentials {
        /// Service whose credentials to show (system credentials if omitted)
        service: Option<String>,
    },
}

impl Commands {
    /// Execute the command
    pub fn run<R: CommandRunner>(self, zypper: &Zypper<R>) -> Result<()> {
        match self {
            Self::Products { base } => products::execute(zypper, base),
            Self::Repos => repos::execute_list(zypper),
            Self::EnableRepo { alias } => repos::execute_enable(zypper, &alias),
            Self::DisableRepo { alias } => repos::execute_disable(zypper, &alias),
            Self::Services => services::execute_list(zypper),
            Self::AddService { url, name } => services::execute_add(zypper, &url, &name),
            Self::RemoveService { name } => services::execute_remove(zypper, &name),
            Self::Cleanup => services::execute_cleanup(zypper),
            Self::Refresh { services } => refresh::execute(zypper, services),
            Self::Target => target::execute(zypper),
            Self::WriteCredentials { username, password } => {
                credentials::execute_write(zypper, &username, &password)
            }
            Self::ShowCredentials { service } => {
                credentials::execute_show(zypper, service.as_deref())
            }
        }
    }
}
