//! CLI implementation for `suseconnect refresh`

use anyhow::{Context, Result};

use crate::cli::output::{create_spinner, print_success};
use crate::core::Zypper;
use crate::infra::process::CommandRunner;

/// Execute the refresh command
pub fn execute<R: CommandRunner>(zypper: &Zypper<R>, services: bool) -> Result<()> {
    let what = if services { "services" } else { "repositories" };
    let spinner = create_spinner(&format!("Refreshing {what}..."));

    let result = if services {
        zypper.refresh_services()
    } else {
        zypper.refresh()
    };
    spinner.finish_and_clear();

    result.with_context(|| format!("Failed to refresh {what}"))?;
    print_success(&format!("Refreshed {what}"));
    Ok(())
}
