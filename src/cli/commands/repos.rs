//! CLI implementation for repository commands

use anyhow::Result;

use crate::cli::output::{is_json, is_quiet, print_info, print_json, print_success};
use crate::core::Zypper;
use crate::infra::process::CommandRunner;

/// `suseconnect repos`
pub fn execute_list<R: CommandRunner>(zypper: &Zypper<R>) -> Result<()> {
    let repos = zypper.repositories()?;

    if is_json() {
        return print_json(&repos);
    }
    if is_quiet() {
        return Ok(());
    }
    if repos.is_empty() {
        print_info("No repositories defined");
        return Ok(());
    }

    for repo in &repos {
        let state = if repo.enabled() { "enabled" } else { "disabled" };
        println!(
            "{:<40} {:<8} prio {:<3} {}",
            repo.alias(),
            state,
            repo.priority(),
            repo.url()
        );
    }
    Ok(())
}

/// `suseconnect enable-repo <alias>`
pub fn execute_enable<R: CommandRunner>(zypper: &Zypper<R>, alias: &str) -> Result<()> {
    zypper.enable_repository(alias)?;
    print_success(&format!("Enabled repository {alias}"));
    Ok(())
}

/// `suseconnect disable-repo <alias>`
pub fn execute_disable<R: CommandRunner>(zypper: &Zypper<R>, alias: &str) -> Result<()> {
    zypper.disable_repository(alias)?;
    print_success(&format!("Disabled repository {alias}"));
    Ok(())
}
