//! CLI implementation for service commands
//!
//! Listing, adding and removing services. Adding reports how far the setup
//! got when one of its steps fails, since earlier steps are not undone.

use anyhow::{Context, Result};

use crate::cli::output::{
    create_spinner, is_json, is_quiet, print_detail, print_info, print_json, print_success,
    print_warning,
};
use crate::core::Zypper;
use crate::infra::process::CommandRunner;

/// `suseconnect services`
pub fn execute_list<R: CommandRunner>(zypper: &Zypper<R>) -> Result<()> {
    let services = zypper.services()?;

    if is_json() {
        let entries: Vec<_> = services
            .iter()
            .map(|service| {
                serde_json::json!({
                    "service": service,
                    "registration_server": zypper.config().endpoints.classify(service.url()),
                })
            })
            .collect();
        return print_json(&entries);
    }
    if is_quiet() {
        return Ok(());
    }
    if services.is_empty() {
        print_info("No services defined");
        return Ok(());
    }

    for service in &services {
        let origin = zypper
            .config()
            .endpoints
            .classify(service.url())
            .map(|kind| format!(" [{kind}]"))
            .unwrap_or_default();
        println!("{:<30} {}{origin}", service.alias(), service.url());
    }
    Ok(())
}

/// `suseconnect add-service <url> <name>`
pub fn execute_add<R: CommandRunner>(zypper: &Zypper<R>, url: &str, name: &str) -> Result<()> {
    let spinner = create_spinner(&format!("Adding service {name}..."));
    let result = zypper.add_service(url, name);
    spinner.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(err) => {
            if !is_json() {
                for step in &err.completed {
                    print_detail(&format!("done: {step}"));
                }
                if !err.completed.is_empty() {
                    print_warning("Completed steps were not rolled back");
                }
            }
            return Err(err.into());
        }
    };

    if is_json() {
        return print_json(&report);
    }
    if report.replaced_existing {
        print_info(&format!("Replaced existing service {name}"));
    }
    print_success(&format!("Added service {name}"));
    Ok(())
}

/// `suseconnect remove-service <name>`
pub fn execute_remove<R: CommandRunner>(zypper: &Zypper<R>, name: &str) -> Result<()> {
    zypper
        .remove_service(name)
        .with_context(|| format!("Failed to remove service '{name}'"))?;
    print_success(&format!("Removed service {name}"));
    Ok(())
}

/// `suseconnect cleanup`
pub fn execute_cleanup<R: CommandRunner>(zypper: &Zypper<R>) -> Result<()> {
    let removed = zypper
        .remove_all_suse_services()
        .context("Failed to remove registration services")?;

    if is_json() {
        return print_json(&removed);
    }
    if removed.is_empty() {
        print_info("No registration services found");
        return Ok(());
    }
    for service in &removed {
        print_success(&format!("Removed service {}", service.alias()));
    }
    Ok(())
}
