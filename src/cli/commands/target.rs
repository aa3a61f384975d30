//! CLI implementation for `suseconnect target`

use anyhow::Result;

use crate::cli::output::{is_json, print_json};
use crate::core::Zypper;
use crate::infra::process::CommandRunner;

/// Execute the target command
pub fn execute<R: CommandRunner>(zypper: &Zypper<R>) -> Result<()> {
    let target = zypper.distro_target()?;
    if is_json() {
        return print_json(&serde_json::json!({ "target": target }));
    }
    println!("{target}");
    Ok(())
}
