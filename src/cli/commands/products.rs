//! CLI implementation for `suseconnect products`

use anyhow::{Context, Result};

use crate::cli::output::{is_json, is_quiet, print_info, print_json};
use crate::core::Zypper;
use crate::infra::process::CommandRunner;

/// Execute the products command
pub fn execute<R: CommandRunner>(zypper: &Zypper<R>, base_only: bool) -> Result<()> {
    let products = if base_only {
        vec![zypper.base_product().context("Failed to detect the base product")?]
    } else {
        zypper
            .installed_products()
            .context("Failed to list installed products")?
    };

    if is_json() {
        return print_json(&products);
    }
    if is_quiet() {
        return Ok(());
    }

    if products.is_empty() {
        print_info("No installed products");
        return Ok(());
    }

    for product in &products {
        let base = if product.is_base() { " [base]" } else { "" };
        if product.summary().is_empty() {
            println!("{product}{base}");
        } else {
            println!("{product}{base}  {}", product.summary());
        }
    }
    Ok(())
}
