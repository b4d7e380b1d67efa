pub mod browse;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod error;
pub mod logging;
pub mod test_utils;

// Re-export the main types so consumers don't need the module paths
pub use cart::CartLedger;
pub use catalog::{Catalog, PropertyListing};
pub use crate::core::checkout::{CheckoutForm, CheckoutValidator};
pub use crate::core::filter::FilterCriteria;
pub use error::{RentalError, Result};

#[cfg(test)]
mod integration_tests {
    use std::process::Command;

    #[test]
    fn test_cli_help() {
        let output = Command::new("cargo")
            .args(["run", "--quiet", "--", "--help"])
            .output()
            .expect("Failed to execute command");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Rental Helper - Browse and book rental properties"));
        assert!(stdout.contains("browse"));
        assert!(stdout.contains("list"));
    }

    #[test]
    fn test_cli_version() {
        let output = Command::new("cargo")
            .args(["run", "--quiet", "--", "--version"])
            .output()
            .expect("Failed to execute command");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // The binary name in clap is "rental", not "rental-helper"
        assert!(stdout.contains("rental"));
        assert!(stdout.contains("0.1.0"));
    }

    #[test]
    fn test_list_command_help() {
        let output = Command::new("cargo")
            .args(["run", "--quiet", "--", "list", "--help"])
            .output()
            .expect("Failed to execute command");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("List catalog entries matching the given filters"));
        assert!(stdout.contains("--max-price"));
        assert!(stdout.contains("--location"));
    }
}
