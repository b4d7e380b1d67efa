use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rental_helper=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rental_helper=info,warn,error"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log where the catalog came from and how many listings it holds
pub fn log_catalog_loaded(source: &str, count: usize) {
    tracing::info!(source = source, count = count, "Catalog loaded");
}

/// Log a single filter input event
pub fn log_filter_change(field: &str, value: &str) {
    tracing::debug!(field = field, value = value, "Filter updated");
}

/// Log cart mutations
pub fn log_cart_change(action: &str, listing_id: u64, cart_total: f64) {
    tracing::info!(
        action = action,
        listing_id = listing_id,
        cart_total = cart_total,
        "Cart updated"
    );
}

/// Log a checkout validation pass
pub fn log_validation_result(field_errors: usize) {
    tracing::debug!(field_errors = field_errors, "Checkout form validated");
}

/// Log a successful checkout submission. A downstream booking
/// integration would consume this event; the CLI itself only records it.
pub fn log_submission(name: &str, email: &str, payment_details: &str, total: f64) {
    tracing::info!(
        name = name,
        email = email,
        payment_details = payment_details,
        total = total,
        "Checkout submitted"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_verbose() {
        // This test ensures the function doesn't panic
        let result = init_logging(true);
        // It might fail if already initialized, which is ok
        let _ = result;
    }

    #[test]
    fn test_init_logging_normal() {
        let result = init_logging(false);
        // It might fail if already initialized, which is ok
        let _ = result;
    }

    #[test]
    fn test_logging_functions() {
        // Test that logging functions don't panic
        log_catalog_loaded("builtin", 2);
        log_filter_change("location", "New York");
        log_cart_change("add", 1, 200.0);
        log_cart_change("remove", 1, 0.0);
        log_validation_result(0);
        log_validation_result(3);
        log_submission("Ada", "ada@example.com", "4242", 300.0);
    }
}
