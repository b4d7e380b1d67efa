//! Custom assertions shared across test modules

use std::collections::HashMap;

use crate::catalog::PropertyListing;

/// Asserts that the listings carry exactly the expected ids, in order.
pub fn assert_listing_ids(listings: &[PropertyListing], expected: &[u64]) {
    let actual: Vec<u64> = listings.iter().map(|l| l.id).collect();
    assert_eq!(
        actual, expected,
        "listing ids {actual:?} did not match expected {expected:?}"
    );
}

/// Asserts that the validation map contains a single entry: the given
/// field with the given message.
pub fn assert_only_error(errors: &HashMap<String, String>, field: &str, message: &str) {
    assert_eq!(
        errors.len(),
        1,
        "expected exactly one error, got {errors:?}"
    );
    assert_eq!(
        errors.get(field).map(String::as_str),
        Some(message),
        "expected {field}: {message}, got {errors:?}"
    );
}
