//! Pure listing-filter logic
//!
//! This module contains the filter predicate and criteria handling that can
//! be tested in isolation without any terminal interaction.

use crate::catalog::PropertyListing;

/// The active set of filter constraints. Each dimension is independently
/// optional; an unset dimension places no constraint on listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub location: Option<String>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub amenity: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.location.is_none()
            && self.max_price.is_none()
            && self.bedrooms.is_none()
            && self.amenity.is_none()
    }

    /// Applies one raw input event to the criteria, leaving every other
    /// dimension untouched (merge-by-field).
    ///
    /// Empty input clears the named dimension. Unparseable numeric input
    /// also clears it: a malformed price or bedroom count means "no
    /// constraint", never an error.
    pub fn set_field(&mut self, field: &str, value: &str) {
        match field {
            "location" => self.location = non_empty(value),
            "max_price" => self.max_price = value.parse().ok(),
            "bedrooms" => self.bedrooms = value.parse().ok(),
            "amenity" => self.amenity = non_empty(value),
            _ => {
                tracing::debug!(field = field, "Ignoring unknown filter field");
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Applies the criteria to a sequence of listings, producing the matching
/// subset in the original order. Pure: the input is never mutated.
pub fn apply(listings: &[PropertyListing], criteria: &FilterCriteria) -> Vec<PropertyListing> {
    listings
        .iter()
        .filter(|listing| matches(listing, criteria))
        .cloned()
        .collect()
}

/// True iff the listing satisfies every constrained dimension.
pub fn matches(listing: &PropertyListing, criteria: &FilterCriteria) -> bool {
    let location_ok = criteria
        .location
        .as_deref()
        .is_none_or(|needle| listing.location.contains(needle));
    let price_ok = criteria.max_price.is_none_or(|max| listing.price <= max);
    let bedrooms_ok = criteria.bedrooms.is_none_or(|count| listing.bedrooms == count);
    let amenity_ok = criteria
        .amenity
        .as_deref()
        .is_none_or(|amenity| listing.has_amenity(amenity));

    location_ok && price_ok && bedrooms_ok && amenity_ok
}
