//! Test fixtures and data builders for consistent test data

use crate::catalog::{Catalog, PropertyListing};
use crate::core::checkout::{CheckoutForm, FIELD_EMAIL, FIELD_NAME, FIELD_PAYMENT_DETAILS};

/// Creates a generic listing with the given id.
pub fn sample_listing(id: u64) -> PropertyListing {
    PropertyListing {
        id,
        title: format!("Listing {id}"),
        description: "A test listing.".to_string(),
        price: 120.0,
        location: "Testville".to_string(),
        bedrooms: 2,
        amenities: vec!["WiFi".to_string()],
    }
}

/// Creates a listing with a specific price, for cart arithmetic tests.
pub fn listing_with_price(id: u64, price: f64) -> PropertyListing {
    PropertyListing {
        price,
        ..sample_listing(id)
    }
}

/// A small catalog with varied locations, prices, and amenities.
pub fn sample_catalog() -> Catalog {
    Catalog::from_listings(vec![
        PropertyListing {
            id: 1,
            title: "Harbor View".to_string(),
            description: "Waterfront flat.".to_string(),
            price: 300.0,
            location: "Seattle".to_string(),
            bedrooms: 2,
            amenities: vec!["WiFi".to_string(), "Parking".to_string()],
        },
        PropertyListing {
            id: 2,
            title: "Garden Cottage".to_string(),
            description: "Quiet and green.".to_string(),
            price: 150.0,
            location: "Portland".to_string(),
            bedrooms: 1,
            amenities: vec!["Garden".to_string()],
        },
        PropertyListing {
            id: 3,
            title: "City Loft".to_string(),
            description: "Downtown loft.".to_string(),
            price: 220.0,
            location: "Seattle".to_string(),
            bedrooms: 3,
            amenities: vec!["WiFi".to_string(), "Gym".to_string()],
        },
    ])
}

/// A checkout form filled with values that pass every rule.
pub fn filled_form() -> CheckoutForm {
    let mut form = CheckoutForm::new();
    form.set_field(FIELD_NAME, "Ada Lovelace");
    form.set_field(FIELD_EMAIL, "ada@example.com");
    form.set_field(FIELD_PAYMENT_DETAILS, "4242 4242 4242 4242");
    form
}
