//! The property catalog: immutable reference data for browsing.
//!
//! Listings are created once at startup, either from the built-in demo
//! data or from a user-supplied JSON file, and are never mutated
//! afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{RentalError, Result};

/// An immutable rental property record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub bedrooms: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl PropertyListing {
    /// Exact-match amenity lookup.
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

/// The fixed, ordered collection of listings available for browsing.
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<PropertyListing>,
}

impl Catalog {
    /// The built-in demo catalog.
    pub fn builtin() -> Self {
        Self {
            listings: vec![
                PropertyListing {
                    id: 1,
                    title: "Beautiful House".to_string(),
                    description: "A lovely house with a great view.".to_string(),
                    price: 200.0,
                    location: "New York".to_string(),
                    bedrooms: 3,
                    amenities: vec!["WiFi".to_string(), "Pool".to_string()],
                },
                PropertyListing {
                    id: 2,
                    title: "Cozy Apartment".to_string(),
                    description: "A small, cozy apartment.".to_string(),
                    price: 100.0,
                    location: "San Francisco".to_string(),
                    bedrooms: 2,
                    amenities: vec!["WiFi".to_string()],
                },
            ],
        }
    }

    /// Load a catalog from a JSON file containing an array of listings.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            RentalError::catalog_error(
                path.display().to_string(),
                format!("failed to read file: {e}"),
            )
        })?;

        let listings: Vec<PropertyListing> = serde_json::from_str(&raw).map_err(|e| {
            RentalError::catalog_error(path.display().to_string(), format!("invalid JSON: {e}"))
        })?;

        let catalog = Self { listings };
        catalog.check_integrity(&path.display().to_string())?;
        Ok(catalog)
    }

    /// Build a catalog directly from listings. Used by tests and embedders.
    pub fn from_listings(listings: Vec<PropertyListing>) -> Self {
        Self { listings }
    }

    // Listing ids must be unique and prices non-negative.
    fn check_integrity(&self, source: &str) -> Result<()> {
        let mut seen = HashSet::new();
        for listing in &self.listings {
            if !seen.insert(listing.id) {
                return Err(RentalError::catalog_error(
                    source,
                    format!("duplicate listing id: {}", listing.id),
                ));
            }
            if listing.price < 0.0 {
                return Err(RentalError::catalog_error(
                    source,
                    format!("listing {} has a negative price", listing.id),
                ));
            }
        }
        Ok(())
    }

    pub fn listings(&self) -> &[PropertyListing] {
        &self.listings
    }

    pub fn find(&self, id: u64) -> Option<&PropertyListing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
