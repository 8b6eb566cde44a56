//! Data models for GPU listings and the session catalog.

use serde::{Deserialize, Serialize};

use super::validity::is_valid_price;

/// One scraped product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Product title as scraped; the primary match key.
    pub title: String,
    /// Scraped price. `None` when the source cell was empty or unparseable.
    /// The upstream `0.0` "not extracted" sentinel is kept as `Some(0.0)` so
    /// price comparisons see exactly what the scraper recorded.
    pub price: Option<f64>,
    /// Extracted GPU model, if the scraper found one.
    pub model: Option<String>,
    /// Source marketplace.
    pub store: String,
    /// Short feature strings decoded from the source cell.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Listing {
    /// Returns the price suitable for ordering comparisons, if any.
    ///
    /// Non-finite values never take part in a comparison; the sentinel
    /// `0.0` does, matching the upstream recommendation behavior.
    pub fn comparable_price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite())
    }

    /// Returns the price suitable for display, if any.
    ///
    /// Suppresses the `0.0` sentinel; a card without a Price line means
    /// "price unknown", not "free".
    pub fn display_price(&self) -> Option<f64> {
        self.price.filter(|&p| is_valid_price(p))
    }

    /// Case-insensitive substring match against the title.
    ///
    /// `needle` must already be lowercased by the caller.
    pub(crate) fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }
}

/// The full in-memory collection of listings for a session.
///
/// Loaded once per invocation and never mutated afterwards; every search and
/// recommendation is recomputed from this snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Creates a catalog from already-normalized listings.
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Returns all listings in source order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Returns the number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Returns true if the catalog holds no listings.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Returns the distinct store names with their listing counts, in order
    /// of first appearance.
    pub fn store_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for listing in &self.listings {
            match counts.iter_mut().find(|(store, _)| *store == listing.store) {
                Some((_, count)) => *count += 1,
                None => counts.push((listing.store.clone(), 1)),
            }
        }
        counts
    }
}
