//! Store restriction filter.

use super::Filter;
use crate::catalog::Listing;

/// Restricts listings to a set of store names, case-insensitively.
pub struct StoreFilter {
    stores: Vec<String>,
}

impl StoreFilter {
    /// Creates a new store filter.
    pub fn new(stores: Vec<String>) -> Self {
        Self { stores: stores.into_iter().map(|s| s.to_lowercase()).collect() }
    }
}

impl Filter for StoreFilter {
    fn matches(&self, listing: &Listing) -> bool {
        if self.stores.is_empty() {
            return true;
        }
        let store = listing.store.to_lowercase();
        self.stores.iter().any(|s| *s == store)
    }

    fn description(&self) -> String {
        if self.stores.is_empty() {
            "Store: any".to_string()
        } else {
            format!("Store: {}", self.stores.join(", "))
        }
    }
}
