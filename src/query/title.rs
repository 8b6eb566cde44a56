//! Title search, the primary query operation.

use super::Filter;
use crate::catalog::Listing;

/// Selects the listings whose title contains `term`, case-insensitively.
///
/// An empty term is the identity: the whole catalog comes back, in order.
/// The result borrows from `catalog` and preserves its order.
pub fn filter_by_title<'a>(catalog: &'a [Listing], term: &str) -> Vec<&'a Listing> {
    if term.is_empty() {
        return catalog.iter().collect();
    }

    let needle = term.to_lowercase();
    catalog.iter().filter(|listing| listing.title_contains(&needle)).collect()
}

/// Filters listings by a search term in the title.
pub struct TitleFilter {
    term: String,
}

impl TitleFilter {
    /// Creates a new title filter. The term is matched case-insensitively.
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into().to_lowercase() }
    }
}

impl Filter for TitleFilter {
    fn matches(&self, listing: &Listing) -> bool {
        self.term.is_empty() || listing.title_contains(&self.term)
    }

    fn description(&self) -> String {
        if self.term.is_empty() {
            "Title: any".to_string()
        } else {
            format!("Title contains: {}", self.term)
        }
    }
}
