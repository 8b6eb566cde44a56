//! Listing queries: composable filters over the catalog plus the
//! best-store recommendation.
//!
//! Filters borrow listings from the immutable catalog snapshot; a query
//! result is an order-preserving subsequence of the catalog, never a copy.

pub mod price;
pub mod recommend;
pub mod store;
pub mod title;

use crate::catalog::Listing;

pub use price::PriceFilter;
pub use recommend::{max_savings, recommend};
pub use store::StoreFilter;
pub use title::{filter_by_title, TitleFilter};

/// Trait for filtering listings.
pub trait Filter: Send + Sync {
    /// Returns true if the listing passes the filter.
    fn matches(&self, listing: &Listing) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a listing passes all filters.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.filters.iter().all(|f| f.matches(listing))
    }

    /// Selects the listings that pass all filters, preserving order.
    ///
    /// An empty chain is the identity: every listing survives.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from configuration.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a title search term (no-op for an empty term).
    pub fn term(mut self, term: &str) -> Self {
        if !term.is_empty() {
            self.chain.add(TitleFilter::new(term));
        }
        self
    }

    /// Adds a price range filter.
    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        if min.is_some() || max.is_some() {
            self.chain.add(PriceFilter::new(min, max));
        }
        self
    }

    /// Adds a store restriction filter.
    pub fn stores(mut self, stores: Vec<String>) -> Self {
        if !stores.is_empty() {
            self.chain.add(StoreFilter::new(stores));
        }
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing(title: &str, price: Option<f64>, store: &str) -> Listing {
        Listing {
            title: title.to_string(),
            price,
            model: None,
            store: store.to_string(),
            features: Vec::new(),
        }
    }

    fn make_catalog() -> Vec<Listing> {
        vec![
            make_listing("RTX 4060 Ti", Some(399.0), "Store A"),
            make_listing("RTX 4060", Some(329.0), "Store B"),
            make_listing("RTX 3060", Some(250.0), "Store C"),
        ]
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let catalog = make_catalog();
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);

        let subset = chain.apply(&catalog);
        assert_eq!(subset.len(), 3);
        assert_eq!(subset[0].title, "RTX 4060 Ti");
        assert_eq!(subset[2].title, "RTX 3060");
    }

    #[test]
    fn test_chain_combines_filters() {
        let catalog = make_catalog();
        let mut chain = FilterChain::new();
        chain.add(TitleFilter::new("4060"));
        chain.add(PriceFilter::new(Some(350.0), None));

        assert_eq!(chain.len(), 2);
        let subset = chain.apply(&catalog);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].title, "RTX 4060 Ti");
    }

    #[test]
    fn test_chain_preserves_order() {
        let catalog = make_catalog();
        let mut chain = FilterChain::new();
        chain.add(TitleFilter::new("rtx"));

        let subset = chain.apply(&catalog);
        let titles: Vec<&str> = subset.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["RTX 4060 Ti", "RTX 4060", "RTX 3060"]);
    }

    #[test]
    fn test_builder() {
        let chain = FilterChainBuilder::new()
            .term("4060")
            .price_range(Some(100.0), Some(500.0))
            .stores(vec!["Store B".to_string()])
            .build();

        assert_eq!(chain.len(), 3);

        let catalog = make_catalog();
        let subset = chain.apply(&catalog);
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].store, "Store B");
    }

    #[test]
    fn test_builder_no_filters_when_unset() {
        let chain = FilterChainBuilder::new()
            .term("")
            .price_range(None, None)
            .stores(Vec::new())
            .build();
        assert!(chain.is_empty());
    }

    #[test]
    fn test_descriptions() {
        let chain = FilterChainBuilder::new()
            .term("4060")
            .price_range(Some(100.0), None)
            .stores(vec!["Store A".to_string()])
            .build();

        let descriptions = chain.descriptions();
        assert_eq!(descriptions.len(), 3);
        assert!(descriptions[0].contains("Title"));
        assert!(descriptions[1].contains("Price"));
        assert!(descriptions[2].contains("Store"));
    }
}
