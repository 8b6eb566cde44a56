//! Search command implementation.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::format::Formatter;
use crate::query::{recommend, FilterChainBuilder};
use anyhow::Result;
use tracing::{debug, info};

/// Executes a catalog search.
pub struct SearchCommand {
    config: Config,
    with_best: bool,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config, with_best: false }
    }

    /// Also prints the best-store recommendation for the subset.
    pub fn with_best(mut self, enabled: bool) -> Self {
        self.with_best = enabled;
        self
    }

    /// Executes the search and returns formatted output.
    ///
    /// An empty term shows the whole catalog. The recommendation, when
    /// requested, is computed over the full filtered subset even when
    /// `max_results` truncates the display.
    pub fn execute(&self, catalog: &Catalog, term: &str) -> Result<String> {
        info!("Searching for: {:?}", term);

        let filters = FilterChainBuilder::new()
            .term(term)
            .price_range(self.config.min_price, self.config.max_price)
            .stores(self.config.stores.clone())
            .build();

        if !filters.is_empty() {
            debug!("Active filters: {}", filters.descriptions().join(", "));
        }

        let subset = filters.apply(catalog.listings());
        info!("Found {} listings matching criteria", subset.len());

        let formatter = Formatter::new(self.config.format);

        let mut shown = subset.clone();
        if let Some(max) = self.config.max_results {
            shown.truncate(max);
        }

        let mut output = formatter.format_listings(&shown);

        if self.with_best {
            if let Some(pick) = recommend(&subset) {
                output.push_str("\n\n");
                output.push_str(&formatter.format_recommendation(&subset, pick));
            }
        }

        Ok(output)
    }
}
