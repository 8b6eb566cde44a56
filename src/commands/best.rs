//! Best-store recommendation command implementation.

use crate::catalog::Catalog;
use crate::config::Config;
use crate::format::Formatter;
use crate::query::{filter_by_title, recommend};
use anyhow::Result;
use tracing::info;

/// Recommends the cheapest listing matching a search term.
pub struct BestCommand {
    config: Config,
}

impl BestCommand {
    /// Creates a new best command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the recommendation and returns formatted output.
    ///
    /// The subset is every title match for the term, the way the original
    /// "Recommend Best Store" flow worked; price and store restrictions do
    /// not apply here. An empty subset is a normal outcome, rendered as a
    /// "nothing to recommend" affordance rather than an error.
    pub fn execute(&self, catalog: &Catalog, term: &str) -> Result<String> {
        let subset = filter_by_title(catalog.listings(), term);

        let formatter = Formatter::new(self.config.format);

        match recommend(&subset) {
            Some(pick) => {
                info!("Recommending {:?} from {} (of {} matches)", pick.title, pick.store, subset.len());
                Ok(formatter.format_recommendation(&subset, pick))
            }
            None => {
                info!("No listings match {:?}, nothing to recommend", term);
                Ok(match self.config.format {
                    crate::config::OutputFormat::Json => "{}".to_string(),
                    _ => "No listings match your search; nothing to recommend.".to_string(),
                })
            }
        }
    }
}
