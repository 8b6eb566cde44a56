//! Output formatting for listings (table, JSON, markdown, CSV).
//!
//! Field suppression happens here: a sentinel price loses its Price line and
//! a missing model loses its Model line, in every format. The CSV output
//! round-trips the loader's input format.

use crate::catalog::{encode_features, Listing};
use crate::config::OutputFormat;
use crate::query::max_savings;

/// Formats listings for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single listing as a standalone card.
    pub fn format_listing(&self, listing: &Listing) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(listing),
            OutputFormat::Table => self.table_single(listing),
            OutputFormat::Markdown => self.markdown_single(listing),
            OutputFormat::Csv => self.csv_listings(&[listing]),
        }
    }

    /// Formats a subset of listings.
    pub fn format_listings(&self, listings: &[&Listing]) -> String {
        if listings.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => csv_header(),
                _ => "No listings match your search.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_listings(listings),
            OutputFormat::Table => self.table_listings(listings),
            OutputFormat::Markdown => self.markdown_listings(listings),
            OutputFormat::Csv => self.csv_listings(listings),
        }
    }

    /// Formats the best-store recommendation for a subset.
    ///
    /// `subset` is only used for the savings summary; `pick` is the
    /// recommended listing within it.
    pub fn format_recommendation(&self, subset: &[&Listing], pick: &Listing) -> String {
        match self.format {
            OutputFormat::Json => self.json_single(pick),
            OutputFormat::Csv => self.csv_listings(&[pick]),
            OutputFormat::Markdown => {
                let mut out = format!("## 🏆 Best store: {}\n\n", pick.store);
                out.push_str(&self.markdown_single(pick));
                if let Some(savings) = max_savings(subset, pick) {
                    out.push_str(&format!(
                        "\n\n*Up to {:.2} cheaper than the priciest match.*",
                        savings
                    ));
                }
                out
            }
            OutputFormat::Table => {
                let mut lines = vec![format!("🏆 Best store: {}", pick.store)];
                lines.push("-".repeat(40));
                lines.push(self.table_single(pick));
                if let Some(savings) = max_savings(subset, pick) {
                    lines.push(String::new());
                    lines.push(format!("Up to {:.2} cheaper than the priciest match.", savings));
                }
                lines.join("\n")
            }
        }
    }

    // JSON formatting

    fn json_single(&self, listing: &Listing) -> String {
        serde_json::to_string_pretty(listing).unwrap_or_else(|_| "{}".to_string())
    }

    fn json_listings(&self, listings: &[&Listing]) -> String {
        serde_json::to_string_pretty(listings).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_single(&self, listing: &Listing) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Title:   {}", listing.title));

        if let Some(price) = listing.display_price() {
            lines.push(format!("Price:   {:.2}", price));
        }

        if let Some(model) = &listing.model {
            lines.push(format!("Model:   {}", model));
        }

        lines.push(format!("Store:   {}", listing.store));

        if !listing.features.is_empty() {
            lines.push("Features:".to_string());
            for feature in &listing.features {
                lines.push(format!("  - {}", feature));
            }
        }

        lines.join("\n")
    }

    fn table_listings(&self, listings: &[&Listing]) -> String {
        let store_width = 15;
        let price_width = 10;
        let model_width = 20;
        let title_width = 50;

        let mut lines = Vec::new();

        // Header
        lines.push(format!(
            "{:<store_width$}  {:<price_width$}  {:<model_width$}  {}",
            "Store", "Price", "Model", "Title"
        ));
        lines.push(format!(
            "{:-<store_width$}  {:-<price_width$}  {:-<model_width$}  {:-<title_width$}",
            "", "", "", ""
        ));

        // Rows
        for listing in listings {
            let price_str = match listing.display_price() {
                Some(p) => format!("{:.2}", p),
                None => "N/A".to_string(),
            };

            let model_str = match &listing.model {
                Some(m) => truncate(m, model_width),
                None => "-".to_string(),
            };

            let title = truncate(&listing.title, title_width);

            lines.push(format!(
                "{:<store_width$}  {:>price_width$}  {:<model_width$}  {}",
                truncate(&listing.store, store_width),
                price_str,
                model_str,
                title
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} listings", listings.len()));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, listing: &Listing) -> String {
        let mut lines = Vec::new();

        lines.push(format!("### {}", listing.title));
        lines.push(String::new());

        if let Some(price) = listing.display_price() {
            lines.push(format!("- **Price:** {:.2}", price));
        }

        if let Some(model) = &listing.model {
            lines.push(format!("- **Model:** {}", model));
        }

        lines.push(format!("- **Store:** {}", listing.store));

        if !listing.features.is_empty() {
            lines.push("- **Features:**".to_string());
            for feature in &listing.features {
                lines.push(format!("  - {}", feature));
            }
        }

        lines.join("\n")
    }

    fn markdown_listings(&self, listings: &[&Listing]) -> String {
        let mut lines = Vec::new();

        lines.push("| Store | Price | Model | Title |".to_string());
        lines.push("|-------|-------|-------|-------|".to_string());

        for listing in listings {
            let price_str = match listing.display_price() {
                Some(p) => format!("{:.2}", p),
                None => "N/A".to_string(),
            };

            let model_str = listing.model.as_deref().unwrap_or("-");
            let title = truncate(&listing.title, 40);

            lines.push(format!(
                "| {} | {} | {} | {} |",
                listing.store, price_str, model_str, title
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} listings found*", listings.len()));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_listings(&self, listings: &[&Listing]) -> String {
        let mut lines = Vec::new();
        lines.push(csv_header());

        for listing in listings {
            let price = listing.price.map(|p| p.to_string()).unwrap_or_default();
            let model = listing.model.clone().unwrap_or_default();
            let features = if listing.features.is_empty() {
                String::new()
            } else {
                encode_features(&listing.features)
            };

            let cells = [
                listing.title.as_str(),
                price.as_str(),
                model.as_str(),
                listing.store.as_str(),
                features.as_str(),
            ];
            lines.push(cells.map(csv_cell).join(","));
        }

        lines.join("\n")
    }
}

fn csv_header() -> String {
    "title,price,model,store,features".to_string()
}

/// Quotes a CSV cell when it contains a separator, quote, or newline.
fn csv_cell(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn make_listing(title: &str, price: Option<f64>, model: Option<&str>, store: &str) -> Listing {
        Listing {
            title: title.to_string(),
            price,
            model: model.map(str::to_string),
            store: store.to_string(),
            features: Vec::new(),
        }
    }

    fn make_pick() -> Listing {
        Listing {
            title: "RTX 4060".to_string(),
            price: Some(329.0),
            model: Some("RTX 4060".to_string()),
            store: "Store B".to_string(),
            features: vec!["8GB VRAM".to_string(), "PCIe 4.0".to_string()],
        }
    }

    #[test]
    fn test_table_single_full() {
        let formatter = Formatter::new(OutputFormat::Table);
        let output = formatter.format_listing(&make_pick());

        assert!(output.contains("Title:   RTX 4060"));
        assert!(output.contains("Price:   329.00"));
        assert!(output.contains("Model:   RTX 4060"));
        assert!(output.contains("Store:   Store B"));
        assert!(output.contains("- 8GB VRAM"));
        assert!(output.contains("- PCIe 4.0"));
    }

    #[test]
    fn test_sentinel_price_suppressed() {
        let formatter = Formatter::new(OutputFormat::Table);
        let listing = make_listing("Mystery", Some(0.0), None, "Store A");
        let output = formatter.format_listing(&listing);

        assert!(!output.contains("Price:"));
        assert!(!output.contains("Model:"));
        assert!(output.contains("Store:   Store A"));
    }

    #[test]
    fn test_table_listings_grid() {
        let formatter = Formatter::new(OutputFormat::Table);
        let a = make_listing("RTX 4060 Ti", Some(399.0), Some("RTX 4060 Ti"), "Store A");
        let b = make_listing("RTX 4060", Some(0.0), None, "Store B");

        let output = formatter.format_listings(&[&a, &b]);
        assert!(output.contains("Store A"));
        assert!(output.contains("399.00"));
        assert!(output.contains("N/A")); // sentinel price in grid
        assert!(output.contains("Total: 2 listings"));
    }

    #[test]
    fn test_empty_affordances() {
        assert_eq!(
            Formatter::new(OutputFormat::Table).format_listings(&[]),
            "No listings match your search."
        );
        assert_eq!(Formatter::new(OutputFormat::Json).format_listings(&[]), "[]");
        assert_eq!(
            Formatter::new(OutputFormat::Csv).format_listings(&[]),
            "title,price,model,store,features"
        );
    }

    #[test]
    fn test_json_listings() {
        let formatter = Formatter::new(OutputFormat::Json);
        let pick = make_pick();
        let output = formatter.format_listings(&[&pick]);

        assert!(output.starts_with('['));
        assert!(output.contains("RTX 4060"));
        assert!(output.contains("8GB VRAM"));
    }

    #[test]
    fn test_markdown_listings() {
        let formatter = Formatter::new(OutputFormat::Markdown);
        let pick = make_pick();
        let output = formatter.format_listings(&[&pick]);

        assert!(output.contains("| Store | Price | Model | Title |"));
        assert!(output.contains("| Store B | 329.00 | RTX 4060 | RTX 4060 |"));
        assert!(output.contains("*1 listings found*"));
    }

    #[test]
    fn test_recommendation_card() {
        let formatter = Formatter::new(OutputFormat::Table);
        let expensive = make_listing("RTX 4060 Ti", Some(399.0), None, "Store A");
        let pick = make_pick();

        let output = formatter.format_recommendation(&[&expensive, &pick], &pick);
        assert!(output.contains("Best store: Store B"));
        assert!(output.contains("Price:   329.00"));
        assert!(output.contains("Up to 70.00 cheaper"));
    }

    #[test]
    fn test_recommendation_card_no_savings_line() {
        let formatter = Formatter::new(OutputFormat::Table);
        let pick = make_pick();

        let output = formatter.format_recommendation(&[&pick], &pick);
        assert!(output.contains("Best store: Store B"));
        assert!(!output.contains("cheaper than"));
    }

    #[test]
    fn test_csv_round_trips_loader() {
        let formatter = Formatter::new(OutputFormat::Csv);
        let pick = make_pick();
        let sentinel = make_listing("Mystery, with comma", Some(0.0), None, "Store A");

        let csv = formatter.format_listings(&[&pick, &sentinel]);
        let catalog = Catalog::from_csv_str(&csv).unwrap();

        assert_eq!(catalog.len(), 2);
        let reloaded = &catalog.listings()[0];
        assert_eq!(reloaded.title, pick.title);
        assert_eq!(reloaded.price, pick.price);
        assert_eq!(reloaded.model, pick.model);
        assert_eq!(reloaded.features, pick.features);

        let reloaded = &catalog.listings()[1];
        assert_eq!(reloaded.title, "Mystery, with comma");
        assert_eq!(reloaded.price, Some(0.0));
        assert_eq!(reloaded.model, None);
        assert!(reloaded.features.is_empty());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 11), "exactly ten");
        assert_eq!(truncate("a very long product title", 10), "a very ...");
    }
}
