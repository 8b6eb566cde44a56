//! CSV catalog loading.
//!
//! The cleaned dataset is a CSV with `title, price, model, store, features`
//! columns (extra columns are ignored). Cells are normalized here so the
//! query layer only ever sees `Option` fields: sentinel and malformed values
//! never leave the loading boundary. Per-row problems are logged and
//! recovered; only an unreadable file or a broken header is fatal.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use super::features::parse_features;
use super::models::{Catalog, Listing};
use super::validity::is_valid_model;

impl Catalog {
    /// Loads the catalog from a CSV file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from: {}", path.display());

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        Self::from_csv_str(&text)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Parses catalog CSV text directly.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let mut rows = parse_rows(text);
        if rows.is_empty() {
            bail!("catalog has no header row");
        }

        let columns = Columns::from_header(&rows.remove(0))?;

        let listings: Vec<Listing> =
            rows.iter().enumerate().map(|(i, row)| columns.listing(row, i + 2)).collect();

        debug!("Loaded {} listings", listings.len());
        Ok(Catalog::new(listings))
    }
}

/// Column positions resolved from the header row.
struct Columns {
    title: usize,
    store: usize,
    price: Option<usize>,
    model: Option<usize>,
    features: Option<usize>,
}

impl Columns {
    fn from_header(header: &[String]) -> Result<Self> {
        let find = |name: &str| header.iter().position(|h| h.trim().eq_ignore_ascii_case(name));

        let Some(title) = find("title") else {
            bail!("catalog header has no 'title' column");
        };
        let Some(store) = find("store") else {
            bail!("catalog header has no 'store' column");
        };

        Ok(Self {
            title,
            store,
            price: find("price"),
            model: find("model"),
            features: find("features"),
        })
    }

    /// Builds a listing from one data row, recovering from bad cells.
    ///
    /// `line` is the 1-based source line, for log messages only.
    fn listing(&self, row: &[String], line: usize) -> Listing {
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).map_or("", String::as_str);

        let title = cell(Some(self.title)).trim().to_string();
        let store = cell(Some(self.store)).trim().to_string();

        let price = match cell(self.price).trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                Ok(_) => None,
                Err(_) => {
                    warn!("line {}: unparseable price {:?}, treating as unknown", line, raw);
                    None
                }
            },
        };

        let model = Some(cell(self.model))
            .filter(|raw| is_valid_model(raw))
            .map(|raw| raw.trim().to_string());

        let features = match parse_features(cell(self.features)) {
            Ok(features) => features,
            Err(e) => {
                warn!("line {}: failed to decode features for {:?}: {}", line, title, e);
                Vec::new()
            }
        };

        Listing { title, price, model, store, features }
    }
}

/// Minimal quote-aware CSV row parser (doubled-quote escapes, CRLF
/// tolerant). Blank lines are skipped.
fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => row.push(std::mem::take(&mut field)),
            '\r' | '\n' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                if row.iter().any(|cell| !cell.is_empty()) {
                    rows.push(std::mem::take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a final row when the file does not end with a newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        if row.iter().any(|cell| !cell.is_empty()) {
            rows.push(row);
        }
    }

    rows
}
