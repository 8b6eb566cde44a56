//! Sentinel detection for scraped fields.
//!
//! The upstream scrapers encode "unknown" with in-band values: a price of
//! `0.0` when extraction failed, and the literal string `"Model not found"`
//! (or a blank cell) for a missing model. These predicates are the only
//! place those sentinels are known; the rest of the crate works with
//! `Option` fields produced at the loading boundary and with
//! [`Listing::display_price`](crate::catalog::Listing::display_price).

/// Placeholder the scrapers emit when no model could be extracted.
pub const MODEL_NOT_FOUND: &str = "Model not found";

/// Returns true if the value is a real model name rather than a sentinel.
pub fn is_valid_model(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != MODEL_NOT_FOUND
}

/// Returns true if the value is a real price rather than the `0.0` sentinel.
pub fn is_valid_price(value: f64) -> bool {
    value.is_finite() && value != 0.0
}
