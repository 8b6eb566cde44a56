//! market-finder - Fast GPU listing search and best-store recommendation CLI
//!
//! Loads a scraped multi-store GPU catalog from a cleaned CSV snapshot,
//! filters it by title, and recommends the store with the cheapest matching
//! listing.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod format;
pub mod query;

pub use catalog::{Catalog, Listing};
pub use config::Config;
pub use query::{filter_by_title, recommend};
