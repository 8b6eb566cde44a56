//! Catalog loading, data models, and field-validity policy.

pub mod features;
pub mod loader;
pub mod models;
pub mod validity;

pub use features::{encode_features, parse_features, FeaturesError};
pub use models::{Catalog, Listing};
pub use validity::{is_valid_model, is_valid_price, MODEL_NOT_FOUND};
