//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod analytics;
pub mod applications;
pub mod catalog;
pub mod params;
pub mod status;
pub mod views;

pub use analytics::get_analytics;
pub use applications::{get_application, list_applications};
pub use catalog::{get_entity, list_entities};
pub use status::{health, root};
