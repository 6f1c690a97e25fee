//! Application layer
//!
//! Contains the read use cases.
//! Services coordinate between the HTTP layer and the repository ports.

pub mod analytics_service;
pub mod query_service;

pub use analytics_service::{AnalyticsService, EntityCounts};
pub use query_service::QueryService;
