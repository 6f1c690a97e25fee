//! Domain layer
//!
//! Contains the credit-risk model with no storage or HTTP dependencies.
//! - `entities`: Domain models for applications, branches and applicants
//! - `query`: Pagination and filter descriptions shared by every store
//! - `ports`: Trait definitions for the read-only store

pub mod entities;
pub mod ports;
pub mod query;
