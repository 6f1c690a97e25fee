//! Domain ports (traits)
//!
//! Port traits define the read interface the application layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod repositories;

pub use repositories::{LoanApplicationRepository, ReadRepository, Repositories, RepositoryFor};
