//! Domain entities
//!
//! Pure domain models representing the credit-risk dataset.
//! These are separate from the SeaORM entities in the `entity` module.

use std::fmt::Display;

pub mod application_record;
pub mod branch;
pub mod client;
pub mod contribution;
pub mod loan_application;

pub use application_record::ApplicationRecord;
pub use branch::{Branch, BranchId};
pub use client::{ClientId, FamilySituation, ProfessionalSituation};
pub use contribution::Contribution;
pub use loan_application::{ApplicationId, LoanApplication, LoanApplicationDetails};

/// A row addressable by its primary key.
///
/// Every entity family served by the API implements this, which lets
/// lookups, listings and not-found reporting be written once.
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Copy + Ord + Display + From<i32> + Into<i32> + Send + Sync + 'static;

    fn id(&self) -> Self::Id;

    /// Human-readable message for a missing key
    fn not_found_message(id: Self::Id) -> String;
}
