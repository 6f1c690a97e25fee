//! Repository port traits
//!
//! These traits define the read-only interface to the credit-risk store.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::{
    ApplicationId, ApplicationRecord, Branch, Contribution, FamilySituation, LoanApplication,
    LoanApplicationDetails, ProfessionalSituation, Record,
};
use crate::domain::query::{LoanApplicationFilter, Page};
use crate::error::DomainError;

/// Keyed reads shared by every entity family
#[async_trait]
pub trait ReadRepository<T: Record>: Send + Sync {
    /// Find a row by primary key; `None` when absent
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, DomainError>;

    /// List one page, ordered by primary key ascending
    async fn list(&self, page: Page) -> Result<Vec<T>, DomainError>;

    /// Total unfiltered row count
    async fn count(&self) -> Result<u64, DomainError>;
}

/// Repository for loan applications
#[async_trait]
pub trait LoanApplicationRepository: ReadRepository<LoanApplication> {
    /// Find an application with branch, applicant and contribution resolved
    async fn find_detailed(
        &self,
        id: ApplicationId,
    ) -> Result<Option<LoanApplicationDetails>, DomainError>;

    /// List one page of applications matching `filter`
    async fn list_filtered(
        &self,
        filter: &LoanApplicationFilter,
        page: Page,
    ) -> Result<Vec<LoanApplication>, DomainError>;
}

/// Handles to every repository, injected into the application services
#[derive(Clone)]
pub struct Repositories {
    pub applications: Arc<dyn LoanApplicationRepository>,
    pub branches: Arc<dyn ReadRepository<Branch>>,
    pub professional_situations: Arc<dyn ReadRepository<ProfessionalSituation>>,
    pub family_situations: Arc<dyn ReadRepository<FamilySituation>>,
    pub contributions: Arc<dyn ReadRepository<Contribution>>,
    pub application_records: Arc<dyn ReadRepository<ApplicationRecord>>,
}

/// Selects the repository serving entity family `T`
pub trait RepositoryFor<T: Record> {
    fn repository(&self) -> &dyn ReadRepository<T>;
}

impl RepositoryFor<Branch> for Repositories {
    fn repository(&self) -> &dyn ReadRepository<Branch> {
        self.branches.as_ref()
    }
}

impl RepositoryFor<ProfessionalSituation> for Repositories {
    fn repository(&self) -> &dyn ReadRepository<ProfessionalSituation> {
        self.professional_situations.as_ref()
    }
}

impl RepositoryFor<FamilySituation> for Repositories {
    fn repository(&self) -> &dyn ReadRepository<FamilySituation> {
        self.family_situations.as_ref()
    }
}

impl RepositoryFor<Contribution> for Repositories {
    fn repository(&self) -> &dyn ReadRepository<Contribution> {
        self.contributions.as_ref()
    }
}

impl RepositoryFor<ApplicationRecord> for Repositories {
    fn repository(&self) -> &dyn ReadRepository<ApplicationRecord> {
        self.application_records.as_ref()
    }
}
