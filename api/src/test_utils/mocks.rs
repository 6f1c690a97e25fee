//! Mock implementations of port traits
//!
//! In-memory repositories backed by ordered maps, plus a repository that
//! fails every call to exercise the store-error path.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::fixtures::Dataset;
use crate::domain::entities::{
    ApplicationId, Branch, BranchId, ClientId, Contribution, LoanApplication,
    LoanApplicationDetails, ProfessionalSituation, Record,
};
use crate::domain::ports::{LoanApplicationRepository, ReadRepository, Repositories};
use crate::domain::query::{LoanApplicationFilter, Page};
use crate::error::DomainError;

// ============================================================================
// In-Memory Read Repository
// ============================================================================

pub struct InMemoryReadRepository<T: Record> {
    rows: BTreeMap<T::Id, T>,
}

impl<T: Record> InMemoryReadRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// Pre-populate with rows for testing
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = T>) -> Self {
        self.rows
            .extend(rows.into_iter().map(|row| (row.id(), row)));
        self
    }

    fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.get(&id)
    }

    fn page<'a>(&'a self, rows: impl Iterator<Item = &'a T>, page: Page) -> Vec<T> {
        rows.skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect()
    }
}

impl<T: Record> Default for InMemoryReadRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> ReadRepository<T> for InMemoryReadRepository<T> {
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, DomainError> {
        Ok(self.get(id).cloned())
    }

    async fn list(&self, page: Page) -> Result<Vec<T>, DomainError> {
        Ok(self.page(self.rows.values(), page))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.rows.len() as u64)
    }
}

// ============================================================================
// In-Memory Loan Application Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryLoanApplicationRepository {
    applications: InMemoryReadRepository<LoanApplication>,
    branches: InMemoryReadRepository<Branch>,
    clients: InMemoryReadRepository<ProfessionalSituation>,
    contributions: InMemoryReadRepository<Contribution>,
}

impl InMemoryLoanApplicationRepository {
    /// Pre-populate applications and the rows they may reference
    pub fn with_dataset(dataset: &Dataset) -> Self {
        Self {
            applications: InMemoryReadRepository::new().with_rows(dataset.applications.clone()),
            branches: InMemoryReadRepository::new().with_rows(dataset.branches.clone()),
            clients: InMemoryReadRepository::new()
                .with_rows(dataset.professional_situations.clone()),
            contributions: InMemoryReadRepository::new().with_rows(dataset.contributions.clone()),
        }
    }
}

fn matches(filter: &LoanApplicationFilter, app: &LoanApplication) -> bool {
    fn eq<V: PartialEq>(wanted: Option<V>, actual: Option<V>) -> bool {
        wanted.map_or(true, |w| actual == Some(w))
    }

    let flag_matches = filter.approval_flag.as_ref().map_or(true, |needle| {
        app.approval_flag
            .as_ref()
            .is_some_and(|flag| flag.to_lowercase().contains(&needle.to_lowercase()))
    });

    flag_matches
        && eq(filter.operation_amount, app.operation_amount)
        && eq(filter.duration, app.duration)
        && eq(filter.client_id, app.client_id)
        && eq(filter.branch_id, app.branch_id)
        && eq(filter.processing_duration, app.processing_duration)
        && eq(filter.approval_code, app.approval_code)
}

#[async_trait]
impl ReadRepository<LoanApplication> for InMemoryLoanApplicationRepository {
    async fn find_by_id(&self, id: ApplicationId) -> Result<Option<LoanApplication>, DomainError> {
        self.applications.find_by_id(id).await
    }

    async fn list(&self, page: Page) -> Result<Vec<LoanApplication>, DomainError> {
        self.applications.list(page).await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.applications.count().await
    }
}

#[async_trait]
impl LoanApplicationRepository for InMemoryLoanApplicationRepository {
    async fn find_detailed(
        &self,
        id: ApplicationId,
    ) -> Result<Option<LoanApplicationDetails>, DomainError> {
        let Some(application) = self.applications.get(id).cloned() else {
            return Ok(None);
        };

        let branch = application
            .branch_id
            .and_then(|b: BranchId| self.branches.get(b).cloned());
        let client = application
            .client_id
            .and_then(|c: ClientId| self.clients.get(c).cloned());
        let contribution = self.contributions.get(id).cloned();

        Ok(Some(LoanApplicationDetails {
            application,
            branch,
            client,
            contribution,
        }))
    }

    async fn list_filtered(
        &self,
        filter: &LoanApplicationFilter,
        page: Page,
    ) -> Result<Vec<LoanApplication>, DomainError> {
        let rows = self
            .applications
            .rows
            .values()
            .filter(|app| matches(filter, app));
        Ok(self.applications.page(rows, page))
    }
}

// ============================================================================
// Failing Repository
// ============================================================================

/// Fails every call with a database error
#[derive(Default)]
pub struct FailingRepository;

fn store_unavailable() -> DomainError {
    DomainError::Database("connection refused".to_string())
}

#[async_trait]
impl<T: Record> ReadRepository<T> for FailingRepository {
    async fn find_by_id(&self, _id: T::Id) -> Result<Option<T>, DomainError> {
        Err(store_unavailable())
    }

    async fn list(&self, _page: Page) -> Result<Vec<T>, DomainError> {
        Err(store_unavailable())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Err(store_unavailable())
    }
}

#[async_trait]
impl LoanApplicationRepository for FailingRepository {
    async fn find_detailed(
        &self,
        _id: ApplicationId,
    ) -> Result<Option<LoanApplicationDetails>, DomainError> {
        Err(store_unavailable())
    }

    async fn list_filtered(
        &self,
        _filter: &LoanApplicationFilter,
        _page: Page,
    ) -> Result<Vec<LoanApplication>, DomainError> {
        Err(store_unavailable())
    }
}

// ============================================================================
// Repository bundles
// ============================================================================

pub fn in_memory_repositories(dataset: &Dataset) -> Repositories {
    Repositories {
        applications: Arc::new(InMemoryLoanApplicationRepository::with_dataset(dataset)),
        branches: Arc::new(InMemoryReadRepository::new().with_rows(dataset.branches.clone())),
        professional_situations: Arc::new(
            InMemoryReadRepository::new().with_rows(dataset.professional_situations.clone()),
        ),
        family_situations: Arc::new(
            InMemoryReadRepository::new().with_rows(dataset.family_situations.clone()),
        ),
        contributions: Arc::new(
            InMemoryReadRepository::new().with_rows(dataset.contributions.clone()),
        ),
        application_records: Arc::new(
            InMemoryReadRepository::new().with_rows(dataset.application_records.clone()),
        ),
    }
}

pub fn failing_repositories() -> Repositories {
    Repositories {
        applications: Arc::new(FailingRepository),
        branches: Arc::new(FailingRepository),
        professional_situations: Arc::new(FailingRepository),
        family_situations: Arc::new(FailingRepository),
        contributions: Arc::new(FailingRepository),
        application_records: Arc::new(FailingRepository),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::standard_dataset;

    #[test]
    fn flag_match_ignores_case() {
        let app = crate::test_utils::application(4);
        let filter = LoanApplicationFilter {
            approval_flag: Some("oUi".to_string()),
            ..Default::default()
        };
        assert!(matches(&filter, &app));
    }

    #[tokio::test]
    async fn in_memory_lists_in_key_order() {
        let repo = InMemoryLoanApplicationRepository::with_dataset(&standard_dataset());

        let apps = repo.list(Page { skip: 2, limit: 3 }).await.unwrap();
        let ids: Vec<i32> = apps.iter().map(|a| a.id.0).collect();

        assert_eq!(ids, vec![3, 4, 5]);
    }
}
