//! Query service
//!
//! Read operations behind every list and detail endpoint. Absent rows
//! become `AppError::NotFound`.

use crate::domain::entities::{
    ApplicationId, LoanApplication, LoanApplicationDetails, Record,
};
use crate::domain::ports::{ReadRepository, Repositories, RepositoryFor};
use crate::domain::query::{LoanApplicationFilter, Page};
use crate::error::AppError;

/// Service for reading the credit-risk store
pub struct QueryService {
    repositories: Repositories,
}

impl QueryService {
    pub fn new(repositories: Repositories) -> Self {
        Self { repositories }
    }

    /// Get one application with branch, applicant and contribution
    pub async fn get_application(
        &self,
        id: ApplicationId,
    ) -> Result<LoanApplicationDetails, AppError> {
        tracing::debug!(application_id = %id, "Fetching application details");

        self.repositories
            .applications
            .find_detailed(id)
            .await?
            .ok_or_else(|| AppError::NotFound(LoanApplication::not_found_message(id)))
    }

    /// List applications matching `filter`, ordered by application id
    pub async fn list_applications(
        &self,
        filter: &LoanApplicationFilter,
        page: Page,
    ) -> Result<Vec<LoanApplication>, AppError> {
        tracing::debug!(
            skip = page.skip,
            limit = page.limit,
            filtered = !filter.is_empty(),
            "Listing applications"
        );

        Ok(self
            .repositories
            .applications
            .list_filtered(filter, page)
            .await?)
    }

    /// Get one row of entity family `T` by key
    pub async fn get<T>(&self, id: T::Id) -> Result<T, AppError>
    where
        T: Record,
        Repositories: RepositoryFor<T>,
    {
        self.repository::<T>()
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(T::not_found_message(id)))
    }

    /// List one page of entity family `T`, ordered by key
    pub async fn list<T>(&self, page: Page) -> Result<Vec<T>, AppError>
    where
        T: Record,
        Repositories: RepositoryFor<T>,
    {
        Ok(self.repository::<T>().list(page).await?)
    }

    fn repository<T>(&self) -> &dyn ReadRepository<T>
    where
        T: Record,
        Repositories: RepositoryFor<T>,
    {
        <Repositories as RepositoryFor<T>>::repository(&self.repositories)
    }
}
