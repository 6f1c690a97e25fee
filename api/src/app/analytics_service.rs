//! Analytics service
//!
//! Row counts per normalized entity family.

use crate::domain::ports::Repositories;
use crate::error::AppError;

/// Row counts, one per normalized entity family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityCounts {
    pub applications: u64,
    pub branches: u64,
    pub professional_situations: u64,
    pub family_situations: u64,
    pub contributions: u64,
}

pub struct AnalyticsService {
    repositories: Repositories,
}

impl AnalyticsService {
    pub fn new(repositories: Repositories) -> Self {
        Self { repositories }
    }

    /// Count every family.
    ///
    /// The five counts run concurrently as independent statements, so they
    /// are not a consistent snapshot of each other.
    pub async fn entity_counts(&self) -> Result<EntityCounts, AppError> {
        let repos = &self.repositories;

        let (applications, branches, professional_situations, family_situations, contributions) =
            tokio::try_join!(
                repos.applications.count(),
                repos.branches.count(),
                repos.professional_situations.count(),
                repos.family_situations.count(),
                repos.contributions.count(),
            )?;

        Ok(EntityCounts {
            applications,
            branches,
            professional_situations,
            family_situations,
            contributions,
        })
    }
}
