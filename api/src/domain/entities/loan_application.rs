//! Loan application domain entity

use super::{Branch, BranchId, ClientId, Contribution, ProfessionalSituation, Record};

/// Unique identifier for a loan application
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApplicationId(pub i32);

impl From<i32> for ApplicationId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ApplicationId> for i32 {
    fn from(id: ApplicationId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single credit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanApplication {
    pub id: ApplicationId,
    pub operation_amount: Option<i32>,
    pub duration: Option<i32>,
    /// Weak reference to the applicant's professional situation
    pub client_id: Option<ClientId>,
    pub approval_flag: Option<String>,
    pub branch_id: Option<BranchId>,
    pub processing_duration: Option<i32>,
    pub approval_code: Option<i32>,
}

impl Record for LoanApplication {
    type Id = ApplicationId;

    fn id(&self) -> ApplicationId {
        self.id
    }

    fn not_found_message(id: ApplicationId) -> String {
        format!("Demande {} non trouvée", id)
    }
}

/// A loan application with its related rows resolved.
///
/// Each relation is `None` when the reference is unset or dangles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanApplicationDetails {
    pub application: LoanApplication,
    pub branch: Option<Branch>,
    pub client: Option<ProfessionalSituation>,
    pub contribution: Option<Contribution>,
}
