//! Contribution domain entity

use super::{ApplicationId, Record};

/// The applicant's own funds put toward one application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    /// Shared key with the loan application
    pub application_id: ApplicationId,
    pub amount: Option<i32>,
}

impl Record for Contribution {
    type Id = ApplicationId;

    fn id(&self) -> ApplicationId {
        self.application_id
    }

    fn not_found_message(id: ApplicationId) -> String {
        format!("Apport pour demande {} non trouvé", id)
    }
}
