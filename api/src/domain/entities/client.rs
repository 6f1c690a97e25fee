//! Applicant domain entities
//!
//! Professional and family situations share the client key and are
//! linked one-to-one through it.

use super::Record;

/// Unique identifier for a client (applicant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(pub i32);

impl From<i32> for ClientId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ClientId> for i32 {
    fn from(id: ClientId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Income and employment attributes of an applicant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessionalSituation {
    pub client_id: ClientId,
    pub average_monthly_income: Option<i32>,
    pub income_regularity_code: Option<i32>,
    pub income_regularity_label: Option<String>,
    pub employment_status_code: Option<i32>,
    pub employment_regularity_label: Option<String>,
}

impl Record for ProfessionalSituation {
    type Id = ClientId;

    fn id(&self) -> ClientId {
        self.client_id
    }

    fn not_found_message(id: ClientId) -> String {
        format!("Situation pro du client {} non trouvée", id)
    }
}

/// Household attributes of an applicant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySituation {
    /// Must match an existing professional situation
    pub client_id: ClientId,
    pub marital_status: Option<String>,
    pub number_of_children: Option<i32>,
    pub age: Option<i32>,
    pub client_name: Option<String>,
    pub activity_status: Option<String>,
}

impl Record for FamilySituation {
    type Id = ClientId;

    fn id(&self) -> ClientId {
        self.client_id
    }

    fn not_found_message(id: ClientId) -> String {
        format!("Situation familiale du client {} non trouvée", id)
    }
}
