//! Flattened application record
//!
//! A precomputed, denormalized join of an application with its branch,
//! applicant and contribution, kept for analytics and ML consumers.
//! It is maintained independently and may drift from the normalized rows.

use super::{ApplicationId, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub operation_amount: Option<i32>,
    pub duration: Option<i32>,
    pub client_id: Option<i32>,
    pub approval_flag: Option<String>,
    pub branch_id: Option<i32>,
    pub processing_duration: Option<i32>,
    pub approval_code: Option<i32>,
    pub contribution_amount: Option<i32>,
    pub average_monthly_income: Option<i32>,
    pub income_regularity_code: Option<i32>,
    pub income_regularity_label: Option<String>,
    pub employment_status_code: Option<i32>,
    pub employment_regularity_label: Option<String>,
    pub marital_status: Option<String>,
    pub number_of_children: Option<i32>,
    pub age: Option<i32>,
    pub client_name: Option<String>,
    pub activity_status: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
}

impl Record for ApplicationRecord {
    type Id = ApplicationId;

    fn id(&self) -> ApplicationId {
        self.application_id
    }

    fn not_found_message(id: ApplicationId) -> String {
        format!("Demande {} non trouvée", id)
    }
}
