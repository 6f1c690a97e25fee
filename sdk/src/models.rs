//! Wire models
//!
//! Field names match the JSON emitted by the API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub numero_demande: i32,
    pub montant_operation: Option<i32>,
    pub duree: Option<i32>,
    pub numero_client: Option<i32>,
    pub accord: Option<String>,
    pub numero_agence: Option<i32>,
    pub duree_de_traitement: Option<i32>,
    pub code_accord: Option<i32>,
}

/// Loan application with its relations; absent relations are `None`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanApplicationDetailed {
    #[serde(flatten)]
    pub application: LoanApplication,
    pub agence: Option<Branch>,
    pub client: Option<ProfessionalSituation>,
    pub apport: Option<Contribution>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub numero_agence: i32,
    pub ville: Option<String>,
    pub adresse: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalSituation {
    pub numero_client: i32,
    pub revenu_mensuel_moyen: Option<i32>,
    pub code_regularite_revenus: Option<i32>,
    pub regularite_des_revenus: Option<String>,
    pub code_statut_emploi: Option<i32>,
    pub regularite_emploi: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilySituation {
    pub numero_client: i32,
    pub statut_familliale: Option<String>,
    pub nombre_enfants: Option<i32>,
    pub age: Option<i32>,
    pub nom_client: Option<String>,
    pub statut_activite: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub numero_demande: i32,
    pub apport: Option<i32>,
}

/// Row of the denormalized application table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub numero_demande: i32,
    pub montant_operation: Option<i32>,
    pub duree: Option<i32>,
    pub numero_client: Option<i32>,
    pub accord: Option<String>,
    pub numero_agence: Option<i32>,
    pub duree_de_traitement: Option<i32>,
    pub code_accord: Option<i32>,
    pub apport: Option<i32>,
    pub revenu_mensuel_moyen: Option<i32>,
    pub code_regularite_revenus: Option<i32>,
    pub regularite_des_revenus: Option<String>,
    pub code_statut_emploi: Option<i32>,
    pub regularite_emploi: Option<String>,
    pub situation_familliale: Option<String>,
    pub nombre_enfants: Option<i32>,
    pub age: Option<i32>,
    pub nom_client: Option<String>,
    pub statut_activite: Option<String>,
    pub ville: Option<String>,
    pub adresse: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analytics {
    pub demande_count: u64,
    pub agence_count: u64,
    pub situationpro_count: u64,
    pub situationfamille_count: u64,
    pub apport_count: u64,
}

/// Paging for list calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub skip: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { skip: 0, limit: 100 }
    }
}

/// Filters for `GET /demandes`; `None` fields are not sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoanApplicationQuery {
    #[serde(flatten)]
    pub page: PageRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub montant_operation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duree: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_client: Option<i32>,
    /// Case-insensitive substring of the approval flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accord: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_agence: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duree_de_traitement: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_accord: Option<i32>,
}
