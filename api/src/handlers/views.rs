//! Response views
//!
//! JSON shapes returned by the handlers. Field names are the column names
//! of the store, which is the wire format consumers already rely on.

use serde::Serialize;

use crate::app::EntityCounts;
use crate::domain::entities::{
    ApplicationRecord, Branch, Contribution, FamilySituation, LoanApplication,
    LoanApplicationDetails, ProfessionalSituation,
};

/// Loan application without its relations
#[derive(Debug, Serialize)]
pub struct LoanApplicationView {
    pub numero_demande: i32,
    pub montant_operation: Option<i32>,
    pub duree: Option<i32>,
    pub numero_client: Option<i32>,
    pub accord: Option<String>,
    pub numero_agence: Option<i32>,
    pub duree_de_traitement: Option<i32>,
    pub code_accord: Option<i32>,
}

impl From<LoanApplication> for LoanApplicationView {
    fn from(app: LoanApplication) -> Self {
        Self {
            numero_demande: app.id.0,
            montant_operation: app.operation_amount,
            duree: app.duration,
            numero_client: app.client_id.map(i32::from),
            accord: app.approval_flag,
            numero_agence: app.branch_id.map(i32::from),
            duree_de_traitement: app.processing_duration,
            code_accord: app.approval_code,
        }
    }
}

/// Loan application with nested branch, applicant and contribution.
///
/// A relation that does not resolve serializes as `null`.
#[derive(Debug, Serialize)]
pub struct LoanApplicationDetailedView {
    #[serde(flatten)]
    pub application: LoanApplicationView,
    pub agence: Option<BranchView>,
    pub client: Option<ProfessionalSituationView>,
    pub apport: Option<ContributionView>,
}

impl From<LoanApplicationDetails> for LoanApplicationDetailedView {
    fn from(details: LoanApplicationDetails) -> Self {
        Self {
            application: details.application.into(),
            agence: details.branch.map(Into::into),
            client: details.client.map(Into::into),
            apport: details.contribution.map(Into::into),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BranchView {
    pub numero_agence: i32,
    pub ville: Option<String>,
    pub adresse: Option<String>,
}

impl From<Branch> for BranchView {
    fn from(branch: Branch) -> Self {
        Self {
            numero_agence: branch.id.0,
            ville: branch.city,
            adresse: branch.address,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfessionalSituationView {
    pub numero_client: i32,
    pub revenu_mensuel_moyen: Option<i32>,
    pub code_regularite_revenus: Option<i32>,
    pub regularite_des_revenus: Option<String>,
    pub code_statut_emploi: Option<i32>,
    pub regularite_emploi: Option<String>,
}

impl From<ProfessionalSituation> for ProfessionalSituationView {
    fn from(pro: ProfessionalSituation) -> Self {
        Self {
            numero_client: pro.client_id.0,
            revenu_mensuel_moyen: pro.average_monthly_income,
            code_regularite_revenus: pro.income_regularity_code,
            regularite_des_revenus: pro.income_regularity_label,
            code_statut_emploi: pro.employment_status_code,
            regularite_emploi: pro.employment_regularity_label,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FamilySituationView {
    pub numero_client: i32,
    pub statut_familliale: Option<String>,
    pub nombre_enfants: Option<i32>,
    pub age: Option<i32>,
    pub nom_client: Option<String>,
    pub statut_activite: Option<String>,
}

impl From<FamilySituation> for FamilySituationView {
    fn from(family: FamilySituation) -> Self {
        Self {
            numero_client: family.client_id.0,
            statut_familliale: family.marital_status,
            nombre_enfants: family.number_of_children,
            age: family.age,
            nom_client: family.client_name,
            statut_activite: family.activity_status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContributionView {
    pub numero_demande: i32,
    pub apport: Option<i32>,
}

impl From<Contribution> for ContributionView {
    fn from(contribution: Contribution) -> Self {
        Self {
            numero_demande: contribution.application_id.0,
            apport: contribution.amount,
        }
    }
}

/// Row of the denormalized `all_demandes` table
#[derive(Debug, Serialize)]
pub struct ApplicationRecordView {
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

impl From<ApplicationRecord> for ApplicationRecordView {
    fn from(record: ApplicationRecord) -> Self {
        Self {
            numero_demande: record.application_id.0,
            montant_operation: record.operation_amount,
            duree: record.duration,
            numero_client: record.client_id,
            accord: record.approval_flag,
            numero_agence: record.branch_id,
            duree_de_traitement: record.processing_duration,
            code_accord: record.approval_code,
            apport: record.contribution_amount,
            revenu_mensuel_moyen: record.average_monthly_income,
            code_regularite_revenus: record.income_regularity_code,
            regularite_des_revenus: record.income_regularity_label,
            code_statut_emploi: record.employment_status_code,
            regularite_emploi: record.employment_regularity_label,
            situation_familliale: record.marital_status,
            nombre_enfants: record.number_of_children,
            age: record.age,
            nom_client: record.client_name,
            statut_activite: record.activity_status,
            ville: record.city,
            adresse: record.address,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyticsView {
    pub demande_count: u64,
    pub agence_count: u64,
    pub situationpro_count: u64,
    pub situationfamille_count: u64,
    pub apport_count: u64,
}

impl From<EntityCounts> for AnalyticsView {
    fn from(counts: EntityCounts) -> Self {
        Self {
            demande_count: counts.applications,
            agence_count: counts.branches,
            situationpro_count: counts.professional_situations,
            situationfamille_count: counts.family_situations,
            apport_count: counts.contributions,
        }
    }
}
