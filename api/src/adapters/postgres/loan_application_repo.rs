//! PostgreSQL adapter for LoanApplicationRepository
//!
//! Extends the generic read repository over `demandes` with filtered
//! listing and the joined detail read.

use async_trait::async_trait;
use sea_orm::{
    EntityTrait, FromQueryResult, Iterable, JoinType, QuerySelect, RelationTrait,
};

use super::query::{filtered_applications, paginate};
use super::read_repo::PostgresReadRepository;
use crate::domain::entities::{
    ApplicationId, Branch, BranchId, ClientId, Contribution, LoanApplication,
    LoanApplicationDetails, ProfessionalSituation,
};
use crate::domain::ports::LoanApplicationRepository;
use crate::domain::query::{LoanApplicationFilter, Page};
use crate::entity::{agences, apports, demandes, situation_pro};
use crate::error::DomainError;

/// PostgreSQL implementation of LoanApplicationRepository
pub type PostgresLoanApplicationRepository = PostgresReadRepository<demandes::Entity>;

#[async_trait]
impl LoanApplicationRepository for PostgresLoanApplicationRepository {
    async fn find_detailed(
        &self,
        id: ApplicationId,
    ) -> Result<Option<LoanApplicationDetails>, DomainError> {
        // Single statement: LEFT JOIN keeps the application when a relation is missing
        let row = demandes::Entity::find_by_id(id.0)
            .select_only()
            .columns(demandes::Column::iter())
            .column_as(agences::Column::NumeroAgence, "agence_numero_agence")
            .column_as(agences::Column::Ville, "agence_ville")
            .column_as(agences::Column::Adresse, "agence_adresse")
            .column_as(situation_pro::Column::NumeroClient, "client_numero_client")
            .column_as(
                situation_pro::Column::RevenuMensuelMoyen,
                "client_revenu_mensuel_moyen",
            )
            .column_as(
                situation_pro::Column::CodeRegulariteRevenus,
                "client_code_regularite_revenus",
            )
            .column_as(
                situation_pro::Column::RegulariteDesRevenus,
                "client_regularite_des_revenus",
            )
            .column_as(
                situation_pro::Column::CodeStatutEmploi,
                "client_code_statut_emploi",
            )
            .column_as(
                situation_pro::Column::RegulariteEmploi,
                "client_regularite_emploi",
            )
            .column_as(apports::Column::NumeroDemande, "apport_numero_demande")
            .column_as(apports::Column::Apport, "apport_montant")
            .join(JoinType::LeftJoin, demandes::Relation::Agences.def())
            .join(JoinType::LeftJoin, demandes::Relation::SituationPro.def())
            .join(JoinType::LeftJoin, demandes::Relation::Apports.def())
            .into_model::<DetailRow>()
            .one(self.db())
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn list_filtered(
        &self,
        filter: &LoanApplicationFilter,
        page: Page,
    ) -> Result<Vec<LoanApplication>, DomainError> {
        let query = filtered_applications(filter);

        let results = paginate(query, page)
            .all(self.db())
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(Into::into).collect())
    }
}

/// Flat result of the detail join; related columns are NULL on a miss
#[derive(Debug, FromQueryResult)]
struct DetailRow {
    numero_demande: i32,
    montant_operation: Option<i32>,
    duree: Option<i32>,
    numero_client: Option<i32>,
    accord: Option<String>,
    numero_agence: Option<i32>,
    duree_de_traitement: Option<i32>,
    code_accord: Option<i32>,
    agence_numero_agence: Option<i32>,
    agence_ville: Option<String>,
    agence_adresse: Option<String>,
    client_numero_client: Option<i32>,
    client_revenu_mensuel_moyen: Option<i32>,
    client_code_regularite_revenus: Option<i32>,
    client_regularite_des_revenus: Option<String>,
    client_code_statut_emploi: Option<i32>,
    client_regularite_emploi: Option<String>,
    apport_numero_demande: Option<i32>,
    apport_montant: Option<i32>,
}

impl From<DetailRow> for LoanApplicationDetails {
    fn from(row: DetailRow) -> Self {
        let branch = row.agence_numero_agence.map(|id| Branch {
            id: BranchId(id),
            city: row.agence_ville,
            address: row.agence_adresse,
        });
        let client = row
            .client_numero_client
            .map(|id| ProfessionalSituation {
                client_id: ClientId(id),
                average_monthly_income: row.client_revenu_mensuel_moyen,
                income_regularity_code: row.client_code_regularite_revenus,
                income_regularity_label: row.client_regularite_des_revenus,
                employment_status_code: row.client_code_statut_emploi,
                employment_regularity_label: row.client_regularite_emploi,
            });
        let contribution = row.apport_numero_demande.map(|id| Contribution {
            application_id: ApplicationId(id),
            amount: row.apport_montant,
        });

        LoanApplicationDetails {
            application: LoanApplication {
                id: ApplicationId(row.numero_demande),
                operation_amount: row.montant_operation,
                duration: row.duree,
                client_id: row.numero_client.map(ClientId),
                approval_flag: row.accord,
                branch_id: row.numero_agence.map(BranchId),
                processing_duration: row.duree_de_traitement,
                approval_code: row.code_accord,
            },
            branch,
            client,
            contribution,
        }
    }
}

impl From<demandes::Model> for LoanApplication {
    fn from(model: demandes::Model) -> Self {
        LoanApplication {
            id: ApplicationId(model.numero_demande),
            operation_amount: model.montant_operation,
            duration: model.duree,
            client_id: model.numero_client.map(ClientId),
            approval_flag: model.accord,
            branch_id: model.numero_agence.map(BranchId),
            processing_duration: model.duree_de_traitement,
            approval_code: model.code_accord,
        }
    }
}
