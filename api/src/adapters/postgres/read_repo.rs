//! Generic PostgreSQL adapter for ReadRepository
//!
//! One implementation serves every entity family: the SeaORM entity `E`
//! picks the table, and `E::Model: Into<T>` maps rows to the domain.
//! Conversions for the families without a dedicated adapter live below.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, PrimaryKeyTrait};

use super::query::paginate;
use crate::domain::entities::{
    ApplicationId, ApplicationRecord, Branch, BranchId, ClientId, Contribution, FamilySituation,
    ProfessionalSituation, Record,
};
use crate::domain::ports::ReadRepository;
use crate::domain::query::Page;
use crate::entity::{agences, all_demandes, apports, situation_famille, situation_pro};
use crate::error::DomainError;

/// PostgreSQL implementation of ReadRepository over entity `E`
pub struct PostgresReadRepository<E> {
    db: DatabaseConnection,
    entity: PhantomData<fn() -> E>,
}

impl<E> PostgresReadRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    pub(super) fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl<E, T> ReadRepository<T> for PostgresReadRepository<E>
where
    E: EntityTrait,
    E::Model: Into<T> + Sync + 'static,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    T: Record,
{
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, DomainError> {
        let key: i32 = id.into();
        let result = E::find_by_id(key)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn list(&self, page: Page) -> Result<Vec<T>, DomainError> {
        let results = paginate(E::find(), page)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        E::find()
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

impl From<agences::Model> for Branch {
    fn from(model: agences::Model) -> Self {
        Branch {
            id: BranchId(model.numero_agence),
            city: model.ville,
            address: model.adresse,
        }
    }
}

impl From<situation_pro::Model> for ProfessionalSituation {
    fn from(model: situation_pro::Model) -> Self {
        ProfessionalSituation {
            client_id: ClientId(model.numero_client),
            average_monthly_income: model.revenu_mensuel_moyen,
            income_regularity_code: model.code_regularite_revenus,
            income_regularity_label: model.regularite_des_revenus,
            employment_status_code: model.code_statut_emploi,
            employment_regularity_label: model.regularite_emploi,
        }
    }
}

impl From<situation_famille::Model> for FamilySituation {
    fn from(model: situation_famille::Model) -> Self {
        FamilySituation {
            client_id: ClientId(model.numero_client),
            marital_status: model.statut_familliale,
            number_of_children: model.nombre_enfants,
            age: model.age,
            client_name: model.nom_client,
            activity_status: model.statut_activite,
        }
    }
}

impl From<apports::Model> for Contribution {
    fn from(model: apports::Model) -> Self {
        Contribution {
            application_id: ApplicationId(model.numero_demande),
            amount: model.apport,
        }
    }
}

impl From<all_demandes::Model> for ApplicationRecord {
    fn from(model: all_demandes::Model) -> Self {
        ApplicationRecord {
            application_id: ApplicationId(model.numero_demande),
            operation_amount: model.montant_operation,
            duration: model.duree,
            client_id: model.numero_client,
            approval_flag: model.accord,
            branch_id: model.numero_agence,
            processing_duration: model.duree_de_traitement,
            approval_code: model.code_accord,
            contribution_amount: model.apport,
            average_monthly_income: model.revenu_mensuel_moyen,
            income_regularity_code: model.code_regularite_revenus,
            income_regularity_label: model.regularite_des_revenus,
            employment_status_code: model.code_statut_emploi,
            employment_regularity_label: model.regularite_emploi,
            marital_status: model.situation_familliale,
            number_of_children: model.nombre_enfants,
            age: model.age,
            client_name: model.nom_client,
            activity_status: model.statut_activite,
            city: model.ville,
            address: model.adresse,
        }
    }
}
