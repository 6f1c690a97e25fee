//! SQLite-backed store for adapter and HTTP tests
//!
//! The SeaORM adapters are backend-agnostic apart from connection setup,
//! so an in-memory SQLite database runs the real queries without a server.

use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, IntoActiveModel,
};

use super::fixtures::Dataset;
use crate::adapters::postgres::create_schema;
use crate::entity::{agences, all_demandes, apports, demandes, situation_famille, situation_pro};

/// Empty in-memory database.
///
/// The pool is pinned to one connection: every SQLite `:memory:`
/// connection is a separate database.
pub async fn sqlite_connection() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .expect("failed to open in-memory SQLite")
}

/// In-memory database with the schema created and `dataset` inserted
pub async fn seeded_sqlite(dataset: &Dataset) -> DatabaseConnection {
    let db = sqlite_connection().await;
    create_schema(&db).await.expect("failed to create schema");
    seed(&db, dataset).await;
    db
}

async fn seed(db: &DatabaseConnection, dataset: &Dataset) {
    insert(
        db,
        dataset.branches.iter().map(|b| {
            agences::ActiveModel::from(agences::Model {
                numero_agence: b.id.0,
                ville: b.city.clone(),
                adresse: b.address.clone(),
            })
        }),
    )
    .await;

    insert(
        db,
        dataset.professional_situations.iter().map(|p| {
            situation_pro::ActiveModel::from(situation_pro::Model {
                numero_client: p.client_id.0,
                revenu_mensuel_moyen: p.average_monthly_income,
                code_regularite_revenus: p.income_regularity_code,
                regularite_des_revenus: p.income_regularity_label.clone(),
                code_statut_emploi: p.employment_status_code,
                regularite_emploi: p.employment_regularity_label.clone(),
            })
        }),
    )
    .await;

    insert(
        db,
        dataset.family_situations.iter().map(|f| {
            situation_famille::ActiveModel::from(situation_famille::Model {
                numero_client: f.client_id.0,
                statut_familliale: f.marital_status.clone(),
                nombre_enfants: f.number_of_children,
                age: f.age,
                nom_client: f.client_name.clone(),
                statut_activite: f.activity_status.clone(),
            })
        }),
    )
    .await;

    insert(
        db,
        dataset.applications.iter().map(|a| {
            demandes::ActiveModel::from(demandes::Model {
                numero_demande: a.id.0,
                montant_operation: a.operation_amount,
                duree: a.duration,
                numero_client: a.client_id.map(i32::from),
                accord: a.approval_flag.clone(),
                numero_agence: a.branch_id.map(i32::from),
                duree_de_traitement: a.processing_duration,
                code_accord: a.approval_code,
            })
        }),
    )
    .await;

    insert(
        db,
        dataset.contributions.iter().map(|c| {
            apports::ActiveModel::from(apports::Model {
                numero_demande: c.application_id.0,
                apport: c.amount,
            })
        }),
    )
    .await;

    insert(
        db,
        dataset.application_records.iter().map(|r| {
            all_demandes::ActiveModel::from(all_demandes::Model {
                numero_demande: r.application_id.0,
                montant_operation: r.operation_amount,
                duree: r.duration,
                numero_client: r.client_id,
                accord: r.approval_flag.clone(),
                numero_agence: r.branch_id,
                duree_de_traitement: r.processing_duration,
                code_accord: r.approval_code,
                apport: r.contribution_amount,
                revenu_mensuel_moyen: r.average_monthly_income,
                code_regularite_revenus: r.income_regularity_code,
                regularite_des_revenus: r.income_regularity_label.clone(),
                code_statut_emploi: r.employment_status_code,
                regularite_emploi: r.employment_regularity_label.clone(),
                situation_familliale: r.marital_status.clone(),
                nombre_enfants: r.number_of_children,
                age: r.age,
                nom_client: r.client_name.clone(),
                statut_activite: r.activity_status.clone(),
                ville: r.city.clone(),
                adresse: r.address.clone(),
            })
        }),
    )
    .await;
}

async fn insert<A>(db: &DatabaseConnection, rows: impl Iterator<Item = A>)
where
    A: ActiveModelTrait,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let rows: Vec<A> = rows.collect();
    if rows.is_empty() {
        return;
    }

    A::Entity::insert_many(rows)
        .exec_without_returning(db)
        .await
        .expect("failed to seed table");
}
