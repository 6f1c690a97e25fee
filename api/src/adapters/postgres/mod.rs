//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod loan_application_repo;
pub mod query;
pub mod read_repo;
pub mod schema;


use std::sync::Arc;

use sea_orm::DatabaseConnection;

pub use loan_application_repo::PostgresLoanApplicationRepository;
pub use read_repo::PostgresReadRepository;
pub use schema::create_schema;

use crate::domain::ports::Repositories;
use crate::entity::{agences, all_demandes, apports, situation_famille, situation_pro};

/// Wire every repository to one connection pool
pub fn repositories(db: DatabaseConnection) -> Repositories {
    Repositories {
        applications: Arc::new(PostgresLoanApplicationRepository::new(db.clone())),
        branches: Arc::new(PostgresReadRepository::<agences::Entity>::new(db.clone())),
        professional_situations: Arc::new(PostgresReadRepository::<situation_pro::Entity>::new(
            db.clone(),
        )),
        family_situations: Arc::new(PostgresReadRepository::<situation_famille::Entity>::new(
            db.clone(),
        )),
        contributions: Arc::new(PostgresReadRepository::<apports::Entity>::new(db.clone())),
        application_records: Arc::new(PostgresReadRepository::<all_demandes::Entity>::new(db)),
    }
}
