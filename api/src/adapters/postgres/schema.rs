//! Schema bootstrap
//!
//! Creates the credit-risk tables and their indexes from the SeaORM entity
//! definitions. Every statement is `IF NOT EXISTS`, so running it against
//! an already populated store is a no-op.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};

use crate::entity::{agences, all_demandes, apports, demandes, situation_famille, situation_pro};

/// Create all tables in foreign-key order, then the indexed columns
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, agences::Entity).await?;
    create_table(db, &schema, situation_pro::Entity).await?;
    create_table(db, &schema, situation_famille::Entity).await?;
    create_table(db, &schema, demandes::Entity).await?;
    create_table(db, &schema, apports::Entity).await?;
    create_table(db, &schema, all_demandes::Entity).await?;

    Ok(())
}

async fn create_table<E: EntityTrait>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }

    tracing::debug!(table = entity.table_name(), "Table ready");
    Ok(())
}
