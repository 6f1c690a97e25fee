use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "agences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub numero_agence: i32,
    pub ville: Option<String>,
    pub adresse: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::demandes::Entity")]
    Demandes,
}

impl Related<super::demandes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Demandes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
