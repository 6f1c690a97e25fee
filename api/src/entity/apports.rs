use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apports")]
pub struct Model {
    /// Shared key with `demandes`
    #[sea_orm(primary_key, auto_increment = false)]
    pub numero_demande: i32,
    pub apport: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::demandes::Entity",
        from = "Column::NumeroDemande",
        to = "super::demandes::Column::NumeroDemande"
    )]
    Demandes,
}

impl Related<super::demandes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Demandes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
