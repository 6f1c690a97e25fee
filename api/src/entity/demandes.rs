use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "demandes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub numero_demande: i32,
    pub montant_operation: Option<i32>,
    #[sea_orm(indexed)]
    pub duree: Option<i32>,
    #[sea_orm(indexed)]
    pub numero_client: Option<i32>,
    pub accord: Option<String>,
    pub numero_agence: Option<i32>,
    #[sea_orm(indexed)]
    pub duree_de_traitement: Option<i32>,
    pub code_accord: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agences::Entity",
        from = "Column::NumeroAgence",
        to = "super::agences::Column::NumeroAgence"
    )]
    Agences,
    #[sea_orm(
        belongs_to = "super::situation_pro::Entity",
        from = "Column::NumeroClient",
        to = "super::situation_pro::Column::NumeroClient"
    )]
    SituationPro,
    #[sea_orm(has_one = "super::apports::Entity")]
    Apports,
}

impl Related<super::agences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agences.def()
    }
}

impl Related<super::situation_pro::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SituationPro.def()
    }
}

impl Related<super::apports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Apports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
