use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "situation_pro")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub numero_client: i32,
    pub revenu_mensuel_moyen: Option<i32>,
    pub code_regularite_revenus: Option<i32>,
    pub regularite_des_revenus: Option<String>,
    pub code_statut_emploi: Option<i32>,
    pub regularite_emploi: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::demandes::Entity")]
    Demandes,
    #[sea_orm(has_one = "super::situation_famille::Entity")]
    SituationFamille,
}

impl Related<super::demandes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Demandes.def()
    }
}

impl Related<super::situation_famille::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SituationFamille.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
