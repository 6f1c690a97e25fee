use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "situation_famille")]
pub struct Model {
    /// Shared key with `situation_pro`
    #[sea_orm(primary_key, auto_increment = false)]
    pub numero_client: i32,
    pub statut_familliale: Option<String>,
    pub nombre_enfants: Option<i32>,
    pub age: Option<i32>,
    pub nom_client: Option<String>,
    pub statut_activite: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::situation_pro::Entity",
        from = "Column::NumeroClient",
        to = "super::situation_pro::Column::NumeroClient"
    )]
    SituationPro,
}

impl Related<super::situation_pro::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SituationPro.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
