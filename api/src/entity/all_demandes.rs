//! Denormalized snapshot of every application with its related rows.
//!
//! Filled by an external job; no foreign keys, may drift from the
//! normalized tables.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "all_demandes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub numero_demande: i32,
    pub montant_operation: Option<i32>,
    pub duree: Option<i32>,
    pub numero_client: Option<i32>,
    pub accord: Option<String>,
    pub numero_agence: Option<i32>,
    pub duree_de_traitement: Option<i32>,
    pub code_accord: Option<i32>,
    pub apport: Option<i32>,
    pub revenu_mensuel_moyen: Option<i32>,
    pub code_regularite_revenus: Option<i32>,
    pub regularite_des_revenus: Option<String>,
    pub code_statut_emploi: Option<i32>,
    pub regularite_emploi: Option<String>,
    pub situation_familliale: Option<String>,
    pub nombre_enfants: Option<i32>,
    pub age: Option<i32>,
    pub nom_client: Option<String>,
    pub statut_activite: Option<String>,
    pub ville: Option<String>,
    pub adresse: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
