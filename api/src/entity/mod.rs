//! SeaORM entity definitions
//!
//! One module per table of the credit-risk store. Table and column names
//! follow the physical schema, which is also the wire format of the API.

pub mod agences;
pub mod all_demandes;
pub mod apports;
pub mod demandes;
pub mod situation_famille;
pub mod situation_pro;
