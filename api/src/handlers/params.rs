//! Query-string parameters
//!
//! Paging arrives as `i64` and is range-checked into a `Page`.

use serde::Deserialize;

use crate::domain::entities::{BranchId, ClientId};
use crate::domain::query::{LoanApplicationFilter, Page, DEFAULT_LIMIT};
use crate::error::AppError;

fn default_limit() -> i64 {
    DEFAULT_LIMIT as i64
}

/// Paging parameters shared by every list endpoint
#[derive(Debug, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl PageParams {
    pub fn page(&self) -> Result<Page, AppError> {
        Ok(Page::new(self.skip, self.limit)?)
    }
}

/// Parameters of `GET /demandes`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoanApplicationParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub montant_operation: Option<i32>,
    pub duree: Option<i32>,
    pub numero_client: Option<i32>,
    pub accord: Option<String>,
    pub numero_agence: Option<i32>,
    pub duree_de_traitement: Option<i32>,
    pub code_accord: Option<i32>,
    // Accepted by the route but backed by no column; rejected in `into_query`
    pub date_de_demande: Option<String>,
    pub date_de_cloture: Option<String>,
    pub score_emprunteur: Option<String>,
    pub montant_prete: Option<String>,
}

impl LoanApplicationParams {
    /// Validate into a filter and a page
    pub fn into_query(self) -> Result<(LoanApplicationFilter, Page), AppError> {
        let unsupported: Vec<&str> = [
            ("date_de_demande", self.date_de_demande.is_some()),
            ("date_de_cloture", self.date_de_cloture.is_some()),
            ("score_emprunteur", self.score_emprunteur.is_some()),
            ("montant_prete", self.montant_prete.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect();

        if !unsupported.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Unsupported filter parameters: {}",
                unsupported.join(", ")
            )));
        }

        let page = Page::new(self.skip, self.limit)?;
        let filter = LoanApplicationFilter {
            operation_amount: self.montant_operation,
            duration: self.duree,
            client_id: self.numero_client.map(ClientId),
            approval_flag: self.accord,
            branch_id: self.numero_agence.map(BranchId),
            processing_duration: self.duree_de_traitement,
            approval_code: self.code_accord,
        };

        Ok((filter, page))
    }
}
