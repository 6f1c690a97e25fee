//! Typed client for the Credit Risk API
//!
//! ```no_run
//! # async fn run() -> Result<(), credit_risk_sdk::SdkError> {
//! use credit_risk_sdk::{CreditRiskClient, LoanApplicationQuery};
//!
//! let client = CreditRiskClient::from_env()?;
//! let approved = client
//!     .list_loan_applications(&LoanApplicationQuery {
//!         accord: Some("oui".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{}", credit_risk_sdk::to_csv(&approved)?);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod tabular;

pub use client::{ClientConfig, CreditRiskClient};
pub use error::SdkError;
pub use models::*;
pub use tabular::to_csv;
