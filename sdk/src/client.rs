//! HTTP client for the Credit Risk API

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::models::{
    Analytics, ApplicationRecord, Branch, Contribution, FamilySituation, Health,
    LoanApplication, LoanApplicationDetailed, LoanApplicationQuery, PageRequest,
    ProfessionalSituation,
};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Applies to the whole request, connect through body
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP client for communicating with the Credit Risk API
#[derive(Clone)]
pub struct CreditRiskClient {
    client: reqwest::Client,
    base_url: String,
}

impl CreditRiskClient {
    /// Create a client with the default timeout
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Create a new client from environment variables
    ///
    /// Optional env vars:
    /// - CREDIT_RISK_API_URL: Base URL of the API (default http://localhost:8080)
    /// - CREDIT_RISK_API_TIMEOUT_SECS: Request timeout in seconds (default 30)
    pub fn from_env() -> Result<Self, SdkError> {
        let base_url =
            std::env::var("CREDIT_RISK_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let mut config = ClientConfig::new(base_url);
        if let Ok(raw) = std::env::var("CREDIT_RISK_API_TIMEOUT_SECS") {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                SdkError::Config(format!("CREDIT_RISK_API_TIMEOUT_SECS is not a number: {}", raw))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Self::with_config(config)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, SdkError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health_check(&self) -> Result<Health, SdkError> {
        self.get_json("/health").await
    }

    /// Application with its branch, applicant and contribution
    pub async fn get_loan_application(&self, id: i32) -> Result<LoanApplicationDetailed, SdkError> {
        self.get_json(&format!("/demandes/{}", id)).await
    }

    pub async fn list_loan_applications(
        &self,
        query: &LoanApplicationQuery,
    ) -> Result<Vec<LoanApplication>, SdkError> {
        self.get_json_with_query("/demandes", query).await
    }

    pub async fn get_branch(&self, id: i32) -> Result<Branch, SdkError> {
        self.get_json(&format!("/agences/{}", id)).await
    }

    pub async fn list_branches(&self, page: PageRequest) -> Result<Vec<Branch>, SdkError> {
        self.get_json_with_query("/agences", &page).await
    }

    pub async fn get_professional_situation(
        &self,
        client_id: i32,
    ) -> Result<ProfessionalSituation, SdkError> {
        self.get_json(&format!("/situations_pro/{}", client_id)).await
    }

    pub async fn list_professional_situations(
        &self,
        page: PageRequest,
    ) -> Result<Vec<ProfessionalSituation>, SdkError> {
        self.get_json_with_query("/situations_pro", &page).await
    }

    pub async fn get_family_situation(&self, client_id: i32) -> Result<FamilySituation, SdkError> {
        self.get_json(&format!("/situations_famille/{}", client_id)).await
    }

    pub async fn list_family_situations(
        &self,
        page: PageRequest,
    ) -> Result<Vec<FamilySituation>, SdkError> {
        self.get_json_with_query("/situations_famille", &page).await
    }

    pub async fn get_contribution(&self, application_id: i32) -> Result<Contribution, SdkError> {
        self.get_json(&format!("/apports/{}", application_id)).await
    }

    pub async fn list_contributions(
        &self,
        page: PageRequest,
    ) -> Result<Vec<Contribution>, SdkError> {
        self.get_json_with_query("/apports", &page).await
    }

    pub async fn get_application_record(&self, id: i32) -> Result<ApplicationRecord, SdkError> {
        self.get_json(&format!("/all_demandes/{}", id)).await
    }

    pub async fn list_application_records(
        &self,
        page: PageRequest,
    ) -> Result<Vec<ApplicationRecord>, SdkError> {
        self.get_json_with_query("/all_demandes", &page).await
    }

    pub async fn analytics(&self) -> Result<Analytics, SdkError> {
        self.get_json("/analytics").await
    }

    // --- Internal helpers ---

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SdkError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;

        handle_json_response(response).await
    }

    async fn get_json_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, SdkError>
    where
        Q: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).query(query).send().await?;

        handle_json_response(response).await
    }
}

/// Error body returned by the API on every failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    details: Option<String>,
}

async fn handle_json_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, SdkError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return Ok(serde_json::from_str(&body)?);
    }

    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            details: Some(details),
            ..
        }) => details,
        Ok(ErrorBody { error, .. }) => error,
        Err(_) => body,
    };

    if status == StatusCode::NOT_FOUND {
        return Err(SdkError::NotFound(message));
    }

    Err(SdkError::Api {
        status: status.as_u16(),
        message,
    })
}
