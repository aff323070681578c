//! The REST API client behind the store.
//!
//! One `GET` endpoint per resolver query and a single `POST /settings`
//! for the atomic save. The store guarantees at most one concurrent call
//! per distinct query key, so the client carries no dedup of its own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::dto::{parse_save_error, query_pairs};
use crate::config::ApiConfig;
use crate::domain::authorization::{AuthorizationsList, AuthorizationsQuery, AuthorizationsSummary};
use crate::domain::capital::{ActiveLoanSummary, LoansList};
use crate::domain::charge::Charge;
use crate::domain::deposit::{DepositsList, DepositsOverview, DepositsQuery};
use crate::domain::dispute::{DisputesList, DisputesQuery, DisputesSummary};
use crate::domain::document::{DocumentsList, DocumentsQuery, DocumentsSummary};
use crate::domain::file::StoredFile;
use crate::domain::ids::{ChargeId, FileId, PaymentIntentId};
use crate::domain::payment_intent::PaymentIntent;
use crate::domain::reader::{CardReader, ReaderChargesQuery, ReaderChargesSummary};
use crate::domain::settings::Settings;
use crate::domain::timeline::Timeline;
use crate::domain::transaction::{TransactionsList, TransactionsQuery, TransactionsSummary};
use crate::error::{ConfigError, FetchError, SaveError};
use crate::port::Backend;

/// HTTP client for the payments admin REST API.
pub struct HttpBackend {
    http: HttpClient,
    base_url: String,
}

impl HttpBackend {
    /// Create a client with default timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: trim_base(base_url.into()),
        }
    }

    /// Create a client from configuration, validating the base URL.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ConfigError> {
        Url::parse(&config.base_url).map_err(|err| ConfigError::InvalidValue {
            field: "api.base_url",
            reason: err.to_string(),
        })?;

        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url: trim_base(config.base_url.clone()),
        })
    }

    async fn get_json<T>(&self, path: &str, query: &[(String, String)]) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base_url);
        debug!(url = %url, "GET");

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(FetchError::from)?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))
    }

    async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        self.get_json(path, &query_pairs(query)).await
    }

    async fn get_bare<T>(&self, path: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        self.get_json(path, &[]).await
    }
}

fn trim_base(base: String) -> String {
    base.trim_end_matches('/').to_string()
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_deposits(&self, query: &DepositsQuery) -> Result<DepositsList, FetchError> {
        self.get_query("deposits", query).await
    }

    async fn deposits_overview(&self) -> Result<DepositsOverview, FetchError> {
        self.get_bare("deposits/overview").await
    }

    async fn list_transactions(
        &self,
        query: &TransactionsQuery,
    ) -> Result<TransactionsList, FetchError> {
        self.get_query("transactions", query).await
    }

    async fn transactions_summary(
        &self,
        query: &TransactionsQuery,
    ) -> Result<TransactionsSummary, FetchError> {
        self.get_query("transactions/summary", query).await
    }

    async fn get_charge(&self, id: &ChargeId) -> Result<Charge, FetchError> {
        self.get_bare(&format!("charges/{id}")).await
    }

    async fn get_timeline(&self, intent_id: &PaymentIntentId) -> Result<Timeline, FetchError> {
        self.get_bare(&format!("timeline/{intent_id}")).await
    }

    async fn list_disputes(&self, query: &DisputesQuery) -> Result<DisputesList, FetchError> {
        self.get_query("disputes", query).await
    }

    async fn disputes_summary(
        &self,
        query: &DisputesQuery,
    ) -> Result<DisputesSummary, FetchError> {
        self.get_query("disputes/summary", query).await
    }

    async fn list_readers(&self) -> Result<Vec<CardReader>, FetchError> {
        self.get_bare("readers").await
    }

    async fn readers_charge_summary(
        &self,
        query: &ReaderChargesQuery,
    ) -> Result<ReaderChargesSummary, FetchError> {
        self.get_query("readers/charges/summary", query).await
    }

    async fn capital_loans(&self) -> Result<LoansList, FetchError> {
        self.get_bare("capital/loans").await
    }

    async fn active_loan_summary(&self) -> Result<ActiveLoanSummary, FetchError> {
        self.get_bare("capital/active_loan_summary").await
    }

    async fn list_documents(&self, query: &DocumentsQuery) -> Result<DocumentsList, FetchError> {
        self.get_query("documents", query).await
    }

    async fn documents_summary(
        &self,
        query: &DocumentsQuery,
    ) -> Result<DocumentsSummary, FetchError> {
        self.get_query("documents/summary", query).await
    }

    async fn get_payment_intent(&self, id: &PaymentIntentId) -> Result<PaymentIntent, FetchError> {
        self.get_bare(&format!("intents/{id}")).await
    }

    async fn list_authorizations(
        &self,
        query: &AuthorizationsQuery,
    ) -> Result<AuthorizationsList, FetchError> {
        self.get_query("authorizations", query).await
    }

    async fn authorizations_summary(
        &self,
        query: &AuthorizationsQuery,
    ) -> Result<AuthorizationsSummary, FetchError> {
        self.get_query("authorizations/summary", query).await
    }

    async fn get_file(&self, id: &FileId) -> Result<StoredFile, FetchError> {
        self.get_bare(&format!("files/{id}")).await
    }

    async fn get_settings(&self) -> Result<Settings, FetchError> {
        self.get_bare("settings").await
    }

    async fn save_settings(&self, draft: &Settings) -> Result<Settings, SaveError> {
        let url = format!("{}/settings", self.base_url);
        debug!(url = %url, "POST");

        let response = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(SaveError::from)?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Settings>()
                .await
                .map_err(|err| SaveError::Decode(err.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        Err(parse_save_error(status.as_u16(), &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("https://api.example.test/v1/");
        assert_eq!(backend.base_url, "https://api.example.test/v1");
    }
}
