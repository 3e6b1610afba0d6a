use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use crate::config;
use crate::models::{NewTransaction, Paginated, Transaction, TransactionSummary};

use super::error::ApiError;
use super::filters::TransactionFilters;

/// Typed client for the remote transaction store
///
/// A thin, stateless mapper: all business logic (status transitions,
/// aggregation, uniqueness) lives remotely. The client's contract is shape
/// and error-surfacing discipline, nothing more.
pub struct TransactionClient {
    http_client: HttpClient,
    base_url: String,
}

impl TransactionClient {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create a client against the process-wide configured store address
    pub fn new() -> Self {
        Self::with_base_url(config::base_url().to_string())
    }

    /// Create a client with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = HttpClient::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .expect("failed to construct HTTP client");

        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The store address this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Describe a transport-level failure (no response was obtainable)
    fn transport_error(e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Transport(format!(
                "Request timed out after {}s: {}",
                Self::REQUEST_TIMEOUT.as_secs(),
                e
            ))
        } else {
            ApiError::Transport(format!("Request failed: {}", e))
        }
    }

    /// Turn a non-success response into a `Remote` error, body preserved
    async fn handle_error_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        if status >= 500 {
            warn!("Store error {}: {}", status, body);
        } else {
            debug!("Store rejected request ({}): {}", status, body);
        }
        ApiError::Remote { status, body }
    }

    /// GET /transactions?{filters}
    ///
    /// Fetches one page of transactions. Every filter key/value is forwarded
    /// as a query parameter unchanged; the store rejects malformed filters.
    pub async fn list_transactions(
        &self,
        filters: &TransactionFilters,
    ) -> Result<Paginated<Transaction>, ApiError> {
        let url = format!("{}/transactions", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(filters.as_map())
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        response
            .json::<Paginated<Transaction>>()
            .await
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse transaction page: {}", e)))
    }

    /// GET /transactions/{id}
    ///
    /// Fetches a single transaction by its server-assigned id (positive by
    /// contract). An unknown id surfaces as a `Remote` error with 404
    /// status; callers interpret it via [`ApiError::is_not_found`].
    pub async fn get_transaction(&self, id: i64) -> Result<Transaction, ApiError> {
        let url = format!("{}/transactions/{}", self.base_url, id);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        response
            .json::<Transaction>()
            .await
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse transaction: {}", e)))
    }

    /// POST /transactions
    ///
    /// Creates a transaction from a client-supplied partial record; the
    /// store fills `id`, `transaction_id`, timestamps, and an initial
    /// `status` when omitted. No idempotency key is attached: duplicate
    /// submissions create duplicate records.
    pub async fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, ApiError> {
        let url = format!("{}/transactions", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(transaction)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        response
            .json::<Transaction>()
            .await
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse created transaction: {}", e)))
    }

    /// GET /transactions/stats/summary?{start_date,end_date}
    ///
    /// Aggregates over the given ISO date range; with both bounds omitted
    /// the store aggregates over all time.
    pub async fn get_summary(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<TransactionSummary, ApiError> {
        let url = format!("{}/transactions/stats/summary", self.base_url);

        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(start) = start_date {
            params.push(("start_date", start));
        }
        if let Some(end) = end_date {
            params.push(("end_date", end));
        }

        let response = self
            .http_client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        response
            .json::<TransactionSummary>()
            .await
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse summary: {}", e)))
    }

    /// GET /transactions/nfc/recent
    ///
    /// Fetches contactless-originated transactions, most recent first,
    /// filtered and ordered by the store. Not paginated.
    pub async fn get_recent_nfc_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let url = format!("{}/transactions/nfc/recent", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        response
            .json::<Vec<Transaction>>()
            .await
            .map_err(|e| ApiError::Deserialization(format!("Failed to parse transaction list: {}", e)))
    }
}

impl Default for TransactionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed_from_base_url() {
        let client = TransactionClient::with_base_url("http://store:9000/api/v1/".to_string());
        assert_eq!(client.base_url(), "http://store:9000/api/v1");
    }

    #[tokio::test]
    async fn test_unreachable_store_surfaces_transport_error() {
        // Bind then drop to find a port with nothing listening on it
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = TransactionClient::with_base_url(base_url);
        let err = client.get_transaction(1).await.unwrap_err();
        match err {
            ApiError::Transport(_) => {}
            other => panic!("expected Transport, got {:?}", other),
        }
    }
}
