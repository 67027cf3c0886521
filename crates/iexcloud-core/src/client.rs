use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::decode::{decode_json, decode_price};
use crate::domain::{
    Book, DelayedQuote, HistoricalPrice, IntradayPrice, LargestTrade, Metadata, Ohlc,
    PreviousDayPrice, Quote, VolumeByVenue,
};
use crate::endpoint::Endpoint;
use crate::error::{ApiError, IexError};
use crate::http_client::{HttpClient, HttpMethod, HttpRequest, ReqwestHttpClient};
use crate::options::{HistoricalOptions, IntradayOptions};

pub const PRODUCTION_BASE_URL: &str = "https://cloud.iexapis.com/stable";
pub const SANDBOX_BASE_URL: &str = "https://sandbox.iexapis.com/stable";

/// Client for the IEX Cloud REST API.
///
/// Each method issues exactly one HTTP request through the shared transport;
/// nothing is cached or retried. The client is cheap to clone and safe to
/// share between tasks.
#[derive(Clone)]
pub struct IexClient {
    base_url: String,
    secret_key: String,
    publishable_key: Option<String>,
    http_client: Arc<dyn HttpClient>,
}

impl IexClient {
    pub fn new(secret_key: impl Into<String>, sandbox: bool) -> Self {
        let base_url = if sandbox {
            SANDBOX_BASE_URL
        } else {
            PRODUCTION_BASE_URL
        };

        Self {
            base_url: base_url.to_owned(),
            secret_key: secret_key.into(),
            publishable_key: None,
            http_client: Arc::new(ReqwestHttpClient::default()),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let client = Self::new(config.secret_key.clone(), config.sandbox);
        match &config.publishable_key {
            Some(publishable_key) => client.with_publishable_key(publishable_key.clone()),
            None => client,
        }
    }

    pub fn with_publishable_key(mut self, publishable_key: impl Into<String>) -> Self {
        self.publishable_key = Some(publishable_key.into());
        self
    }

    pub fn with_http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = http_client;
        self
    }

    /// Points the client at another host, e.g. a local stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn publishable_key(&self) -> Option<&str> {
        self.publishable_key.as_deref()
    }

    /// Account metadata: tier, message limits and usage.
    pub async fn metadata(&self) -> Result<Metadata, IexError> {
        self.get_json(self.endpoint("/account/metadata")).await
    }

    /// Sets the monthly message budget of the account.
    pub async fn set_message_budget(&self, total_messages: u64) -> Result<(), IexError> {
        let endpoint = self
            .endpoint("/account/messagebudget")
            .param("totalMessages", total_messages.to_string());
        self.execute(HttpMethod::Post, endpoint).await?;
        Ok(())
    }

    pub async fn book(&self, symbol: &str) -> Result<Book, IexError> {
        self.get_json(self.stock_endpoint(symbol, "book")).await
    }

    pub async fn historical_prices(
        &self,
        options: &HistoricalOptions,
    ) -> Result<Vec<HistoricalPrice>, IexError> {
        let endpoint = self.authenticate(options.apply(&self.base_url));
        self.get_json(endpoint).await
    }

    pub async fn intraday_prices(
        &self,
        options: &IntradayOptions,
    ) -> Result<Vec<IntradayPrice>, IexError> {
        let endpoint = self.authenticate(options.apply(&self.base_url));
        self.get_json(endpoint).await
    }

    pub async fn delayed_quote(&self, symbol: &str) -> Result<DelayedQuote, IexError> {
        self.get_json(self.stock_endpoint(symbol, "delayed-quote"))
            .await
    }

    pub async fn largest_trades(&self, symbol: &str) -> Result<Vec<LargestTrade>, IexError> {
        self.get_json(self.stock_endpoint(symbol, "largest-trades"))
            .await
    }

    pub async fn ohlc(&self, symbol: &str) -> Result<Ohlc, IexError> {
        self.get_json(self.stock_endpoint(symbol, "ohlc")).await
    }

    pub async fn previous_day_price(&self, symbol: &str) -> Result<PreviousDayPrice, IexError> {
        self.get_json(self.stock_endpoint(symbol, "previous")).await
    }

    /// Latest price as a bare number.
    pub async fn price_only(&self, symbol: &str) -> Result<f64, IexError> {
        let body = self
            .execute(HttpMethod::Get, self.stock_endpoint(symbol, "price"))
            .await?;
        decode_price(&body)
    }

    /// Quote for `symbol`. With `display_percent` the percentage fields are
    /// multiplied by 100 upstream.
    pub async fn quote(&self, symbol: &str, display_percent: bool) -> Result<Quote, IexError> {
        let endpoint = self
            .stock_endpoint(symbol, "quote")
            .flag("displayPercent", display_percent);
        self.get_json(endpoint).await
    }

    pub async fn volume_by_venue(&self, symbol: &str) -> Result<Vec<VolumeByVenue>, IexError> {
        self.get_json(self.stock_endpoint(symbol, "volume-by-venue"))
            .await
    }

    fn endpoint(&self, path: &str) -> Endpoint {
        self.authenticate(Endpoint::new(&self.base_url, path))
    }

    fn stock_endpoint(&self, symbol: &str, resource: &str) -> Endpoint {
        self.endpoint(&format!("/stock/{symbol}/{resource}"))
    }

    fn authenticate(&self, endpoint: Endpoint) -> Endpoint {
        endpoint.param("token", self.secret_key.as_str())
    }

    async fn get_json<T>(&self, endpoint: Endpoint) -> Result<T, IexError>
    where
        T: DeserializeOwned,
    {
        let body = self.execute(HttpMethod::Get, endpoint).await?;
        decode_json(&body)
    }

    /// Sends one request and returns the body of a 200 response.
    async fn execute(&self, method: HttpMethod, endpoint: Endpoint) -> Result<String, IexError> {
        tracing::debug!(%method, path = endpoint.path(), "sending IEX Cloud request");

        let request = HttpRequest::new(method, endpoint.build());
        let response = self.http_client.execute(request).await?;

        if !response.is_ok() {
            tracing::debug!(
                %method,
                path = endpoint.path(),
                status = response.status,
                "IEX Cloud request rejected"
            );
            return Err(ApiError::new(response.status, response.body).into());
        }

        Ok(response.body)
    }
}

impl Debug for IexClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IexClient")
            .field("base_url", &self.base_url)
            .field("secret_key", &"<redacted>")
            .field(
                "publishable_key",
                &self.publishable_key.as_ref().map(|_| "<redacted>"),
            )
            .finish_non_exhaustive()
    }
}
