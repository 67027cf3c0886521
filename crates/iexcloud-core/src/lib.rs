//! # IEX Cloud Core
//!
//! Typed async client for the IEX Cloud market data REST API.
//!
//! ## Overview
//!
//! - **Endpoint builder** for resource paths and query strings
//! - **Request executor** mapping non-200 responses to [`ApiError`]
//! - **Response decoder** for JSON records and bare-number bodies
//! - **Domain records** mirroring the upstream JSON schema
//! - **[`EpochTime`]** codec for epoch-millisecond timestamps
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `IexClient` and its endpoint methods |
//! | [`config`] | Credentials and sandbox selection from the environment |
//! | [`decode`] | JSON and bare-number body decoding |
//! | [`domain`] | Records (Quote, Book, HistoricalPrice, ...) and `EpochTime` |
//! | [`endpoint`] | URL and query construction |
//! | [`error`] | `IexError` and `ApiError` |
//! | [`http_client`] | Transport trait and the reqwest implementation |
//! | [`options`] | Chart query options |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use iexcloud_core::{HistoricalOptions, IexClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IexClient::new("sk_...", true);
//!
//!     let price = client.price_only("AAPL").await?;
//!     println!("AAPL: {price:.2}");
//!
//!     let day = client
//!         .historical_prices(&HistoricalOptions::new("AAPL").on_date("20200817"))
//!         .await?;
//!     println!("{} bars", day.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use iexcloud_core::IexError;
//!
//! fn describe(error: &IexError) -> &'static str {
//!     match error {
//!         IexError::Transport(_) => "network problem",
//!         IexError::Api(api) if api.is_client_error() => "check symbol, options or token",
//!         IexError::Api(_) => "upstream failure",
//!         IexError::Decode(_) | IexError::InvalidPrice { .. } => "unexpected response body",
//!     }
//! }
//! ```
//!
//! Nothing is retried. Every failure reaches the caller as-is.

pub mod client;
pub mod config;
pub mod decode;
pub mod domain;
pub mod endpoint;
pub mod error;
pub mod http_client;
pub mod options;

pub use client::{IexClient, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

pub use config::{ClientConfig, ConfigError};

pub use domain::{
    BidAsk, Book, DelayedQuote, EpochTime, HistoricalPrice, IntradayPrice, LargestTrade, Metadata,
    Ohlc, OpenClose, PreviousDayPrice, Quote, SystemEvent, Trade, VolumeByVenue,
};

pub use error::{ApiError, IexError};

pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use options::{ChartRange, HistoricalOptions, IntradayOptions, OptionError, SortOrder};
