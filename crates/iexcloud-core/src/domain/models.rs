//! Records returned by IEX Cloud, mirrored field for field.
//!
//! Fields whose `null` carries meaning are `Option`s. Every other field reads
//! both `null` and an omitted key as its default: IEX sends `null` prices for
//! minutes without IEX trades, `peRatio: null` for funds, and nulls or gaps in
//! the real-time fields outside the paid subscription tiers.

use serde::{Deserialize, Deserializer, Serialize};

use crate::EpochTime;

/// Account metadata from `/account/metadata`.
#[serde_with::apply(
    bool => #[serde(deserialize_with = "null_as_default")],
    i64 => #[serde(deserialize_with = "null_as_default")],
    String => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub pay_as_you_go_enabled: bool,
    /// Epoch milliseconds, sent as a bare number.
    pub effective_date: i64,
    pub subscription_term_type: String,
    pub tier_name: String,
    pub message_limit: i64,
    pub messages_used: i64,
    pub circuit_breaker: Option<u64>,
}

/// Order book snapshot from `/stock/{symbol}/book`.
#[serde_with::apply(
    Quote => #[serde(deserialize_with = "null_as_default")],
    Vec<BidAsk> => #[serde(deserialize_with = "null_as_default")],
    Vec<Trade> => #[serde(deserialize_with = "null_as_default")],
    SystemEvent => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub quote: Quote,
    pub bids: Vec<BidAsk>,
    pub asks: Vec<BidAsk>,
    pub trades: Vec<Trade>,
    pub system_event: SystemEvent,
}

#[serde_with::apply(
    i64 => #[serde(deserialize_with = "null_as_default")],
    f64 => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BidAsk {
    pub price: f64,
    pub size: i64,
    pub timestamp: EpochTime,
}

/// Single print in the book's recent trades.
#[serde_with::apply(
    bool => #[serde(deserialize_with = "null_as_default")],
    i64 => #[serde(deserialize_with = "null_as_default")],
    f64 => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trade {
    pub price: f64,
    pub size: i64,
    pub trade_id: i64,
    #[serde(rename = "isISO")]
    pub is_iso: bool,
    pub is_odd_lot: bool,
    pub is_outside_regular_hours: bool,
    pub is_single_price_cross: bool,
    pub is_trade_through_exempt: bool,
    pub timestamp: EpochTime,
}

#[serde_with::apply(
    String => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemEvent {
    pub system_event: String,
    pub timestamp: EpochTime,
}

/// Real-time or delayed quote from `/stock/{symbol}/quote`.
#[serde_with::apply(
    bool => #[serde(deserialize_with = "null_as_default")],
    i64 => #[serde(deserialize_with = "null_as_default")],
    f64 => #[serde(deserialize_with = "null_as_default")],
    String => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub symbol: String,
    pub company_name: String,
    pub calculation_price: String,
    pub open: f64,
    pub open_time: EpochTime,
    pub open_source: String,
    pub close: f64,
    pub close_time: EpochTime,
    pub close_source: String,
    pub high: f64,
    pub high_time: EpochTime,
    pub high_source: String,
    pub low: f64,
    pub low_time: EpochTime,
    pub low_source: String,
    pub latest_price: f64,
    pub latest_source: String,
    pub latest_time: String,
    pub latest_update: EpochTime,
    pub latest_volume: i64,
    pub volume: i64,
    pub iex_realtime_price: f64,
    pub iex_realtime_size: i64,
    pub iex_last_updated: EpochTime,
    pub delayed_price: f64,
    pub delayed_price_time: EpochTime,
    pub odd_lot_delayed_price: f64,
    pub odd_lot_delayed_price_time: EpochTime,
    pub extended_price: f64,
    pub extended_change: f64,
    pub extended_change_percent: f64,
    pub extended_price_time: EpochTime,
    pub previous_close: f64,
    pub previous_volume: i64,
    pub change: f64,
    pub change_percent: f64,
    pub iex_market_percent: Option<f64>,
    pub iex_volume: Option<i64>,
    pub avg_total_volume: i64,
    pub iex_bid_price: Option<f64>,
    pub iex_bid_size: Option<i64>,
    pub iex_ask_price: Option<f64>,
    pub iex_ask_size: Option<i64>,
    pub iex_open: Option<f64>,
    pub iex_open_time: Option<EpochTime>,
    pub iex_close: f64,
    pub iex_close_time: EpochTime,
    pub market_cap: i64,
    pub week52_high: f64,
    pub week52_low: f64,
    pub ytd_change: f64,
    pub pe_ratio: f64,
    pub last_trade_time: EpochTime,
    #[serde(rename = "isUSMarketOpen")]
    pub is_us_market_open: bool,
}

/// Daily bar from `/stock/{symbol}/chart`.
#[serde_with::apply(
    i64 => #[serde(deserialize_with = "null_as_default")],
    f64 => #[serde(deserialize_with = "null_as_default")],
    String => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoricalPrice {
    pub date: String,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: i64,
    pub u_open: f64,
    pub u_close: f64,
    pub u_high: f64,
    pub u_low: f64,
    pub u_volume: i64,
    pub change: f64,
    pub change_percent: f64,
    pub label: String,
    pub change_over_time: f64,
}

/// Minute bar from `/stock/{symbol}/intraday-prices`.
///
/// The `market_*` fields aggregate all venues and are `null` unless the
/// account's tier includes consolidated data.
#[serde_with::apply(
    i64 => #[serde(deserialize_with = "null_as_default")],
    f64 => #[serde(deserialize_with = "null_as_default")],
    String => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntradayPrice {
    pub date: String,
    pub minute: String,
    pub market_average: Option<f64>,
    pub market_notional: Option<f64>,
    pub market_number_of_trades: Option<f64>,
    pub market_open: Option<f64>,
    pub market_close: Option<f64>,
    pub market_high: Option<f64>,
    pub market_low: Option<f64>,
    pub market_volume: Option<i64>,
    pub market_change_over_time: Option<f64>,
    pub change_over_time: Option<f64>,
    pub label: String,
    pub high: f64,
    pub low: f64,
    pub open: f64,
    pub close: f64,
    pub average: f64,
    pub volume: i64,
    pub notional: f64,
    pub number_of_trades: i64,
}

#[serde_with::apply(
    i64 => #[serde(deserialize_with = "null_as_default")],
    f64 => #[serde(deserialize_with = "null_as_default")],
    String => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DelayedQuote {
    pub symbol: String,
    pub delayed_price: f64,
    pub delayed_size: i64,
    pub delayed_price_time: EpochTime,
    pub high: f64,
    pub low: f64,
    pub total_volume: i64,
    pub processed_time: EpochTime,
}

#[serde_with::apply(
    i64 => #[serde(deserialize_with = "null_as_default")],
    f64 => #[serde(deserialize_with = "null_as_default")],
    String => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LargestTrade {
    pub price: f64,
    pub size: i64,
    pub time: EpochTime,
    pub time_label: String,
    pub venue: String,
    pub venue_name: String,
}

/// Official open/close from `/stock/{symbol}/ohlc`.
#[serde_with::apply(
    i64 => #[serde(deserialize_with = "null_as_default")],
    f64 => #[serde(deserialize_with = "null_as_default")],
    String => #[serde(deserialize_with = "null_as_default")],
    OpenClose => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ohlc {
    pub open: OpenClose,
    pub close: OpenClose,
    pub high: f64,
    pub low: f64,
    pub volume: i64,
    pub symbol: String,
}

#[serde_with::apply(
    f64 => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenClose {
    pub price: f64,
    pub time: EpochTime,
}

#[serde_with::apply(
    i64 => #[serde(deserialize_with = "null_as_default")],
    f64 => #[serde(deserialize_with = "null_as_default")],
    String => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviousDayPrice {
    pub date: String,
    pub open: f64,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: i64,
    pub u_open: f64,
    pub u_close: f64,
    pub u_high: f64,
    pub u_low: f64,
    pub u_volume: i64,
    pub change: f64,
    pub change_percent: f64,
    pub change_over_time: f64,
    pub symbol: String,
}

#[serde_with::apply(
    i64 => #[serde(deserialize_with = "null_as_default")],
    f64 => #[serde(deserialize_with = "null_as_default")],
    String => #[serde(deserialize_with = "null_as_default")],
)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeByVenue {
    pub volume: i64,
    pub venue: String,
    pub venue_name: String,
    pub date: String,
    pub market_percent: f64,
    pub avg_market_percent: f64,
}

/// Reads `null` as `T::default()`. Values of the wrong type are still errors.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
