//! Query options for the chart endpoints.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::endpoint::Endpoint;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("invalid chart range '{value}', expected one of max, 5y, 2y, 1y, ytd, 6m, 3m, 1m, 1mm, 5d, 5dm, date, dynamic")]
    InvalidChartRange { value: String },
    #[error("invalid sort order '{value}', expected asc or desc")]
    InvalidSortOrder { value: String },
}

/// Range accepted by `/stock/{symbol}/chart/{range}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartRange {
    #[serde(rename = "max")]
    Max,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "3m")]
    ThreeMonths,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "1mm")]
    OneMonthMinute,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "5dm")]
    FiveDaysMinute,
    /// A single day, selected with [`HistoricalOptions::exact_date`].
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "dynamic")]
    Dynamic,
}

impl ChartRange {
    pub const ALL: [Self; 13] = [
        Self::Max,
        Self::FiveYears,
        Self::TwoYears,
        Self::OneYear,
        Self::YearToDate,
        Self::SixMonths,
        Self::ThreeMonths,
        Self::OneMonth,
        Self::OneMonthMinute,
        Self::FiveDays,
        Self::FiveDaysMinute,
        Self::Date,
        Self::Dynamic,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::FiveYears => "5y",
            Self::TwoYears => "2y",
            Self::OneYear => "1y",
            Self::YearToDate => "ytd",
            Self::SixMonths => "6m",
            Self::ThreeMonths => "3m",
            Self::OneMonth => "1m",
            Self::OneMonthMinute => "1mm",
            Self::FiveDays => "5d",
            Self::FiveDaysMinute => "5dm",
            Self::Date => "date",
            Self::Dynamic => "dynamic",
        }
    }
}

impl Display for ChartRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartRange {
    type Err = OptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == normalized)
            .ok_or(OptionError::InvalidChartRange { value: normalized })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = OptionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(OptionError::InvalidSortOrder {
                value: other.to_owned(),
            }),
        }
    }
}

/// Options for `/stock/{symbol}/chart`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoricalOptions {
    pub symbol: String,
    pub range: Option<ChartRange>,
    /// `YYYYMMDD`; only used together with [`ChartRange::Date`].
    pub exact_date: Option<String>,
    /// Defaults to descending when unset.
    pub sort: Option<SortOrder>,
    pub chart_close_only: bool,
    pub chart_simplify: bool,
    pub chart_interval: Option<u32>,
    pub change_from_close: bool,
    pub chart_last: Option<u32>,
    pub include_today: bool,
}

impl HistoricalOptions {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, range: ChartRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Selects a single trading day; sets the range to [`ChartRange::Date`].
    pub fn on_date(mut self, exact_date: impl Into<String>) -> Self {
        self.range = Some(ChartRange::Date);
        self.exact_date = Some(exact_date.into());
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub(crate) fn apply(&self, base_url: &str) -> Endpoint {
        let mut endpoint = Endpoint::new(base_url, format!("/stock/{}/chart", self.symbol));
        let mut chart_by_date = false;

        if let Some(range) = self.range {
            endpoint = endpoint.segment(range.as_str());
            if range == ChartRange::Date {
                if let Some(exact_date) = self.exact_date.as_deref().filter(|d| !d.is_empty()) {
                    endpoint = endpoint.segment(exact_date);
                    chart_by_date = true;
                }
            }
        }

        endpoint
            .flag("chartByDate", chart_by_date)
            .flag("chartCloseOnly", self.chart_close_only)
            .flag("chartSimplify", self.chart_simplify)
            .number("chartInterval", self.chart_interval)
            .flag("changeFromClose", self.change_from_close)
            .number("chartLast", self.chart_last)
            .param("sort", self.sort.unwrap_or_default().as_str())
            .flag("includeToday", self.include_today)
    }
}

/// Options for `/stock/{symbol}/intraday-prices`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntradayOptions {
    pub symbol: String,
    pub chart_iex_only: bool,
    pub chart_reset: bool,
    pub chart_simplify: bool,
    pub chart_interval: Option<u32>,
    pub change_from_close: bool,
    pub chart_last: Option<u32>,
    /// `YYYYMMDD`; defaults to the current trading day.
    pub exact_date: Option<String>,
    pub chart_iex_when_null: bool,
}

impl IntradayOptions {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub(crate) fn apply(&self, base_url: &str) -> Endpoint {
        Endpoint::new(
            base_url,
            format!("/stock/{}/intraday-prices", self.symbol),
        )
        .flag("chartIEXOnly", self.chart_iex_only)
        .flag("chartReset", self.chart_reset)
        .flag("chartSimplify", self.chart_simplify)
        .number("chartInterval", self.chart_interval)
        .flag("changeFromClose", self.change_from_close)
        .number("chartLast", self.chart_last)
        .text("exactDate", self.exact_date.as_deref())
        .flag("chartIEXWhenNull", self.chart_iex_when_null)
    }
}
