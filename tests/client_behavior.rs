//! Behavior tests for the public client API over a stub transport.
//!
//! Each test drives `IexClient` the way a caller would and checks the request
//! that reached the transport and the typed result that came back.

use iexcloud_core::{ChartRange, HistoricalOptions, IntradayOptions, SortOrder};
use iexcloud_tests::{stub_client, ApiError, IexError, StubHttpClient};
use serde_json::json;

// =============================================================================
// Endpoint construction
// =============================================================================

#[tokio::test]
async fn when_historical_prices_requested_for_exact_date_path_and_query_select_that_day() {
    // Given: a stub serving the chart resource
    let transport = StubHttpClient::json(
        "/stock/AAPL/chart",
        &json!([{ "date": "2020-08-17", "open": 447.88, "close": 458.43, "volume": 38_141_124 }]),
    );
    let client = stub_client(transport.clone());

    // When: prices for 2020-08-17 are requested
    let options = HistoricalOptions {
        range: Some("date".parse::<ChartRange>().expect("valid range")),
        exact_date: Some(String::from("20200817")),
        ..HistoricalOptions::new("AAPL")
    };
    let prices = client
        .historical_prices(&options)
        .await
        .expect("prices should decode");

    // Then: the day is addressed by path and flagged by query
    let url = transport.last_url();
    let (path, query) = url.split_once('?').expect("query present");
    assert!(path.ends_with("/chart/date/20200817"), "{path}");
    assert!(query.contains("chartByDate=true"));
    assert!(query.contains("sort=desc"));
    assert_eq!(prices.len(), 1);
    assert_eq!(prices[0].volume, 38_141_124);
}

#[tokio::test]
async fn when_flags_are_false_they_never_appear_in_query() {
    let transport = StubHttpClient::json("/chart", &json!([]));
    let client = stub_client(transport.clone());

    client
        .historical_prices(&HistoricalOptions::new("AAPL").with_range(ChartRange::OneYear))
        .await
        .expect("empty chart decodes");

    let url = transport.last_url();
    for flag in [
        "chartCloseOnly",
        "chartSimplify",
        "changeFromClose",
        "includeToday",
        "chartByDate",
        "false",
    ] {
        assert!(!url.contains(flag), "{flag} must not be sent: {url}");
    }
}

#[tokio::test]
async fn when_numeric_options_are_zero_they_are_omitted() {
    let transport = StubHttpClient::json("/intraday-prices", &json!([]));
    let client = stub_client(transport.clone());

    let options = IntradayOptions {
        chart_interval: Some(0),
        chart_last: Some(0),
        ..IntradayOptions::new("MSFT")
    };
    client
        .intraday_prices(&options)
        .await
        .expect("empty intraday decodes");

    let url = transport.last_url();
    assert!(!url.contains("chartInterval"));
    assert!(!url.contains("chartLast"));
}

#[tokio::test]
async fn when_chart_last_and_interval_both_set_each_keeps_its_own_value() {
    let transport = StubHttpClient::json("/chart", &json!([]));
    let client = stub_client(transport.clone());

    let options = HistoricalOptions {
        chart_interval: Some(2),
        chart_last: Some(20),
        ..HistoricalOptions::new("AAPL").with_sort(SortOrder::Asc)
    };
    client
        .historical_prices(&options)
        .await
        .expect("empty chart decodes");

    let url = transport.last_url();
    assert!(url.contains("chartInterval=2"));
    assert!(url.contains("chartLast=20"));
    assert!(url.contains("sort=asc"));
    assert!(!url.contains("sort=desc"));
}

// =============================================================================
// Decoding
// =============================================================================

#[tokio::test]
async fn when_price_only_returns_bare_number_caller_gets_float() {
    let transport = StubHttpClient::new("/stock/AAPL/price", 200, "99");
    let client = stub_client(transport);

    let price = client.price_only("AAPL").await.expect("price should parse");

    assert_eq!(price, 99.0);
}

#[tokio::test]
async fn when_quote_has_null_iex_fields_they_decode_as_absent() {
    let transport = StubHttpClient::json(
        "/stock/AAPL/quote",
        &json!({
            "symbol": "AAPL",
            "latestPrice": 458.43,
            "latestUpdate": 1_597_694_400_123_i64,
            "iexBidPrice": null,
            "iexBidSize": null,
            "iexOpenTime": null,
            "iexClose": 458.4,
            "lastTradeTime": -1,
            "openTime": null
        }),
    );
    let client = stub_client(transport);

    let quote = client.quote("AAPL", false).await.expect("quote should decode");

    assert_eq!(quote.iex_bid_price, None);
    assert_eq!(quote.iex_bid_size, None);
    assert_eq!(quote.iex_open_time, None);
    assert!(quote.last_trade_time.is_zero(), "-1 means not quoted today");
    assert!(quote.open_time.is_zero());
    assert_eq!(
        quote.latest_update.as_offset_datetime().unix_timestamp(),
        1_597_694_400
    );
}

#[tokio::test]
async fn when_book_is_returned_nested_records_decode() {
    let transport = StubHttpClient::json(
        "/stock/AAPL/book",
        &json!({
            "quote": { "symbol": "AAPL", "latestPrice": 458.43 },
            "bids": [{ "price": 458.40, "size": 100, "timestamp": 1_597_694_400_000_i64 }],
            "asks": [],
            "trades": [{ "price": 458.42, "size": 50, "tradeId": 7, "isISO": false, "isOddLot": true, "timestamp": 1_597_694_399_000_i64 }],
            "systemEvent": { "systemEvent": "R", "timestamp": 1_597_671_000_000_i64 }
        }),
    );
    let client = stub_client(transport);

    let book = client.book("AAPL").await.expect("book should decode");

    assert_eq!(book.quote.symbol, "AAPL");
    assert_eq!(book.bids.len(), 1);
    assert!(book.asks.is_empty());
    assert!(book.trades[0].is_odd_lot);
    assert_eq!(book.system_event.system_event, "R");
}

#[tokio::test]
async fn when_ohlc_and_previous_day_are_returned_they_decode() {
    let transport = StubHttpClient::json(
        "/stock/AAPL/ohlc",
        &json!({
            "open": { "price": 447.88, "time": 1_597_671_000_000_i64 },
            "close": { "price": 458.43, "time": 1_597_694_400_000_i64 },
            "high": 460.0,
            "low": 446.0,
            "volume": 1000,
            "symbol": "AAPL"
        }),
    );
    let client = stub_client(transport);
    let ohlc = client.ohlc("AAPL").await.expect("ohlc should decode");
    assert_eq!(ohlc.close.price, 458.43);
    assert!(!ohlc.open.time.is_zero());

    let transport = StubHttpClient::json(
        "/stock/AAPL/previous",
        &json!({ "date": "2020-08-14", "close": 459.63, "change": -0.82, "changePercent": -0.178, "symbol": "AAPL" }),
    );
    let client = stub_client(transport);
    let previous = client
        .previous_day_price("AAPL")
        .await
        .expect("previous day should decode");
    assert_eq!(previous.change, -0.82);
    assert_eq!(previous.symbol, "AAPL");
}

#[tokio::test]
async fn when_sequence_endpoints_return_arrays_they_decode() {
    let transport = StubHttpClient::json(
        "/stock/AAPL/largest-trades",
        &json!([{ "price": 458.0, "size": 20_000, "time": 1_597_680_000_000_i64, "timeLabel": "12:00:00", "venue": "None", "venueName": "Off Exchange" }]),
    );
    let trades = stub_client(transport)
        .largest_trades("AAPL")
        .await
        .expect("trades should decode");
    assert_eq!(trades[0].venue_name, "Off Exchange");

    let transport = StubHttpClient::json(
        "/stock/AAPL/volume-by-venue",
        &json!([{ "volume": 0, "venue": "XNAS", "venueName": "NASDAQ", "marketPercent": 0.0, "avgMarketPercent": 0.0, "date": null }]),
    );
    let venues = stub_client(transport)
        .volume_by_venue("AAPL")
        .await
        .expect("venues should decode");
    assert_eq!(venues[0].venue, "XNAS");
    assert_eq!(venues[0].date, "", "null date reads as empty");
}

#[tokio::test]
async fn when_intraday_minutes_have_no_iex_trades_null_prices_read_as_zero() {
    // Given: two minutes as IEX sends them, the second without IEX prints
    let transport = StubHttpClient::json(
        "/stock/AAPL/intraday-prices",
        &json!([
            {
                "date": "2020-08-17", "minute": "09:30", "label": "09:30 AM",
                "high": 460.1, "low": 458.9, "open": 459.0, "close": 459.8,
                "average": 459.52, "volume": 1_422, "notional": 653_437.44, "numberOfTrades": 17,
                "marketHigh": null, "marketLow": null, "marketAverage": null, "marketVolume": null,
                "changeOverTime": 0
            },
            {
                "date": "2020-08-17", "minute": "09:31", "label": "09:31 AM",
                "high": null, "low": null, "open": null, "close": null,
                "average": null, "volume": 0, "notional": 0, "numberOfTrades": 0,
                "marketHigh": null, "marketLow": null, "marketAverage": null, "marketVolume": null,
                "changeOverTime": null
            }
        ]),
    );
    let client = stub_client(transport);

    // When: the day's minutes are requested
    let minutes = client
        .intraday_prices(&IntradayOptions::new("AAPL"))
        .await
        .expect("minutes should decode");

    // Then: both minutes arrive and the empty one carries zero prices
    assert_eq!(minutes.len(), 2);
    assert_eq!(minutes[0].average, 459.52);
    assert_eq!(minutes[0].change_over_time, Some(0.0));
    assert_eq!(minutes[1].minute, "09:31");
    assert_eq!(minutes[1].open, 0.0);
    assert_eq!(minutes[1].average, 0.0);
    assert_eq!(minutes[1].market_average, None);
    assert_eq!(minutes[1].change_over_time, None);
}

#[tokio::test]
async fn when_fund_quote_has_null_ratios_and_realtime_fields_it_still_decodes() {
    // Given: an ETF quote outside the paid real-time tiers
    let transport = StubHttpClient::json(
        "/stock/SPY/quote",
        &json!({
            "symbol": "SPY",
            "companyName": "SPDR S&P 500 ETF Trust",
            "calculationPrice": "close",
            "open": null,
            "openTime": null,
            "close": 337.91,
            "latestPrice": 337.91,
            "latestSource": "Close",
            "latestUpdate": 1_597_694_400_000_i64,
            "iexRealtimePrice": null,
            "iexRealtimeSize": null,
            "iexLastUpdated": null,
            "delayedPrice": null,
            "extendedPrice": null,
            "extendedChange": null,
            "marketCap": null,
            "peRatio": null,
            "week52High": 339.08,
            "week52Low": 218.26,
            "iexBidPrice": null,
            "iexAskPrice": null,
            "isUSMarketOpen": false
        }),
    );
    let client = stub_client(transport);

    // When
    let quote = client.quote("SPY", false).await.expect("quote should decode");

    // Then: nullable IEX fields stay absent, other nulls read as defaults
    assert_eq!(quote.latest_price, 337.91);
    assert_eq!(quote.pe_ratio, 0.0);
    assert_eq!(quote.market_cap, 0);
    assert_eq!(quote.iex_realtime_price, 0.0);
    assert_eq!(quote.open, 0.0);
    assert!(quote.open_time.is_zero());
    assert!(quote.iex_last_updated.is_zero());
    assert_eq!(quote.iex_bid_price, None);
    assert_eq!(quote.week52_low, 218.26);
}

#[tokio::test]
async fn when_account_metadata_is_requested_no_symbol_is_needed() {
    let transport = StubHttpClient::json(
        "/account/metadata",
        &json!({ "payAsYouGoEnabled": false, "effectiveDate": 1, "subscriptionTermType": "annual", "tierName": "launch", "messageLimit": 501_660, "messagesUsed": 0, "circuitBreaker": null }),
    );
    let client = stub_client(transport.clone());

    let metadata = client.metadata().await.expect("metadata should decode");

    assert_eq!(metadata.effective_date, 1);
    assert_eq!(metadata.circuit_breaker, None);
    assert!(transport.last_url().contains("/account/metadata?token=sk_test"));
}

// =============================================================================
// Error surface
// =============================================================================

#[tokio::test]
async fn when_upstream_returns_400_caller_sees_status_and_exact_body() {
    let transport = StubHttpClient::new("/stock/ZZZZ/quote", 400, "Unknown symbol");
    let client = stub_client(transport);

    let error = client.quote("ZZZZ", true).await.expect_err("must fail");

    match error {
        IexError::Api(ApiError {
            status_code,
            message,
        }) => {
            assert_eq!(status_code, 400);
            assert_eq!(message, "Unknown symbol");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn when_resource_is_unknown_to_upstream_caller_sees_404() {
    let transport = StubHttpClient::json("/stock/AAPL/quote", &json!({}));
    let client = stub_client(transport);

    let error = client.delayed_quote("AAPL").await.expect_err("must fail");

    let api = error.as_api_error().expect("api error");
    assert_eq!(api.status_code, 404);
    assert_eq!(api.message, "Not found");
    assert!(api.is_client_error());
}

#[tokio::test]
async fn when_body_is_not_json_caller_sees_decode_error() {
    let transport = StubHttpClient::new("/account/metadata", 200, "<html>oops</html>");
    let client = stub_client(transport);

    let error = client.metadata().await.expect_err("must fail");

    assert!(matches!(error, IexError::Decode(_)));
}

#[tokio::test]
async fn when_price_body_is_not_numeric_caller_sees_parse_error() {
    let transport = StubHttpClient::new("/stock/AAPL/price", 200, "{\"price\":99}");
    let client = stub_client(transport);

    let error = client.price_only("AAPL").await.expect_err("must fail");

    assert!(matches!(error, IexError::InvalidPrice { .. }));
}

#[tokio::test]
async fn when_calls_fail_nothing_is_retried() {
    let transport = StubHttpClient::new("/stock/AAPL/ohlc", 503, "Service Unavailable");
    let client = stub_client(transport.clone());

    let error = client.ohlc("AAPL").await.expect_err("must fail");

    assert!(error.as_api_error().is_some_and(ApiError::is_server_error));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn client_can_be_shared_between_tasks() {
    let transport = StubHttpClient::new("/price", 200, "12.5");
    let client = stub_client(transport.clone());

    let handles = ["AAPL", "MSFT", "IBM"]
        .into_iter()
        .map(|symbol| {
            let client = client.clone();
            tokio::spawn(async move { client.price_only(symbol).await })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let price = handle.await.expect("task should join").expect("price should parse");
        assert_eq!(price, 12.5);
    }
    assert_eq!(transport.requests().len(), 3);
}
