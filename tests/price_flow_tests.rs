mod support;

use std::time::{Duration, Instant};

use mockito::Matcher;

use coinradar::adapter::inbound::telegram::handler::response_for_message;
use coinradar::adapter::inbound::telegram::reply;
use coinradar::application::PriceService;
use coinradar::domain::{PriceObservation, Symbol};
use coinradar::error::PriceError;

use support::server::SilentServer;
use support::{coingecko_client, SIMPLE_PRICE_PATH};

#[tokio::test]
async fn single_coin_lookup_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", SIMPLE_PRICE_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("ids".into(), "bitcoin".into()),
            Matcher::UrlEncoded("vs_currencies".into(), "usd,rub".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"bitcoin": {"usd": 65000, "rub": 5900000}}"#)
        .expect(1)
        .create_async()
        .await;

    let service = PriceService::new(coingecko_client(&server.url(), 10));
    let prices = service.fetch_prices(&[Symbol::Btc]).await.unwrap();

    mock.assert_async().await;
    assert_eq!(prices.len(), 1);
    assert_eq!(
        prices.get(Symbol::Btc),
        Some(&PriceObservation::new(65000.0, 5_900_000.0))
    );
}

#[tokio::test]
async fn duplicate_symbols_send_each_alias_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", SIMPLE_PRICE_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("ids".into(), "toncoin,the-open-network,ethereum".into()),
            Matcher::UrlEncoded("vs_currencies".into(), "usd,rub".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"the-open-network": {"usd": 5.2, "rub": 470.5}}"#)
        .expect(1)
        .create_async()
        .await;

    let service = PriceService::new(coingecko_client(&server.url(), 10));
    let prices = service
        .fetch_prices(&[Symbol::Ton, Symbol::Eth, Symbol::Ton, Symbol::Eth])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        prices.get(Symbol::Ton),
        Some(&PriceObservation::new(5.2, 470.5))
    );
    assert!(!prices.contains(Symbol::Eth));
}

#[tokio::test]
async fn partial_answer_renders_no_data_line() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", SIMPLE_PRICE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"bitcoin": {"usd": 65000, "rub": 5900000}}"#)
        .create_async()
        .await;

    let service = PriceService::new(coingecko_client(&server.url(), 10));
    let reply = response_for_message("/price btc eth", "coinradar_bot", &service)
        .await
        .unwrap();

    assert_eq!(
        reply.text,
        "• <b>BTC</b>: $65,000.00 | ₽5,900,000.00\n• ETH: нет данных"
    );
}

#[tokio::test]
async fn unsupported_token_never_reaches_provider() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", SIMPLE_PRICE_PATH)
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let service = PriceService::new(coingecko_client(&server.url(), 10));
    let reply = response_for_message("/price xyz", "coinradar_bot", &service)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(reply.text, reply::usage_hint());
}

#[tokio::test]
async fn server_error_fails_whole_lookup() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", SIMPLE_PRICE_PATH)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"bitcoin": {"usd": 65000, "rub": 5900000}}"#)
        .create_async()
        .await;

    let service = PriceService::new(coingecko_client(&server.url(), 10));
    let err = service.fetch_prices(&[Symbol::Btc]).await.unwrap_err();

    assert!(
        matches!(err, PriceError::Upstream { status: Some(500), .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn timeout_surfaces_as_upstream_error() {
    let server = SilentServer::start().await;
    let service = PriceService::new(coingecko_client(&server.url(), 1));

    let started = Instant::now();
    let err = service.fetch_prices(&[Symbol::Btc]).await.unwrap_err();

    assert!(matches!(err, PriceError::Upstream { status: None, .. }));
    assert!(started.elapsed() < Duration::from_secs(5));

    let reply = reply::error_reply(&err);
    assert!(reply.starts_with("Не удалось получить цены"));
}

#[tokio::test]
async fn identical_lookups_give_identical_results() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", SIMPLE_PRICE_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"bitcoin": {"usd": 65000.5, "rub": 5900000.25}, "ethereum": {"usd": 3000}}"#,
        )
        .expect(2)
        .create_async()
        .await;

    let service = PriceService::new(coingecko_client(&server.url(), 10));
    let symbols = [Symbol::Btc, Symbol::Eth, Symbol::Ton];

    let first = service.fetch_prices(&symbols).await.unwrap();
    let second = service.fetch_prices(&symbols).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.get(Symbol::Eth).and_then(|o| o.rub), None);
}
