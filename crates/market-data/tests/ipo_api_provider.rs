//! Drives `IpoApiProvider` against a one-shot HTTP responder on localhost.

use std::time::Duration;

use marketdesk_market_data::{IpoApiProvider, IpoDataProvider, MarketDataError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves a single canned response and returns the base URL to reach it.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn fetches_document_from_collection_envelope() {
    let base = serve_once(
        "200 OK",
        r#"{"docs":[{"slug":"acme-ipo","title":"Acme Ltd IPO","price_band_text":"₹430 to ₹450"}],"totalDocs":1}"#,
    )
    .await;

    let provider = IpoApiProvider::new(base);
    let doc = provider.fetch_ipo("acme-ipo").await.unwrap();

    assert_eq!(doc.title.as_deref(), Some("Acme Ltd IPO"));
    assert_eq!(doc.price_band_text.as_deref(), Some("₹430 to ₹450"));
}

#[tokio::test]
async fn empty_collection_is_not_found() {
    let base = serve_once("200 OK", r#"{"docs":[],"totalDocs":0}"#).await;

    let provider = IpoApiProvider::new(base);
    let err = provider.fetch_ipo("missing-ipo").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn http_404_is_not_found() {
    let base = serve_once("404 Not Found", r#"{"errors":[{"message":"Not Found"}]}"#).await;

    let provider = IpoApiProvider::new(base);
    let err = provider.fetch_ipo("missing-ipo").await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn http_429_is_rate_limited() {
    let base = serve_once("429 Too Many Requests", "{}").await;

    let provider = IpoApiProvider::new(base);
    let err = provider.fetch_ipo("acme-ipo").await.unwrap_err();

    assert!(matches!(err, MarketDataError::RateLimited { .. }));
}

#[tokio::test]
async fn http_500_is_provider_error() {
    let base = serve_once("500 Internal Server Error", "{}").await;

    let provider = IpoApiProvider::new(base);
    let err = provider.fetch_ipo("acme-ipo").await.unwrap_err();

    match err {
        MarketDataError::ProviderError { provider, message } => {
            assert_eq!(provider, "IPO_API");
            assert!(message.contains("500"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let base = serve_once("200 OK", "<html>maintenance</html>").await;

    let provider = IpoApiProvider::new(base);
    let err = provider.fetch_ipo("acme-ipo").await.unwrap_err();

    assert!(matches!(err, MarketDataError::InvalidResponse { .. }));
}

#[tokio::test]
async fn slow_upstream_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let provider =
        IpoApiProvider::with_timeout(format!("http://{}", addr), Duration::from_millis(200));
    let err = provider.fetch_ipo("acme-ipo").await.unwrap_err();

    assert!(matches!(err, MarketDataError::Timeout { .. }));
}
