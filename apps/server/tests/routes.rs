use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
};
use marketdesk_market_data::{IpoDataProvider, IpoDocument, MarketDataError};
use marketdesk_server::{api::app_router, config::Config, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Serves one fixture document; every other slug is missing upstream.
struct StubProvider {
    slug: &'static str,
    document: Value,
}

#[async_trait]
impl IpoDataProvider for StubProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn fetch_ipo(&self, slug: &str) -> Result<IpoDocument, MarketDataError> {
        if slug == self.slug {
            Ok(IpoDocument::from_value(self.document.clone()))
        } else {
            Err(MarketDataError::NotFound(slug.to_string()))
        }
    }
}

/// Upstream that is always down.
struct FailingProvider;

#[async_trait]
impl IpoDataProvider for FailingProvider {
    fn id(&self) -> &'static str {
        "FAILING"
    }

    async fn fetch_ipo(&self, _slug: &str) -> Result<IpoDocument, MarketDataError> {
        Err(MarketDataError::Timeout {
            provider: "FAILING".to_string(),
        })
    }
}

fn test_config() -> Config {
    Config {
        site_url: "https://marketdesk.example".to_string(),
        referral_url: "https://broker.example/open".to_string(),
        revalidate_secs: 120,
        ..Config::default()
    }
}

fn fixture() -> Value {
    json!({
        "slug": "acme-ipo",
        "title": "Acme Industries IPO",
        "company_name": "Acme Industries",
        "logo": {"url": "https://cdn.example/acme.png"},
        "price_band_text": "₹430 to ₹450",
        "lot_size_text": "33 shares",
        "gmp": 45,
        "listing_at": ["NSE", "BSE", "NSE"],
        "timeline": {"open_date": "2025-01-14T18:30:00.000Z"},
        "faqs": [{"question": "What is the Acme IPO size?", "answer": "₹1,200 Cr"}]
    })
}

fn router_with(provider: Arc<dyn IpoDataProvider>) -> axum::Router {
    let config = test_config();
    let state = AppState::with_provider(provider, &config);
    app_router(state, &config)
}

fn app() -> axum::Router {
    router_with(Arc::new(StubProvider {
        slug: "acme-ipo",
        document: fixture(),
    }))
}

async fn get(app: axum::Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: axum::Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn health_endpoints_answer_ok() {
    for uri in ["/api/v1/healthz", "/api/v1/readyz"] {
        let response = get(app(), uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }
}

#[tokio::test]
async fn responses_carry_generated_request_id() {
    let response = get(app(), "/api/v1/healthz").await;
    let id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(!id.is_empty());

    let page = get(app(), "/ipo/acme-ipo").await;
    assert!(page.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn client_request_id_is_echoed() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .header("x-request-id", "client-req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "client-req-42");
}

#[tokio::test]
async fn ipo_detail_page_renders_document() {
    let response = get(app(), "/ipo/acme-ipo").await;
    assert_eq!(response.status(), StatusCode::OK);
    let cache = response.headers()[header::CACHE_CONTROL].to_str().unwrap();
    assert!(cache.contains("max-age=120"));

    let html = body_text(response).await;
    assert!(html.contains("<title>Acme Industries IPO | MarketDesk</title>"));
    assert!(html.contains("₹430 - ₹450"));
    assert!(html.contains("₹14,850"));
    assert!(html.contains("₹45 (10.00%)"));
    assert!(html.contains("NSE, BSE"));
    assert!(html.contains("15 January 2025"));
    assert!(html.contains("\"FinancialProduct\""));
    assert!(html.contains("\"FAQPage\""));
    assert!(html.contains("What is the Acme IPO size?"));
    assert!(html.contains(
        "<link rel=\"canonical\" href=\"https://marketdesk.example/ipo/acme-ipo\">"
    ));
    assert!(html.contains("og:image"));
    assert!(html.contains("rel=\"nofollow sponsored\""));
}

#[tokio::test]
async fn missing_ipo_renders_not_found_page() {
    let response = get(app(), "/ipo/unknown-ipo").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("Page not found"));
    assert!(html.contains("noindex"));
}

#[tokio::test]
async fn upstream_failure_renders_not_found_page() {
    let response = get(router_with(Arc::new(FailingProvider)), "/ipo/acme-ipo").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page not found"));
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let response = get(app(), "/no-such-page").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page not found"));

    let response = get(app(), "/api/v1/no-such-endpoint").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], 404);
}

#[tokio::test]
async fn listing_and_rate_pages_render() {
    let pages = [
        ("/", "Open &amp; Upcoming IPOs"),
        ("/ipo", "IPO Calendar"),
        ("/ipo?status=upcoming", "Vayu Aerospace Systems"),
        ("/ipo-gmp", "IPO GMP Today"),
        ("/ipo-gmp?sort=date", "Sort by estimated gain"),
        ("/buyback", "Active Buybacks"),
        ("/rights-issue", "Rights Issue"),
        ("/ncd", "NCD Issues"),
        ("/fd-rates", "FD Interest Rates"),
        ("/rd-rates", "RD Interest Rates"),
        ("/fuel-price", "Petrol and Diesel Price Today"),
        ("/fuel-price?city=new%20delhi", "Petrol and Diesel Price in New Delhi"),
        ("/gold-rate", "Gold and Silver Rate Today"),
        ("/gold-rate?city=Chennai", "Gold Rate in Chennai Today"),
        ("/calculators", "Financial Calculators"),
    ];
    for (uri, needle) in pages {
        let response = get(app(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert!(
            response.headers().contains_key(header::CACHE_CONTROL),
            "{} has no Cache-Control",
            uri
        );
        let html = body_text(response).await;
        assert!(html.contains(needle), "{} should contain {}", uri, needle);
        assert!(html.contains("application/ld+json"), "{}", uri);
    }
}

#[tokio::test]
async fn unknown_city_is_not_found() {
    let response = get(app(), "/gold-rate?city=Atlantis").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(app(), "/api/v1/rates/fuel?city=Atlantis").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn calculator_page_computes_defaults_and_rejects_bad_input() {
    let response = get(app(), "/calculators/sip").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("₹11,61,695.38"));

    let response = get(app(), "/calculators/emi?amount=abc&rate=8.5&tenure=240").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains("Amount must be a number"));

    let response = get(app(), "/calculators/pension").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ipo_api_returns_view_model() {
    let response = get(app(), "/api/v1/ipos/acme-ipo").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["companyName"], "Acme Industries");
    assert_eq!(body["minimumInvestment"], "₹14,850");

    let response = get(app(), "/api/v1/ipos/Not_A_Slug").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ipo_calendar_api_filters() {
    let response = get(app(), "/api/v1/ipos?segment=sme").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let items = body.as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items.iter().all(|item| item["segment"] == "sme"));

    let response = get(app(), "/api/v1/ipos?status=upcoming").await;
    let body = body_json(response).await;
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .any(|item| item["slug"] == "vayu-aerospace-systems"));
}

#[tokio::test]
async fn listing_and_rate_apis_answer() {
    for uri in [
        "/api/v1/gmp",
        "/api/v1/gmp?sort=date",
        "/api/v1/buybacks",
        "/api/v1/rights-issues",
        "/api/v1/ncds",
        "/api/v1/rates/fd",
        "/api/v1/rates/rd",
        "/api/v1/rates/fuel",
        "/api/v1/rates/metals?city=mumbai",
    ] {
        let response = get(app(), uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
    }

    let response = get(app(), "/api/v1/gmp?sort=volume").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calculator_api() {
    let response = post_json(
        app(),
        "/api/v1/calculators/emi",
        json!({"principal": 1000000, "annualRate": 8.5, "months": 240}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["monthlyEmi"].as_f64(), Some(8678.23));

    let response = post_json(
        app(),
        "/api/v1/calculators/fd",
        json!({"principal": 0, "annualRate": 7, "months": 12}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 400);
}
