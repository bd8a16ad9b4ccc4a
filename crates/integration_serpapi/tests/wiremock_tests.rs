//! Integration tests for the SerpApi client using WireMock
//!
//! These tests mock HTTP responses to verify client behavior without
//! making actual API calls.

use std::time::Duration;

use integration_serpapi::{SerpApiClient, SerpApiConfig, SerpApiError, ShoppingProvider};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample SerpApi Google Shopping response
fn shopping_success_response() -> serde_json::Value {
    serde_json::json!({
        "search_metadata": {
            "id": "6650a1b2c3d4e5f6a7b8c9d0",
            "status": "Success"
        },
        "search_parameters": {
            "engine": "google_shopping",
            "q": "iPhone 16 Pro, 128GB",
            "gl": "us"
        },
        "shopping_results": [
            {
                "position": 1,
                "title": "iPhone 16 Pro",
                "price": "$999",
                "extracted_price": 999.0,
                "product_link": "https://x",
                "source": "StoreA",
                "rating": 4.7
            },
            {
                "position": 2,
                "title": "Apple iPhone 16 Pro 128GB Black Titanium",
                "price": "$1,049.00",
                "extracted_price": 1049.0,
                "product_link": "https://y",
                "source": "StoreB"
            }
        ]
    })
}

fn client_for(server: &MockServer) -> SerpApiClient {
    SerpApiClient::new(&SerpApiConfig::for_testing(server.uri())).unwrap()
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn test_search_sends_fixed_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google_shopping"))
        .and(query_param("q", "iPhone 16 Pro, 128GB"))
        .and(query_param("gl", "US"))
        .and(query_param("num", "60"))
        .and(query_param("api_key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shopping_success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.search("iPhone 16 Pro, 128GB", "US").await.unwrap();

    assert_eq!(response.provider, "serpapi");
    assert_eq!(response.location, "US");
    assert_eq!(
        response.search_id.as_deref(),
        Some("6650a1b2c3d4e5f6a7b8c9d0")
    );
    assert!(response.search_time_ms.is_some());
}

#[tokio::test]
async fn test_search_uses_configured_result_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("num", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shopping_success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = SerpApiConfig {
        result_limit: 10,
        ..SerpApiConfig::for_testing(mock_server.uri())
    };
    let client = SerpApiClient::new(&config).unwrap();

    assert!(client.search("iphone", "US").await.is_ok());
}

#[tokio::test]
async fn test_empty_location_is_forwarded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("gl", ""))
        .and(query_param("q", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "shopping_results": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.search("", "").await.unwrap();

    assert!(!response.has_results());
}

// =============================================================================
// Response reshaping
// =============================================================================

#[tokio::test]
async fn test_search_maps_every_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shopping_success_response()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.search("iPhone 16 Pro, 128GB", "US").await.unwrap();

    assert_eq!(response.results.len(), 2);
    assert_eq!(response.results[0].title, "iPhone 16 Pro");
    assert_eq!(response.results[0].price, "$999");
    assert_eq!(response.results[0].link, "https://x");
    assert_eq!(response.results[0].seller, "StoreA");
    assert_eq!(response.results[1].price, "$1,049.00");
    assert_eq!(response.results[1].position, 2);
}

#[tokio::test]
async fn test_empty_shopping_results_is_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "search_metadata": { "id": "abc", "status": "Success" },
            "shopping_results": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.search("xyznonexistent123", "US").await.unwrap();

    assert!(response.results.is_empty());
}

#[tokio::test]
async fn test_listing_missing_field_fails_whole_search() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "shopping_results": [
                {
                    "title": "Complete",
                    "price": "$1",
                    "product_link": "https://a",
                    "source": "StoreA"
                },
                {
                    "title": "No seller",
                    "price": "$2",
                    "product_link": "https://b"
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search("iphone", "US").await;

    assert!(matches!(
        result,
        Err(SerpApiError::MissingField {
            field: "source",
            index: Some(1)
        })
    ));
}

#[tokio::test]
async fn test_missing_shopping_results_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "search_metadata": { "id": "abc", "status": "Success" },
            "organic_results": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search("iphone", "US").await;

    assert!(matches!(
        result,
        Err(SerpApiError::MissingField {
            field: "shopping_results",
            index: None
        })
    ));
}

#[tokio::test]
async fn test_provider_no_results_error_is_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "search_metadata": { "id": "abc", "status": "Success" },
            "error": "Google hasn't returned any results for this query."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.search("qwertyuiopasdfgh", "US").await.unwrap();

    assert!(response.results.is_empty());
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search("iphone", "US").await;

    assert!(matches!(result, Err(SerpApiError::ParseError(_))));
}

// =============================================================================
// Error statuses
// =============================================================================

#[tokio::test]
async fn test_unauthorized_surfaces_provider_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "Invalid API key. Your API key should be here: https://serpapi.com/manage-api-key"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search("iphone", "US").await;

    let Err(SerpApiError::AuthenticationFailed(message)) = result else {
        unreachable!("Expected AuthenticationFailed");
    };
    assert!(message.starts_with("Invalid API key."));
}

#[tokio::test]
async fn test_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "60"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search("iphone", "US").await;

    assert!(matches!(
        result,
        Err(SerpApiError::RateLimitExceeded {
            retry_after_secs: Some(60)
        })
    ));
}

#[tokio::test]
async fn test_server_error_is_service_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search("iphone", "US").await;

    let Err(SerpApiError::ServiceUnavailable(message)) = result else {
        unreachable!("Expected ServiceUnavailable");
    };
    assert!(message.contains("503"));
}

#[tokio::test]
async fn test_bad_request_is_request_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "Unsupported `gl` parameter."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search("iphone", "ZZ").await;

    let Err(SerpApiError::RequestFailed(message)) = result else {
        unreachable!("Expected RequestFailed");
    };
    assert_eq!(message, "Unsupported `gl` parameter.");
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(shopping_success_response())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = SerpApiConfig {
        timeout_secs: 1,
        ..SerpApiConfig::for_testing(mock_server.uri())
    };
    let client = SerpApiClient::new(&config).unwrap();
    let result = client.search("iphone", "US").await;

    assert!(matches!(
        result,
        Err(SerpApiError::Timeout { timeout_secs: 1 })
    ));
}

#[tokio::test]
async fn test_stalled_body_times_out() {
    // Headers arrive promptly, the body never completes
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 4096];
        let _ = socket.read(&mut request).await;
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 1000\r\n\r\n{\"shopping_results\": [",
            )
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let config = SerpApiConfig {
        timeout_secs: 1,
        ..SerpApiConfig::for_testing(format!("http://{addr}"))
    };
    let client = SerpApiClient::new(&config).unwrap();
    let result = client.search("iphone", "US").await;

    assert!(matches!(
        result,
        Err(SerpApiError::Timeout { timeout_secs: 1 })
    ));
}

#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(shopping_success_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = SerpApiConfig {
        api_key: None,
        ..SerpApiConfig::for_testing(mock_server.uri())
    };
    let client = SerpApiClient::new(&config).unwrap();
    let result = client.search("iphone", "US").await;

    assert!(matches!(result, Err(SerpApiError::ConfigurationError(_))));
}
