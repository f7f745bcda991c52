use std::time::Duration;

use serde_json::json;
use smartsms::{
    Destination, GatewayClient, GatewayError, Host, MessageText, Method, Password,
    RequestOptions, SendMessage, Username,
};
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, timeout: Duration) -> GatewayClient {
    GatewayClient::builder(Username::new("u").unwrap(), Password::new("p").unwrap())
        .host(Host::new(server.uri()).unwrap())
        .timeout(timeout)
        .user_agent("smartsms-tests")
        .build()
        .unwrap()
}

fn hello() -> SendMessage {
    SendMessage::new(
        Destination::new("639171234567").unwrap(),
        MessageText::new("Hello").unwrap(),
    )
}

#[tokio::test]
async fn send_message_round_trip_against_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sendmsg"))
        .and(query_param("destination", "639171234567"))
        .and(query_param("text", "Hello"))
        .and(header("Authorization", "Basic dTpw"))
        .and(header(
            "Content-Type",
            "application/x-www-form-urlencoded;charset=utf-8",
        ))
        .and(header_exists("Date"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let response = client.send_message(hello()).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, Some(json!({ "status": "ok" })));

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].url.query(),
        Some("destination=639171234567&text=Hello")
    );
    assert_eq!(
        received[0].headers.get("user-agent").and_then(|v| v.to_str().ok()),
        Some("smartsms-tests")
    );
}

#[tokio::test]
async fn server_errors_are_responses_not_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let response = client
        .request(RequestOptions::new("status").method(Method::Get))
        .await
        .unwrap();

    assert_eq!(response.status, 503);
    assert!(!response.is_success());
    assert!(response.body.is_none());
}

#[tokio::test]
async fn plain_text_body_surfaces_as_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sendmsg"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-message-id", "abc123")
                .set_body_string("ACK:639171234567"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_secs(5));
    let err = client.send_message(hello()).await.unwrap_err();

    match err {
        GatewayError::Parse {
            status,
            headers,
            body,
            ..
        } => {
            assert_eq!(status, 200);
            assert_eq!(body, "ACK:639171234567");
            assert_eq!(
                headers.get("x-message-id").and_then(|v| v.to_str().ok()),
                Some("abc123")
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn slow_gateway_times_out_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sendmsg"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "ok" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server, Duration::from_millis(100));
    let err = client.send_message(hello()).await.unwrap_err();

    assert!(matches!(err, GatewayError::Timeout { .. }));
}

#[tokio::test]
async fn unreachable_gateway_is_a_transport_error() {
    let client = GatewayClient::builder(Username::new("u").unwrap(), Password::new("p").unwrap())
        .host(Host::new("http://127.0.0.1:1").unwrap())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let err = client.send_message(hello()).await.unwrap_err();
    assert!(matches!(err, GatewayError::Transport(_)));
}
