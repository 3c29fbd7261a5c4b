use gateway_core::{api::ApiResponse, ApiError, Client, ClientSettings};
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

async fn read_envelope(server: &MockServer) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    let client = Client::new(Some(ClientSettings {
        api_url: server.uri(),
        ..ClientSettings::default()
    }));
    let config = client.internal.api_configuration();

    let response = config
        .client
        .get(format!("{}/api/status", config.base_path))
        .send()
        .await?;
    ApiResponse::from_response(response).await
}

async fn mock_status_endpoint(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .and(matchers::path("/api/status"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn reads_success_envelope() {
    let server = mock_status_endpoint(
        ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({"success": true, "data": {"version": "1.0.0"}})),
    )
    .await;

    let envelope = read_envelope(&server).await.unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap()["version"], "1.0.0");
}

#[tokio::test]
async fn reads_envelope_from_error_status() {
    // The gateway reports handled failures as an envelope under a 4xx status.
    let server = mock_status_endpoint(
        ResponseTemplate::new(400)
            .set_body_json(serde_json::json!({"success": false, "message": "bad request"})),
    )
    .await;

    let envelope = read_envelope(&server).await.unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.message.as_deref(), Some("bad request"));
}

#[tokio::test]
async fn unauthorized_maps_to_not_authenticated() {
    let server = mock_status_endpoint(
        ResponseTemplate::new(401)
            .set_body_json(serde_json::json!({"success": false, "message": "unauthorized"})),
    )
    .await;

    let err = read_envelope(&server).await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated(_)));
}

#[tokio::test]
async fn non_envelope_error_body_maps_to_response_content() {
    let server =
        mock_status_endpoint(ResponseTemplate::new(502).set_body_string("Bad Gateway")).await;

    let err = read_envelope(&server).await.unwrap_err();
    match err {
        ApiError::ResponseContent { status, message } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected ResponseContent, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_a_serde_error() {
    let server =
        mock_status_endpoint(ResponseTemplate::new(200).set_body_string("not json")).await;

    let err = read_envelope(&server).await.unwrap_err();
    assert!(matches!(err, ApiError::Serde(_)));
}
