use std::time::Duration;

use anyhow::Result;
use http::{HeaderValue, StatusCode, header::AUTHORIZATION};
use serde_json::json;
use voiceagent_sdk::transport::request::Request as ApiRequest;
use voiceagent_sdk::types::{UserResponse, VoiceFilter, VoicePublic};
use voiceagent_sdk::{Client, ErrorKind};
use wiremock::{
    Match, Mock, MockServer, Request, ResponseTemplate,
    matchers::{body_string_contains, header, method, path, query_param},
};

/// Matches requests that carry no `Authorization` header at all.
#[derive(Clone, Copy)]
struct NoAuthHeader;

impl Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// Matches a multipart upload whose raw body contains `self.0`.
#[derive(Clone, Copy)]
struct MultipartContaining(&'static str);

impl Match for MultipartContaining {
    fn matches(&self, request: &Request) -> bool {
        let content_type = request
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        content_type.starts_with("multipart/form-data")
            && String::from_utf8_lossy(&request.body).contains(self.0)
    }
}

fn client_with_tokens(server: &MockServer, access: &str, refresh: &str) -> Result<Client> {
    Ok(Client::builder(server.uri())?
        .access_token(access)
        .refresh_token(refresh)
        .build()?)
}

fn user_json() -> serde_json::Value {
    json!({
        "id": "user-1",
        "email": "alice@example.com",
        "username": "alice",
        "first_name": "Alice",
        "last_name": null,
        "is_active": true,
        "is_suspended": false,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": null
    })
}

fn health_json() -> serde_json::Value {
    json!({
        "status": "healthy",
        "cpu_usage": 12.5,
        "memory_usage": 40.2,
        "memory_available_mb": 2048.0,
        "process_cpu_usage": 1.2,
        "process_memory_mb": 256.0,
        "active_workers": 2,
        "pending_workers": 0,
        "max_workers": 10,
        "active_rooms": 1,
        "uptime_seconds": 3600.0,
        "error_rate": 0.0,
        "is_accepting_new_workers": true
    })
}

async fn mock_refresh(server: &MockServer, old_refresh: &'static str, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_string_contains(old_refresh))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A2",
            "refresh_token": "R2"
        })))
        .expect(expected)
        .up_to_n_times(expected.max(1))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn attaches_stored_bearer_token() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("Authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(health_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let health = client.health().check().await?;
    assert_eq!(health.status, "healthy");
    assert!(health.is_accepting_new_workers);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn refreshes_once_and_resubmits_on_401() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("Authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "expired"})))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;

    mock_refresh(&server, "R1", 1).await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("Authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let me: UserResponse = client.users().my_profile().await?;
    assert_eq!(me.username, "alice");

    // Both tokens rotated by the automatic refresh.
    assert_eq!(client.access_token().as_deref(), Some("A2"));
    assert_eq!(client.refresh_token().as_deref(), Some("R2"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn second_401_after_refresh_is_terminal() -> Result<()> {
    let server = MockServer::start().await;

    // The endpoint rejects both the old and the rotated token; exactly one
    // refresh happens, then the 401 surfaces as an authentication error.
    Mock::given(method("GET"))
        .and(path("/agents/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "account disabled"})),
        )
        .expect(2)
        .mount(&server)
        .await;

    mock_refresh(&server, "R1", 1).await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let err = client.agents().list(None, None).await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));
    assert!(err.to_string().contains("account disabled"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn no_refresh_without_refresh_token() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "expired"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?.access_token("A1").build()?;
    let err = client.users().my_profile().await.unwrap_err();
    assert!(err.is_auth_error());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failed_refresh_clears_tokens() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "expired"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "invalid refresh token"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let err = client.users().my_profile().await.unwrap_err();
    assert!(err.is_auth_error());
    assert!(err.to_string().contains("token refresh failed"));
    assert!(err.to_string().contains("invalid refresh token"));

    // The session is dead; neither credential survives.
    assert_eq!(client.access_token(), None);
    assert_eq!(client.refresh_token(), None);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn validation_detail_passes_through_verbatim() -> Result<()> {
    let server = MockServer::start().await;
    let detail = json!([{"loc": ["body", "email"], "msg": "value is not a valid email address"}]);

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": detail})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?.build()?;
    let err = client
        .auth()
        .register(&voiceagent_sdk::types::UserCreate {
            email: "not-an-email".into(),
            username: "alice".into(),
            password: "hunter2".into(),
            first_name: None,
            last_name: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    assert_eq!(err.detail(), Some(&detail));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cleared_tokens_send_no_authorization_header() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(health_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    client.clear_tokens();
    assert_eq!(client.access_token(), None);
    assert_eq!(client.refresh_token(), None);

    client.health().check().await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn explicit_authorization_header_wins() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("Authorization", "Bearer caller-supplied"))
        .respond_with(ResponseTemplate::new(200).set_body_json(health_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let req = ApiRequest::get(["health"]).header(
        AUTHORIZATION,
        HeaderValue::from_static("Bearer caller-supplied"),
    );
    let _: serde_json::Value = client.request(req).await?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn login_stores_returned_token_pair() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=alice"))
        .and(body_string_contains("password=hunter2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A1",
            "refresh_token": "R1",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?.build()?;
    let tokens = client.auth().login("alice", "hunter2").await?;
    assert_eq!(tokens.token_type, "bearer");
    assert_eq!(client.access_token().as_deref(), Some("A1"));
    assert_eq!(client.refresh_token().as_deref(), Some("R1"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn server_error_maps_to_api_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/credits/account"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let err = client.credits().account_summary().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.code(), Some("UNKNOWN"));
    assert!(err.to_string().contains("boom"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn error_message_falls_back_to_status_line() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/credits/account"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let err = client.credits().account_summary().await.unwrap_err();
    assert!(err.to_string().contains("Request failed with status 502"));
    assert!(err.is_retryable());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn connection_refused_is_network_error() -> Result<()> {
    // Port 1 is never bound in the test environment.
    let client = Client::builder("http://127.0.0.1:1")?
        .timeout(Duration::from_secs(2))
        .build()?;
    let err = client.health().check().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(err.code(), Some("NETWORK_ERROR"));
    assert!(err.is_retryable());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn retry_middleware_replays_transient_503() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(health_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?
        .with_retry(2, Duration::from_millis(5))
        .build()?;
    let health = client.health().check().await?;
    assert_eq!(health.status, "healthy");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn voice_filters_become_query_parameters() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/voices/"))
        .and(query_param("language", "en-US"))
        .and(query_param("premium_only", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "name": "Aria",
            "gender": "female",
            "language": "en-US",
            "is_premium": true
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let voices: Vec<VoicePublic> = client
        .voices()
        .list(&VoiceFilter {
            language: Some("en-US".into()),
            premium_only: Some(true),
            ..VoiceFilter::default()
        })
        .await?;
    assert_eq!(voices.len(), 1);
    assert_eq!(voices[0].name, "Aria");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_pagination_is_optional() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/agents/"))
        .and(query_param("skip", "10"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "agents": [],
            "total": 0,
            "page": 3,
            "per_page": 5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let listing = client.agents().list(Some(10), Some(5)).await?;
    assert_eq!(listing.total, 0);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn transcription_upload_is_multipart() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/stt/transcribe"))
        .and(MultipartContaining("clip.wav"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "user_id": "user-1",
            "original_filename": "clip.wav",
            "status": "processing",
            "created_at": "2024-01-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let transcription = client
        .stt()
        .transcribe(
            "clip.wav",
            Some("audio/wav"),
            b"RIFF....WAVE".to_vec(),
            &voiceagent_sdk::types::TranscribeOptions {
                language: Some("en".into()),
                provider: None,
            },
        )
        .await?;
    assert_eq!(transcription.id, 7);
    assert_eq!(transcription.status, "processing");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn verb_helpers_accept_unsized_bodies() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/usage/estimate"))
        .and(body_string_contains("\"ping\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    // `str` is unsized; the generic body parameter must not require Sized.
    let reply: serde_json::Value = client.post(["usage", "estimate"], "ping").await?;
    assert_eq!(reply["ok"], true);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn not_modified_maps_to_service_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(304))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let err = client.health().check().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(StatusCode::NOT_MODIFIED));
    assert!(err.to_string().contains("Request failed with status 304"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn auth_error_fallback_message_is_not_doubled() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::builder(server.uri())?.access_token("A1").build()?;
    let err = client.users().my_profile().await.unwrap_err();
    let text = err.to_string();
    assert_eq!(text, "Authentication failed: no further detail from server");
    assert_eq!(text.matches("Authentication failed").count(), 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn session_lifecycle_paths() -> Result<()> {
    let server = MockServer::start().await;

    let session = json!({
        "session_id": 7,
        "agent_id": 3,
        "room_name": "room-7",
        "livekit_token": "lk-token",
        "status": "active",
        "created_at": "2024-01-01T00:00:00Z",
        "ended_at": null
    });

    Mock::given(method("POST"))
        .and(path("/sessions/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&session))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/sessions/7/message"))
        .and(body_string_contains("\"content\":\"hello\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": "hi there",
            "agent_id": 3,
            "session_id": 7,
            "timestamp": "2024-01-01T00:00:01Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let started = client.sessions().start(3).await?;
    assert_eq!(started.session_id, 7);
    assert_eq!(started.status, "active");

    let reply = client
        .sessions()
        .send_message(
            7,
            &voiceagent_sdk::types::TextMessage {
                content: "hello".into(),
                metadata: None,
            },
        )
        .await?;
    assert_eq!(reply.content, "hi there");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn logout_clears_tokens_even_on_failure() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "oops"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_tokens(&server, "A1", "R1")?;
    let result = client.auth().logout().await;
    assert!(result.is_err());
    assert_eq!(client.access_token(), None);
    assert_eq!(client.refresh_token(), None);
    Ok(())
}
