//! Tests for the job-tracker client against a mock Supabase server.

use std::time::Duration;

use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::{SupabaseClient, SupabaseConfig};
use crate::error::SupabaseError;

fn test_config(base_url: String) -> SupabaseConfig {
    SupabaseConfig {
        base_url,
        api_key: "anon-key".to_string(),
        email: "reporter@example.com".to_string(),
        password: "hunter2".to_string(),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn test_login_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("Apikey", "anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "jwt-token",
            "token_type": "bearer",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SupabaseClient::new(test_config(server.uri())).unwrap();
    let session = client.login().await.unwrap();
    assert_eq!(session.token(), "jwt-token");
}

#[tokio::test]
async fn test_login_failure_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"error": "invalid_grant"})),
        )
        .mount(&server)
        .await;

    let client = SupabaseClient::new(test_config(server.uri())).unwrap();
    let err = client.login().await.unwrap_err();
    assert!(matches!(err, SupabaseError::LoginFailed(_)));
}

#[tokio::test]
async fn test_update_job_sends_contract() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "jwt-token",
        })))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/jobs"))
        .and(query_param("uri", "eq.talk_0_5"))
        .and(header("Apikey", "anon-key"))
        .and(header("Authorization", "Bearer jwt-token"))
        .and(body_json(serde_json::json!({"state": "done", "progress": 100})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = SupabaseClient::new(test_config(server.uri())).unwrap();
    let session = client.login().await.unwrap();
    client
        .update_job(&session, "talk_0_5", "done", 100)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_job_non_2xx_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "jwt-token",
        })))
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/jobs"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = SupabaseClient::new(test_config(server.uri())).unwrap();
    let session = client.login().await.unwrap();
    let err = client
        .update_job(&session, "talk_0_5", "error", 0)
        .await
        .unwrap_err();
    assert!(matches!(err, SupabaseError::UpdateFailed { .. }));
}
