//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, AuditLogResponse, DraftResponse, Envelope,
    ErrorBody, FieldResponse, SeededDocument, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn setup() -> Option<(TestServer, SeededDocument)> {
    if !check_test_env().await {
        return None;
    }
    let server = TestServer::start().await.expect("Failed to start server");
    let seeded = SeededDocument::create(&server.pool)
        .await
        .expect("Failed to seed database");
    Some((server, seeded))
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Field Tests
// ============================================================================

#[tokio::test]
async fn test_list_fields_requires_auth() {
    let Some((server, seeded)) = setup().await else {
        return;
    };

    let response = server.get(&seeded.fields_path()).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_update_field_writes_audit_entry() {
    let Some((server, seeded)) = setup().await else {
        return;
    };
    let token = server.token_for(seeded.owner_id).unwrap();

    let body = json!({
        "recipient_id": seeded.recipient_id,
        "page_x": 42.5,
        "field_meta": { "label": "Full name", "required": true }
    });
    let response = server
        .patch_auth(&seeded.field_path(), &token, &body)
        .await
        .unwrap();
    let field: Envelope<FieldResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(field.data.page_x, 42.5);
    assert_eq!(field.data.recipient_id, Some(seeded.recipient_id));

    let response = server
        .get_auth(&seeded.audit_logs_path(), &token)
        .await
        .unwrap();
    let logs: Envelope<Vec<AuditLogResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logs.data.len(), 1);

    let entry = &logs.data[0];
    assert_eq!(entry.log_type, "FIELD_UPDATED");
    assert_eq!(entry.user_id, Some(seeded.owner_id));
    assert_eq!(entry.email.as_deref(), Some(seeded.owner_email.as_str()));
    assert_eq!(entry.name.as_deref(), Some("Owner"));
    assert_eq!(entry.ip_address.as_deref(), Some("203.0.113.7"));
    assert_eq!(entry.user_agent.as_deref(), Some("integration-tests"));
    assert_eq!(entry.data["field_id"], field.data.secondary_id);
    assert_eq!(entry.data["field_recipient_email"], seeded.recipient_email);
    assert_eq!(entry.data["field_recipient_id"], seeded.recipient_id);

    let changed: Vec<&str> = entry.data["changes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["attribute"].as_str().unwrap())
        .collect();
    assert_eq!(changed, ["recipient_id", "position_x", "field_meta"]);
}

#[tokio::test]
async fn test_outsider_sees_not_found() {
    let Some((server, seeded)) = setup().await else {
        return;
    };
    let token = server.token_for(seeded.outsider_id).unwrap();

    let response = server
        .patch_auth(&seeded.field_path(), &token, &json!({ "page_x": 1.0 }))
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(!error.error.message.is_empty());

    assert_eq!(seeded.audit_count(&server.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_team_document_needs_team_context() {
    let Some((server, seeded)) = setup().await else {
        return;
    };
    let token = server.token_for(seeded.owner_id).unwrap();
    let path = format!(
        "/api/v1/documents/{}/fields/{}",
        seeded.team_document_id, seeded.team_field_id
    );

    let response = server
        .patch_auth(&path, &token, &json!({ "page_y": 50.0 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let path = format!("{path}?team_id={}", seeded.team_id);
    let response = server
        .patch_auth(&path, &token, &json!({ "page_y": 50.0 }))
        .await
        .unwrap();
    let field: Envelope<FieldResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(field.data.page_y, 50.0);

    let logs_path = format!(
        "/api/v1/documents/{}/audit-logs?team_id={}",
        seeded.team_document_id, seeded.team_id
    );
    let response = server.get_auth(&logs_path, &token).await.unwrap();
    let logs: Envelope<Vec<AuditLogResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logs.data[0].name.as_deref(), Some("Legal"));
}

#[tokio::test]
async fn test_signed_field_is_rejected_without_audit() {
    let Some((server, seeded)) = setup().await else {
        return;
    };
    seeded.sign_field(&server.pool).await.unwrap();
    let token = server.token_for(seeded.owner_id).unwrap();

    let response = server
        .patch_auth(&seeded.field_path(), &token, &json!({ "page_x": 5.0 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    assert_eq!(seeded.audit_count(&server.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_assigning_signed_recipient_is_rejected() {
    let Some((server, seeded)) = setup().await else {
        return;
    };
    seeded.sign_recipient(&server.pool).await.unwrap();
    let token = server.token_for(seeded.owner_id).unwrap();

    let response = server
        .patch_auth(
            &seeded.field_path(),
            &token,
            &json!({ "recipient_id": seeded.recipient_id }),
        )
        .await
        .unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "RECIPIENT_ALREADY_SIGNED");
    assert_eq!(seeded.audit_count(&server.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_recipient_from_other_document_is_rejected() {
    let Some((server, seeded)) = setup().await else {
        return;
    };
    let other = SeededDocument::create(&server.pool).await.unwrap();
    let token = server.token_for(seeded.owner_id).unwrap();

    let response = server
        .patch_auth(
            &seeded.field_path(),
            &token,
            &json!({ "recipient_id": other.recipient_id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(seeded.audit_count(&server.pool).await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_fields() {
    let Some((server, seeded)) = setup().await else {
        return;
    };
    let token = server.token_for(seeded.owner_id).unwrap();

    let response = server.get_auth(&seeded.fields_path(), &token).await.unwrap();
    let fields: Envelope<Vec<FieldResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fields.data.len(), 1);
    assert_eq!(fields.data[0].id, seeded.field_id);
    assert_eq!(fields.data[0].field_type, "TEXT");
}

// ============================================================================
// Draft Tests
// ============================================================================

#[tokio::test]
async fn test_draft_round_trip() {
    let Some((server, seeded)) = setup().await else {
        return;
    };
    let token = server.token_for(seeded.owner_id).unwrap();
    let path = format!("/api/v1/field-drafts/form_{}/NUMBER", seeded.field_id);

    let response = server.get_auth(&path, &token).await.unwrap();
    let draft: Envelope<DraftResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(draft.data.field_type, "NUMBER");
    assert_eq!(draft.data.draft["required"], false);

    let body = json!({
        "label": "Amount",
        "placeholder": "0",
        "format": "123,456.78",
        "character_limit": 10,
        "required": true,
        "read_only": false
    });
    let response = server.put_auth(&path, &token, &body).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth(&path, &token).await.unwrap();
    let draft: Envelope<DraftResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(draft.data.draft["label"], "Amount");

    // Same form id, different type: separate draft
    let text_path = format!("/api/v1/field-drafts/form_{}/TEXT", seeded.field_id);
    let response = server.get_auth(&text_path, &token).await.unwrap();
    let draft: Envelope<DraftResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(draft.data.draft["label"], "");

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}
