//! Test fixtures and data generators
//!
//! Seeds users, teams, documents, recipients and fields straight into
//! PostgreSQL, and models the JSON the API returns.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use serde::Deserialize;
use serde_json::Value;
use sign_db::PgPool;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    format!(
        "{}_{}",
        chrono::Utc::now().timestamp_micros(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// Rows seeded for one test
#[derive(Debug, Clone)]
pub struct SeededDocument {
    pub owner_id: i64,
    pub owner_email: String,
    pub outsider_id: i64,
    pub team_id: i64,
    pub document_id: i64,
    pub team_document_id: i64,
    pub recipient_id: i64,
    pub recipient_email: String,
    pub field_id: i64,
    pub team_field_id: i64,
}

impl SeededDocument {
    /// Seed an owner, an outsider, a team owning one document, and a personal
    /// document with one recipient and one unassigned text field
    pub async fn create(pool: &PgPool) -> Result<Self> {
        let suffix = unique_suffix();
        let owner_email = format!("owner_{suffix}@example.com");
        let recipient_email = format!("signer_{suffix}@example.com");

        let owner_id: i64 =
            sqlx::query_scalar("INSERT INTO users (name, email) VALUES ('Owner', $1) RETURNING id")
                .bind(&owner_email)
                .fetch_one(pool)
                .await?;
        let outsider_id: i64 =
            sqlx::query_scalar("INSERT INTO users (name, email) VALUES ('Outsider', $1) RETURNING id")
                .bind(format!("outsider_{suffix}@example.com"))
                .fetch_one(pool)
                .await?;
        let team_id: i64 =
            sqlx::query_scalar("INSERT INTO teams (name, url) VALUES ('Legal', $1) RETURNING id")
                .bind(format!("legal-{suffix}"))
                .fetch_one(pool)
                .await?;
        sqlx::query("INSERT INTO team_members (team_id, user_id) VALUES ($1, $2)")
            .bind(team_id)
            .bind(owner_id)
            .execute(pool)
            .await?;

        let document_id: i64 = sqlx::query_scalar(
            "INSERT INTO documents (title, user_id) VALUES ('Lease', $1) RETURNING id",
        )
        .bind(owner_id)
        .fetch_one(pool)
        .await?;
        let team_document_id: i64 = sqlx::query_scalar(
            "INSERT INTO documents (title, user_id, team_id) VALUES ('NDA', $1, $2) RETURNING id",
        )
        .bind(owner_id)
        .bind(team_id)
        .fetch_one(pool)
        .await?;

        let recipient_id: i64 = sqlx::query_scalar(
            "INSERT INTO recipients (document_id, email, name) VALUES ($1, $2, 'Signer') RETURNING id",
        )
        .bind(document_id)
        .bind(&recipient_email)
        .fetch_one(pool)
        .await?;

        let insert_field = r"
            INSERT INTO fields (document_id, type, page, position_x, position_y, width, height)
            VALUES ($1, 'TEXT', 1, 10, 20, 30, 5)
            RETURNING id
        ";
        let field_id: i64 = sqlx::query_scalar(insert_field)
            .bind(document_id)
            .fetch_one(pool)
            .await?;
        let team_field_id: i64 = sqlx::query_scalar(insert_field)
            .bind(team_document_id)
            .fetch_one(pool)
            .await?;

        Ok(Self {
            owner_id,
            owner_email,
            outsider_id,
            team_id,
            document_id,
            team_document_id,
            recipient_id,
            recipient_email,
            field_id,
            team_field_id,
        })
    }

    /// Mark the personal field as signed
    pub async fn sign_field(&self, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE fields SET inserted = TRUE WHERE id = $1")
            .bind(self.field_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Mark the personal document's recipient as signed
    pub async fn sign_recipient(&self, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE recipients SET signing_status = 'SIGNED' WHERE id = $1")
            .bind(self.recipient_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Count audit entries on the personal document
    pub async fn audit_count(&self, pool: &PgPool) -> Result<i64> {
        Ok(
            sqlx::query_scalar("SELECT COUNT(*) FROM document_audit_logs WHERE document_id = $1")
                .bind(self.document_id)
                .fetch_one(pool)
                .await?,
        )
    }

    pub fn fields_path(&self) -> String {
        format!("/api/v1/documents/{}/fields", self.document_id)
    }

    pub fn field_path(&self) -> String {
        format!("/api/v1/documents/{}/fields/{}", self.document_id, self.field_id)
    }

    pub fn audit_logs_path(&self) -> String {
        format!("/api/v1/documents/{}/audit-logs", self.document_id)
    }
}

/// `{ "data": ... }` envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Field response
#[derive(Debug, Deserialize)]
pub struct FieldResponse {
    pub id: i64,
    pub secondary_id: String,
    pub document_id: i64,
    pub recipient_id: Option<i64>,
    pub field_type: String,
    pub page_number: i32,
    pub page_x: f64,
    pub page_y: f64,
    pub page_width: f64,
    pub page_height: f64,
    pub field_meta: Option<Value>,
}

/// Audit log entry
#[derive(Debug, Deserialize)]
pub struct AuditLogResponse {
    pub id: String,
    pub document_id: i64,
    #[serde(rename = "type")]
    pub log_type: String,
    pub data: Value,
    pub user_id: Option<i64>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

/// Settings draft
#[derive(Debug, Deserialize)]
pub struct DraftResponse {
    pub form_id: String,
    pub field_type: String,
    pub draft: Value,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
