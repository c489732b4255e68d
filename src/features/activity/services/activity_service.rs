use sqlx::PgPool;
use tracing::warn;

use crate::features::activity::models::{ActivityAction, ActivitySeverity};

/// Append-only writer for the audit trail.
///
/// Writes are best-effort: the recorded action has already completed by the
/// time the entry is appended, so a failed write is logged and swallowed
/// rather than rolling anything back.
pub struct ActivityService {
    pool: PgPool,
}

impl ActivityService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append one audit entry. Never fails the calling operation.
    pub async fn record(
        &self,
        user_id: &str,
        action: ActivityAction,
        details: String,
        severity: ActivitySeverity,
    ) {
        let result = sqlx::query(
            r#"
            INSERT INTO activity_logs (user_id, action, details, severity)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(action.as_str())
        .bind(&details)
        .bind(severity)
        .execute(&self.pool)
        .await;

        if let Err(e) = result {
            warn!(
                "Failed to append activity log entry (action={}, user={}): {:?}",
                action.as_str(),
                user_id,
                e
            );
        }
    }
}
