use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::core::error::{AppError, Result};
use crate::features::activity::models::{ActivityLog, ActivitySeverity};
use crate::features::admin::dtos::*;

/// Service for admin queries. Read-only aggregates over the files table and
/// the activity log.
pub struct AdminService {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct VaultTotalsRow {
    total_users: i64,
    total_files: i64,
    total_storage_bytes: i64,
}

#[derive(Debug, FromRow)]
struct UserAggregateRow {
    user_id: String,
    files_count: i64,
    storage_bytes: i64,
    last_active: Option<DateTime<Utc>>,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // OVERVIEW
    // =========================================================================

    /// Aggregate stats for the admin panel header
    pub async fn get_overview(&self) -> Result<AdminOverviewDto> {
        let totals = sqlx::query_as::<_, VaultTotalsRow>(
            r#"
            SELECT
                COUNT(DISTINCT user_id) AS total_users,
                COUNT(*) AS total_files,
                COALESCE(SUM(size_bytes), 0)::BIGINT AS total_storage_bytes
            FROM files
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get vault totals: {:?}", e);
            AppError::Database(e)
        })?;

        let activity_today = sqlx::query_scalar::<_, i64>(
            r#"SELECT COUNT(*) FROM activity_logs WHERE created_at >= CURRENT_DATE"#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count today's activity: {:?}", e);
            AppError::Database(e)
        })?;

        let security_alerts = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM activity_logs
            WHERE severity = $1
              AND created_at >= NOW() - INTERVAL '7 days'
            "#,
        )
        .bind(ActivitySeverity::Error)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count security alerts: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(AdminOverviewDto {
            total_users: totals.total_users,
            total_files: totals.total_files,
            total_storage_bytes: totals.total_storage_bytes,
            activity_today,
            security_alerts,
        })
    }

    // =========================================================================
    // USERS
    // =========================================================================

    /// List per-user aggregates with pagination
    pub async fn list_users(&self, offset: i64, limit: i64) -> Result<(Vec<AdminUserDto>, i64)> {
        // Get total count
        let total =
            sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(DISTINCT user_id) FROM files"#)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count users: {:?}", e);
                    AppError::Database(e)
                })?;

        // Get paginated aggregates
        let rows = sqlx::query_as::<_, UserAggregateRow>(
            r#"
            SELECT
                f.user_id,
                COUNT(*) AS files_count,
                COALESCE(SUM(f.size_bytes), 0)::BIGINT AS storage_bytes,
                (
                    SELECT MAX(a.created_at)
                    FROM activity_logs a
                    WHERE a.user_id = f.user_id
                ) AS last_active
            FROM files f
            GROUP BY f.user_id
            ORDER BY COUNT(*) DESC, f.user_id ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list users: {:?}", e);
            AppError::Database(e)
        })?;

        let items = rows
            .into_iter()
            .map(|r| AdminUserDto {
                user_id: r.user_id,
                files_count: r.files_count,
                storage_bytes: r.storage_bytes,
                last_active: r.last_active,
            })
            .collect();

        Ok((items, total))
    }

    // =========================================================================
    // ACTIVITY LOGS
    // =========================================================================

    /// List audit trail entries with pagination, newest first
    pub async fn list_activity(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<AdminActivityDto>, i64)> {
        // Get total count
        let total = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM activity_logs"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count activity logs: {:?}", e);
                AppError::Database(e)
            })?;

        // Get paginated entries
        let rows = sqlx::query_as::<_, ActivityLog>(
            r#"
            SELECT * FROM activity_logs
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list activity logs: {:?}", e);
            AppError::Database(e)
        })?;

        let items = rows
            .into_iter()
            .map(|r| AdminActivityDto {
                id: r.id,
                user_id: r.user_id,
                action: r.action,
                details: r.details,
                severity: r.severity,
                created_at: r.created_at,
            })
            .collect();

        Ok((items, total))
    }
}
