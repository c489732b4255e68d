use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::activity::models::ActivitySeverity;

/// Aggregate stats for the admin panel header
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminOverviewDto {
    /// Distinct file owners
    pub total_users: i64,
    pub total_files: i64,
    /// Sum of stored file sizes in bytes
    pub total_storage_bytes: i64,
    /// Audit entries written since midnight
    pub activity_today: i64,
    /// Error-severity audit entries in the last 7 days
    pub security_alerts: i64,
}

/// Per-user aggregates for the admin user list
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    /// Opaque actor identifier from the identity provider
    pub user_id: String,
    pub files_count: i64,
    pub storage_bytes: i64,
    /// Most recent audit entry for this user, if any
    pub last_active: Option<DateTime<Utc>>,
}

/// One audit trail entry as shown in the admin activity tab
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AdminActivityDto {
    pub id: Uuid,
    pub user_id: String,
    /// Stable action code, e.g. FILE_UPLOAD
    pub action: String,
    pub details: String,
    pub severity: ActivitySeverity,
    pub created_at: DateTime<Utc>,
}
