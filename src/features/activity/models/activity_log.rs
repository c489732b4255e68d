use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Severity of an audit entry
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "activity_severity", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActivitySeverity {
    Info,
    Warning,
    Error,
}

/// The operations recorded in the audit trail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityAction {
    FileUpload,
    FileDownload,
    FilePreview,
    FileRename,
    FileDelete,
}

impl ActivityAction {
    /// Stable wire/storage form of the action, e.g. `FILE_UPLOAD`
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::FileUpload => "FILE_UPLOAD",
            ActivityAction::FileDownload => "FILE_DOWNLOAD",
            ActivityAction::FilePreview => "FILE_PREVIEW",
            ActivityAction::FileRename => "FILE_RENAME",
            ActivityAction::FileDelete => "FILE_DELETE",
        }
    }
}

/// Database model for activity log rows. Append-only.
#[derive(Debug, FromRow)]
pub struct ActivityLog {
    pub id: Uuid,
    pub user_id: String,
    pub action: String,
    pub details: String,
    pub severity: ActivitySeverity,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_storage_form() {
        assert_eq!(ActivityAction::FileUpload.as_str(), "FILE_UPLOAD");
        assert_eq!(ActivityAction::FileDownload.as_str(), "FILE_DOWNLOAD");
        assert_eq!(ActivityAction::FilePreview.as_str(), "FILE_PREVIEW");
        assert_eq!(ActivityAction::FileRename.as_str(), "FILE_RENAME");
        assert_eq!(ActivityAction::FileDelete.as_str(), "FILE_DELETE");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ActivitySeverity::Warning).unwrap(),
            "\"warning\""
        );
    }
}
