use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for vault files
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct FileRecord {
    pub id: Uuid,
    /// Opaque owner identifier from the identity provider
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub size_bytes: i64,
    pub content_type: String,
    /// Display-only claim shown next to the file. Nothing in the service
    /// encrypts or decrypts object bytes based on it.
    pub encrypted: bool,
    /// Object key in the vault bucket
    pub file_path: String,
    /// SHA-256 hex digest of the file password, or NULL for unprotected files
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FileRecord {
    /// Whether actions on this file must first pass the password gate
    pub fn is_protected(&self) -> bool {
        self.password_hash.is_some()
    }
}
