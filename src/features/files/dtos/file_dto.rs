use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::files::classifier::PreviewKind;
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Maximum file size in bytes (50MB)
pub const MAX_FILE_SIZE: usize = 50 * 1024 * 1024;

/// Upload file request DTO for OpenAPI documentation.
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadFileDto {
    /// The file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Optional description for the file
    #[schema(example = "Quarterly financials, board copy")]
    pub description: Option<String>,
    /// Optional password; when set, preview/download/rename/delete require it
    #[schema(example = "hunter2")]
    pub password: Option<String>,
}

/// Response DTO for file metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FileResponseDto {
    /// Unique identifier for the file
    pub id: Uuid,
    /// Display name as uploaded (or last renamed to)
    pub name: String,
    pub description: Option<String>,
    /// Size of the file in bytes
    pub size_bytes: i64,
    /// MIME type declared at upload
    pub content_type: String,
    /// Informational badge; does not change how bytes are stored
    pub encrypted: bool,
    /// Whether a password must be supplied for file actions
    pub protected: bool,
    /// Timestamp when the file was uploaded
    pub created_at: DateTime<Utc>,
}

/// Query parameters for listing vault files
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListFilesQuery {
    /// Case-insensitive substring match on the file name
    pub search: Option<String>,

    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    pub page_size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl ListFilesQuery {
    /// Calculate SQL OFFSET from page number
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.limit()
    }

    /// Get clamped page_size (respects MAX_PAGE_SIZE)
    pub fn limit(&self) -> i64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE)
    }
}

/// Request body for password-gated actions that carry nothing else
/// (download, preview, delete)
#[derive(Debug, Deserialize, ToSchema)]
pub struct FilePasswordDto {
    /// Password for protected files; omit for unprotected ones
    pub password: Option<String>,
}

/// Request body for renaming a file
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RenameFileDto {
    /// New display name
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,
    /// Password for protected files; omit for unprotected ones
    pub password: Option<String>,
}

/// Response DTO for download requests
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DownloadResponseDto {
    /// Presigned URL for the file content; valid until it expires
    pub url: String,
    /// Seconds until the URL stops working
    pub expires_in_secs: u32,
}

/// Response DTO for preview requests
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PreviewResponseDto {
    /// Display name of the file
    pub name: String,
    /// Which viewer the client should use
    pub kind: PreviewKind,
    /// Presigned content URL; present only for renderable kinds
    pub url: Option<String>,
    /// MIME type declared at upload
    pub content_type: Option<String>,
    /// Placeholder text for kinds with no inline preview
    pub message: Option<String>,
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteFileResponseDto {
    /// Confirmation that the file was deleted
    pub deleted: bool,
}
