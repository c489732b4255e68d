use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::activity::models::{ActivityAction, ActivitySeverity};
use crate::features::activity::ActivityService;
use crate::features::files::classifier::classify;
use crate::features::files::digest::password_digest;
use crate::features::files::dtos::{DownloadResponseDto, FileResponseDto, PreviewResponseDto};
use crate::features::files::gate::{verify_access, ActionKind};
use crate::features::files::models::FileRecord;
use crate::features::files::preview::{render, PreviewTarget};
use crate::modules::storage::MinIOClient;
use crate::shared::validation::is_valid_file_name;

/// Service for vault file operations
pub struct FileService {
    pool: PgPool,
    storage: Arc<MinIOClient>,
    activity: Arc<ActivityService>,
}

impl FileService {
    pub fn new(pool: PgPool, storage: Arc<MinIOClient>, activity: Arc<ActivityService>) -> Self {
        Self {
            pool,
            storage,
            activity,
        }
    }

    /// Upload a file to storage and save metadata to database
    ///
    /// # Arguments
    /// * `data` - The file content as bytes
    /// * `original_filename` - The original filename
    /// * `content_type` - The MIME type of the file
    /// * `description` - Optional free-text description
    /// * `password` - Optional password; when set, file actions require it
    /// * `user_id` - The ID of the user uploading the file
    pub async fn upload_file(
        &self,
        data: Vec<u8>,
        original_filename: &str,
        content_type: &str,
        description: Option<String>,
        password: Option<String>,
        user_id: &str,
    ) -> Result<FileResponseDto> {
        if !is_valid_file_name(original_filename) {
            return Err(AppError::Validation(format!(
                "Invalid file name: '{}'",
                original_filename
            )));
        }

        let file_size = data.len() as i64;

        // Build object key: {user_id}/{file_id}.{extension}
        let file_id = Uuid::new_v4();
        let extension = file_extension(original_filename);
        let file_path = format!("{}/{}.{}", user_id, file_id, extension);

        // A present, non-empty password turns the gate on for this file.
        let password_hash = password
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(password_digest);

        // Upload object bytes before the metadata row so a listed file always
        // has backing content.
        self.storage.upload(&file_path, data, content_type).await?;

        debug!("File uploaded to storage: {}", file_path);

        let file = sqlx::query_as::<_, FileRecord>(
            r#"
            INSERT INTO files (user_id, name, description, size_bytes, content_type, encrypted, file_path, password_hash)
            VALUES ($1, $2, $3, $4, $5, TRUE, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(original_filename)
        .bind(&description)
        .bind(file_size)
        .bind(content_type)
        .bind(&file_path)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "File metadata saved: id={}, path={}, size={}, protected={}",
            file.id,
            file.file_path,
            file.size_bytes,
            file.is_protected()
        );

        self.activity
            .record(
                user_id,
                ActivityAction::FileUpload,
                format!("Uploaded file: {}", file.name),
                ActivitySeverity::Info,
            )
            .await;

        Ok(to_response_dto(file))
    }

    /// List the owner's files, newest first, with optional name search.
    /// Returns (files, total_count).
    pub async fn list_files(
        &self,
        user_id: &str,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<FileResponseDto>, i64)> {
        let search = search.map(str::trim).filter(|s| !s.is_empty());

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM files
            WHERE user_id = $1
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%')
            "#,
        )
        .bind(user_id)
        .bind(search)
        .fetch_one(&self.pool)
        .await?;

        let files = sqlx::query_as::<_, FileRecord>(
            r#"
            SELECT * FROM files
            WHERE user_id = $1
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%')
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(user_id)
        .bind(search)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok((files.into_iter().map(to_response_dto).collect(), total))
    }

    /// Request a download of a file. Protected files must pass the password
    /// gate first. Returns a presigned URL rather than the bytes themselves.
    pub async fn download(
        &self,
        file_id: Uuid,
        user_id: &str,
        password: Option<&str>,
    ) -> Result<DownloadResponseDto> {
        let file = self.get_owned(file_id, user_id).await?;

        verify_access(&file, ActionKind::Download, password)?;

        let url = self.storage.get_presigned_url(&file.file_path).await?;

        self.activity
            .record(
                user_id,
                ActivityAction::FileDownload,
                format!("Downloaded file: {}", file.name),
                ActivitySeverity::Info,
            )
            .await;

        Ok(DownloadResponseDto {
            url,
            expires_in_secs: self.storage.presigned_url_expiry_secs(),
        })
    }

    /// Request a preview of a file. Protected files must pass the password
    /// gate first. The response tells the client which viewer to use; text
    /// and unknown files get a placeholder instead of a content URL.
    pub async fn preview(
        &self,
        file_id: Uuid,
        user_id: &str,
        password: Option<&str>,
    ) -> Result<PreviewResponseDto> {
        let file = self.get_owned(file_id, user_id).await?;

        verify_access(&file, ActionKind::Preview, password)?;

        let kind = classify(&file.name);
        let url = self.storage.get_presigned_url(&file.file_path).await?;

        let target = PreviewTarget {
            name: file.name.clone(),
            url,
            content_type: Some(file.content_type.clone()),
        };
        let response = render(target, kind);

        self.activity
            .record(
                user_id,
                ActivityAction::FilePreview,
                format!("Previewed file: {}", file.name),
                ActivitySeverity::Info,
            )
            .await;

        Ok(response)
    }

    /// Rename a file. The display name is the only mutable attribute.
    /// Protected files must pass the password gate first.
    pub async fn rename(
        &self,
        file_id: Uuid,
        user_id: &str,
        new_name: &str,
        password: Option<&str>,
    ) -> Result<FileResponseDto> {
        if !is_valid_file_name(new_name) {
            return Err(AppError::Validation(format!(
                "Invalid file name: '{}'",
                new_name
            )));
        }

        let file = self.get_owned(file_id, user_id).await?;

        verify_access(&file, ActionKind::Rename, password)?;

        let renamed = sqlx::query_as::<_, FileRecord>(
            r#"
            UPDATE files
            SET name = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING *
            "#,
        )
        .bind(new_name)
        .bind(file.id)
        .fetch_one(&self.pool)
        .await?;

        info!("File renamed: id={}, name={}", renamed.id, renamed.name);

        self.activity
            .record(
                user_id,
                ActivityAction::FileRename,
                format!("Renamed file: {} -> {}", file.name, renamed.name),
                ActivitySeverity::Info,
            )
            .await;

        Ok(to_response_dto(renamed))
    }

    /// Delete a file: the backing object first, then the metadata row.
    /// Protected files must pass the password gate first.
    ///
    /// There is no compensation between the two steps: if the row delete
    /// fails after the object is gone, the listing keeps a dangling entry
    /// until a later delete retry succeeds.
    pub async fn delete(&self, file_id: Uuid, user_id: &str, password: Option<&str>) -> Result<()> {
        let file = self.get_owned(file_id, user_id).await?;

        verify_access(&file, ActionKind::Delete, password)?;

        self.storage.delete(&file.file_path).await?;

        debug!("File deleted from storage: {}", file.file_path);

        sqlx::query("DELETE FROM files WHERE id = $1")
            .bind(file.id)
            .execute(&self.pool)
            .await?;

        info!("File deleted: id={}, path={}", file.id, file.file_path);

        self.activity
            .record(
                user_id,
                ActivityAction::FileDelete,
                format!("Deleted file: {}", file.name),
                ActivitySeverity::Warning,
            )
            .await;

        Ok(())
    }

    /// Fetch a file owned by the given user, or NotFound.
    async fn get_owned(&self, file_id: Uuid, user_id: &str) -> Result<FileRecord> {
        sqlx::query_as::<_, FileRecord>(
            r#"
            SELECT * FROM files
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(file_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("File not found".to_string()))
    }
}

/// Final extension of a file name, for building object keys
fn file_extension(name: &str) -> &str {
    name.rsplit_once('.')
        .map(|(_, extension)| extension)
        .filter(|extension| !extension.is_empty())
        .unwrap_or("bin")
}

fn to_response_dto(file: FileRecord) -> FileResponseDto {
    let protected = file.is_protected();
    FileResponseDto {
        id: file.id,
        name: file.name,
        description: file.description,
        size_bytes: file.size_bytes,
        content_type: file.content_type,
        encrypted: file.encrypted,
        protected,
        created_at: file.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("report.pdf"), "pdf");
        assert_eq!(file_extension("archive.tar.gz"), "gz");
        assert_eq!(file_extension("noext"), "bin");
        assert_eq!(file_extension("trailing."), "bin");
    }
}
