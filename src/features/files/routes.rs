use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::features::files::dtos::MAX_FILE_SIZE;
use crate::features::files::handlers::{
    delete_file, download_file, list_files, preview_file, rename_file, upload_file,
};
use crate::features::files::services::FileService;

/// Create routes for the vault files feature
pub fn routes(file_service: Arc<FileService>) -> Router {
    Router::new()
        .route(
            "/api/vault/files/upload",
            // Allow body size up to MAX_FILE_SIZE + buffer for multipart overhead
            post(upload_file).layer(DefaultBodyLimit::max(MAX_FILE_SIZE + 1024 * 1024)),
        )
        .route("/api/vault/files", get(list_files))
        .route("/api/vault/files/{id}/download", post(download_file))
        .route("/api/vault/files/{id}/preview", post(preview_file))
        .route("/api/vault/files/{id}", patch(rename_file).delete(delete_file))
        .with_state(file_service)
}
