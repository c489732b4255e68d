use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::files::dtos::{
    DeleteFileResponseDto, DownloadResponseDto, FilePasswordDto, FileResponseDto, ListFilesQuery,
    PreviewResponseDto, RenameFileDto, UploadFileDto, MAX_FILE_SIZE,
};
use crate::features::files::services::FileService;
use crate::shared::types::{ApiResponse, Meta};

/// Upload a file to the vault
///
/// Accepts multipart/form-data with:
/// - `file`: The file to upload (required)
/// - `description`: Optional free-text description
/// - `password`: Optional password; when set, preview/download/rename/delete
///   on this file require it
#[utoipa::path(
    post,
    path = "/api/vault/files/upload",
    tag = "vault",
    request_body(
        content = UploadFileDto,
        content_type = "multipart/form-data",
        description = "File upload form with optional description and password fields",
    ),
    responses(
        (status = 201, description = "File uploaded successfully", body = ApiResponse<FileResponseDto>),
        (status = 400, description = "Invalid file or validation error"),
        (status = 401, description = "Authentication required"),
        (status = 413, description = "File too large")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_file(
    user: AuthenticatedUser,
    State(service): State<Arc<FileService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<FileResponseDto>>), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut description: Option<String> = None;
    let mut password: Option<String> = None;

    // Process multipart fields
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                // Get content type
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                // Get filename
                let fname = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                // Read file data
                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file_data = Some(data.to_vec());
                file_name = Some(fname);
                content_type = Some(ct);
            }
            "description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read description field: {}", e))
                })?;
                if !text.is_empty() {
                    description = Some(text);
                }
            }
            "password" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read password field: {}", e))
                })?;
                if !text.is_empty() {
                    password = Some(text);
                }
            }
            _ => {
                // Ignore unknown fields
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    // Validate required fields
    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| AppError::BadRequest("Filename is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;

    // Validate file size
    if file_data.len() > MAX_FILE_SIZE {
        return Err(AppError::BadRequest(format!(
            "File too large. Maximum size is {} bytes ({} MB)",
            MAX_FILE_SIZE,
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    // Upload file
    let response = service
        .upload_file(
            file_data,
            &file_name,
            &content_type,
            description,
            password,
            &user.sub,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(response), None, None)),
    ))
}

/// List the caller's vault files (paginated, optional name search)
#[utoipa::path(
    get,
    path = "/api/vault/files",
    tag = "vault",
    params(ListFilesQuery),
    responses(
        (status = 200, description = "List of vault files", body = ApiResponse<Vec<FileResponseDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_files(
    user: AuthenticatedUser,
    State(service): State<Arc<FileService>>,
    Query(params): Query<ListFilesQuery>,
) -> Result<Json<ApiResponse<Vec<FileResponseDto>>>, AppError> {
    let (files, total) = service
        .list_files(
            &user.sub,
            params.search.as_deref(),
            params.offset(),
            params.limit(),
        )
        .await?;

    Ok(Json(ApiResponse::success(
        Some(files),
        None,
        Some(Meta { total }),
    )))
}

/// Request a download URL for a file
///
/// Password-protected files answer 401 until the matching password is
/// submitted in the request body.
#[utoipa::path(
    post,
    path = "/api/vault/files/{id}/download",
    tag = "vault",
    params(
        ("id" = Uuid, Path, description = "File identifier")
    ),
    request_body = FilePasswordDto,
    responses(
        (status = 200, description = "Presigned download URL", body = ApiResponse<DownloadResponseDto>),
        (status = 401, description = "Authentication required, password required, or incorrect password"),
        (status = 404, description = "File not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn download_file(
    user: AuthenticatedUser,
    State(service): State<Arc<FileService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<FilePasswordDto>,
) -> Result<Json<ApiResponse<DownloadResponseDto>>, AppError> {
    let response = service
        .download(id, &user.sub, dto.password.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Request a preview of a file
///
/// The response selects the viewer: an inline bitmap, playback control or
/// embedded document viewer gets a content URL; text and unsupported files
/// get a placeholder message instead.
#[utoipa::path(
    post,
    path = "/api/vault/files/{id}/preview",
    tag = "vault",
    params(
        ("id" = Uuid, Path, description = "File identifier")
    ),
    request_body = FilePasswordDto,
    responses(
        (status = 200, description = "Preview descriptor", body = ApiResponse<PreviewResponseDto>),
        (status = 401, description = "Authentication required, password required, or incorrect password"),
        (status = 404, description = "File not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn preview_file(
    user: AuthenticatedUser,
    State(service): State<Arc<FileService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<FilePasswordDto>,
) -> Result<Json<ApiResponse<PreviewResponseDto>>, AppError> {
    let response = service
        .preview(id, &user.sub, dto.password.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Rename a file
#[utoipa::path(
    patch,
    path = "/api/vault/files/{id}",
    tag = "vault",
    params(
        ("id" = Uuid, Path, description = "File identifier")
    ),
    request_body = RenameFileDto,
    responses(
        (status = 200, description = "File renamed", body = ApiResponse<FileResponseDto>),
        (status = 400, description = "Invalid name"),
        (status = 401, description = "Authentication required, password required, or incorrect password"),
        (status = 404, description = "File not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn rename_file(
    user: AuthenticatedUser,
    State(service): State<Arc<FileService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<RenameFileDto>,
) -> Result<Json<ApiResponse<FileResponseDto>>, AppError> {
    // Validate DTO
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service
        .rename(id, &user.sub, &dto.name, dto.password.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(response),
        Some("File renamed successfully".to_string()),
        None,
    )))
}

/// Delete a file and its backing object
#[utoipa::path(
    delete,
    path = "/api/vault/files/{id}",
    tag = "vault",
    params(
        ("id" = Uuid, Path, description = "File identifier")
    ),
    request_body = FilePasswordDto,
    responses(
        (status = 200, description = "File deleted successfully", body = ApiResponse<DeleteFileResponseDto>),
        (status = 401, description = "Authentication required, password required, or incorrect password"),
        (status = 404, description = "File not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_file(
    user: AuthenticatedUser,
    State(service): State<Arc<FileService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<FilePasswordDto>,
) -> Result<Json<ApiResponse<DeleteFileResponseDto>>, AppError> {
    service
        .delete(id, &user.sub, dto.password.as_deref())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(DeleteFileResponseDto { deleted: true }),
        Some("File deleted successfully".to_string()),
        None,
    )))
}
