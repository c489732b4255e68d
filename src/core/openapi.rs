use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::activity::models::ActivitySeverity;
use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers, model as auth_model};
use crate::features::files::classifier::PreviewKind;
use crate::features::files::{dtos as files_dtos, handlers as files_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::get_me,
        // Vault files
        files_handlers::upload_file,
        files_handlers::list_files,
        files_handlers::download_file,
        files_handlers::preview_file,
        files_handlers::rename_file,
        files_handlers::delete_file,
        // Admin
        admin_handlers::get_overview,
        admin_handlers::list_users,
        admin_handlers::list_activity,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_model::AuthenticatedUser,
            auth_dtos::MeResponseDto,
            ApiResponse<auth_dtos::MeResponseDto>,
            // Vault files
            PreviewKind,
            files_dtos::UploadFileDto,
            files_dtos::FileResponseDto,
            files_dtos::FilePasswordDto,
            files_dtos::RenameFileDto,
            files_dtos::DownloadResponseDto,
            files_dtos::PreviewResponseDto,
            files_dtos::DeleteFileResponseDto,
            ApiResponse<files_dtos::FileResponseDto>,
            ApiResponse<Vec<files_dtos::FileResponseDto>>,
            ApiResponse<files_dtos::DownloadResponseDto>,
            ApiResponse<files_dtos::PreviewResponseDto>,
            ApiResponse<files_dtos::DeleteFileResponseDto>,
            // Admin
            ActivitySeverity,
            admin_dtos::AdminOverviewDto,
            admin_dtos::AdminUserDto,
            admin_dtos::AdminActivityDto,
            ApiResponse<admin_dtos::AdminOverviewDto>,
            ApiResponse<Vec<admin_dtos::AdminUserDto>>,
            ApiResponse<Vec<admin_dtos::AdminActivityDto>>,
        )
    ),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "vault", description = "Vault file upload, listing and password-gated actions"),
        (name = "admin", description = "Admin reporting endpoints (admin role only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Vault Core API",
        version = "0.1.0",
        description = "API documentation for the secure file vault",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
