use axum::Json;

use crate::core::error::Result;
use crate::features::auth::dtos::MeResponseDto;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;

/// Get the current authenticated actor
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current actor", body = ApiResponse<MeResponseDto>),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(user: AuthenticatedUser) -> Result<Json<ApiResponse<MeResponseDto>>> {
    Ok(Json(ApiResponse::success(
        Some(MeResponseDto {
            sub: user.sub,
            email: user.email,
            roles: user.roles,
        }),
        None,
        None,
    )))
}
