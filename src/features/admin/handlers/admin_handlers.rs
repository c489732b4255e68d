use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::admin::dtos::*;
use crate::features::admin::services::AdminService;
use crate::features::auth::guards::RequireAdmin;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Aggregate stats for the admin panel
#[utoipa::path(
    get,
    path = "/api/admin/overview",
    responses(
        (status = 200, description = "Aggregate vault stats", body = ApiResponse<AdminOverviewDto>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_overview(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
) -> Result<Json<ApiResponse<AdminOverviewDto>>> {
    let overview = service.get_overview().await?;

    Ok(Json(ApiResponse::success(Some(overview), None, None)))
}

/// List per-user aggregates (paginated)
#[utoipa::path(
    get,
    path = "/api/admin/users",
    params(PaginationQuery),
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<AdminUserDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_users(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminUserDto>>>> {
    let (items, total) = service.list_users(params.offset(), params.limit()).await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}

/// List audit trail entries (paginated, newest first)
#[utoipa::path(
    get,
    path = "/api/admin/activity",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Audit trail entries", body = ApiResponse<Vec<AdminActivityDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_activity(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AdminService>>,
    Query(params): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<AdminActivityDto>>>> {
    let (items, total) = service
        .list_activity(params.offset(), params.limit())
        .await?;

    Ok(Json(ApiResponse::success(
        Some(items),
        None,
        Some(Meta { total }),
    )))
}
