use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Create admin routes (all require admin access)
pub fn routes(admin_service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/overview", get(handlers::get_overview))
        .route("/users", get(handlers::list_users))
        .route("/activity", get(handlers::list_activity))
        .with_state(admin_service)
}
