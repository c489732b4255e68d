use axum::{routing::get, Router};

use crate::features::auth::handlers::get_me;

/// Routes that require an authenticated user
pub fn protected_routes() -> Router {
    Router::new().route("/api/auth/me", get(get_me))
}
