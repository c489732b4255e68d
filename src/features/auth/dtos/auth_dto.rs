use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for the current actor
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MeResponseDto {
    /// Opaque actor identifier from the identity provider
    pub sub: String,
    pub email: Option<String>,
    pub roles: Vec<String>,
}
