use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct UserProfileResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (
            status = 404,
            description = "Account no longer exists",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "USER_NOT_FOUND", "message": "User not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/me")]
pub async fn get_user_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_user_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(UserProfileResponse {
            id: profile.user_id.to_string(),
            username: profile.username,
            email: profile.email,
            created_at: profile.created_at,
        }),

        Err(FetchUserError::UserNotFound(_)) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Failed to fetch user profile");
            ApiResponse::internal_error()
        }
    }
}
