use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::delete_user::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete own account
///
/// Permanently removes the account together with every calculation it owns.
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Account and its calculations deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/users/me")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.delete_user_use_case.execute(user.user_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "User deleted");
            ApiResponse::no_content()
        }

        Err(DeleteUserError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Delete requested for missing user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteUserError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to delete user");
            ApiResponse::internal_error()
        }
    }
}
