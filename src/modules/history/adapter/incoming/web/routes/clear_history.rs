use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::history::application::ports::incoming::use_cases::ClearHistoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete every calculation the caller owns
#[utoipa::path(
    delete,
    path = "/api/history",
    tag = "history",
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "History cleared"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/history")]
pub async fn clear_history_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.history.clear.execute(user.user_id).await {
        Ok(removed) => {
            info!(user_id = %user.user_id, removed, "History cleared");
            ApiResponse::no_content()
        }

        Err(ClearHistoryError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to clear history");
            ApiResponse::internal_error()
        }
    }
}
