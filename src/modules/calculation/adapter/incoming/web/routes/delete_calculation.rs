use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::calculation::application::ports::incoming::use_cases::DeleteCalculationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete one of the caller's calculations
#[utoipa::path(
    delete,
    path = "/api/calculations/{id}",
    tag = "calculations",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Calculation id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such calculation for this user", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/calculations/{id}")]
pub async fn delete_calculation_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.calculation.delete.execute(user.user_id, id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, calculation_id = %id, "Calculation deleted");
            ApiResponse::no_content()
        }

        Err(DeleteCalculationError::NotFound) => {
            ApiResponse::not_found("CALCULATION_NOT_FOUND", "Calculation not found")
        }

        Err(DeleteCalculationError::RepositoryError(msg)) => {
            error!(user_id = %user.user_id, calculation_id = %id, error = %msg, "Failed to delete calculation");
            ApiResponse::internal_error()
        }
    }
}
