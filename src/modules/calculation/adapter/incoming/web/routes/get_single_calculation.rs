use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::CalculationResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::calculation::application::ports::incoming::use_cases::GetSingleCalculationError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch one of the caller's calculations
#[utoipa::path(
    get,
    path = "/api/calculations/{id}",
    tag = "calculations",
    security(("BearerAuth" = [])),
    params(("id" = Uuid, Path, description = "Calculation id")),
    responses(
        (status = 200, description = "Calculation", body = inline(SuccessResponse<CalculationResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (
            status = 404,
            description = "No such calculation for this user",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "CALCULATION_NOT_FOUND", "message": "Calculation not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/calculations/{id}")]
pub async fn get_single_calculation_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.calculation.get_single.execute(user.user_id, id).await {
        Ok(calculation) => ApiResponse::success(CalculationResponse::from(calculation)),

        Err(GetSingleCalculationError::NotFound) => {
            ApiResponse::not_found("CALCULATION_NOT_FOUND", "Calculation not found")
        }

        Err(GetSingleCalculationError::QueryFailed(msg)) => {
            error!(user_id = %user.user_id, calculation_id = %id, error = %msg, "Failed to fetch calculation");
            ApiResponse::internal_error()
        }
    }
}
