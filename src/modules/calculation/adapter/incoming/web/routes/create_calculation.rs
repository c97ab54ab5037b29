use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use super::dto::{CalculationResponse, CreateCalculationRequest};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::calculation::application::ports::incoming::use_cases::{
    CreateCalculationCommand, CreateCalculationError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Evaluate an operation and record it
#[utoipa::path(
    post,
    path = "/api/calculations",
    tag = "calculations",
    security(("BearerAuth" = [])),
    request_body = CreateCalculationRequest,
    responses(
        (status = 201, description = "Calculation recorded", body = inline(SuccessResponse<CalculationResponse>)),
        (
            status = 400,
            description = "Unknown operation, division by zero, non-finite operand or result",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "DIVISION_BY_ZERO", "message": "Division by zero is not allowed" }
            })
        ),
        (status = 401, description = "Missing or invalid token, or the account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/calculations")]
pub async fn create_calculation_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateCalculationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let command = CreateCalculationCommand {
        owner: user.user_id,
        operation: req.operation,
        operand1: req.operand1,
        operand2: req.operand2,
    };

    match data.calculation.create.execute(command).await {
        Ok(calculation) => {
            info!(
                user_id = %user.user_id,
                calculation_id = %calculation.id,
                operation = %calculation.operation,
                "Calculation recorded"
            );
            ApiResponse::created(CalculationResponse::from(calculation))
        }

        Err(e) => map_create_calculation_error(user, e),
    }
}

fn map_create_calculation_error(
    user: AuthenticatedUser,
    err: CreateCalculationError,
) -> actix_web::HttpResponse {
    match err {
        CreateCalculationError::InvalidOperation(_) => {
            ApiResponse::bad_request("INVALID_OPERATION", &err.to_string())
        }
        CreateCalculationError::DivisionByZero => {
            ApiResponse::bad_request("DIVISION_BY_ZERO", &err.to_string())
        }
        CreateCalculationError::InvalidOperand => {
            ApiResponse::bad_request("INVALID_OPERAND", &err.to_string())
        }
        CreateCalculationError::ResultOutOfRange => {
            ApiResponse::bad_request("RESULT_OUT_OF_RANGE", &err.to_string())
        }
        CreateCalculationError::OwnerNotFound => {
            warn!(user_id = %user.user_id, "Calculation rejected: account no longer exists");
            ApiResponse::unauthorized("USER_NOT_FOUND", "User not found")
        }
        CreateCalculationError::RepositoryError(msg) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to record calculation");
            ApiResponse::internal_error()
        }
    }
}
