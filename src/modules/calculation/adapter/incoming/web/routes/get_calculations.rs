use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::{CalculationPageResponse, PaginationQuery};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::calculation::application::ports::incoming::use_cases::GetCalculationsError;
use crate::modules::calculation::application::ports::outgoing::calculation_query::PageRequest;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List the caller's calculations, oldest first
#[utoipa::path(
    get,
    path = "/api/calculations",
    tag = "calculations",
    security(("BearerAuth" = [])),
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of calculations", body = inline(SuccessResponse<CalculationPageResponse>)),
        (status = 400, description = "Malformed skip or limit", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/calculations")]
pub async fn get_calculations_handler(
    user: AuthenticatedUser,
    query: web::Query<PaginationQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = PageRequest::from(query.into_inner());

    match data.calculation.get_list.execute(user.user_id, page).await {
        Ok(result) => ApiResponse::success(CalculationPageResponse::from(result)),

        Err(GetCalculationsError::QueryFailed(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to list calculations");
            ApiResponse::internal_error()
        }
    }
}
