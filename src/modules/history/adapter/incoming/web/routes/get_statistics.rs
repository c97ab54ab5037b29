use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::StatisticsResponse;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::history::application::ports::incoming::use_cases::GetStatisticsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Aggregate statistics over every calculation the caller owns
#[utoipa::path(
    get,
    path = "/api/history/statistics",
    tag = "history",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Statistics", body = inline(SuccessResponse<StatisticsResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/history/statistics")]
pub async fn get_statistics_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.history.get_statistics.execute(user.user_id).await {
        Ok(stats) => ApiResponse::success(StatisticsResponse::from(stats)),

        Err(GetStatisticsError::QueryFailed(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to compute statistics");
            ApiResponse::internal_error()
        }
    }
}
