use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::{HistoryQuery, HistoryResponse};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::history::application::ports::incoming::use_cases::{
    GetHistoryError, HistoryRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Most recent calculations, newest first
#[utoipa::path(
    get,
    path = "/api/history",
    tag = "history",
    security(("BearerAuth" = [])),
    params(HistoryQuery),
    responses(
        (status = 200, description = "Recent calculations", body = inline(SuccessResponse<HistoryResponse>)),
        (status = 400, description = "Malformed limit", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/history")]
pub async fn get_history_handler(
    user: AuthenticatedUser,
    query: web::Query<HistoryQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = HistoryRequest::from(query.into_inner());

    match data.history.get_history.execute(user.user_id, request).await {
        Ok(history) => ApiResponse::success(HistoryResponse::from(history)),

        Err(GetHistoryError::QueryFailed(msg)) => {
            error!(user_id = %user.user_id, error = %msg, "Failed to load history");
            ApiResponse::internal_error()
        }
    }
}
