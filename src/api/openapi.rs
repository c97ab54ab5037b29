use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    CreateUserRequest, LoginRequestDto, LoginResponse, LoginUserInfo, RegisteredUser,
    UserProfileResponse,
};
use crate::calculation::adapter::incoming::web::routes::{
    CalculationPageResponse, CalculationResponse, CreateCalculationRequest,
};
use crate::history::adapter::incoming::web::routes::{HistoryResponse, StatisticsResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator History API",
        version = "1.0.0",
        description = "Arithmetic calculations with per-user history and statistics"
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::get_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::delete_user_handler,

        // Calculation endpoints
        crate::calculation::adapter::incoming::web::routes::create_calculation_handler,
        crate::calculation::adapter::incoming::web::routes::get_calculations_handler,
        crate::calculation::adapter::incoming::web::routes::get_single_calculation_handler,
        crate::calculation::adapter::incoming::web::routes::delete_calculation_handler,

        // History endpoints
        crate::history::adapter::incoming::web::routes::get_history_handler,
        crate::history::adapter::incoming::web::routes::get_statistics_handler,
        crate::history::adapter::incoming::web::routes::clear_history_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            CreateUserRequest,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo,
            UserProfileResponse,

            // Calculation DTOs
            CreateCalculationRequest,
            CalculationResponse,
            CalculationPageResponse,

            // History DTOs
            HistoryResponse,
            StatisticsResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "Account endpoints"),
        (name = "calculations", description = "Record and manage calculations"),
        (name = "history", description = "History and statistics"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/health",
            "/ready",
            "/api/auth/register",
            "/api/auth/login",
            "/api/users/me",
            "/api/calculations",
            "/api/calculations/{id}",
            "/api/history",
            "/api/history/statistics",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("BearerAuth"));
    }
}
