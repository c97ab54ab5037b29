use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// 3 to 50 characters from letters, digits, `_`, `.` and `-`
    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    /// Minimum 8 characters
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "johndoe")]
    username: String,

    #[schema(example = "john@example.com")]
    email: String,

    #[schema(value_type = String, format = DateTime)]
    created_at: DateTime<Utc>,
}

fn map_create_user_error(err: CreateUserError, req: &CreateUserRequest) -> HttpResponse {
    match &err {
        CreateUserError::InvalidUsername(msg) => {
            warn!(username = %req.username, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_USERNAME", msg)
        }

        CreateUserError::InvalidEmail(msg) => {
            warn!(username = %req.username, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_EMAIL", msg)
        }

        CreateUserError::InvalidPassword(msg) => {
            warn!(username = %req.username, error = %err, "Invalid registration input");
            ApiResponse::bad_request("INVALID_PASSWORD", msg)
        }

        CreateUserError::UsernameAlreadyExists => {
            warn!(username = %req.username, "Username already registered");
            ApiResponse::conflict("USERNAME_ALREADY_EXISTS", "Username already registered")
        }

        CreateUserError::EmailAlreadyExists => {
            warn!(username = %req.username, "Email already registered");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already registered")
        }

        other => {
            error!(username = %req.username, error = %other, "Unhandled user creation error");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = CreateUserRequest,
    responses(
        (
            status = 201,
            description = "User created successfully",
            body = inline(SuccessResponse<RegisteredUser>),
            example = json!({
                "success": true,
                "data": {
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "username": "johndoe",
                    "email": "john@example.com",
                    "created_at": "2025-03-05T09:00:00Z"
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Invalid username" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_USERNAME",
                        "message": "Username must be between 3 and 50 characters"
                    }
                }))),
                ("Invalid email" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_EMAIL",
                        "message": "Invalid email format"
                    }
                }))),
                ("Invalid password" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_PASSWORD",
                        "message": "Password must be at least 8 characters"
                    }
                })))
            )
        ),
        (
            status = 409,
            description = "Username or email already registered",
            body = ErrorResponse,
            examples(
                ("Username taken" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "USERNAME_ALREADY_EXISTS",
                        "message": "Username already registered"
                    }
                }))),
                ("Email taken" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "EMAIL_ALREADY_EXISTS",
                        "message": "Email already registered"
                    }
                })))
            )
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(username = %req.username, "User registration attempt");

    let user_input = CreateUserInput {
        username: req.username.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
    };

    match data.register_user_use_case.execute(user_input).await {
        Ok(user) => {
            info!(user_id = %user.user_id, username = %user.username, "User created successfully");

            ApiResponse::created(RegisteredUser {
                id: user.user_id.to_string(),
                username: user.username,
                email: user.email,
                created_at: user.created_at,
            })
        }

        Err(e) => map_create_user_error(e, &req),
    }
}
