//! Student account endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::student::{LoginRequest, RegisterStudent, Student},
    AppState,
};

/// Simple `{message}` response body
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Successful login response
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    /// The authenticated account (password hash is never serialized)
    pub estudiante: Student,
}

/// Register a new student account
#[utoipa::path(
    post,
    path = "/register",
    tag = "accounts",
    request_body = RegisterStudent,
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 400, description = "Identification already registered", body = crate::error::ErrorResponse),
        (status = 500, description = "Registration failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(student): Json<RegisterStudent>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.accounts.register(student).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Estudiante registrado exitosamente.".to_string(),
        }),
    ))
}

/// Authenticate a student login
#[utoipa::path(
    post,
    path = "/login",
    tag = "accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Unknown identification or wrong password", body = crate::error::ErrorResponse),
        (status = 500, description = "Login failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let student = state.services.accounts.login(&credentials).await?;

    Ok(Json(LoginResponse {
        message: "Inicio de sesión exitoso.".to_string(),
        estudiante: student,
    }))
}
