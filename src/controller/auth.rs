use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    dto::{
        api::{ApiResponse, ErrorDto, MessageDto},
        auth::{LoginDto, RegisterDto, UserDto},
    },
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user account.
///
/// Creates a user from the submitted name, email, password and optional phone
/// number and hashes the password. Registration does not log the user in;
/// clients follow up with the login endpoint. Submitting the one-time admin
/// code printed at startup grants the admin flag; an invalid or missing code
/// simply creates a regular account.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Registration data (name, email, password, phone, admin code)
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - One or more fields failed validation
/// - `409 Conflict` - Email is already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<UserDto>),
        (status = 400, description = "One or more fields failed validation", body = ErrorDto),
        (status = 409, description = "Email is already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let user = service
        .register(payload, &state.admin_code_service)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED,
            "User registered successfully",
            user.into_dto(),
        )),
    ))
}

/// Log a user in with email and password.
///
/// Verifies the credentials against the stored password hash and stores the
/// user's id in the session on success. Unknown email and wrong password are
/// indistinguishable to the caller.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to establish for the user
/// - `payload` - Login credentials (email, password)
///
/// # Returns
/// - `200 OK` - Credentials accepted, session established
/// - `401 Unauthorized` - Invalid email or password
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials accepted", body = ApiResponse<UserDto>),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db);

    let user = service.login(payload).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            StatusCode::OK,
            "Login successful",
            user.into_dto(),
        )),
    ))
}

/// Log the current user out.
///
/// Clears the session. Succeeds whether or not a user was logged in.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `session` - Session to clear
///
/// # Returns
/// - `200 OK` - Session cleared
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Session cleared", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(StatusCode::OK, "Logged out successfully")),
    ))
}

/// Get the currently authenticated user.
///
/// # Access Control
/// - Logged-in users
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - No user is logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = ApiResponse<UserDto>),
        (status = 401, description = "No user is logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            StatusCode::OK,
            "User retrieved successfully",
            user.into_dto(),
        )),
    ))
}
