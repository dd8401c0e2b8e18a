use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    dto::{
        api::{ApiResponse, ErrorDto},
        doctor::{CreateDoctorDto, DoctorDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::doctor::DoctorService,
    state::AppState,
};

/// Tag for grouping doctor endpoints in OpenAPI documentation
pub static DOCTOR_TAG: &str = "doctor";

#[derive(Deserialize)]
pub struct DoctorListParams {
    pub department: Option<String>,
}

/// Get the doctor roster.
///
/// Returns all doctors ordered by name, optionally restricted to one
/// department. Patients browse this list before booking.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Optional department filter
///
/// # Returns
/// - `200 OK` - Matching doctors with a `count` field
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/doctors",
    tag = DOCTOR_TAG,
    params(
        ("department" = Option<String>, Query, description = "Filter by department")
    ),
    responses(
        (status = 200, description = "Matching doctors", body = ApiResponse<Vec<DoctorDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctors(
    State(state): State<AppState>,
    Query(params): Query<DoctorListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = DoctorService::new(&state.db);

    let doctors = service.list(params.department).await?;
    let count = doctors.len();

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(
                StatusCode::OK,
                "Doctors retrieved successfully",
                doctors.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>(),
            )
            .with_count(count),
        ),
    ))
}

/// Get a single doctor by id.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `doctor_id` - Doctor id to fetch
///
/// # Returns
/// - `200 OK` - The doctor
/// - `404 Not Found` - Doctor does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/doctors/{doctor_id}",
    tag = DOCTOR_TAG,
    params(
        ("doctor_id" = i32, Path, description = "Doctor id")
    ),
    responses(
        (status = 200, description = "The doctor", body = ApiResponse<DoctorDto>),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_doctor_by_id(
    State(state): State<AppState>,
    Path(doctor_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = DoctorService::new(&state.db);

    let doctor = service.get_by_id(doctor_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            StatusCode::OK,
            "Doctor retrieved successfully",
            doctor.into_dto(),
        )),
    ))
}

/// Add a doctor to the roster.
///
/// # Access Control
/// - `Admin` - Only admins can create doctors
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Doctor data (name, specialization, department, photo URL)
///
/// # Returns
/// - `201 Created` - Doctor created
/// - `400 Bad Request` - One or more fields failed validation
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/doctors",
    tag = DOCTOR_TAG,
    request_body = CreateDoctorDto,
    responses(
        (status = 201, description = "Doctor created", body = ApiResponse<DoctorDto>),
        (status = 400, description = "One or more fields failed validation", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDoctorDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = DoctorService::new(&state.db);

    let doctor = service.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED,
            "Doctor created successfully",
            doctor.into_dto(),
        )),
    ))
}
