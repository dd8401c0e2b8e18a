use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::{
        api::{ErrorDto, MessageDto},
        clinic::{CheckupBookingDto, LabBookingDto, SurgeryBookingDto},
    },
    error::AppError,
    service::clinic::ClinicService,
    state::AppState,
};

/// Tag for grouping clinic resource booking endpoints in OpenAPI documentation
pub static CLINIC_TAG: &str = "clinic";

/// Book a lab test.
///
/// Fire-and-forget booking; the request is recorded and clinic staff follow
/// up out of band. No account is required.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Lab booking data (contact details, test type, date)
///
/// # Returns
/// - `201 Created` - Booking recorded
/// - `400 Bad Request` - One or more fields missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/labs/book",
    tag = CLINIC_TAG,
    request_body = LabBookingDto,
    responses(
        (status = 201, description = "Booking recorded", body = MessageDto),
        (status = 400, description = "One or more fields missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_lab_appointment(
    State(state): State<AppState>,
    Json(payload): Json<LabBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClinicService::new(&state.db);

    service.book_lab(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new(
            StatusCode::CREATED,
            "Appointment booked successfully!",
        )),
    ))
}

/// Book a health checkup package.
///
/// Fire-and-forget booking; the request is recorded and clinic staff follow
/// up out of band. No account is required.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Checkup booking data (contact details, package, date)
///
/// # Returns
/// - `201 Created` - Booking recorded
/// - `400 Bad Request` - One or more fields missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/checkup/book",
    tag = CLINIC_TAG,
    request_body = CheckupBookingDto,
    responses(
        (status = 201, description = "Booking recorded", body = MessageDto),
        (status = 400, description = "One or more fields missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_checkup_appointment(
    State(state): State<AppState>,
    Json(payload): Json<CheckupBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClinicService::new(&state.db);

    service.book_checkup(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new(
            StatusCode::CREATED,
            "Appointment booked successfully!",
        )),
    ))
}

/// Request a surgery consultation.
///
/// Fire-and-forget booking; an optional prescription is referenced by file
/// name only. No account is required.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Surgery request data (contact details, doctor, surgery type, date)
///
/// # Returns
/// - `201 Created` - Request recorded
/// - `400 Bad Request` - One or more fields missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/surgery/book",
    tag = CLINIC_TAG,
    request_body = SurgeryBookingDto,
    responses(
        (status = 201, description = "Request recorded", body = MessageDto),
        (status = 400, description = "One or more fields missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_surgery(
    State(state): State<AppState>,
    Json(payload): Json<SurgeryBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ClinicService::new(&state.db);

    service.book_surgery(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new(
            StatusCode::CREATED,
            "Surgery appointment booked successfully",
        )),
    ))
}
