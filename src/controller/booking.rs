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
        booking::{BookingDto, CreateBookingDto, UpdateBookingDto, UpdateBookingStatusDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::booking::BookingService,
    state::AppState,
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(Deserialize)]
pub struct AllBookingsParams {
    pub status: Option<String>,
    pub doctor_id: Option<i32>,
    pub sort_by: Option<String>,
}

/// Create a new appointment booking.
///
/// Books the logged-in user an appointment with a doctor on a future date in
/// one of the fixed time slots. The patient contact fields are stored on the
/// booking itself. At most one active booking may exist per doctor, user,
/// date and slot; a cancelled booking frees its slot.
///
/// # Access Control
/// - Logged-in users
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Booking data (patient contact, doctor, date, slot, reason)
///
/// # Returns
/// - `201 Created` - Booking created with status `pending`
/// - `400 Bad Request` - One or more fields failed validation
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Doctor does not exist
/// - `409 Conflict` - An active booking already exists for this slot
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = ApiResponse<BookingDto>),
        (status = 400, description = "One or more fields failed validation", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Doctor not found", body = ErrorDto),
        (status = 409, description = "An active booking already exists for this slot", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let booking = service.create(&user, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED,
            "Booking created successfully",
            booking.into_dto(),
        )),
    ))
}

/// Get the logged-in user's bookings.
///
/// Returns every booking the user has made, cancelled ones included, ordered
/// by appointment date and time slot. Each booking embeds its doctor summary.
///
/// # Access Control
/// - Logged-in users
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
///
/// # Returns
/// - `200 OK` - The user's bookings with a `count` field
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings/my-bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "The user's bookings", body = ApiResponse<Vec<BookingDto>>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let bookings = service.my_bookings(&user).await?;
    let count = bookings.len();

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(
                StatusCode::OK,
                "Bookings retrieved successfully",
                bookings
                    .into_iter()
                    .map(|b| b.into_dto())
                    .collect::<Vec<_>>(),
            )
            .with_count(count),
        ),
    ))
}

/// Get a single booking by id.
///
/// Only the booking's owner may view it.
///
/// # Access Control
/// - Logged-in users (owner only)
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `booking_id` - Booking id to fetch
///
/// # Returns
/// - `200 OK` - The booking with its doctor summary
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Booking belongs to another user
/// - `404 Not Found` - Booking does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "The booking", body = ApiResponse<BookingDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let booking = service.get_by_id(booking_id, &user).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            StatusCode::OK,
            "Booking retrieved successfully",
            booking.into_dto(),
        )),
    ))
}

/// Update a booking's contact details.
///
/// Only patient_name, patient_phone, reason and notes are writable; absent
/// fields keep their stored values. The booking's status cannot be changed
/// here, a `status` key in the body is rejected outright.
///
/// # Access Control
/// - Logged-in users (owner only)
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `booking_id` - Booking id to update
/// - `payload` - Replacement values for the provided fields
///
/// # Returns
/// - `200 OK` - Booking updated
/// - `400 Bad Request` - Status key present or a field failed validation
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Booking belongs to another user
/// - `404 Not Found` - Booking does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/bookings/{booking_id}",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking id")
    ),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Booking updated", body = ApiResponse<BookingDto>),
        (status = 400, description = "Status key present or a field failed validation", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(payload): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let booking = service.update(booking_id, &user, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            StatusCode::OK,
            "Booking updated successfully",
            booking.into_dto(),
        )),
    ))
}

/// Cancel a booking.
///
/// Sets the booking's status to `cancelled`, which is terminal, and frees
/// the slot for rebooking. A booking that is already cancelled cannot be
/// cancelled again.
///
/// # Access Control
/// - Logged-in users (owner only)
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `booking_id` - Booking id to cancel
///
/// # Returns
/// - `200 OK` - Booking cancelled
/// - `400 Bad Request` - Booking is already cancelled
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Booking belongs to another user
/// - `404 Not Found` - Booking does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/bookings/{booking_id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking id")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = ApiResponse<BookingDto>),
        (status = 400, description = "Booking is already cancelled", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = BookingService::new(&state.db);

    let booking = service.cancel(booking_id, &user).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            StatusCode::OK,
            "Booking cancelled successfully",
            booking.into_dto(),
        )),
    ))
}

/// Get every booking in the system.
///
/// Returns all bookings with doctor and user summaries embedded, optionally
/// filtered by status or doctor. `sort_by=newest` orders by creation time
/// descending; the default order is appointment date ascending.
///
/// # Access Control
/// - `Admin` - Only admins can list all bookings
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `params` - Optional status / doctor filters and sort order
///
/// # Returns
/// - `200 OK` - All matching bookings with a `count` field
/// - `400 Bad Request` - Unrecognized status filter
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings/admin/all-bookings",
    tag = BOOKING_TAG,
    params(
        ("status" = Option<String>, Query, description = "Filter by booking status"),
        ("doctor_id" = Option<i32>, Query, description = "Filter by doctor id"),
        ("sort_by" = Option<String>, Query, description = "`newest` sorts by creation time descending")
    ),
    responses(
        (status = 200, description = "All matching bookings", body = ApiResponse<Vec<BookingDto>>),
        (status = 400, description = "Unrecognized status filter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<AllBookingsParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = BookingService::new(&state.db);

    let bookings = service
        .all_bookings(params.status, params.doctor_id, params.sort_by)
        .await?;
    let count = bookings.len();

    Ok((
        StatusCode::OK,
        Json(
            ApiResponse::new(
                StatusCode::OK,
                "All bookings retrieved successfully",
                bookings
                    .into_iter()
                    .map(|b| b.into_dto())
                    .collect::<Vec<_>>(),
            )
            .with_count(count),
        ),
    ))
}

/// Move a booking through its status lifecycle.
///
/// Applies `pending → confirmed`, `pending → completed` or
/// `confirmed → completed`. Cancellation is not available here; that goes
/// through the cancel endpoint. A cancelled booking accepts no transition.
///
/// # Access Control
/// - `Admin` - Only admins can transition booking statuses
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `booking_id` - Booking id to transition
/// - `payload` - The target status
///
/// # Returns
/// - `200 OK` - Status updated
/// - `400 Bad Request` - Unrecognized status or forbidden transition
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Booking does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/bookings/admin/{booking_id}/status",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking id")
    ),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<BookingDto>),
        (status = 400, description = "Unrecognized status or forbidden transition", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = BookingService::new(&state.db);

    let booking = service.set_status(booking_id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            StatusCode::OK,
            "Booking status updated successfully",
            booking.into_dto(),
        )),
    ))
}
