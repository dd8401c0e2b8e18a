use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auth, booking, clinic, doctor, health},
    dto::{
        api::{ErrorDto, FieldErrorDto, MessageDto},
        auth::{LoginDto, RegisterDto, UserDto},
        booking::{
            BookingDto, BookingUserDto, CreateBookingDto, UpdateBookingDto, UpdateBookingStatusDto,
        },
        clinic::{CheckupBookingDto, LabBookingDto, SurgeryBookingDto},
        doctor::{CreateDoctorDto, DoctorDto},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::logout,
        auth::get_current_user,
        booking::create_booking,
        booking::get_my_bookings,
        booking::get_booking_by_id,
        booking::update_booking,
        booking::cancel_booking,
        booking::get_all_bookings,
        booking::update_booking_status,
        doctor::get_doctors,
        doctor::get_doctor_by_id,
        doctor::create_doctor,
        clinic::book_lab_appointment,
        clinic::book_checkup_appointment,
        clinic::book_surgery,
    ),
    components(schemas(
        MessageDto,
        ErrorDto,
        FieldErrorDto,
        RegisterDto,
        LoginDto,
        UserDto,
        CreateBookingDto,
        UpdateBookingDto,
        UpdateBookingStatusDto,
        BookingDto,
        BookingUserDto,
        DoctorDto,
        CreateDoctorDto,
        LabBookingDto,
        CheckupBookingDto,
        SurgeryBookingDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::get_current_user))
        .route("/api/bookings", post(booking::create_booking))
        .route("/api/bookings/my-bookings", get(booking::get_my_bookings))
        .route(
            "/api/bookings/admin/all-bookings",
            get(booking::get_all_bookings),
        )
        .route(
            "/api/bookings/admin/{booking_id}/status",
            put(booking::update_booking_status),
        )
        .route("/api/bookings/{booking_id}", get(booking::get_booking_by_id))
        .route("/api/bookings/{booking_id}", put(booking::update_booking))
        .route(
            "/api/bookings/{booking_id}/cancel",
            delete(booking::cancel_booking),
        )
        .route("/api/doctors", get(doctor::get_doctors))
        .route("/api/doctors/{doctor_id}", get(doctor::get_doctor_by_id))
        .route("/api/admin/doctors", post(doctor::create_doctor))
        .route("/api/labs/book", post(clinic::book_lab_appointment))
        .route("/api/checkup/book", post(clinic::book_checkup_appointment))
        .route("/api/surgery/book", post(clinic::book_surgery))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
