use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ConflictDto, ErrorDto},
        appointment::{AppointmentDto, CreateAppointmentDto, UpdateAppointmentDto},
    },
    server::{
        controller::param::StatusFilterParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::appointment::{Appointment, CreateAppointmentParam, UpdateAppointmentParam},
        service::appointment::AppointmentService,
        state::AppState,
    },
};

pub static APPOINTMENT_TAG: &str = "appointment";

/// List appointments visible to the logged in user.
///
/// Clients see their own bookings, manicures the bookings assigned to them and admins
/// every booking.
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    params(StatusFilterParam),
    responses(
        (status = 200, description = "Appointments ordered by date", body = Vec<AppointmentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<StatusFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let appointments = AppointmentService::new(&state.db)
        .list(&user, params.status)
        .await?;

    let appointments_dto: Vec<AppointmentDto> = appointments
        .into_iter()
        .map(Appointment::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(appointments_dto)))
}

/// Book an appointment.
///
/// `clientId` defaults to the logged in user and `status` to `pendente`.
///
/// # Returns
/// - `201 Created` - Appointment stored at version 1
/// - `400 Bad Request` - Unknown service, client or manicure
/// - `403 Forbidden` - A client booking for someone else
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    request_body = CreateAppointmentDto,
    responses(
        (status = 201, description = "Appointment booked", body = AppointmentDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to book for this client", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CreateAppointmentParam::from_dto(user.id, payload);
    let appointment = AppointmentService::new(&state.db)
        .create(&user, param)
        .await?;

    Ok((StatusCode::CREATED, Json(appointment.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment", body = AppointmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let appointment = AppointmentService::new(&state.db).get(&user, id).await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

/// Partially update an appointment.
///
/// Confirming an appointment whose stored status is `cancelado` is refused with
/// `409 Conflict` and code `AGENDAMENTO_JA_CANCELADO`. When `version` is sent and no
/// longer matches, or another request wrote in between, the update is refused with
/// code `AGENDAMENTO_MODIFICADO`. Refused updates leave the record untouched.
#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Updated appointment with incremented version", body = AppointmentDto),
        (status = 400, description = "Invalid update data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to reassign the client", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 409, description = "Update conflicts with the stored appointment", body = ConflictDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let appointment = AppointmentService::new(&state.db)
        .update(&user, id, UpdateAppointmentParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(appointment.into_dto())))
}

/// Delete an appointment.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = APPOINTMENT_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 204, description = "Appointment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AppointmentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
