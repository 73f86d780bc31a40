//! Endpoints that send email or SMS.
//!
//! Both respond with `success: true` whether the message went out or was simulated.
//! The optional `debug` field is the only place a simulated delivery shows up.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        notification::{
            ConfirmVerificationDto, ContactRequestDto, DeliveryResponseDto,
            SendVerificationDto, VerificationResultDto,
        },
    },
    server::{
        error::AppError,
        service::{
            contact::{ContactMessage, ContactService},
            verification::VerificationService,
        },
        state::AppState,
    },
};

pub static NOTIFICATION_TAG: &str = "notification";

const CONTACT_SENT_MESSAGE: &str = "Mensagem enviada com sucesso";
const CODE_SENT_MESSAGE: &str = "Código de verificação enviado";

/// Send a message from the contact form to the salon inbox. Public.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = NOTIFICATION_TAG,
    request_body = ContactRequestDto,
    responses(
        (status = 200, description = "Message accepted", body = DeliveryResponseDto),
        (status = 400, description = "Missing field or malformed email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let message = ContactMessage::parse(
        &payload.name,
        &payload.email,
        payload.phone.as_deref(),
        &payload.message,
    )?;

    let delivery = ContactService::new(&state.email_sender, state.contact_inbox.as_deref())
        .submit(message)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DeliveryResponseDto {
            success: true,
            message: CONTACT_SENT_MESSAGE.to_string(),
            debug: delivery.debug_info(None),
        }),
    ))
}

/// Send a verification code by SMS or email. Public.
///
/// When delivery is simulated the code is returned in `debug.code`.
#[utoipa::path(
    post,
    path = "/api/verification/send",
    tag = NOTIFICATION_TAG,
    request_body = SendVerificationDto,
    responses(
        (status = 200, description = "Code issued", body = DeliveryResponseDto),
        (status = 400, description = "Missing or malformed destination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_verification(
    State(state): State<AppState>,
    Json(payload): Json<SendVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let dispatch = VerificationService::new(
        &state.verification_codes,
        &state.email_sender,
        &state.sms_sender,
    )
    .send(payload.channel, &payload.destination)
    .await?;

    Ok((
        StatusCode::OK,
        Json(DeliveryResponseDto {
            success: true,
            message: CODE_SENT_MESSAGE.to_string(),
            debug: dispatch.delivery.debug_info(Some(dispatch.code)),
        }),
    ))
}

/// Check a verification code. A matching code can only be used once. Public.
#[utoipa::path(
    post,
    path = "/api/verification/confirm",
    tag = NOTIFICATION_TAG,
    request_body = ConfirmVerificationDto,
    responses(
        (status = 200, description = "Whether the code matched", body = VerificationResultDto),
        (status = 400, description = "Missing destination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_verification(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let verified = VerificationService::new(
        &state.verification_codes,
        &state.email_sender,
        &state.sms_sender,
    )
    .confirm(&payload.destination, &payload.code)
    .await?;

    Ok((StatusCode::OK, Json(VerificationResultDto { verified })))
}
