use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        salon::{SalonInfoDto, UpdateSalonInfoDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::salon::UpdateSalonInfoParam,
        service::salon::SalonInfoService,
        state::AppState,
    },
};

pub static SALON_TAG: &str = "salon";

/// Get the salon's contact details and galleries. Public.
///
/// Fields that were never saved are filled with defaults.
#[utoipa::path(
    get,
    path = "/api/salon",
    tag = SALON_TAG,
    responses(
        (status = 200, description = "Salon information", body = SalonInfoDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_salon_info(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let info = SalonInfoService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(info.into_dto())))
}

/// Update the salon's contact details and galleries.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/salon",
    tag = SALON_TAG,
    request_body = UpdateSalonInfoDto,
    responses(
        (status = 200, description = "Updated salon information", body = SalonInfoDto),
        (status = 400, description = "Invalid salon data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Admin role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_salon_info(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateSalonInfoDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let info = SalonInfoService::new(&state.db)
        .update(UpdateSalonInfoParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(info.into_dto())))
}
