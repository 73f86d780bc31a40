use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CreateSalonServiceDto, SalonServiceDto, UpdateSalonServiceDto},
    },
    server::{
        controller::param::StaffFilterParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::salon_service::{CreateSalonServiceParam, SalonService, UpdateSalonServiceParam},
        service::catalog::CatalogService,
        state::AppState,
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// List the service catalog. Public.
#[utoipa::path(
    get,
    path = "/api/services",
    tag = CATALOG_TAG,
    params(StaffFilterParam),
    responses(
        (status = 200, description = "Catalog entries ordered by name", body = Vec<SalonServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(
    State(state): State<AppState>,
    Query(params): Query<StaffFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let services = CatalogService::new(&state.db).list(params.staff_id).await?;

    let services_dto: Vec<SalonServiceDto> =
        services.into_iter().map(SalonService::into_dto).collect();

    Ok((StatusCode::OK, Json(services_dto)))
}

/// Add a catalog entry.
///
/// # Access Control
/// - `Staff` - Manicures create entries they own; admins may assign any manicure
///
/// # Returns
/// - `201 Created` - Entry created
/// - `400 Bad Request` - Invalid entry data or unknown manicure
/// - `403 Forbidden` - Not staff, or a manicure creating an entry for someone else
#[utoipa::path(
    post,
    path = "/api/services",
    tag = CATALOG_TAG,
    request_body = CreateSalonServiceDto,
    responses(
        (status = 201, description = "Entry created", body = SalonServiceDto),
        (status = 400, description = "Invalid entry data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Staff role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSalonServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let default_owner = (!user.is_admin()).then_some(user.id);
    let param = CreateSalonServiceParam::from_dto(default_owner, payload);

    let service = CatalogService::new(&state.db).create(&user, param).await?;

    Ok((StatusCode::CREATED, Json(service.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Catalog entry ID")
    ),
    responses(
        (status = 200, description = "Catalog entry", body = SalonServiceDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CatalogService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

/// Update a catalog entry. Absent fields are left untouched.
///
/// # Access Control
/// - `Staff` - Manicures may only edit their own entries
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Catalog entry ID")
    ),
    request_body = UpdateSalonServiceDto,
    responses(
        (status = 200, description = "Updated entry", body = SalonServiceDto),
        (status = 400, description = "Invalid entry data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to edit this entry", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSalonServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let service = CatalogService::new(&state.db)
        .update(&user, id, UpdateSalonServiceParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(service.into_dto())))
}

/// Remove a catalog entry.
///
/// # Access Control
/// - `Staff` - Manicures may only remove their own entries
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = CATALOG_TAG,
    params(
        ("id" = i32, Path, description = "Catalog entry ID")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this entry", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    CatalogService::new(&state.db).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
