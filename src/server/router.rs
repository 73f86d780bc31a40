//! Route table and OpenAPI document.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{appointment, auth, catalog, notification, salon, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Salon API", description = "Bookings, service catalog and salon information"),
    tags(
        (name = "auth", description = "Registration and session login"),
        (name = "user", description = "Account management"),
        (name = "catalog", description = "Service catalog"),
        (name = "appointment", description = "Bookings"),
        (name = "salon", description = "Salon contact details and galleries"),
        (name = "notification", description = "Contact form and verification codes")
    )
)]
pub struct ApiDoc;

/// Builds every API route and serves the generated document under `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_manicures))
        .routes(routes!(
            user::get_user_by_id,
            user::update_user,
            user::delete_user
        ))
        .routes(routes!(catalog::get_services, catalog::create_service))
        .routes(routes!(
            catalog::get_service,
            catalog::update_service,
            catalog::delete_service
        ))
        .routes(routes!(
            appointment::get_appointments,
            appointment::create_appointment
        ))
        .routes(routes!(
            appointment::get_appointment,
            appointment::update_appointment,
            appointment::delete_appointment
        ))
        .routes(routes!(salon::get_salon_info, salon::update_salon_info))
        .routes(routes!(notification::send_contact))
        .routes(routes!(notification::send_verification))
        .routes(routes!(notification::confirm_verification))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}
