use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{announcement, auth, contact, document, event, faq, location, series, user},
    state::AppState,
};

/// Request body limit, sized for the schedule PDF upload.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(title = "Lab Scheduler API", description = "Lab events, recurring series and lab information"),
    modifiers(&BearerAuth)
)]
struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API routes and the OpenAPI document describing them.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::logout_time))
        .routes(routes!(user::list_users, user::create_user))
        .routes(routes!(user::update_user_roles))
        .routes(routes!(
            announcement::list_announcements,
            announcement::create_announcement
        ))
        .routes(routes!(
            announcement::update_announcement,
            announcement::delete_announcement
        ))
        .routes(routes!(faq::list_faq, faq::create_faq))
        .routes(routes!(faq::update_faq, faq::delete_faq))
        .routes(routes!(location::list_locations, location::create_location))
        .routes(routes!(
            location::get_location,
            location::update_location,
            location::delete_location
        ))
        .routes(routes!(event::list_events, event::create_event))
        .routes(routes!(event::list_events_for_day))
        .routes(routes!(event::list_events_for_week))
        .routes(routes!(event::list_events_for_month))
        .routes(routes!(event::delete_event))
        .routes(routes!(series::create_series))
        .routes(routes!(
            series::get_series,
            series::update_series,
            series::delete_series
        ))
        .routes(routes!(contact::get_contact, contact::set_contact))
        .routes(routes!(
            document::download_schedule_pdf,
            document::upload_schedule_pdf
        ))
        .split_for_parts()
}

/// Assembles the complete application: API routes, Swagger UI at `/api/docs`,
/// request tracing and CORS.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    let (api, openapi) = router();

    api.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
