use std::net::SocketAddr;
use std::path::Path;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        study::{LevelDto, StudyDto, ValueDto},
    },
    server::{
        controller::study::{create_study, delete_study, get_study, list_studies, update_study},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::study::list_studies,
        crate::server::controller::study::create_study,
        crate::server::controller::study::get_study,
        crate::server::controller::study::update_study,
        crate::server::controller::study::delete_study,
    ),
    components(schemas(StudyDto, LevelDto, ValueDto, ErrorDto)),
    tags((name = "study", description = "Study record management"))
)]
struct ApiDoc;

/// Builds the application router.
///
/// API routes, the static file service rooted at `static_dir`, the root
/// redirect, and the OpenAPI documentation, all behind a trace layer that
/// logs every request with client address, method, path, and status.
pub fn router(static_dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/studies", get(list_studies).post(create_study))
        .route(
            "/studies/{id}",
            get(get_study)
                .post(update_study)
                .put(update_study)
                .delete(delete_study),
        )
        .route("/", get(redirect_to_static))
        .nest_service("/static", ServeDir::new(static_dir))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let client = request
                        .extensions()
                        .get::<ConnectInfo<SocketAddr>>()
                        .map(|ConnectInfo(addr)| addr.to_string())
                        .unwrap_or_else(|| "unknown".to_string());

                    tracing::info_span!(
                        "request",
                        client = %client,
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn redirect_to_static() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/static/")])
}
