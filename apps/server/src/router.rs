use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use shub::domain::constants::FOIA_PATH;
use shub::kernel::server::AppState;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

#[allow(unreachable_pub)]
pub fn init(state: AppState) -> Router {
    let api = ApiDoc::openapi();
    let static_dir = state.config.storage.static_dir.clone();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(shub::server::router::system_router())
        .with_state(state.clone())
        .split_for_parts();

    // Create the Scalar UI routes
    let scalar_routes = Scalar::with_url("/api", api_doc);

    // Server-rendered page slices
    let pages = shub::server::pages_router().with_state(state);

    // Merge all routes; the portal home is the FOIA toolkit for now
    Router::new()
        .merge(openapi_routes)
        .merge(scalar_routes)
        .merge(pages)
        .route("/", get(|| async { Redirect::temporary(FOIA_PATH) }))
        .nest_service("/assets", ServeDir::new(&static_dir))
        .nest_service("/downloads", ServeDir::new(static_dir.join("downloads")))
        .layer(TraceLayer::new_for_http())
}
