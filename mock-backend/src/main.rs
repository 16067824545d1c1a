use mock_backend::{
    api::{self, handler::staff, state::MockBackendState},
    infrastructure::staff::InMemoryStaffRepository,
};
use std::{env, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        staff::find_all,
        staff::find_by_id,
        staff::create,
        staff::update,
        staff::delete,
    ),
    tags(
        (name = "Staffs", description = "In-memory staff collection"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    let _guard = shared::telemetry::init_telemetry("mock-backend");

    let port = env::var("SERVER_PORT").unwrap_or_else(|_| "8080".to_string());

    let state = Arc::new(MockBackendState {
        staff_repo: Arc::new(InMemoryStaffRepository::seeded()),
    });

    let app = api::router(state)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // tracing log (turn request into info level)
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(tower_http::LatencyUnit::Millis),
                ),
        );

    tracing::info!("mock-backend listening on 0.0.0.0:{port}");

    let listener = match TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Failed to bind");
            return;
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shared::shutdown::shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Oppsie! Server crashed!");
    }

    tracing::info!("mock-backend shut down");
}
