use roster_service::{
    api::{
        self,
        handler::{dashboard, detail, messages, staffs},
        state::RosterAppState,
    },
    config::RosterConfig,
    domain::{message::MessageService, service::StaffService, views::DashboardWindow},
    infrastructure::client::HttpStaffClient,
};
use std::{env, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        dashboard::top_staffs,
        staffs::list,
        staffs::search,
        staffs::add,
        staffs::delete,
        detail::get,
        detail::save,
        messages::list,
    ),
    tags(
        (name = "Roster", description = "Staff roster views"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    let _guard = shared::telemetry::init_telemetry("roster-service");

    let port = env::var("SERVER_PORT").unwrap_or_else(|_| "8081".to_string());
    let staff_api_url =
        env::var("STAFF_API_URL").unwrap_or_else(|_| "http://localhost:8080/api".to_string());
    let config_path =
        env::var("ROSTER_CONFIG_PATH").unwrap_or_else(|_| "roster.toml".to_string());

    let config = match RosterConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load roster config from {config_path}");
            return;
        }
    };

    let client = match HttpStaffClient::new(&staff_api_url, config.request_timeout()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            return;
        }
    };

    let messages = Arc::new(MessageService::new());
    let staff_service = Arc::new(StaffService::new(Arc::new(client), Arc::clone(&messages)));

    let state = Arc::new(RosterAppState {
        staff_service,
        messages,
        dashboard: DashboardWindow::from(&config),
    });

    let governor_conf = match GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(10)
        .key_extractor(SmartIpKeyExtractor)
        .use_headers()
        .finish()
    {
        Some(conf) => conf,
        None => {
            tracing::error!("Failed to build governor config");
            return;
        }
    };

    let app = api::router(state)
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Rate limiting (per-IP, 2 req/s with burst of 10)
        .layer(GovernorLayer::new(governor_conf))
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

    tracing::info!(%staff_api_url, "roster-service listening on 0.0.0.0:{port}");

    let listener = match TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Failed to bind");
            return;
        }
    };

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shared::shutdown::shutdown_signal())
    .await
    {
        tracing::error!(error = %e, "Oppsie! Server crashed!");
    }

    tracing::info!("roster-service shut down");
}
