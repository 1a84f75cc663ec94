use stopover_planner::backend::Backend;
use stopover_planner::settings::Settings;
use stopover_planner::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("stopover_planner=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env().expect("Invalid configuration");
    let backend = Backend::from_settings(&settings).expect("Failed to create NAVITIME backend");

    let state = AppState::new(backend, settings.plan.clone());
    let app = create_router(state);

    let addr = settings.listen_addr;
    info!("Stopover planner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health                 - Health check");
    info!("  GET  /stations/resolve?name= - Resolve a station name");
    info!("  POST /trip/plan              - Plan a multi-day trip");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
