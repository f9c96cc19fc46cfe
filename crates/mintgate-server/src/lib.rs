pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use mintgate_core::Config;
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the axum Router with the frame routes and middleware.
/// Used by `serve()` and available for integration testing.
///
/// No CORS layer: every non-POST on `/api/frame`, preflight included, is a 405.
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index::index))
        .route(
            "/api/frame",
            post(routes::frame::frame_action)
                .fallback(routes::frame::method_not_allowed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Log every configuration warning. Missing values do not stop the server.
pub fn log_config_warnings(config: &Config) {
    for w in config.validate() {
        tracing::warn!(level = ?w.level, "{}", w.message);
    }
}

/// Start the frame server on `0.0.0.0:{config.port}`.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(config, listener).await
}

/// Start the frame server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(config: Config, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    log_config_warnings(&config);
    let actual_port = listener.local_addr()?.port();
    let app = build_router(AppState::from_config(&config)?);

    tracing::info!(
        base_url = config.base_url.as_deref().unwrap_or("<unset>"),
        "mintgate listening on http://localhost:{actual_port}"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
