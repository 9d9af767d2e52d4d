use axum::body::Body;
use axum::http::{header, HeaderValue, Response};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::games::backend_wheel_game::{create_router as create_wheel_game_router, PrizeState};

mod config;
mod error;
mod games;
mod logging;

pub async fn health_check() -> impl IntoResponse {
    Response::new(Body::from("OK"))
}

pub fn build_app(config: &ServerConfig) -> Router {
    let static_service = SetResponseHeaderLayer::if_not_present(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-cache"),
    )
    .layer(ServeDir::new(&config.static_dir));

    Router::new()
        .route("/health", get(health_check))
        .merge(create_wheel_game_router().with_state(PrizeState::new(config.prizes.clone())))
        .fallback_service(static_service)
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::from_path(".env").ok();
    logging::setup()?;

    let config = ServerConfig::from_env()?;
    if config.prizes.is_empty() {
        tracing::warn!("PRIZES is empty, every winning spin will report a failed lookup");
    }
    info!(
        "serving {} prizes and static files from {}",
        config.prizes.len(),
        config.static_dir.display()
    );

    let app = build_app(&config);

    info!("listening on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await.map_err(error::Error::from)?;
    axum::serve(listener, app).await?;

    Ok(())
}
