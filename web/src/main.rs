mod config;
mod forms;
mod page;
mod proxy;
mod state;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use config::Config;
use state::AppState;

const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(forms::index))
        .route("/add_document", post(forms::add_document))
        .route(
            "/upload_document",
            post(forms::upload_document).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/generate_answer", post(forms::generate_answer))
        .fallback(proxy::forward)
        .with_state(state)
        .layer(cors)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let state = AppState::new(&config.backend_url);
    log::info!("Forwarding backend calls to {}", state.backend_url);

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
