//! The HTTP endpoints of vgraph.
//!
//! | Route           | Method     | Body                                   |
//! |-----------------|------------|----------------------------------------|
//! | `/triple`       | POST       | a [JSON triple pattern](wire)          |
//! | `/sparql`       | GET, POST  | a SPARQL 1.1 Protocol query request    |
//! | `/ping`         | GET        |                                        |

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::info;

mod config;
mod error;
mod sparql;
mod state;
mod triple;
pub mod wire;

pub use config::{ServerConfig, HTTP_TIMEOUT, MAX_BODY_SIZE};
pub use error::ServerError;
pub use state::AppState;

use crate::sparql::{handle_sparql_get, handle_sparql_post};
use crate::triple::handle_triple_post;

/// Creates the routes of the server, without limits or CORS.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/triple", post(handle_triple_post))
        .route("/sparql", get(handle_sparql_get).post(handle_sparql_post))
        .route("/ping", get(|| async { "OK" }))
        .with_state(state)
}

/// Serves the graph of `config` until the process is stopped.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind.as_str()).await?;
    let addr = listener.local_addr()?;

    let app = create_router(AppState {
        graph: config.graph,
    })
    .layer(DefaultBodyLimit::max(config.max_body_size))
    .layer(TimeoutLayer::new(config.timeout));

    let app = if config.cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    };

    info!(%addr, "listening");
    Ok(axum::serve(listener, app).await?)
}
