use axum::{
    Router,
    routing::{get, put},
};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::user_events::adapters::inbound::http as events_http;
use crate::shell::state::BackendState;

pub fn router(state: BackendState) -> Router {
    Router::new()
        .route("/events", get(events_http::list).post(events_http::create))
        .route(
            "/events/{id}",
            put(events_http::update).delete(events_http::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(state: BackendState, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("events API: http://{}/events", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
