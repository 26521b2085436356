use crate::error::Error;
use crate::sse::handler;
use axum::http::{header, HeaderValue};
use axum::{routing::any, Router};
use service::AppState;
use tower_http::set_header::SetResponseHeaderLayer;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(random_routes(app_state))
        .fallback(not_found)
}

fn random_routes(app_state: AppState) -> Router {
    Router::new()
        // ANY /random
        .route("/random", any(handler::random_stream_handler))
        // Any origin may consume the stream. Preflights are not intercepted,
        // OPTIONS streams like every other method.
        .route_layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .with_state(app_state)
}

async fn not_found() -> Error {
    Error::NotFound
}
