use axum::extract::State;
use axum::http::header;
use axum::response::sse::Sse;
use axum::response::IntoResponse;
use log::*;
use service::AppState;

/// SSE handler that streams a random integer every tick until the client goes away.
/// `Sse` sets `Content-Type: text/event-stream` and `Cache-Control: no-cache`.
pub(crate) async fn random_stream_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    let session = app_state.sse_manager.open_session();
    debug!("Establishing SSE stream for session {}", session.id());

    (
        [(header::CONNECTION, "keep-alive")],
        Sse::new(session.into_stream()),
    )
}
