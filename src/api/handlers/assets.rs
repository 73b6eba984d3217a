//! The browser page and its script, compiled into the binary.

use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::app_state::AppState;

const INDEX_HTML: &str = include_str!("../../../static/index.html");
const FLASHLIGHT_JS: &str = include_str!("../../../static/flashlight.js");

/// `GET /` — Page hosting the `flashlight` element.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /flashlight.js` — Script that renders and follows the state.
pub async fn flashlight_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        FLASHLIGHT_JS,
    )
}

/// Asset routes mounted at the root.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/flashlight.js", get(flashlight_js))
}
