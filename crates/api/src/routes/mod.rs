pub mod health;
pub mod suggestions;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree. Everything is mounted at the root.
///
/// ```text
/// /health             liveness (GET)
/// /suggestions        submit a suggestion (POST)
/// ```
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(suggestions::router())
}
