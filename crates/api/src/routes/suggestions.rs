use axum::routing::post;
use axum::Router;

use crate::handlers::suggestions;
use crate::state::AppState;

/// Mount suggestion routes.
///
/// ```text
/// /suggestions        submit (POST)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/suggestions", post(suggestions::create_suggestion))
}
