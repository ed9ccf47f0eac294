//! Handler for the suggestion intake endpoint.
//!
//! A submission is validated by [`ValidatedJson`] before this handler runs,
//! then relayed as a single email to the project inbox. Nothing is stored.

use axum::extract::State;
use axum::Json;
use clario_core::suggestion::{compose_email, Suggestion};
use clario_mail::OutgoingEmail;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::response::StatusResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /suggestions
// ---------------------------------------------------------------------------

/// Relay a suggestion by email. One delivery attempt, no retry.
pub async fn create_suggestion(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<Suggestion>,
) -> AppResult<Json<StatusResponse>> {
    let composed = compose_email(&input);

    state
        .mailer
        .send(OutgoingEmail {
            to: state.config.suggestions_to.clone(),
            subject: composed.subject,
            body: composed.body,
        })
        .await?;

    tracing::info!(
        category = %input.category,
        has_reply_to = input.email.is_some(),
        "Suggestion delivered",
    );

    Ok(Json(StatusResponse::OK))
}
