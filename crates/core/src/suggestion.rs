//! Suggestion form submitted from the web app, and the notification email
//! composed from it.
//!
//! Field constraints are declared with `validator` and enforced before any
//! delivery attempt. The email is plain text and addressed to a single
//! project inbox.

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Subject line prefix for suggestion notification emails.
pub const SUBJECT_PREFIX: &str = "New Clario Suggestion: ";

/// Placeholder written in place of the sender address when none was given.
pub const NO_SENDER_PLACEHOLDER: &str = "N/A";

// ---------------------------------------------------------------------------
// Suggestion
// ---------------------------------------------------------------------------

/// A user-submitted suggestion. Exists only for the duration of one request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Suggestion {
    /// Free-text category picked on the form (e.g. "Feature Request").
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub category: String,

    /// The suggestion itself.
    #[validate(length(min = 10, max = 5000, message = "must be between 10 and 5000 characters"))]
    pub message: String,

    /// Optional reply-to address. A blank value is treated as absent.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
}

/// The web form posts `""` for an untouched email field.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

// ---------------------------------------------------------------------------
// Email composition
// ---------------------------------------------------------------------------

/// Subject and plain-text body of a suggestion notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionEmail {
    pub subject: String,
    pub body: String,
}

/// Build the notification email for a suggestion.
///
/// Body layout:
///
/// ```text
/// Category: <category>
/// Email: <email or N/A>
///
/// <message>
/// ```
pub fn compose_email(suggestion: &Suggestion) -> SuggestionEmail {
    let subject = format!("{SUBJECT_PREFIX}{}", suggestion.category);
    let sender = suggestion.email.as_deref().unwrap_or(NO_SENDER_PLACEHOLDER);

    let body = [
        format!("Category: {}", suggestion.category),
        format!("Email: {sender}"),
        String::new(),
        suggestion.message.clone(),
    ]
    .join("\n");

    SuggestionEmail { subject, body }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
