//! Bundled seed data.

use clario_core::question::Question;

/// The Science stream questions, as stored in the question table.
const SCIENCE_QUESTIONS_JSON: &str = include_str!("../data/science_questions.json");

/// Parse the bundled Science stream questions.
pub fn science_questions() -> Result<Vec<Question>, serde_json::Error> {
    serde_json::from_str(SCIENCE_QUESTIONS_JSON)
}
