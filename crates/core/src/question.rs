//! Assessment question records and seed-set integrity checks.
//!
//! Records are write-once seed data. Field names match the attribute names
//! stored in the question table (`question_id` is the partition key).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Academic stream a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stream {
    Science,
    Arts,
    Commercial,
}

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    /// Pick one of several lettered options.
    MultipleChoice,
    /// Pick a point on a 1-5 scale.
    Scale,
}

/// One selectable answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    /// `A`-`D` for multiple choice, `1`-`5` for scales.
    pub option_id: String,
    pub text: String,
    /// Careers this answer points towards.
    pub career_tags: Vec<String>,
    pub weight: i32,
}

/// A single assessment question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub stream: Stream,
    pub question_number: u32,
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<QuestionOption>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check a seed set before it is written anywhere.
///
/// Rejects duplicate question ids, questions without options, duplicate
/// option ids within a question, and options without career tags.
pub fn validate_question_set(questions: &[Question]) -> Result<(), CoreError> {
    let mut seen_ids = HashSet::new();

    for question in questions {
        if !seen_ids.insert(question.question_id.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate question_id '{}'",
                question.question_id
            )));
        }

        if question.options.is_empty() {
            return Err(CoreError::Validation(format!(
                "Question '{}' has no options",
                question.question_id
            )));
        }

        let mut seen_options = HashSet::new();
        for option in &question.options {
            if !seen_options.insert(option.option_id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "Question '{}' has duplicate option_id '{}'",
                    question.question_id, option.option_id
                )));
            }
            if option.career_tags.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Option '{}' of question '{}' has no career tags",
                    option.option_id, question.question_id
                )));
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
