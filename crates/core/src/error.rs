#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conversion failed: {0}")]
    Conversion(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Flatten field-level validator errors into one human-readable message.
///
/// Fields are listed in name order so the message is stable, e.g.
/// `"email: must be a valid email address; message: must be between 10 and 5000 characters"`.
impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut parts: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |err| {
                    let detail = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    format!("{field}: {detail}")
                })
            })
            .collect();
        parts.sort();
        CoreError::Validation(parts.join("; "))
    }
}
