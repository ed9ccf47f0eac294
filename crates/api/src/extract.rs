//! JSON body extractor that enforces `validator` constraints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use clario_core::error::CoreError;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Like [`Json`], but runs [`Validate::validate`] on the decoded body and
/// rejects with [`AppError`] so every failure is a JSON error response.
///
/// - Well-formed JSON of the wrong shape (missing field, wrong type) and
///   constraint violations are validation errors (422).
/// - Syntax errors and a missing `Content-Type: application/json` are bad
///   requests (400).
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(err) => {
                    AppError::Core(CoreError::Validation(err.body_text()))
                }
                other => AppError::BadRequest(other.body_text()),
            })?;

        value.validate().map_err(CoreError::from)?;

        Ok(Self(value))
    }
}
