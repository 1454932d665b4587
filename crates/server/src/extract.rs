use crate::{dtos::validation::CheckFields, error::AppError};
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON body that has passed its field rules
///
/// Rejects with 400 when the body cannot be parsed and with 422, listing
/// every failed field, when a rule is violated.
pub struct Validated<T>(pub T);

impl<T, S> FromRequest<S> for Validated<T>
where
    T: DeserializeOwned + CheckFields + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::BadRequest(rejection.body_text()).into_response()
            })?;

        value
            .check()
            .map_err(|errors| AppError::Validation(errors).into_response())?;

        Ok(Validated(value))
    }
}

/// Course id taken from the `{id}` path segment
///
/// Rejects a non-integer id with a 400 JSON error body.
pub struct CourseId(pub i32);

impl<S> FromRequestParts<S> for CourseId
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                AppError::BadRequest(rejection.body_text()).into_response()
            })?;

        Ok(CourseId(id))
    }
}
