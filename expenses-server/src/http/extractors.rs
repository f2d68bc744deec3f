//! Custom Axum extractors
//!
//! Both reject with [`ApiError::BadRequest`] so clients always get the JSON
//! error payload instead of axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract and parse an integer expense id from path
pub struct ExpenseId(pub i32);

impl<S> FromRequestParts<S> for ExpenseId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        let id = raw.parse::<i32>().map_err(|e| ApiError::BadRequest {
            message: format!("invalid expense id '{}': {}", raw, e),
        })?;

        Ok(Self(id))
    }
}

/// JSON body whose decode failures become 400 with the decoder's message
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;

        Ok(Self(value))
    }
}
