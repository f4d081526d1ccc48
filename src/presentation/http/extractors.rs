// src/presentation/http/extractors.rs
use crate::application::{FieldErrors, Payload};
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use std::error::Error as _;

/// Key used when a decode failure cannot be pinned to a field.
const BODY_FIELD: &str = "body";

type LocatedJsonError = serde_path_to_error::Error<serde_json::Error>;

/// JSON request body that reports undecodable content as field errors rather
/// than rejecting the request, so the handler still decides the outcome.
///
/// A missing `Content-Type` or an unreadable body is still rejected.
#[derive(Debug)]
pub struct JsonPayload<T>(pub Payload<T>);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(input)) => Ok(Self(Payload::Parsed(input))),
            Err(
                rejection @ (JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_)),
            ) => {
                let errors = decode_errors(&rejection);
                tracing::debug!(?errors, "request body could not be decoded");
                Ok(Self(Payload::Malformed(errors)))
            }
            Err(rejection) => Err(rejection),
        }
    }
}

fn decode_errors(rejection: &JsonRejection) -> FieldErrors {
    let located = std::iter::successors(rejection.source(), |&err| err.source())
        .find_map(|err| err.downcast_ref::<LocatedJsonError>());

    let (field, message) = located.map_or_else(
        || (BODY_FIELD.to_string(), rejection.body_text()),
        |err| (field_name(&err.path().to_string()), err.inner().to_string()),
    );
    FieldErrors::from([(field, vec![message])])
}

fn field_name(path: &str) -> String {
    match path {
        "." | "?" => BODY_FIELD.to_string(),
        field => field.to_string(),
    }
}
