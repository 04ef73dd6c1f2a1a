use axum::{
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::core::error::AppError;

/// Query parameters as decoded `(key, value)` pairs in request order
pub type QueryPairs = Vec<(String, String)>;

/// Types built from the raw query pairs of a request
pub trait FromQueryPairs {
    fn from_query_pairs(pairs: &[(String, String)]) -> Self;
}

/// Value of the first occurrence of `key`. Later repeats are ignored.
pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Query string extractor that never rejects on repeated or unknown keys
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: FromQueryPairs,
    S: Send + Sync,
{
    type Rejection = AppQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<QueryPairs>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => Ok(Self(T::from_query_pairs(&pairs))),
            Err(rejection) => Err(AppQueryRejection(rejection)),
        }
    }
}

pub struct AppQueryRejection(QueryRejection);

impl IntoResponse for AppQueryRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            QueryRejection::FailedToDeserializeQueryString(err) => err.body_text(),
            _ => "Failed to parse query string".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}
