use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Wire shape shared by every response, success or failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Envelope<T> {
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Outcome of a request, serialized as an [`Envelope`].
///
/// Exactly one of `data` / `error` is populated on the wire.
#[derive(Debug)]
pub enum ApiResponse<T> {
    Success {
        message: String,
        data: T,
    },
    Failure {
        status: StatusCode,
        message: String,
        error: String,
    },
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::Success {
            message: message.into(),
            data,
        }
    }

    pub fn failure(
        status: StatusCode,
        message: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self::Failure {
            status,
            message: message.into(),
            error: error.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success { .. } => StatusCode::OK,
            Self::Failure { status, .. } => *status,
        }
    }

    fn as_envelope(&self) -> Envelope<&T> {
        match self {
            Self::Success { message, data } => Envelope {
                status_code: StatusCode::OK.as_u16(),
                message: message.clone(),
                data: Some(data),
                error: None,
            },
            Self::Failure {
                status,
                message,
                error,
            } => Envelope {
                status_code: status.as_u16(),
                message: message.clone(),
                data: None,
                error: Some(error.clone()),
            },
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_envelope().serialize(serializer)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serializes_with_null_error() {
        let response = ApiResponse::success("Provinces fetched successfully", vec!["01"]);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "status_code": 200,
                "message": "Provinces fetched successfully",
                "data": ["01"],
                "error": null,
            })
        );
    }

    #[test]
    fn test_failure_serializes_with_null_data() {
        let response: ApiResponse<Vec<String>> = ApiResponse::failure(
            StatusCode::BAD_REQUEST,
            "Could not fetch wards",
            "connection refused",
        );
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status_code"], 400);
        assert_eq!(value["message"], "Could not fetch wards");
        assert!(value["data"].is_null());
        assert_eq!(value["error"], "connection refused");
    }

    #[test]
    fn test_empty_payload_is_an_array_not_null() {
        let response: ApiResponse<Vec<u32>> = ApiResponse::success("ok", Vec::new());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"], json!([]));
    }

    #[test]
    fn test_status_mirrors_variant() {
        assert_eq!(ApiResponse::success("ok", ()).status(), StatusCode::OK);
        assert_eq!(
            ApiResponse::<()>::failure(StatusCode::BAD_REQUEST, "x", "y").status(),
            StatusCode::BAD_REQUEST
        );
    }
}
