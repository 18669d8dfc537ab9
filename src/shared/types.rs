use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Uniform response envelope: `{code, status, message, data?}`.
///
/// `code` mirrors the HTTP status, so the envelope renders with that status
/// when returned from a handler.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(code: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: code.as_u16(),
            status: STATUS_SUCCESS.to_string(),
            message: message.into(),
            data,
        }
    }

    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::OK, message, Some(data))
    }

    pub fn error(code: StatusCode, message: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code: code.as_u16(),
            status: STATUS_ERROR.to_string(),
            message: message.into(),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope without a data payload
    pub fn message(code: StatusCode, message: impl Into<String>) -> Self {
        Self::success(code, message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_envelope_omits_data() {
        let body = serde_json::to_value(ApiResponse::message(StatusCode::CREATED, "Created"))
            .unwrap();

        assert_eq!(body["code"], 201);
        assert_eq!(body["status"], "success");
        assert_eq!(body["message"], "Created");
        assert!(body.get("data").is_none());
    }

    #[test]
    fn test_error_envelope() {
        let body =
            serde_json::to_value(ApiResponse::<()>::error(StatusCode::NOT_FOUND, "Thread not found"))
                .unwrap();

        assert_eq!(body["code"], 404);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Thread not found");
    }

    #[test]
    fn test_envelope_renders_with_its_code() {
        let response = ApiResponse::ok("Fetched", vec![1, 2, 3]).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let response = ApiResponse::message(StatusCode::CREATED, "Created").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
