use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{debug, error, warn};

use super::types::ErrorResponse;
use crate::errors::FaceError;

/// API错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 请求体读取失败，包括超出大小限制
    InvalidBody(BytesRejection),
    /// 请求体不是合法的 JSON 或字段不匹配
    InvalidJson(serde_json::Error),
    /// 用户不存在
    NotFound,
    /// 服务端错误，附带返回给客户端的说明
    Internal(&'static str, FaceError),
}

impl ApiError {
    /// 将存储层错误转换为 API 错误，`message` 为服务端错误时返回的说明
    pub fn from_face_error(err: FaceError, message: &'static str) -> Self {
        match err {
            FaceError::NotFound(_) => Self::NotFound,
            FaceError::Encode(_) => Self::Internal("Failed to encode face vector", err),
            FaceError::Decode { .. } => Self::Internal("Failed to decode stored face vector", err),
            _ => Self::Internal(message, err),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // 超出请求体限制时保留 413
            Self::InvalidBody(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                warn!("请求体过大: {}", rejection.body_text());
                (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
            }
            Self::InvalidBody(rejection) => {
                debug!("无效的请求: {}", rejection.body_text());
                (StatusCode::BAD_REQUEST, "Invalid JSON")
            }
            Self::InvalidJson(err) => {
                debug!("无效的请求: {err}");
                (StatusCode::BAD_REQUEST, "Invalid JSON")
            }
            Self::NotFound => (StatusCode::NOT_FOUND, "User not found"),
            Self::Internal(message, err) => {
                error!("{message}: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorResponse { error: message.to_string() })).into_response()
    }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
