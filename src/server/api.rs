use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;

use super::error::{ApiError, Result};
use super::state::AppState;
use super::types::*;
use crate::auth;

/// 解析请求体，不检查 Content-Type
fn parse_request(payload: std::result::Result<Bytes, BytesRejection>) -> Result<FaceRequest> {
    let body = payload?;
    Ok(serde_json::from_slice(&body)?)
}

/// 注册人脸
#[utoipa::path(
    post,
    path = "/api/register_face",
    request_body = FaceRequest,
    responses(
        (status = 200, body = StatusResponse),
        (status = 400, body = ErrorResponse),
        (status = 413, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    )
)]
pub async fn register_face_handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<StatusResponse>> {
    let data = parse_request(payload)?;

    auth::register(state.store.as_ref(), &data.user_name, &data.face_vector)
        .await
        .map_err(|e| ApiError::from_face_error(e, "Failed to save user"))?;

    Ok(Json(StatusResponse::success("User registered")))
}

/// 验证人脸，匹配失败时返回 401
#[utoipa::path(
    post,
    path = "/api/verify_face",
    request_body = FaceRequest,
    responses(
        (status = 200, body = StatusResponse),
        (status = 400, body = ErrorResponse),
        (status = 401, body = StatusResponse),
        (status = 404, body = ErrorResponse),
        (status = 413, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    )
)]
pub async fn verify_face_handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<StatusResponse>)> {
    let data = parse_request(payload)?;

    let store = state.store.as_ref();
    let result = auth::verify(store, &state.policy, &data.user_name, &data.face_vector)
        .await
        .map_err(|e| ApiError::from_face_error(e, "Failed to query user"))?;

    if result.matched {
        Ok((StatusCode::OK, Json(StatusResponse::success("Face authorized"))))
    } else {
        Ok((StatusCode::UNAUTHORIZED, Json(StatusResponse::failure("Face not recognized"))))
    }
}
