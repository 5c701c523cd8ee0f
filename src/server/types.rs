use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 注册 / 验证请求
#[derive(Debug, Deserialize, ToSchema)]
pub struct FaceRequest {
    /// 用户名
    pub user_name: String,
    /// 人脸向量
    pub face_vector: Vec<f64>,
}

/// 请求结果
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// `success` 或 `failure`
    pub status: String,
    /// 结果说明
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: &str) -> Self {
        Self { status: "success".to_string(), message: message.to_string() }
    }

    pub fn failure(message: &str) -> Self {
        Self { status: "failure".to_string(), message: message.to_string() }
    }
}

/// 错误响应
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
