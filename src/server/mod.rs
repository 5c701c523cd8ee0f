mod api;
mod error;
mod state;
mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use log::warn;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use self::error::ApiError;
pub use self::state::*;
pub use self::types::*;

#[derive(OpenApi)]
#[openapi(
    paths(api::register_face_handler, api::verify_face_handler),
    components(schemas(types::FaceRequest, types::StatusResponse, types::ErrorResponse))
)]
pub struct ApiDoc;

/// 构建 CORS 规则，`origins` 为空时允许任意来源
pub fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        warn!("未指定 --allow-origin，允许任意来源的跨域请求，生产环境不安全");
        return Ok(layer.allow_origin(Any));
    }
    let origins = origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().with_context(|| format!("无效的跨域来源: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

/// 构建API服务器
pub fn create_app(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/register_face", axum::routing::post(api::register_face_handler))
        .route("/api/verify_face", axum::routing::post(api::verify_face_handler))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::disable())
        // 请求体限制：1M
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(cors)
        .with_state(state)
}
